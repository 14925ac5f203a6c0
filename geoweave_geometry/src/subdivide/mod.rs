//! Edge resampling for curved display.
//!
//! Every edge of every linear and areal sub-feature is bisected recursively until the sampled
//! midpoint deviates from the straight chord by at most `epsilon`, or the depth bound is reached.
//! The three [`SubdivideMode`]s differ in how the midpoint is placed and where the deviation is
//! measured. Input and output coordinates are longitude/latitude in radians; z values are
//! interpolated linearly; points are copied unchanged.

mod flat;
mod globe;

use crate::{
	Areal, Coordinates, FeatureStore, GeometryError, GeometryResult, Ring, Shape, SubFeature,
	config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, SubdivideConfig},
};
use flat::FlatGreatCircle;
use globe::{GlobeGreatCircle, GlobeSurface};
use log::{debug, trace, warn};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubdivideMode {
	/// Great-circle arc on the unit sphere; deviation measured in sphere coordinates.
	GlobeGreatCircle,
	/// Linear interpolation of longitude/latitude placed on the unit sphere; deviation from the
	/// 3D chord.
	GlobeLinear,
	/// Great-circle arc drawn on a flat longitude/latitude map; deviation measured in the plane.
	FlatGreatCircle,
}

impl Display for SubdivideMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			SubdivideMode::GlobeGreatCircle => "globe great circle",
			SubdivideMode::GlobeLinear => "globe linear",
			SubdivideMode::FlatGreatCircle => "flat great circle",
		})
	}
}

/// Places the midpoint of an edge and reports its deviation from the straight chord.
pub(crate) trait EdgeSampler {
	/// `None` when the edge cannot be subdivided meaningfully (antipodal ends, longitude span
	/// over half a turn for map-linear modes).
	fn split(&self, a: &Coordinates, b: &Coordinates) -> Option<(Coordinates, f64)>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Subdivider {
	mode: SubdivideMode,
	epsilon: f64,
	max_depth: u8,
}

#[derive(Default)]
struct Stats {
	inserted: usize,
	capped: usize,
	skipped: usize,
}

impl Subdivider {
	/// `epsilon <= 0` (or NaN) subdivides every edge down to the depth bound.
	#[must_use]
	pub fn new(mode: SubdivideMode, epsilon: f64) -> Self {
		Subdivider {
			mode,
			epsilon: if epsilon.is_nan() { 0.0 } else { epsilon },
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	#[must_use]
	pub fn from_config(mode: SubdivideMode, epsilon: Option<f64>, config: &SubdivideConfig) -> Self {
		Subdivider::new(mode, epsilon.unwrap_or(config.default_epsilon)).with_max_depth(config.effective_max_depth())
	}

	/// Recursion bound per edge, clamped to 1..=24. An edge gains at most `2^depth - 1` points.
	#[must_use]
	pub fn with_max_depth(mut self, max_depth: u8) -> Self {
		self.max_depth = max_depth.clamp(1, MAX_DEPTH_LIMIT);
		self
	}

	#[must_use]
	pub fn mode(&self) -> SubdivideMode {
		self.mode
	}

	#[must_use]
	pub fn epsilon(&self) -> f64 {
		self.epsilon
	}

	#[must_use]
	pub fn max_depth(&self) -> u8 {
		self.max_depth
	}

	/// Fails with [`GeometryError::NoApplicableContent`] when the store has neither linear nor
	/// areal sub-features.
	pub fn apply(&self, store: &FeatureStore) -> GeometryResult<FeatureStore> {
		if !store.iter().any(|f| matches!(f.shape, Shape::Linear(_) | Shape::Areal(_))) {
			return Err(GeometryError::no_content("subdivide", "linear or areal"));
		}
		match self.mode {
			SubdivideMode::GlobeGreatCircle => Ok(self.run(store, &GlobeGreatCircle)),
			SubdivideMode::GlobeLinear => Ok(self.run(store, &GlobeSurface)),
			SubdivideMode::FlatGreatCircle => Ok(self.run(store, &FlatGreatCircle)),
		}
	}

	fn run(&self, store: &FeatureStore, sampler: &impl EdgeSampler) -> FeatureStore {
		let mut stats = Stats::default();
		let features: Vec<SubFeature> = store
			.iter()
			.map(|feature| {
				let shape = match &feature.shape {
					Shape::Point(c) => Shape::Point(*c),
					Shape::Linear(coords) => Shape::Linear(self.path(coords, false, sampler, &mut stats)),
					Shape::Areal(areal) => {
						let ring = |ring: &Ring, stats: &mut Stats| Ring(self.path(&ring.0, true, sampler, stats));
						let exterior = ring(&areal.exterior, &mut stats);
						let holes = areal.holes.iter().map(|h| ring(h, &mut stats)).collect();
						Shape::Areal(Areal::new(exterior, holes))
					}
				};
				feature.with_shape(shape)
			})
			.collect();

		debug!(
			"{} subdivision (epsilon {}, depth {}) inserted {} points",
			self.mode, self.epsilon, self.max_depth, stats.inserted
		);
		if stats.skipped > 0 {
			warn!("{} subdivision left {} edge(s) unchanged", self.mode, stats.skipped);
		}
		if stats.capped > 0 && self.epsilon > 0.0 {
			warn!(
				"{} edge segment(s) reached the depth bound {} before meeting epsilon {}",
				stats.capped, self.max_depth, self.epsilon
			);
		}
		FeatureStore::from_sub_features(features)
	}

	fn path(&self, coords: &[Coordinates], closed: bool, sampler: &impl EdgeSampler, stats: &mut Stats) -> Vec<Coordinates> {
		let Some(last) = coords.last() else {
			return Vec::new();
		};
		let mut out = Vec::with_capacity(coords.len() * 2);
		for pair in coords.windows(2) {
			out.push(pair[0]);
			self.edge(&pair[0], &pair[1], 0, sampler, &mut out, stats);
		}
		out.push(*last);
		if closed && coords.len() > 2 {
			self.edge(last, &coords[0], 0, sampler, &mut out, stats);
		}
		out
	}

	fn edge(
		&self,
		a: &Coordinates,
		b: &Coordinates,
		depth: u8,
		sampler: &impl EdgeSampler,
		out: &mut Vec<Coordinates>,
		stats: &mut Stats,
	) {
		let Some((mid, deviation)) = sampler.split(a, b) else {
			if depth == 0 {
				stats.skipped += 1;
			}
			return;
		};
		if deviation <= self.epsilon.max(0.0) {
			return;
		}
		if depth >= self.max_depth {
			stats.capped += 1;
			return;
		}
		trace!("depth {depth}: deviation {deviation} between {a:?} and {b:?}");
		self.edge(a, &mid, depth + 1, sampler, out, stats);
		out.push(mid);
		stats.inserted += 1;
		self.edge(&mid, b, depth + 1, sampler, out, stats);
	}
}

impl FeatureStore {
	/// Subdivides along the sphere surface with linearly interpolated longitude/latitude.
	pub fn subdivide_to_globe(&self, epsilon: f64) -> GeometryResult<FeatureStore> {
		Subdivider::new(SubdivideMode::GlobeLinear, epsilon).apply(self)
	}

	/// Subdivides along great circles, measuring deviation on the unit sphere.
	pub fn subdivide_to_globe_great_circle(&self, epsilon: f64) -> GeometryResult<FeatureStore> {
		Subdivider::new(SubdivideMode::GlobeGreatCircle, epsilon).apply(self)
	}

	/// Subdivides along great circles, measuring deviation on a flat longitude/latitude map.
	pub fn subdivide_to_flat_great_circle(&self, epsilon: f64) -> GeometryResult<FeatureStore> {
		Subdivider::new(SubdivideMode::FlatGreatCircle, epsilon).apply(self)
	}
}
