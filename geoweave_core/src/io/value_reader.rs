//! The [`ValueReader`] trait: typed reads from a positioned byte source.
//!
//! Implementors provide the underlying [`Read`] plus length and position; every typed read
//! (fixed-width numbers in the byte order `E`, varints, raw and length-prefixed bytes)
//! comes from the trait's default methods.
//!
//! ```rust
//! use geoweave_core::io::{ValueReader, ValueReaderSlice};
//!
//! let mut reader = ValueReaderSlice::new_le(&[0xAC, 0x02, 0x01, 0x00]);
//! assert_eq!(reader.read_varint().unwrap(), 300);
//! assert_eq!(reader.read_u16().unwrap(), 1);
//! assert!(!reader.has_remaining());
//! ```

use crate::Blob;
use anyhow::{Context, Result, bail, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::Read;

pub trait ValueReader<E: ByteOrder> {
	fn get_reader(&mut self) -> &mut dyn Read;

	/// Total length of the source in bytes.
	fn len(&self) -> u64;

	fn position(&self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0u64;
		let mut shift = 0;
		loop {
			let byte = self.get_reader().read_u8().context("unexpected end while reading varint")?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
			if shift >= 64 {
				bail!("varint too long");
			}
		}
		Ok(value)
	}

	/// Zigzag-encoded signed varint.
	fn read_svarint(&mut self) -> Result<i64> {
		let value = self.read_varint()?;
		Ok(((value >> 1) as i64) ^ -((value & 1) as i64))
	}

	/// Reads an element count and checks that `count * min_item_size` bytes can still follow.
	fn read_count(&mut self, min_item_size: u64) -> Result<usize> {
		let count = self.read_varint().context("reading element count")?;
		let needed = count.saturating_mul(min_item_size.max(1));
		ensure!(
			needed <= self.remaining(),
			"count {count} needs at least {needed} bytes, but only {} remain",
			self.remaining()
		);
		Ok(count as usize)
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	fn read_u16(&mut self) -> Result<u16> {
		Ok(self.get_reader().read_u16::<E>()?)
	}

	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	fn read_f32(&mut self) -> Result<f32> {
		Ok(self.get_reader().read_f32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		ensure!(length <= self.remaining(), "blob of {length} bytes exceeds remaining data");
		let mut blob = Blob::new_sized(length as usize);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}

	fn read_string(&mut self, length: u64) -> Result<String> {
		let blob = self.read_blob(length)?;
		Ok(String::from_utf8(blob.into_vec())?)
	}

	/// Consumes `expected` bytes and fails if they differ.
	fn read_magic(&mut self, expected: &[u8]) -> Result<()> {
		let found = self.read_blob(expected.len() as u64).context("reading magic bytes")?;
		ensure!(
			found.as_slice() == expected,
			"wrong magic bytes: expected {:?}, found {:?}",
			Blob::from(expected).as_hex(),
			found.as_hex()
		);
		Ok(())
	}

	/// Varint length followed by UTF-8 bytes.
	fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint().context("reading string length")?;
		self.read_string(length).context("reading string")
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;

	#[test]
	fn varints() {
		assert_eq!(ValueReaderSlice::new_le(&[0xAC, 0x02]).read_varint().unwrap(), 300);
		assert_eq!(ValueReaderSlice::new_le(&[0x96, 0x01]).read_svarint().unwrap(), 75);
		assert_eq!(ValueReaderSlice::new_le(&[0x95, 0x01]).read_svarint().unwrap(), -75);
		assert!(ValueReaderSlice::new_le(&[0x80]).read_varint().is_err());
		assert!(ValueReaderSlice::new_le(&[0xFF; 11]).read_varint().is_err());
	}

	#[test]
	fn fixed_width_values() {
		let mut reader = ValueReaderSlice::new_le(&[0, 0, 0x80, 0x3F, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
		assert_eq!(reader.read_f32().unwrap(), 1.0);
		assert_eq!(reader.read_f64().unwrap(), 1.0);
		assert!(reader.read_u8().is_err());

		let mut reader = ValueReaderSlice::new_be(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0, 0x12, 0x34]);
		assert_eq!(reader.read_f64().unwrap(), 1.0);
		assert_eq!(reader.read_u16().unwrap(), 0x1234);
	}

	#[test]
	fn read_count_guards_allocation() {
		let mut reader = ValueReaderSlice::new_le(&[0x02, 1, 2, 3, 4]);
		assert_eq!(reader.read_count(2).unwrap(), 2);

		let mut reader = ValueReaderSlice::new_le(&[0xFF, 0xFF, 0x03, 1, 2]);
		let err = reader.read_count(8).unwrap_err();
		assert!(err.to_string().contains("only 2 remain"), "{err}");
	}

	#[test]
	fn strings_and_blobs() {
		let mut reader = ValueReaderSlice::new_le(&[0x05, b'h', b'e', b'l', b'l', b'o', 9, 8]);
		assert_eq!(reader.read_pbf_string().unwrap(), "hello");
		assert_eq!(reader.read_blob(2).unwrap().as_slice(), &[9, 8]);
		assert!(!reader.has_remaining());

		let mut reader = ValueReaderSlice::new_le(&[0x04, b'a']);
		assert!(reader.read_pbf_string().is_err());

		let mut reader = ValueReaderSlice::new_le(&[0x02, 0xff, 0xfe]);
		assert!(reader.read_pbf_string().is_err());
	}

	#[test]
	fn magic() {
		assert!(ValueReaderSlice::new_le(b"GWVF").read_magic(b"GWVF").is_ok());
		let err = ValueReaderSlice::new_le(b"ABCD").read_magic(b"GWVF").unwrap_err();
		assert!(err.to_string().contains("wrong magic bytes"));
		assert!(ValueReaderSlice::new_le(b"GW").read_magic(b"GWVF").is_err());
	}
}
