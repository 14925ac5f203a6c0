//! The [`ValueWriter`] trait: the writing counterpart of [`ValueReader`](super::ValueReader).

use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

pub trait ValueWriter<E: ByteOrder> {
	fn get_writer(&mut self) -> &mut dyn Write;

	fn position(&self) -> u64;

	fn is_empty(&self) -> bool {
		self.position() == 0
	}

	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Zigzag-encoded signed varint.
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(((value << 1) ^ (value >> 63)) as u64)
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	fn write_u16(&mut self, value: u16) -> Result<()> {
		Ok(self.get_writer().write_u16::<E>(value)?)
	}

	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}

	/// Varint length followed by UTF-8 bytes.
	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self.write_varint(text.len() as u64).context("writing string length")?;
		self.write_slice(text.as_bytes()).context("writing string")
	}
}

#[cfg(test)]
mod tests {
	use super::super::{ValueReader, ValueReaderSlice, ValueWriterBlob};
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, &[0x00])]
	#[case(1, &[0x01])]
	#[case(127, &[0x7F])]
	#[case(128, &[0x80, 0x01])]
	#[case(300, &[0xAC, 0x02])]
	#[case(u64::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01])]
	fn varint_encoding(#[case] value: u64, #[case] expected: &[u8]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_varint(value)?;
		let blob = writer.into_blob();
		assert_eq!(blob.as_slice(), expected);
		assert_eq!(ValueReaderSlice::new_le(blob.as_slice()).read_varint()?, value);
		Ok(())
	}

	#[rstest]
	#[case(0, &[0x00])]
	#[case(-1, &[0x01])]
	#[case(1, &[0x02])]
	#[case(-75, &[0x95, 0x01])]
	fn svarint_encoding(#[case] value: i64, #[case] expected: &[u8]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_svarint(value)?;
		assert_eq!(writer.into_blob().as_slice(), expected);
		Ok(())
	}

	#[test]
	fn svarint_extremes_survive() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_svarint(i64::MIN)?;
		writer.write_svarint(i64::MAX)?;
		let blob = writer.into_blob();
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());
		assert_eq!(reader.read_svarint()?, i64::MIN);
		assert_eq!(reader.read_svarint()?, i64::MAX);
		Ok(())
	}

	#[test]
	fn fixed_width_le() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_u16(0x0102)?;
		writer.write_f32(1.0)?;
		assert_eq!(writer.into_blob().as_slice(), &[0x02, 0x01, 0, 0, 0x80, 0x3F]);
		Ok(())
	}

	#[test]
	fn length_prefixed() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_pbf_string("hi")?;
		writer.write_blob(&Blob::from(&[7u8]))?;
		assert_eq!(writer.into_blob().as_slice(), &[0x02, b'h', b'i', 7]);
		Ok(())
	}
}
