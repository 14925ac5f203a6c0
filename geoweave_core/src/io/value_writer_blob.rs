//! [`ValueWriterBlob`] collects written values in memory and hands them out as a [`Blob`].

use super::ValueWriter;
use crate::Blob;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{Cursor, Write};
use std::marker::PhantomData;

pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	#[must_use]
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.cursor.into_inner())
	}
}

impl ValueWriterBlob<LittleEndian> {
	#[must_use]
	pub fn new_le() -> ValueWriterBlob<LittleEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBlob<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&self) -> u64 {
		self.cursor.position()
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn position_follows_writes() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		assert!(writer.is_empty());
		writer.write_u32(0x0A0B0C0D)?;
		assert_eq!(writer.position(), 4);
		writer.write_slice(b"xy")?;
		assert_eq!(writer.into_blob().as_slice(), &[0x0D, 0x0C, 0x0B, 0x0A, b'x', b'y']);
		Ok(())
	}
}
