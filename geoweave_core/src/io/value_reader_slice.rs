//! [`ValueReaderSlice`] reads values from a borrowed byte slice.

use super::ValueReader;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Read},
	marker::PhantomData,
};

pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<E: ByteOrder> ValueReader<E> for ValueReaderSlice<'_, E> {
	fn get_reader(&mut self) -> &mut dyn Read {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&self) -> u64 {
		self.cursor.position()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn byte_order() {
		let data = [0x01, 0x02, 0x03, 0x04];
		assert_eq!(ValueReaderSlice::new_le(&data).read_u32().unwrap(), 0x04030201);
		assert_eq!(ValueReaderSlice::new_be(&data).read_u32().unwrap(), 0x01020304);
	}

	#[test]
	fn position_tracking() {
		let data = [1u8, 2, 3];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert_eq!(reader.len(), 3);
		assert_eq!(reader.remaining(), 3);
		reader.read_u8().unwrap();
		assert_eq!(reader.position(), 1);
		assert_eq!(reader.remaining(), 2);
		reader.read_u16().unwrap();
		assert!(!reader.has_remaining());
		assert!(ValueReaderSlice::new_le(&[]).is_empty());
	}
}
