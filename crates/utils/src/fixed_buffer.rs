// Copyright 2025 Irreducible Inc.

use static_assertions::assert_impl_all;

/// Append-only byte buffer with a fixed capacity of `N` bytes.
///
/// Writing past the capacity is a logic error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBuffer<const N: usize> {
	bytes: [u8; N],
	len: usize,
}

assert_impl_all!(FixedBuffer<64>: Send, Sync, Clone);

impl<const N: usize> Default for FixedBuffer<N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const N: usize> FixedBuffer<N> {
	pub const fn new() -> Self {
		Self {
			bytes: [0; N],
			len: 0,
		}
	}

	pub const fn capacity(&self) -> usize {
		N
	}

	pub const fn len(&self) -> usize {
		self.len
	}

	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub const fn is_full(&self) -> bool {
		self.len == N
	}

	/// Number of bytes that can still be appended.
	pub const fn remaining(&self) -> usize {
		N - self.len
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	pub fn extend_from_slice(&mut self, data: &[u8]) {
		assert!(data.len() <= self.remaining(), "buffer overflow");

		self.bytes[self.len..self.len + data.len()].copy_from_slice(data);
		self.len += data.len();
	}

	pub fn push(&mut self, byte: u8) {
		self.extend_from_slice(&[byte]);
	}

	/// Appends `count` copies of `value`.
	pub fn fill(&mut self, value: u8, count: usize) {
		assert!(count <= self.remaining(), "buffer overflow");

		self.bytes[self.len..self.len + count].fill(value);
		self.len += count;
	}

	/// Empties the buffer and zeroes its storage.
	pub fn clear(&mut self) {
		bytemuck::fill_zeroes(&mut self.bytes);
		self.len = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_append_and_clear() {
		let mut buffer = FixedBuffer::<8>::new();
		assert!(buffer.is_empty());
		assert_eq!(buffer.capacity(), 8);

		buffer.extend_from_slice(b"abc");
		buffer.push(b'd');
		buffer.fill(0, 2);
		assert_eq!(buffer.as_slice(), b"abcd\0\0");
		assert_eq!(buffer.len(), 6);
		assert_eq!(buffer.remaining(), 2);
		assert!(!buffer.is_full());

		buffer.fill(0xff, 2);
		assert!(buffer.is_full());

		buffer.clear();
		assert!(buffer.is_empty());
		assert_eq!(buffer, FixedBuffer::default());
	}

	#[test]
	fn test_empty_slice_on_full_buffer() {
		let mut buffer = FixedBuffer::<2>::new();
		buffer.extend_from_slice(&[1, 2]);
		buffer.extend_from_slice(&[]);
		assert_eq!(buffer.as_slice(), &[1, 2]);
	}

	#[test]
	#[should_panic(expected = "buffer overflow")]
	fn test_overflow() {
		let mut buffer = FixedBuffer::<4>::new();
		buffer.extend_from_slice(b"abc");
		buffer.extend_from_slice(b"de");
	}

	#[test]
	#[should_panic(expected = "buffer overflow")]
	fn test_fill_overflow() {
		let mut buffer = FixedBuffer::<4>::new();
		buffer.fill(0, 5);
	}
}
