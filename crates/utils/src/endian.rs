// Copyright 2025 Irreducible Inc.

//! Conversions between byte strings and arrays of machine words with an explicit byte order.
//!
//! Compression functions read their message block as 32- or 64-bit words, and the byte order
//! of those words is part of each algorithm's definition. Inputs are arbitrary byte slices, so
//! no alignment is assumed.

use std::array;

use bytemuck::Pod;

/// An unsigned machine word that hash state and message blocks are made of.
pub trait Word: Pod + Default + Eq + std::fmt::Debug {
	/// Width of the word in bytes.
	const BYTES: usize;

	fn from_le_slice(bytes: &[u8]) -> Self;
	fn from_be_slice(bytes: &[u8]) -> Self;
	fn write_le(self, out: &mut [u8]);
	fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
	($ty:ty) => {
		impl Word for $ty {
			const BYTES: usize = std::mem::size_of::<$ty>();

			#[inline(always)]
			fn from_le_slice(bytes: &[u8]) -> Self {
				<$ty>::from_le_bytes(bytes.try_into().expect("slice has the word size"))
			}

			#[inline(always)]
			fn from_be_slice(bytes: &[u8]) -> Self {
				<$ty>::from_be_bytes(bytes.try_into().expect("slice has the word size"))
			}

			#[inline(always)]
			fn write_le(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_le_bytes());
			}

			#[inline(always)]
			fn write_be(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_be_bytes());
			}
		}
	};
}

impl_word!(u32);
impl_word!(u64);

/// Byte order used to read and write words.
pub trait Endianness {
	fn load<W: Word>(bytes: &[u8]) -> W;
	fn store<W: Word>(word: W, out: &mut [u8]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LittleEndian;

#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndian;

impl Endianness for LittleEndian {
	#[inline(always)]
	fn load<W: Word>(bytes: &[u8]) -> W {
		W::from_le_slice(bytes)
	}

	#[inline(always)]
	fn store<W: Word>(word: W, out: &mut [u8]) {
		word.write_le(out)
	}
}

impl Endianness for BigEndian {
	#[inline(always)]
	fn load<W: Word>(bytes: &[u8]) -> W {
		W::from_be_slice(bytes)
	}

	#[inline(always)]
	fn store<W: Word>(word: W, out: &mut [u8]) {
		word.write_be(out)
	}
}

/// Reads exactly `N` words from `bytes`.
///
/// ## Preconditions
///
/// * `bytes.len()` must equal `N * W::BYTES`
pub fn load_words<E: Endianness, W: Word, const N: usize>(bytes: &[u8]) -> [W; N] {
	assert_eq!(bytes.len(), N * W::BYTES, "block length does not match the word count");

	array::from_fn(|i| E::load(&bytes[i * W::BYTES..(i + 1) * W::BYTES]))
}

/// Writes `words` into `out`, one after another.
///
/// ## Preconditions
///
/// * `out.len()` must equal `words.len() * W::BYTES`
pub fn store_words<E: Endianness, W: Word>(words: &[W], out: &mut [u8]) {
	assert_eq!(out.len(), words.len() * W::BYTES, "output length does not match the word count");

	for (chunk, &word) in out.chunks_exact_mut(W::BYTES).zip(words) {
		E::store(word, chunk);
	}
}
