// Copyright 2025 Irreducible Inc.

//! Whirlpool (ISO/IEC 10118-3), the final 2003 revision.

mod table;

use hashkit_utils::{load_words, store_words, BigEndian, FixedBuffer};
use table::{ROUND_CONSTANTS, TABLES};

use crate::{
	buffer::{absorb, pad_with_length},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 64;
const DIGEST_SIZE: usize = 64;
/// The length field is 256 bits wide; only the low 128 bits are ever nonzero.
const LENGTH_FIELD_SIZE: usize = 32;

/// One application of the round function without the key addition.
#[inline(always)]
fn rho(x: &[u64; 8]) -> [u64; 8] {
	let tables = &*TABLES;
	std::array::from_fn(|i| {
		(0..8).fold(0, |acc, k| {
			let byte = (x[(i + 8 - k) % 8] >> (56 - 8 * k)) & 0xff;
			acc ^ tables[k][byte as usize]
		})
	})
}

fn compress(hash: &mut [u64; 8], block: &[u8; BLOCK_SIZE]) {
	let m: [u64; 8] = load_words::<BigEndian, _, 8>(block);

	let mut key = *hash;
	let mut state: [u64; 8] = std::array::from_fn(|i| m[i] ^ key[i]);

	for &constant in &ROUND_CONSTANTS {
		key = rho(&key);
		key[0] ^= constant;

		state = rho(&state);
		for (s, k) in state.iter_mut().zip(&key) {
			*s ^= k;
		}
	}

	for i in 0..8 {
		hash[i] ^= state[i] ^ m[i];
	}
}

#[derive(Debug, Clone)]
pub struct Whirlpool {
	hash: [u64; 8],
	buffer: FixedBuffer<BLOCK_SIZE>,
	/// Message bytes absorbed so far.
	length: u128,
	finalized: bool,
}

impl Default for Whirlpool {
	fn default() -> Self {
		Self {
			hash: [0; 8],
			buffer: FixedBuffer::new(),
			length: 0,
			finalized: false,
		}
	}
}

impl StreamingHasher for Whirlpool {
	const ALGORITHM: Algorithm = Algorithm::Whirlpool;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = DIGEST_SIZE;

	type Digest = [u8; DIGEST_SIZE];

	fn reset(&mut self) {
		bytemuck::fill_zeroes(&mut self.hash);
		self.buffer.clear();
		self.length = 0;
		self.finalized = false;
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		assert_updatable(self.finalized, Self::ALGORITHM);

		let data = data.as_ref();
		self.length = self.length.wrapping_add(data.len() as u128);
		absorb(&mut self.buffer, data, |block| compress(&mut self.hash, block));
	}

	fn finalize(&mut self) {
		if self.finalized {
			return;
		}

		let mut length_field = [0u8; LENGTH_FIELD_SIZE];
		length_field[LENGTH_FIELD_SIZE - 16..]
			.copy_from_slice(&self.length.wrapping_mul(8).to_be_bytes());
		pad_with_length(&mut self.buffer, &length_field, |block| compress(&mut self.hash, block));

		self.finalized = true;
		tracing::trace!(algorithm = %Self::ALGORITHM, bytes = %self.length, "finalized");
	}

	fn is_finalized(&self) -> bool {
		self.finalized
	}

	fn to_bytes(&self) -> Self::Digest {
		let mut out = [0; DIGEST_SIZE];
		store_words::<BigEndian, _>(&self.hash, &mut out);
		out
	}
}

impl_digest_traits!(Whirlpool, U64, U64);
