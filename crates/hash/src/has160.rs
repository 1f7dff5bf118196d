// Copyright 2025 Irreducible Inc.

//! HAS-160, the Korean standard hash TTAS.KO-12.0011/R2.

use hashkit_utils::{load_words, store_words, FixedBuffer, LittleEndian};

use crate::{
	buffer::{absorb, pad_with_length},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 64;
const STEPS_PER_ROUND: usize = 20;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc];

/// Rotation applied to `b` in every step of a round.
const B_ROTATION: [u32; 4] = [10, 17, 25, 30];

const SHIFTS: [u32; STEPS_PER_ROUND] =
	[5, 11, 7, 15, 6, 13, 8, 14, 7, 12, 9, 11, 8, 15, 6, 12, 9, 14, 5, 13];

/// Message word read at each step. Indices 16 through 19 are the extra words computed at the
/// start of each round; the four words following each of them in this table are the ones
/// XORed together to form it.
#[rustfmt::skip]
const WORD_ORDER: [usize; 4 * STEPS_PER_ROUND] = [
	18, 0, 1, 2, 3, 19, 4, 5, 6, 7, 16, 8, 9, 10, 11, 17, 12, 13, 14, 15,
	18, 3, 6, 9, 12, 19, 15, 2, 5, 8, 16, 11, 14, 1, 4, 17, 7, 10, 13, 0,
	18, 12, 5, 14, 7, 19, 0, 9, 2, 11, 16, 4, 13, 6, 15, 17, 8, 1, 10, 3,
	18, 7, 2, 13, 8, 19, 3, 14, 9, 4, 16, 15, 10, 5, 0, 17, 11, 6, 1, 12,
];

#[inline(always)]
fn mix(round: usize, b: u32, c: u32, d: u32) -> u32 {
	match round {
		0 => (b & c) | (!b & d),
		2 => c ^ (b | !d),
		_ => b ^ c ^ d,
	}
}

fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_SIZE]) {
	let words: [u32; 16] = load_words::<LittleEndian, _, 16>(block);
	let mut x = [0u32; 20];
	x[..16].copy_from_slice(&words);

	let [mut a, mut b, mut c, mut d, mut e] = *state;

	for round in 0..4 {
		let order = &WORD_ORDER[round * STEPS_PER_ROUND..(round + 1) * STEPS_PER_ROUND];

		for k in 0..4 {
			let sources = &order[5 * k + 1..5 * k + 5];
			x[16 + k] = sources.iter().fold(0, |acc, &i| acc ^ x[i]);
		}

		for (step, &word) in order.iter().enumerate() {
			let t = a
				.rotate_left(SHIFTS[step])
				.wrapping_add(mix(round, b, c, d))
				.wrapping_add(e)
				.wrapping_add(x[word])
				.wrapping_add(K[round]);
			e = d;
			d = c;
			c = b.rotate_left(B_ROTATION[round]);
			b = a;
			a = t;
		}
	}

	for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
		*h = h.wrapping_add(v);
	}
}

#[derive(Debug, Clone)]
pub struct Has160 {
	state: [u32; 5],
	buffer: FixedBuffer<BLOCK_SIZE>,
	length: u64,
	finalized: bool,
}

impl Default for Has160 {
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			buffer: FixedBuffer::new(),
			length: 0,
			finalized: false,
		}
	}
}

impl StreamingHasher for Has160 {
	const ALGORITHM: Algorithm = Algorithm::Has160;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = 20;

	type Digest = [u8; 20];

	fn reset(&mut self) {
		self.state = INITIAL_STATE;
		self.buffer.clear();
		self.length = 0;
		self.finalized = false;
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		assert_updatable(self.finalized, Self::ALGORITHM);

		let data = data.as_ref();
		self.length = self.length.wrapping_add(data.len() as u64);
		absorb(&mut self.buffer, data, |block| compress(&mut self.state, block));
	}

	fn finalize(&mut self) {
		if self.finalized {
			return;
		}

		let bit_length = self.length.wrapping_mul(8).to_le_bytes();
		pad_with_length(&mut self.buffer, &bit_length, |block| compress(&mut self.state, block));

		self.finalized = true;
		tracing::trace!(algorithm = %Self::ALGORITHM, bytes = self.length, "finalized");
	}

	fn is_finalized(&self) -> bool {
		self.finalized
	}

	fn to_bytes(&self) -> Self::Digest {
		let mut out = [0; 20];
		store_words::<LittleEndian, _>(&self.state, &mut out);
		out
	}
}

impl_digest_traits!(Has160, U20, U64);

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_tta_vectors() {
		let cases: [(&[u8], [u8; 20]); 5] = [
			(b"", hex!("307964ef34151d37c8047adec7ab50f4ff89762d")),
			(b"a", hex!("4872bcbc4cd0f0a9dc7c2f7045e5b43b6c830db8")),
			(b"abc", hex!("975e810488cf2a3d49838478124afce4b1c78804")),
			(b"message digest", hex!("2338dbc8638d31225f73086246ba529f96710bc6")),
			(b"abcdefghijklmnopqrstuvwxyz", hex!("596185c9ab6703d0d0dbb98702bc0f5729cd1d3c")),
		];

		for (input, expected) in cases {
			assert_eq!(Has160::digest(input), expected);
		}
	}

	#[test]
	fn test_two_block_message() {
		assert_eq!(
			Has160::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
			hex!("86ce4c4c713aa7ef6e65ab9f92353b0cfecad347")
		);
	}
}
