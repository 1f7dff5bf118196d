// Copyright 2025 Irreducible Inc.

use hashkit_utils::{load_words, store_words, FixedBuffer, LittleEndian};

use super::{G_LANES, SIGMA};
use crate::{
	buffer::{absorb_deferred, as_block},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 128;
const DIGEST_SIZE: usize = 64;
const ROUNDS: usize = 12;

const IV: [u64; 8] = [
	0x6a09e667f3bcc908,
	0xbb67ae8584caa73b,
	0x3c6ef372fe94f82b,
	0xa54ff53a5f1d36f1,
	0x510e527fade682d1,
	0x9b05688c2b3e6c1f,
	0x1f83d9abfb41bd6b,
	0x5be0cd19137e2179,
];

/// First parameter block word: digest length 64, no key, fanout 1, depth 1.
const PARAMETERS: u64 = 0x01010000 | DIGEST_SIZE as u64;

const fn initial_state() -> [u64; 8] {
	let mut state = IV;
	state[0] ^= PARAMETERS;
	state
}

#[inline(always)]
fn g(v: &mut [u64; 16], [a, b, c, d]: [usize; 4], x: u64, y: u64) {
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
	v[d] = (v[d] ^ v[a]).rotate_right(32);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(24);
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(63);
}

fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_SIZE], counter: u128, last: bool) {
	let m: [u64; 16] = load_words::<LittleEndian, _, 16>(block);

	let mut v = [0u64; 16];
	v[..8].copy_from_slice(state);
	v[8..].copy_from_slice(&IV);
	v[12] ^= counter as u64;
	v[13] ^= (counter >> 64) as u64;
	if last {
		v[14] = !v[14];
	}

	for round in 0..ROUNDS {
		let s = &SIGMA[round % SIGMA.len()];
		for (i, &lanes) in G_LANES.iter().enumerate() {
			g(&mut v, lanes, m[s[2 * i]], m[s[2 * i + 1]]);
		}
	}

	for (i, h) in state.iter_mut().enumerate() {
		*h ^= v[i] ^ v[i + 8];
	}
}

/// Unkeyed BLAKE2b with a 64 byte digest (RFC 7693).
#[derive(Debug, Clone)]
pub struct Blake2b {
	state: [u64; 8],
	/// Holds the last message block, possibly complete, until finalization.
	buffer: FixedBuffer<BLOCK_SIZE>,
	/// Message bytes compressed so far.
	counter: u128,
	finalized: bool,
}

impl Default for Blake2b {
	fn default() -> Self {
		Self {
			state: initial_state(),
			buffer: FixedBuffer::new(),
			counter: 0,
			finalized: false,
		}
	}
}

impl StreamingHasher for Blake2b {
	const ALGORITHM: Algorithm = Algorithm::Blake2b;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = DIGEST_SIZE;

	type Digest = [u8; DIGEST_SIZE];

	fn reset(&mut self) {
		self.state = initial_state();
		self.buffer.clear();
		self.counter = 0;
		self.finalized = false;
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		assert_updatable(self.finalized, Self::ALGORITHM);

		absorb_deferred(&mut self.buffer, data.as_ref(), |block| {
			self.counter = self.counter.wrapping_add(BLOCK_SIZE as u128);
			compress(&mut self.state, block, self.counter, false);
		});
	}

	fn finalize(&mut self) {
		if self.finalized {
			return;
		}

		self.counter = self.counter.wrapping_add(self.buffer.len() as u128);
		self.buffer.fill(0, self.buffer.remaining());
		compress(&mut self.state, as_block(self.buffer.as_slice()), self.counter, true);
		self.buffer.clear();

		self.finalized = true;
		tracing::trace!(algorithm = %Self::ALGORITHM, bytes = %self.counter, "finalized");
	}

	fn is_finalized(&self) -> bool {
		self.finalized
	}

	fn to_bytes(&self) -> Self::Digest {
		let mut out = [0; DIGEST_SIZE];
		store_words::<LittleEndian, _>(&self.state, &mut out);
		out
	}
}

impl_digest_traits!(Blake2b, U64, U128);

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_rfc7693_vectors() {
		assert_eq!(
			Blake2b::digest(b""),
			hex!(
				"786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419"
				"d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
			)
		);
		assert_eq!(
			Blake2b::digest(b"abc"),
			hex!(
				"ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
				"7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
			)
		);
	}

	#[test]
	fn test_full_block_is_kept_for_finalization() {
		let mut hasher = Blake2b::new();
		hasher.update([0u8; BLOCK_SIZE]);
		assert!(hasher.buffer.is_full());
		assert_eq!(hasher.counter, 0);

		hasher.update([0u8; 1]);
		assert_eq!(hasher.buffer.len(), 1);
		assert_eq!(hasher.counter, BLOCK_SIZE as u128);
	}

	#[test]
	fn test_block_boundaries() {
		assert_eq!(
			Blake2b::digest([0u8; BLOCK_SIZE]),
			hex!(
				"865939e120e6805438478841afb739ae4250cf372653078a065cdcfffca4caf7"
				"98e6d462b65d658fc165782640eded70963449ae1500fb0f24981d7727e22c41"
			)
		);
		assert_eq!(
			Blake2b::digest([0u8; BLOCK_SIZE + 1]),
			hex!(
				"a60edba343e7a6933c14d203d2e535f35e6deb6c8a4f8e624c1a6f6e26128604"
				"47cb4c37e5aa11bcf03b7c3eea7228eb8b998f922794f2d1b8f2dc63f03bd3fa"
			)
		);
	}
}
