// Copyright 2025 Irreducible Inc.

use hashkit_utils::{load_words, store_words, BigEndian, FixedBuffer};

use super::{G_LANES, SIGMA};
use crate::{
	buffer::{absorb, pad_with_length},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 64;
const ROUNDS: usize = 14;
const BLOCK_BITS: u64 = 8 * BLOCK_SIZE as u64;

const INITIAL_STATE: [u32; 8] = [
	0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Leading fractional digits of pi.
const C: [u32; 16] = [
	0x243f6a88, 0x85a308d3, 0x13198a2e, 0x03707344, 0xa4093822, 0x299f31d0, 0x082efa98, 0xec4e6c89,
	0x452821e6, 0x38d01377, 0xbe5466cf, 0x34e90c6c, 0xc0ac29b7, 0xc97c50dd, 0x3f84d5b5, 0xb5470917,
];

#[inline(always)]
fn g(v: &mut [u32; 16], [a, b, c, d]: [usize; 4], x: u32, y: u32) {
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(12);
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
	v[d] = (v[d] ^ v[a]).rotate_right(8);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// Compresses `block` with `counter`, the number of message bits up to and including this
/// block, or zero when the block carries only padding.
fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE], counter: u64) {
	let m: [u32; 16] = load_words::<BigEndian, _, 16>(block);

	let mut v = [0u32; 16];
	v[..8].copy_from_slice(state);
	v[8..].copy_from_slice(&C[..8]);
	v[12] ^= counter as u32;
	v[13] ^= counter as u32;
	v[14] ^= (counter >> 32) as u32;
	v[15] ^= (counter >> 32) as u32;

	for round in 0..ROUNDS {
		let s = &SIGMA[round % SIGMA.len()];
		for (i, &lanes) in G_LANES.iter().enumerate() {
			let (j, k) = (s[2 * i], s[2 * i + 1]);
			g(&mut v, lanes, m[j] ^ C[k], m[k] ^ C[j]);
		}
	}

	for (i, h) in state.iter_mut().enumerate() {
		*h ^= v[i] ^ v[i + 8];
	}
}

/// BLAKE-224, the 224-bit member of the original BLAKE family (often called BLAKE1-224).
#[derive(Debug, Clone)]
pub struct Blake224 {
	state: [u32; 8],
	buffer: FixedBuffer<BLOCK_SIZE>,
	/// Bits compressed so far.
	counter: u64,
	finalized: bool,
}

impl Default for Blake224 {
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			buffer: FixedBuffer::new(),
			counter: 0,
			finalized: false,
		}
	}
}

impl StreamingHasher for Blake224 {
	const ALGORITHM: Algorithm = Algorithm::Blake224;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = 28;

	type Digest = [u8; 28];

	fn reset(&mut self) {
		self.state = INITIAL_STATE;
		self.buffer.clear();
		self.counter = 0;
		self.finalized = false;
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		assert_updatable(self.finalized, Self::ALGORITHM);

		absorb(&mut self.buffer, data.as_ref(), |block| {
			self.counter = self.counter.wrapping_add(BLOCK_BITS);
			compress(&mut self.state, block, self.counter);
		});
	}

	fn finalize(&mut self) {
		if self.finalized {
			return;
		}

		let tail_bits = 8 * self.buffer.len() as u64;
		self.counter = self.counter.wrapping_add(tail_bits);

		// Only the first padded block can hold message bits. If it holds none, or for the
		// second block when the length spills over, the counter is zero.
		let mut block_counters = [if tail_bits == 0 { 0 } else { self.counter }, 0].into_iter();
		let bit_length = self.counter.to_be_bytes();
		pad_with_length(&mut self.buffer, &bit_length, |block| {
			compress(&mut self.state, block, block_counters.next().unwrap_or_default());
		});

		self.finalized = true;
		tracing::trace!(algorithm = %Self::ALGORITHM, bytes = self.counter / 8, "finalized");
	}

	fn is_finalized(&self) -> bool {
		self.finalized
	}

	fn to_bytes(&self) -> Self::Digest {
		let mut out = [0; 28];
		store_words::<BigEndian, _>(&self.state[..7], &mut out);
		out
	}
}

impl_digest_traits!(Blake224, U28, U64);

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_single_zero_byte() {
		assert_eq!(
			Blake224::digest([0u8]),
			hex!("4504cb0314fb2a4f7a692e696e487912fe3f2468fe312c73a5278ec5")
		);
	}

	#[test]
	fn test_two_block_zero_message() {
		// 72 bytes: the second block holds message bits and the length.
		assert_eq!(
			Blake224::digest([0u8; 72]),
			hex!("f5aa00dd1cb847e3140372af7b5c46b4888d82c8c0a917913cfb5d04")
		);
	}

	#[test]
	fn test_text_vectors() {
		assert_eq!(
			Blake224::digest(b""),
			hex!("7dc5313b1c04512a174bd6503b89607aecbee0903d40a8a569c94eed")
		);
		assert_eq!(
			Blake224::digest(b"The quick brown fox jumps over the lazy dog"),
			hex!("c8e92d7088ef87c1530aee2ad44dc720cc10589cc2ec58f95a15e51b")
		);
	}

	#[test]
	fn test_block_aligned_message_pads_with_zero_counter() {
		let mut hasher = Blake224::new();
		hasher.update([0u8; BLOCK_SIZE]);
		assert!(hasher.buffer.is_empty());
		assert_eq!(hasher.counter, BLOCK_BITS);
		hasher.finalize();
		assert_eq!(hasher.counter, BLOCK_BITS);
		assert_eq!(
			hasher.to_bytes(),
			hex!("268ecee2b76b6ff75b8c73e94165d95e23462296f8a28497ec0cad4d")
		);
	}

	#[test]
	fn test_length_spill_boundary() {
		assert_eq!(
			Blake224::digest([0u8; 55]),
			hex!("502a0663e562d1cda878b9fe86e6c475f7399e12379526be742b1c93")
		);
		assert_eq!(
			Blake224::digest([0u8; 56]),
			hex!("15b58442b1b486ec9ea2305ab597e751cb754ed29f80c336171b061c")
		);
	}
}
