// Copyright 2025 Irreducible Inc.

//! MD5 (RFC 1321).

use hashkit_utils::{load_words, store_words, FixedBuffer, LittleEndian};

use crate::{
	buffer::{absorb, pad_with_length},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Per-round rotation amounts, repeated four times within each round.
const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// `floor(abs(sin(i + 1)) * 2^32)`.
const K: [u32; 64] = [
	0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
	0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
	0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
	0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
	0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
	0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
	0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
	0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

#[derive(Debug, Clone)]
pub struct Md5 {
	state: [u32; 4],
	buffer: FixedBuffer<BLOCK_SIZE>,
	length: u64,
	finalized: bool,
}

impl Default for Md5 {
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			buffer: FixedBuffer::new(),
			length: 0,
			finalized: false,
		}
	}
}

fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_SIZE]) {
	let x: [u32; 16] = load_words::<LittleEndian, _, 16>(block);
	let [mut a, mut b, mut c, mut d] = *state;

	for i in 0..64 {
		let round = i / 16;
		let (f, g) = match round {
			0 => ((b & c) | (!b & d), i),
			1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
			2 => (b ^ c ^ d, (3 * i + 5) % 16),
			_ => (c ^ (b | !d), (7 * i) % 16),
		};

		let sum = a.wrapping_add(f).wrapping_add(K[i]).wrapping_add(x[g]);
		a = d;
		d = c;
		c = b;
		b = b.wrapping_add(sum.rotate_left(SHIFTS[round][i % 4]));
	}

	for (h, v) in state.iter_mut().zip([a, b, c, d]) {
		*h = h.wrapping_add(v);
	}
}

impl StreamingHasher for Md5 {
	const ALGORITHM: Algorithm = Algorithm::Md5;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = 16;

	type Digest = [u8; 16];

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
		let mut out = [0; 16];
		store_words::<LittleEndian, _>(&self.state, &mut out);
		out
	}
}

impl_digest_traits!(Md5, U16, U64);

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_constants_match_sine_table() {
		for (i, &k) in K.iter().enumerate() {
			let expected = (((i + 1) as f64).sin().abs() * 4294967296.0) as u32;
			assert_eq!(k, expected, "K[{i}]");
		}
	}

	#[test]
	fn test_rfc1321_vectors() {
		let cases: [(&[u8], [u8; 16]); 5] = [
			(b"", hex!("d41d8cd98f00b204e9800998ecf8427e")),
			(b"a", hex!("0cc175b9c0f1b6a831c399e269772661")),
			(b"abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
			(b"message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
			(
				b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
				hex!("57edf4a22be3c955ac49da2e2107b67a"),
			),
		];

		for (input, expected) in cases {
			assert_eq!(Md5::digest(input), expected);
		}
	}

	#[test]
	fn test_length_field_spills_into_extra_block() {
		// 56 bytes leave no room for the 8 byte length after the marker.
		let hasher = Md5::new().chain_update([b'a'; 56]);
		assert_eq!(hasher.buffer.len(), 56);
		assert_eq!(Md5::digest([b'a'; 56]), hex!("3b0c8ac703f828b04c6c197006d17218"));
	}
}
