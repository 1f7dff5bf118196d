// Copyright 2025 Irreducible Inc.

//! RIPEMD-160.

use hashkit_utils::{load_words, store_words, FixedBuffer, LittleEndian};

use crate::{
	buffer::{absorb, pad_with_length},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const KL: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const KR: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

#[rustfmt::skip]
const RL: [usize; 80] = [
	0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
	7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
	3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
	1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
	4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

#[rustfmt::skip]
const RR: [usize; 80] = [
	5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
	6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
	15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
	8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
	12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

#[rustfmt::skip]
const SL: [u32; 80] = [
	11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
	7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
	11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
	11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
	9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

#[rustfmt::skip]
const SR: [u32; 80] = [
	8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
	9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
	9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
	15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
	8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// Boolean function of round `round`; the right line runs them in reverse order.
#[inline(always)]
fn mix(round: usize, x: u32, y: u32, z: u32) -> u32 {
	match round {
		0 => x ^ y ^ z,
		1 => (x & y) | (!x & z),
		2 => (x | !y) ^ z,
		3 => (x & z) | (y & !z),
		_ => x ^ (y | !z),
	}
}

/// Runs one of the two 80-step lines over `x`.
fn line(
	state: &[u32; 5],
	x: &[u32; 16],
	order: &[usize; 80],
	shifts: &[u32; 80],
	constants: &[u32; 5],
	reversed: bool,
) -> [u32; 5] {
	let [mut a, mut b, mut c, mut d, mut e] = *state;

	for step in 0..80 {
		let round = step / 16;
		let f = mix(if reversed { 4 - round } else { round }, b, c, d);
		let t = a
			.wrapping_add(f)
			.wrapping_add(x[order[step]])
			.wrapping_add(constants[round])
			.rotate_left(shifts[step])
			.wrapping_add(e);
		a = e;
		e = d;
		d = c.rotate_left(10);
		c = b;
		b = t;
	}

	[a, b, c, d, e]
}

fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_SIZE]) {
	let x: [u32; 16] = load_words::<LittleEndian, _, 16>(block);

	let [al, bl, cl, dl, el] = line(state, &x, &RL, &SL, &KL, false);
	let [ar, br, cr, dr, er] = line(state, &x, &RR, &SR, &KR, true);

	let [h0, h1, h2, h3, h4] = *state;
	*state = [
		h1.wrapping_add(cl).wrapping_add(dr),
		h2.wrapping_add(dl).wrapping_add(er),
		h3.wrapping_add(el).wrapping_add(ar),
		h4.wrapping_add(al).wrapping_add(br),
		h0.wrapping_add(bl).wrapping_add(cr),
	];
}

#[derive(Debug, Clone)]
pub struct Ripemd160 {
	state: [u32; 5],
	buffer: FixedBuffer<BLOCK_SIZE>,
	length: u64,
	finalized: bool,
}

impl Default for Ripemd160 {
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			buffer: FixedBuffer::new(),
			length: 0,
			finalized: false,
		}
	}
}

impl StreamingHasher for Ripemd160 {
	const ALGORITHM: Algorithm = Algorithm::Ripemd160;
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

impl_digest_traits!(Ripemd160, U20, U64);

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_published_vectors() {
		let cases: [(&[u8], [u8; 20]); 5] = [
			(b"", hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")),
			(b"a", hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")),
			(b"abc", hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")),
			(b"message digest", hex!("5d0689ef49d2fae572b881b123a85ffa21595f36")),
			(
				b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
				hex!("12a053384a9c0c88e405a06c27dcf49ada62eb2b"),
			),
		];

		for (input, expected) in cases {
			assert_eq!(Ripemd160::digest(input), expected);
		}
	}

	#[test]
	fn test_million_a() {
		let mut hasher = Ripemd160::new();
		for _ in 0..1000 {
			hasher.update([b'a'; 1000]);
		}
		hasher.finalize();
		assert_eq!(hasher.to_bytes(), hex!("52783243c1697bdbe16d37f97f68f08325dc1528"));
	}
}
