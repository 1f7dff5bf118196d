// Copyright 2025 Irreducible Inc.

//! MD2 (RFC 1319).

use hashkit_utils::FixedBuffer;

use crate::{
	buffer::{absorb, as_block},
	hasher::{assert_updatable, StreamingHasher},
	macros::impl_digest_traits,
	Algorithm,
};

const BLOCK_SIZE: usize = 16;
const STATE_SIZE: usize = 48;
const ROUNDS: usize = 18;

/// Permutation of 0..255 built from the digits of pi.
const PI_SUBST: [u8; 256] = [
	41, 46, 67, 201, 162, 216, 124, 1, 61, 54, 84, 161, 236, 240, 6, 19, 98, 167, 5, 243, 192, 199,
	115, 140, 152, 147, 43, 217, 188, 76, 130, 202, 30, 155, 87, 60, 253, 212, 224, 22, 103, 66,
	111, 24, 138, 23, 229, 18, 190, 78, 196, 214, 218, 158, 222, 73, 160, 251, 245, 142, 187, 47,
	238, 122, 169, 104, 121, 145, 21, 178, 7, 63, 148, 194, 16, 137, 11, 34, 95, 33, 128, 127, 93,
	154, 90, 144, 50, 39, 53, 62, 204, 231, 191, 247, 151, 3, 255, 25, 48, 179, 72, 165, 181, 209,
	215, 94, 146, 42, 172, 86, 170, 198, 79, 184, 56, 210, 150, 164, 125, 182, 118, 252, 107, 226,
	156, 116, 4, 241, 69, 157, 112, 89, 100, 113, 135, 32, 134, 91, 207, 101, 230, 45, 168, 2, 27,
	96, 37, 173, 174, 176, 185, 246, 28, 70, 97, 105, 52, 64, 126, 15, 85, 71, 163, 35, 221, 81,
	175, 58, 195, 92, 249, 206, 186, 197, 234, 38, 44, 83, 13, 110, 133, 40, 132, 9, 211, 223, 205,
	244, 65, 129, 77, 82, 106, 220, 55, 200, 108, 193, 171, 250, 36, 225, 123, 8, 12, 189, 177, 74,
	120, 136, 149, 139, 227, 99, 232, 109, 233, 203, 213, 254, 59, 0, 29, 57, 242, 239, 183, 14,
	102, 88, 208, 228, 166, 119, 114, 248, 235, 117, 75, 10, 49, 68, 80, 180, 143, 237, 31, 26, 219,
	153, 141, 51, 159, 17, 131, 20,
];

#[derive(Debug, Clone)]
pub struct Md2 {
	state: [u8; STATE_SIZE],
	checksum: [u8; BLOCK_SIZE],
	buffer: FixedBuffer<BLOCK_SIZE>,
	finalized: bool,
}

impl Default for Md2 {
	fn default() -> Self {
		Self {
			state: [0; STATE_SIZE],
			checksum: [0; BLOCK_SIZE],
			buffer: FixedBuffer::new(),
			finalized: false,
		}
	}
}

/// Folds `block` into the running checksum.
///
/// The chaining byte carried between blocks is the last checksum byte, so it needs no separate
/// storage.
fn update_checksum(checksum: &mut [u8; BLOCK_SIZE], block: &[u8; BLOCK_SIZE]) {
	let mut last = checksum[BLOCK_SIZE - 1];
	for (c, &m) in checksum.iter_mut().zip(block) {
		*c ^= PI_SUBST[(m ^ last) as usize];
		last = *c;
	}
}

fn compress(state: &mut [u8; STATE_SIZE], block: &[u8; BLOCK_SIZE]) {
	for (j, &m) in block.iter().enumerate() {
		state[BLOCK_SIZE + j] = m;
		state[2 * BLOCK_SIZE + j] = m ^ state[j];
	}

	let mut t = 0u8;
	for round in 0..ROUNDS {
		for x in state.iter_mut() {
			*x ^= PI_SUBST[t as usize];
			t = *x;
		}
		t = t.wrapping_add(round as u8);
	}
}

impl StreamingHasher for Md2 {
	const ALGORITHM: Algorithm = Algorithm::Md2;
	const BLOCK_SIZE: usize = BLOCK_SIZE;
	const DIGEST_SIZE: usize = 16;

	type Digest = [u8; 16];

	fn reset(&mut self) {
		bytemuck::fill_zeroes(&mut self.state);
		bytemuck::fill_zeroes(&mut self.checksum);
		self.buffer.clear();
		self.finalized = false;
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		assert_updatable(self.finalized, Self::ALGORITHM);

		let Self {
			state,
			checksum,
			buffer,
			..
		} = self;
		absorb(buffer, data.as_ref(), |block| {
			update_checksum(checksum, block);
			compress(state, block);
		});
	}

	fn finalize(&mut self) {
		if self.finalized {
			return;
		}

		// Always pads, with 1 to 16 bytes each holding the padding length.
		let padding = self.buffer.remaining();
		self.buffer.fill(padding as u8, padding);
		let block = *as_block::<BLOCK_SIZE>(self.buffer.as_slice());
		update_checksum(&mut self.checksum, &block);
		compress(&mut self.state, &block);

		let checksum = self.checksum;
		compress(&mut self.state, &checksum);

		self.buffer.clear();
		self.finalized = true;
		tracing::trace!(algorithm = %Self::ALGORITHM, "finalized");
	}

	fn is_finalized(&self) -> bool {
		self.finalized
	}

	fn to_bytes(&self) -> Self::Digest {
		*as_block(&self.state[..BLOCK_SIZE])
	}
}

impl_digest_traits!(Md2, U16, U16);
