// Copyright 2025 Irreducible Inc.

//! Block alignment and padding shared by the engines.
//!
//! Every function takes the engine's block buffer and a `compress` callback that is invoked once
//! per complete block, in message order.

use hashkit_utils::FixedBuffer;

pub(crate) const PADDING_START: u8 = 0x80;

#[inline(always)]
pub(crate) fn as_block<const N: usize>(bytes: &[u8]) -> &[u8; N] {
	bytes.try_into().expect("chunk is block-sized")
}

/// Feeds `data` through `compress` one block at a time, keeping the trailing partial block.
///
/// Leaves fewer than `N` bytes in the buffer.
pub(crate) fn absorb<const N: usize>(
	buffer: &mut FixedBuffer<N>,
	mut data: &[u8],
	mut compress: impl FnMut(&[u8; N]),
) {
	if !buffer.is_empty() {
		let to_copy = std::cmp::min(data.len(), buffer.remaining());
		buffer.extend_from_slice(&data[..to_copy]);
		data = &data[to_copy..];

		if !buffer.is_full() {
			return;
		}
		compress(as_block(buffer.as_slice()));
		buffer.clear();
	}

	let mut chunks = data.chunks_exact(N);
	for chunk in &mut chunks {
		compress(as_block(chunk));
	}
	buffer.extend_from_slice(chunks.remainder());
}

/// Like [`absorb`], but a block is only compressed once at least one more byte follows it.
///
/// Leaves between 1 and `N` bytes in the buffer once any data has been absorbed, so the last
/// message block is always available to the finalization.
pub(crate) fn absorb_deferred<const N: usize>(
	buffer: &mut FixedBuffer<N>,
	mut data: &[u8],
	mut compress: impl FnMut(&[u8; N]),
) {
	if data.is_empty() {
		return;
	}

	if !buffer.is_empty() {
		let to_copy = std::cmp::min(data.len(), buffer.remaining());
		buffer.extend_from_slice(&data[..to_copy]);
		data = &data[to_copy..];

		if data.is_empty() {
			return;
		}
		compress(as_block(buffer.as_slice()));
		buffer.clear();
	}

	while data.len() > N {
		let (block, rest) = data.split_at(N);
		compress(as_block(block));
		data = rest;
	}
	buffer.extend_from_slice(data);
}

/// Merkle-Damgård strengthening: appends `0x80`, the fewest zero bytes that make room for
/// `length`, then `length` itself at the end of a block.
///
/// Compresses one or two blocks and leaves the buffer empty.
pub(crate) fn pad_with_length<const N: usize>(
	buffer: &mut FixedBuffer<N>,
	length: &[u8],
	mut compress: impl FnMut(&[u8; N]),
) {
	debug_assert!(length.len() < N);

	buffer.push(PADDING_START);
	if buffer.remaining() < length.len() {
		buffer.fill(0, buffer.remaining());
		compress(as_block(buffer.as_slice()));
		buffer.clear();
	}

	buffer.fill(0, buffer.remaining() - length.len());
	buffer.extend_from_slice(length);
	compress(as_block(buffer.as_slice()));
	buffer.clear();
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect_blocks<const N: usize>(
		parts: &[&[u8]],
		absorb_fn: fn(&mut FixedBuffer<N>, &[u8], &mut dyn FnMut(&[u8; N])),
	) -> (Vec<Vec<u8>>, Vec<u8>) {
		let mut buffer = FixedBuffer::<N>::new();
		let mut blocks = Vec::new();
		for part in parts {
			absorb_fn(&mut buffer, part, &mut |block: &[u8; N]| blocks.push(block.to_vec()));
		}
		(blocks, buffer.as_slice().to_vec())
	}

	#[test]
	fn test_absorb_splits_into_blocks() {
		let data: Vec<u8> = (0..10).collect();
		let (blocks, rest) =
			collect_blocks::<4>(&[&data[..1], &data[1..6], &data[6..]], |buffer, data, compress| {
				absorb(buffer, data, compress)
			});
		assert_eq!(blocks, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
		assert_eq!(rest, vec![8, 9]);
	}

	#[test]
	fn test_absorb_exact_block_leaves_empty_buffer() {
		let (blocks, rest) = collect_blocks::<4>(&[&[1, 2], &[3, 4]], |buffer, data, compress| {
			absorb(buffer, data, compress)
		});
		assert_eq!(blocks, vec![vec![1, 2, 3, 4]]);
		assert!(rest.is_empty());
	}

	#[test]
	fn test_absorb_deferred_keeps_last_block() {
		let (blocks, rest) =
			collect_blocks::<4>(&[&[1, 2], &[3, 4], &[]], |buffer, data, compress| {
				absorb_deferred(buffer, data, compress)
			});
		assert!(blocks.is_empty());
		assert_eq!(rest, vec![1, 2, 3, 4]);

		let (blocks, rest) =
			collect_blocks::<4>(&[&[1, 2, 3, 4], &[5]], |buffer, data, compress| {
				absorb_deferred(buffer, data, compress)
			});
		assert_eq!(blocks, vec![vec![1, 2, 3, 4]]);
		assert_eq!(rest, vec![5]);

		let (blocks, rest) = collect_blocks::<4>(&[&[0; 12]], |buffer, data, compress| {
			absorb_deferred(buffer, data, compress)
		});
		assert_eq!(blocks.len(), 2);
		assert_eq!(rest, vec![0; 4]);
	}

	#[test]
	fn test_padding_fits_in_one_block() {
		let mut buffer = FixedBuffer::<8>::new();
		buffer.extend_from_slice(&[0xaa; 3]);
		let mut blocks = Vec::new();
		pad_with_length(&mut buffer, &[0x01, 0x02], |block| blocks.push(*block));
		assert_eq!(blocks, vec![[0xaa, 0xaa, 0xaa, 0x80, 0, 0, 0x01, 0x02]]);
		assert!(buffer.is_empty());
	}

	#[test]
	fn test_padding_spills_into_second_block() {
		let mut buffer = FixedBuffer::<8>::new();
		buffer.extend_from_slice(&[0xaa; 6]);
		let mut blocks = Vec::new();
		pad_with_length(&mut buffer, &[0x01, 0x02], |block| blocks.push(*block));
		assert_eq!(
			blocks,
			vec![
				[0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0x80, 0],
				[0, 0, 0, 0, 0, 0, 0x01, 0x02]
			]
		);
	}

	#[test]
	fn test_padding_exact_fit() {
		let mut buffer = FixedBuffer::<8>::new();
		buffer.extend_from_slice(&[0xaa; 5]);
		let mut blocks = Vec::new();
		pad_with_length(&mut buffer, &[0x01, 0x02], |block| blocks.push(*block));
		assert_eq!(blocks, vec![[0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0x80, 0x01, 0x02]]);
	}
}
