// Copyright 2025 Irreducible Inc.

use digest::Digest;
use proptest::prelude::*;

use crate::{Blake2b, Md2, Md5, Ripemd160, Whirlpool};

proptest! {
	#[test]
	fn test_md2_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=2048)) {
		assert_eq!(Md2::digest(&input), md2_crypto::Md2::digest(&input));
	}

	#[test]
	fn test_md5_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=2048)) {
		assert_eq!(Md5::digest(&input), md5_crypto::Md5::digest(&input));
	}

	#[test]
	fn test_ripemd160_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=2048)) {
		assert_eq!(Ripemd160::digest(&input), ripemd_crypto::Ripemd160::digest(&input));
	}

	#[test]
	fn test_blake2b_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=2048)) {
		assert_eq!(Blake2b::digest(&input), blake2_crypto::Blake2b512::digest(&input));
	}

	#[test]
	fn test_whirlpool_vs_reference(input in prop::collection::vec(any::<u8>(), 0..=2048)) {
		assert_eq!(Whirlpool::digest(&input), whirlpool_crypto::Whirlpool::digest(&input));
	}

	#[test]
	fn test_streaming_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=1024),
		split in any::<prop::sample::Index>(),
	) {
		let (head, tail) = input.split_at(split.index(input.len() + 1));

		let mut hasher = Blake2b::new();
		hasher.update(head);
		hasher.update(tail);
		assert_eq!(hasher.finalize(), blake2_crypto::Blake2b512::digest(&input));

		let mut hasher = Whirlpool::new();
		hasher.update(head);
		hasher.update(tail);
		assert_eq!(hasher.finalize(), whirlpool_crypto::Whirlpool::digest(&input));
	}
}
