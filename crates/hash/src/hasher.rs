// Copyright 2023-2025 Irreducible Inc.

use crate::registry::Algorithm;

/// Trait representing an incremental hash function over byte strings.
///
/// A hasher starts in the reset state, absorbs any number of byte strings with
/// [`StreamingHasher::update`], and becomes finalized after [`StreamingHasher::finalize`]. The
/// digest is computed only by `finalize`; the accessors read it out as often as needed and in
/// several representations. The result does not depend on how the input is split across
/// `update` calls.
///
/// This interface is close to the [`digest::Digest`] trait, which every hasher in this crate
/// also implements, except that finalization does not consume the hasher and the digest stays
/// readable until the next [`StreamingHasher::reset`].
pub trait StreamingHasher: Default + Clone {
	/// The algorithm implemented by this hasher.
	const ALGORITHM: Algorithm;
	/// Size of the compression function input in bytes.
	const BLOCK_SIZE: usize;
	/// Size of the digest in bytes.
	const DIGEST_SIZE: usize;

	/// The hash function output type, a `DIGEST_SIZE` byte array.
	type Digest: AsRef<[u8]> + Copy + Eq + std::fmt::Debug + Send + Sync;

	fn new() -> Self {
		Self::default()
	}

	/// Returns the hasher to its initial state, discarding any absorbed data.
	fn reset(&mut self);

	/// Absorbs `data`.
	///
	/// ## Panics
	///
	/// * if the hasher has been finalized and not reset since
	fn update(&mut self, data: impl AsRef<[u8]>);

	/// Pads the message, runs the final compressions and fixes the digest.
	///
	/// Calling this again before [`StreamingHasher::reset`] has no effect.
	fn finalize(&mut self);

	fn is_finalized(&self) -> bool;

	/// The digest bytes.
	///
	/// Before finalization this is the serialized chaining state, which is not a digest of
	/// anything meaningful.
	fn to_bytes(&self) -> Self::Digest;

	fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.update(data);
		self
	}

	fn to_vec(&self) -> Vec<u8> {
		self.to_bytes().as_ref().to_vec()
	}

	/// Lowercase hexadecimal rendering of [`StreamingHasher::to_bytes`].
	fn to_hex(&self) -> String {
		hex::encode(self.to_bytes())
	}

	/// One-shot hash of `data`.
	fn digest(data: impl AsRef<[u8]>) -> Self::Digest {
		hash::<Self>(data)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("Unknown hash algorithm \"{name}\"")]
	UnknownAlgorithm { name: String },
	#[error("Invalid {algorithm} digest length (expected {expected} bytes, got {actual} bytes)")]
	InvalidDigestLength {
		algorithm: Algorithm,
		expected: usize,
		actual: usize,
	},
	#[error("Invalid hex digest: {0}")]
	InvalidHex(#[from] hex::FromHexError),
}

pub fn hash<H: StreamingHasher>(data: impl AsRef<[u8]>) -> H::Digest {
	let mut hasher = H::new().chain_update(data);
	hasher.finalize();
	hasher.to_bytes()
}

#[inline]
pub(crate) fn assert_updatable(finalized: bool, algorithm: Algorithm) {
	assert!(!finalized, "{algorithm}: update after finalize, call reset first");
}
