// Copyright 2025 Irreducible Inc.

//! Runtime selection of a hash algorithm by name.

use std::{fmt, str::FromStr};

use crate::{
	hasher::{HashError, StreamingHasher},
	Blake224, Blake2b, Has160, Md2, Md5, Ripemd160, Whirlpool,
};

/// The hash algorithms implemented by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Md2,
	Md5,
	Ripemd160,
	Has160,
	Blake224,
	Blake2b,
	Whirlpool,
}

impl Algorithm {
	pub const ALL: [Self; 7] = [
		Self::Md2,
		Self::Md5,
		Self::Ripemd160,
		Self::Has160,
		Self::Blake224,
		Self::Blake2b,
		Self::Whirlpool,
	];

	/// Canonical display name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Md2 => "MD2",
			Self::Md5 => "MD5",
			Self::Ripemd160 => "RIPEMD-160",
			Self::Has160 => "HAS-160",
			Self::Blake224 => "BLAKE-224",
			Self::Blake2b => "BLAKE2b-512",
			Self::Whirlpool => "Whirlpool",
		}
	}

	/// Accepted spellings after lowercasing and removing `-`, `_` and spaces.
	const fn aliases(self) -> &'static [&'static str] {
		match self {
			Self::Md2 => &["md2"],
			Self::Md5 => &["md5"],
			Self::Ripemd160 => &["ripemd160", "rmd160"],
			Self::Has160 => &["has160"],
			Self::Blake224 => &["blake224", "blake1224"],
			Self::Blake2b => &["blake2b", "blake2b512"],
			Self::Whirlpool => &["whirlpool"],
		}
	}

	pub const fn digest_size(self) -> usize {
		match self {
			Self::Md2 => Md2::DIGEST_SIZE,
			Self::Md5 => Md5::DIGEST_SIZE,
			Self::Ripemd160 => Ripemd160::DIGEST_SIZE,
			Self::Has160 => Has160::DIGEST_SIZE,
			Self::Blake224 => Blake224::DIGEST_SIZE,
			Self::Blake2b => Blake2b::DIGEST_SIZE,
			Self::Whirlpool => Whirlpool::DIGEST_SIZE,
		}
	}

	pub const fn block_size(self) -> usize {
		match self {
			Self::Md2 => Md2::BLOCK_SIZE,
			Self::Md5 => Md5::BLOCK_SIZE,
			Self::Ripemd160 => Ripemd160::BLOCK_SIZE,
			Self::Has160 => Has160::BLOCK_SIZE,
			Self::Blake224 => Blake224::BLOCK_SIZE,
			Self::Blake2b => Blake2b::BLOCK_SIZE,
			Self::Whirlpool => Whirlpool::BLOCK_SIZE,
		}
	}

	/// Creates a hasher for this algorithm in its reset state.
	pub fn new_hasher(self) -> Box<dyn DynHasher> {
		tracing::debug!(algorithm = %self, "creating hasher");

		match self {
			Self::Md2 => Box::new(Md2::new()),
			Self::Md5 => Box::new(Md5::new()),
			Self::Ripemd160 => Box::new(Ripemd160::new()),
			Self::Has160 => Box::new(Has160::new()),
			Self::Blake224 => Box::new(Blake224::new()),
			Self::Blake2b => Box::new(Blake2b::new()),
			Self::Whirlpool => Box::new(Whirlpool::new()),
		}
	}

	/// One-shot hash of `data`.
	pub fn digest(self, data: impl AsRef<[u8]>) -> Vec<u8> {
		let mut hasher = self.new_hasher();
		hasher.update(data.as_ref());
		hasher.finalize();
		hasher.to_vec()
	}

	/// Decodes a hex digest of this algorithm, accepting either letter case.
	pub fn parse_digest(self, digest: &str) -> Result<Vec<u8>, HashError> {
		let bytes = hex::decode(digest.trim())?;
		if bytes.len() != self.digest_size() {
			return Err(HashError::InvalidDigestLength {
				algorithm: self,
				expected: self.digest_size(),
				actual: bytes.len(),
			});
		}
		Ok(bytes)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = HashError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized: String = s
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.map(|c| c.to_ascii_lowercase())
			.collect();

		Self::ALL
			.into_iter()
			.find(|algorithm| algorithm.aliases().contains(&normalized.as_str()))
			.ok_or_else(|| {
				tracing::debug!(name = s, "unknown hash algorithm");
				HashError::UnknownAlgorithm { name: s.to_string() }
			})
	}
}

/// Object-safe view of a [`StreamingHasher`], for hashers chosen at runtime.
pub trait DynHasher: Send + Sync {
	fn algorithm(&self) -> Algorithm;
	fn reset(&mut self);
	fn update(&mut self, data: &[u8]);
	fn finalize(&mut self);
	fn is_finalized(&self) -> bool;
	fn to_vec(&self) -> Vec<u8>;
	fn to_hex(&self) -> String;
	fn box_clone(&self) -> Box<dyn DynHasher>;
}

impl<H> DynHasher for H
where
	H: StreamingHasher + Send + Sync + 'static,
{
	fn algorithm(&self) -> Algorithm {
		H::ALGORITHM
	}

	fn reset(&mut self) {
		StreamingHasher::reset(self)
	}

	fn update(&mut self, data: &[u8]) {
		StreamingHasher::update(self, data)
	}

	fn finalize(&mut self) {
		StreamingHasher::finalize(self)
	}

	fn is_finalized(&self) -> bool {
		StreamingHasher::is_finalized(self)
	}

	fn to_vec(&self) -> Vec<u8> {
		StreamingHasher::to_vec(self)
	}

	fn to_hex(&self) -> String {
		StreamingHasher::to_hex(self)
	}

	fn box_clone(&self) -> Box<dyn DynHasher> {
		Box::new(self.clone())
	}
}

impl Clone for Box<dyn DynHasher> {
	fn clone(&self) -> Self {
		self.box_clone()
	}
}

impl fmt::Debug for dyn DynHasher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynHasher")
			.field("algorithm", &self.algorithm())
			.field("finalized", &self.is_finalized())
			.finish()
	}
}
