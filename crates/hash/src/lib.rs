// Copyright 2023-2025 Irreducible Inc.

//! Incremental implementations of MD2, MD5, RIPEMD-160, HAS-160, BLAKE-224, BLAKE2b and
//! Whirlpool.
//!
//! Every hasher implements [`StreamingHasher`] as well as the [`digest`] traits, so it can be
//! used through `digest::Digest` too. [`Algorithm`] selects a hasher at runtime.

mod buffer;
mod macros;

pub mod blake;
pub mod has160;
pub mod hasher;
pub mod md2;
pub mod md5;
pub mod registry;
pub mod ripemd160;
pub mod whirlpool;

pub use blake::{Blake224, Blake2b};
pub use has160::Has160;
pub use hasher::*;
pub use md2::Md2;
pub use md5::Md5;
pub use registry::*;
pub use ripemd160::Ripemd160;
pub use whirlpool::Whirlpool;

#[cfg(test)]
mod reference_tests;
