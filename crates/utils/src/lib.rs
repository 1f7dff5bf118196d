// Copyright 2025 Irreducible Inc.

pub mod endian;
pub mod fixed_buffer;
pub mod tracing;

pub use endian::{load_words, store_words, BigEndian, Endianness, LittleEndian, Word};
pub use fixed_buffer::FixedBuffer;
