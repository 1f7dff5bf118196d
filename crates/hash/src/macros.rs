// Copyright 2025 Irreducible Inc.

/// Implements the [`digest`] traits, [`std::io::Write`] and [`std::fmt::Display`] for a type
/// implementing [`crate::StreamingHasher`].
///
/// The blanket impls in `digest` then provide `Digest` and `DynDigest`.
macro_rules! impl_digest_traits {
	($hasher:ty, $output_size:ident, $block_size:ident) => {
		impl digest::HashMarker for $hasher {}

		impl digest::Update for $hasher {
			fn update(&mut self, data: &[u8]) {
				$crate::StreamingHasher::update(self, data);
			}
		}

		impl digest::OutputSizeUser for $hasher {
			type OutputSize = digest::consts::$output_size;
		}

		impl digest::core_api::BlockSizeUser for $hasher {
			type BlockSize = digest::consts::$block_size;
		}

		impl digest::FixedOutput for $hasher {
			fn finalize_into(mut self, out: &mut digest::Output<Self>) {
				$crate::StreamingHasher::finalize(&mut self);
				out.copy_from_slice($crate::StreamingHasher::to_bytes(&self).as_ref());
			}
		}

		impl digest::Reset for $hasher {
			fn reset(&mut self) {
				$crate::StreamingHasher::reset(self);
			}
		}

		impl digest::FixedOutputReset for $hasher {
			fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
				$crate::StreamingHasher::finalize(self);
				out.copy_from_slice($crate::StreamingHasher::to_bytes(self).as_ref());
				$crate::StreamingHasher::reset(self);
			}
		}

		impl std::io::Write for $hasher {
			fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
				$crate::StreamingHasher::update(self, buf);
				Ok(buf.len())
			}

			fn flush(&mut self) -> std::io::Result<()> {
				Ok(())
			}
		}

		impl std::fmt::Display for $hasher {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(&$crate::StreamingHasher::to_hex(self))
			}
		}
	};
}

pub(crate) use impl_digest_traits;
