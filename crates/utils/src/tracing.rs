// Copyright 2025 Irreducible Inc.

/// Installs a global subscriber printing events to stderr, filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset or invalid. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_tracing_twice() {
		init_tracing();
		init_tracing();
		::tracing::debug!("subscriber installed");
	}
}
