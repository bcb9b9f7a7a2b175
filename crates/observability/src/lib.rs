//! Tracing/logging setup shared by the storefront binaries.

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Like [`init`], but with a caller-supplied default filter used when
/// `RUST_LOG` is unset.
pub fn init_with_default(filter: &str) {
    tracing::init(filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
