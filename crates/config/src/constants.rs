//! Shared constants for the configuration crate.

/// Default disambiguation timeout for multi-character key sequences.
pub const DEFAULT_KEY_SEQUENCE_TIMEOUT_MS: u64 = 350;

/// Upper bound accepted for `keySequenceTimeout`.
pub const MAX_KEY_SEQUENCE_TIMEOUT_MS: u64 = 5000;

/// Maximum number of characters in a binding key.
pub const MAX_KEY_CHARS: usize = 2;
