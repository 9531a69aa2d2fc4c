//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Host Defaults
// =============================================================================

pub fn default_prefix() -> String {
    "!".to_string()
}

pub fn default_host_name() -> String {
    "randomizer".to_string()
}

// =============================================================================
// Plugin Defaults
// =============================================================================

/// The secure backend is used unless configuration turns it off.
pub fn default_crypto() -> bool {
    true
}
