//! Decode configuration.

/// Default upper bound on the number of options in one decode.
///
/// A 64 KiB options area holds at most 16384 empty frames; real messages carry
/// a few dozen.
pub const DEFAULT_MAX_OPTIONS: usize = 1024;

/// Limits applied while decoding an options area.
///
/// # Example
/// ```
/// use dhcpv6_opt_wire::config::DecodeConfig;
///
/// let config = DecodeConfig::new().max_options(8);
/// assert_eq!(config.max_options, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Decoding fails with `Error::TooManyOptions` once more than this many
    /// frames have been read.
    pub max_options: usize,
}

impl DecodeConfig {
    /// Configuration with the default limits.
    pub const fn new() -> Self {
        DecodeConfig {
            max_options: DEFAULT_MAX_OPTIONS,
        }
    }

    /// Set the option count limit.
    pub const fn max_options(mut self, max_options: usize) -> Self {
        self.max_options = max_options;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
