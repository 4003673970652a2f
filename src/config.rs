//! Report configuration.

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable sections, optionally colored.
    #[default]
    Text,

    /// A single JSON document with every derived value.
    Json,
}

/// Settings consumed by [`crate::report`].
///
/// # Examples
///
/// ```rust
/// use dnatrans::config::{OutputFormat, ReportConfig};
///
/// let config = ReportConfig {
///     format: OutputFormat::Json,
///     ..Default::default()
/// };
/// assert!(config.highlight);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: OutputFormat,

    /// Emit ANSI colors for start/stop codons. Resolved by the caller,
    /// which knows whether output goes to a terminal.
    ///
    /// **Default**: `false`
    pub color: bool,

    /// Include the start/stop highlight section.
    ///
    /// **Default**: `true`
    pub highlight: bool,

    /// Include the amino acid full-name section.
    ///
    /// **Default**: `true`
    pub names: bool,

    /// Wrap width for sequence blocks, in characters.
    ///
    /// **Default**: 60
    pub width: usize,
}

impl ReportConfig {
    /// Narrowest width the text report accepts.
    pub const MIN_WIDTH: usize = 12;

    /// Widest width the text report accepts.
    pub const MAX_WIDTH: usize = 1000;

    /// Width clamped to [`Self::MIN_WIDTH`]..=[`Self::MAX_WIDTH`].
    pub fn effective_width(&self) -> usize {
        self.width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: false,
            highlight: true,
            names: true,
            width: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
        assert!(config.highlight);
        assert!(config.names);
        assert_eq!(config.effective_width(), 60);
    }

    #[test]
    fn test_width_clamped() {
        let config = ReportConfig {
            width: 3,
            ..Default::default()
        };
        assert_eq!(config.effective_width(), ReportConfig::MIN_WIDTH);

        let config = ReportConfig {
            width: usize::MAX,
            ..Default::default()
        };
        assert_eq!(config.effective_width(), ReportConfig::MAX_WIDTH);
    }
}
