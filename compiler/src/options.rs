use serde::Deserialize;

/// Width descriptions are wrapped to unless configured otherwise.
pub const DEFAULT_WRAP_WIDTH: usize = 100;

/// Knobs of the schema reader. Everything protocol-defined (type sizes,
/// checksum parameters, command quirks) is fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
    /// Maximum line width of wrapped description text. `0` disables wrapping.
    pub wrap_width: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions { wrap_width: DEFAULT_WRAP_WIDTH }
    }
}
