use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for route extraction, parsing and simulation.
///
/// Every field has a default, so a partial TOML table deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelerConfig {
    /// Separator between input lines. Default: `"\r\n"`.
    pub line_terminator: String,
    /// Prefix that marks a whole line as a comment. Default: `"//"`.
    pub comment_marker: String,
    /// Literal token that opens each robot's block. Default: `"POS="`.
    pub block_marker: String,
    /// Cells covered by one forward or backward step. Default: 1.
    pub step_length: i32,
}

impl Default for TravelerConfig {
    fn default() -> Self {
        Self {
            line_terminator: "\r\n".to_owned(),
            comment_marker: "//".to_owned(),
            block_marker: "POS=".to_owned(),
            step_length: 1,
        }
    }
}

impl TravelerConfig {
    /// Checks that every text marker is non-empty and that moves advance.
    ///
    /// Splitting on an empty separator would shred the input into single
    /// characters, and an empty comment marker would match every line. A step
    /// length below 1 would stall or reverse every move.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("line_terminator", &self.line_terminator),
            ("comment_marker", &self.comment_marker),
            ("block_marker", &self.block_marker),
        ];
        for (name, marker) in markers {
            if marker.is_empty() {
                return Err(ConfigError::EmptyMarker(name));
            }
        }
        if self.step_length < 1 {
            return Err(ConfigError::NonPositiveStepLength(self.step_length));
        }
        Ok(())
    }
}
