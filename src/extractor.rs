//! Splits raw route text into one block per robot.

use crate::config::TravelerConfig;
use tracing::debug;

/// Strips comments and blank lines, then cuts the text at every block marker.
///
/// Extraction never fails: a malformed block is passed through untouched and
/// rejected later by the [`RouteParser`](crate::parser::RouteParser).
#[derive(Clone, Debug)]
pub struct RouteExtractor {
    line_terminator: String,
    comment_marker: String,
    block_marker: String,
}

impl RouteExtractor {
    pub fn new(config: &TravelerConfig) -> Self {
        Self {
            line_terminator: config.line_terminator.clone(),
            comment_marker: config.comment_marker.clone(),
            block_marker: config.block_marker.clone(),
        }
    }

    /// Returns the text of every robot block, in input order.
    ///
    /// Each block starts right after a block marker and holds the starting-point
    /// line followed by zero or more step lines. Empty segments (text before the
    /// first marker when it is empty, or two adjacent markers) are dropped.
    pub fn extract_blocks(&self, raw: &str) -> Vec<String> {
        let cleaned = self.strip_comments(raw);

        let blocks: Vec<String> = cleaned
            .split(self.block_marker.as_str())
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        debug!(blocks = blocks.len(), "extracted route blocks");
        blocks
    }

    /// Drops empty lines and comment lines, rejoining the rest.
    fn strip_comments(&self, raw: &str) -> String {
        raw.split(self.line_terminator.as_str())
            .filter(|line| !line.is_empty() && !line.starts_with(self.comment_marker.as_str()))
            .collect::<Vec<_>>()
            .join(&self.line_terminator)
    }
}

impl Default for RouteExtractor {
    fn default() -> Self {
        Self::new(&TravelerConfig::default())
    }
}
