//! Parser that turns one block of route text into a validated [`Route`].
//!
//! A block is a starting-point line (`X,Y,Direction`) followed by any number of
//! step lines. Step lines are concatenated, so a long route may wrap across
//! several source lines:
//!
//! ```text
//! 3,4,east
//! FFLB
//! RRF
//! ```

use crate::config::TravelerConfig;
use crate::error::{
    ParseError, RouteParseError, StartingPointOutOfRangeError, StartingPointParseError,
};
use crate::route::Route;
use crate::turtle::{Direction, Position, Step};
use std::str::FromStr;
use tracing::debug;

const FIELD_SEPARATOR: char = ',';

/// Validates route blocks produced by the
/// [`RouteExtractor`](crate::extractor::RouteExtractor).
#[derive(Clone, Debug)]
pub struct RouteParser {
    line_terminator: String,
}

impl RouteParser {
    pub fn new(config: &TravelerConfig) -> Self {
        Self {
            line_terminator: config.line_terminator.clone(),
        }
    }

    /// Parses a block into a [`Route`].
    ///
    /// The first non-empty line is the starting point; the remaining non-empty
    /// lines are joined without a separator into the step string. A returned
    /// route always has a non-negative starting cell and fully validated steps.
    ///
    /// # Errors
    ///
    /// Starting-point problems are reported before step problems. Within the
    /// starting point, field errors are checked in order X, Y, direction, and
    /// the range check runs last.
    pub fn parse_block(&self, block: &str) -> Result<Route, ParseError> {
        let mut lines = block
            .split(self.line_terminator.as_str())
            .filter(|line| !line.is_empty());

        let start_line = lines.next().ok_or(StartingPointParseError::Missing)?;
        let start = parse_starting_point(start_line)?;

        let step_text: String = lines.collect();
        let steps = parse_steps(&step_text)?;

        debug!(?start, steps = steps.len(), "parsed route");
        Ok(Route::new(start, steps))
    }
}

impl Default for RouteParser {
    fn default() -> Self {
        Self::new(&TravelerConfig::default())
    }
}

/// Parses an `X,Y,Direction` line into a range-checked starting [`Position`].
pub fn parse_starting_point(line: &str) -> Result<Position, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(StartingPointParseError::Missing.into());
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [x_field, y_field, direction_field] = fields[..] else {
        return Err(StartingPointParseError::Malformed(line.to_owned()).into());
    };

    let x = parse_coordinate(x_field)
        .ok_or_else(|| StartingPointParseError::X(x_field.to_owned()))?;
    let y = parse_coordinate(y_field)
        .ok_or_else(|| StartingPointParseError::Y(y_field.to_owned()))?;

    ensure_direction_letters(direction_field)?;
    let direction = Direction::from_str(direction_field)
        .map_err(|_| StartingPointParseError::Direction(direction_field.to_owned()))?;

    ensure_in_range(x, y)?;

    Ok(Position::new(x, y, direction))
}

/// Parses the concatenated step letters of a route.
///
/// Empty or whitespace-only text is a stationary route, not an error.
pub fn parse_steps(text: &str) -> Result<Vec<Step>, RouteParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    ensure_step_letters(text)?;

    text.chars()
        .map(|code| Step::from_code(code).ok_or(RouteParseError::UnparsedStep(code)))
        .collect()
}

/// Signed integer with optional surrounding whitespace.
fn parse_coordinate(field: &str) -> Option<i32> {
    field.trim().parse().ok()
}

fn ensure_direction_letters(field: &str) -> Result<(), StartingPointParseError> {
    if field.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(StartingPointParseError::UnsupportedCharacters(
            field.to_owned(),
        ))
    }
}

fn ensure_step_letters(text: &str) -> Result<(), RouteParseError> {
    if text.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(RouteParseError::UnsupportedCharacters(text.to_owned()))
    }
}

fn ensure_in_range(x: i32, y: i32) -> Result<(), StartingPointOutOfRangeError> {
    if x < 0 {
        return Err(StartingPointOutOfRangeError::X(x));
    }
    if y < 0 {
        return Err(StartingPointOutOfRangeError::Y(y));
    }
    Ok(())
}
