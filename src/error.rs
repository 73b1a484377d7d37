//! Error types for route parsing.
//!
//! Each failure kind has its own enum. [`ParseError`] unifies them for a single
//! block and [`TravelError`] adds the position of that block in the input.
//! Every error is a deterministic property of the input text; none is retryable.

use thiserror::Error;

/// The step letters of a route could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteParseError {
    #[error("route steps contain unsupported characters: {0:?}")]
    UnsupportedCharacters(String),

    #[error("unparsed step {0}")]
    UnparsedStep(char),
}

/// The starting-point line of a route could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StartingPointParseError {
    #[error("starting point is missing")]
    Missing,

    #[error("starting point {0:?} is malformed, expected `X,Y,Direction`")]
    Malformed(String),

    #[error("starting point X {0:?} is not an integer")]
    X(String),

    #[error("starting point Y {0:?} is not an integer")]
    Y(String),

    #[error("starting point direction {0:?} contains unsupported characters")]
    UnsupportedCharacters(String),

    #[error("starting point direction {0:?} is not a known direction")]
    Direction(String),
}

/// A starting-point coordinate is negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StartingPointOutOfRangeError {
    #[error("starting point X coordinate should be greater or equal zero, got {0}")]
    X(i32),

    #[error("starting point Y coordinate should be greater or equal zero, got {0}")]
    Y(i32),
}

/// Any failure raised while turning one block of text into a route.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Route(#[from] RouteParseError),

    #[error(transparent)]
    StartingPoint(#[from] StartingPointParseError),

    #[error(transparent)]
    OutOfRange(#[from] StartingPointOutOfRangeError),
}

impl ParseError {
    /// Stable identifier of the failure kind, for logs and assertions.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Route(_) => "route_parse",
            Self::StartingPoint(_) => "starting_point_parse",
            Self::OutOfRange(_) => "starting_point_out_of_range",
        }
    }
}

/// A run failed because one of its blocks did not parse.
///
/// `index` is 1-based and counts blocks in input order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("robot #{index}: {source}")]
pub struct TravelError {
    pub index: usize,
    #[source]
    pub source: ParseError,
}

impl TravelError {
    pub const fn kind(&self) -> &'static str {
        self.source.kind()
    }
}

/// A [`TravelerConfig`](crate::config::TravelerConfig) cannot drive the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyMarker(&'static str),

    #[error("step_length must be at least 1, got {0}")]
    NonPositiveStepLength(i32),
}
