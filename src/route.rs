use crate::turtle::{Position, Step};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated robot route: where the robot starts and what it does.
///
/// Produced by [`RouteParser`](crate::parser::RouteParser) and consumed by
/// [`RouteInterpreter`](crate::interpreter::RouteInterpreter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    start: Position,
    steps: Vec<Step>,
}

impl Route {
    pub fn new(start: Position, steps: Vec<Step>) -> Self {
        Self { start, steps }
    }

    /// A route that never moves.
    pub fn stationary(start: Position) -> Self {
        Self::new(start, Vec::new())
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_stationary(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Final `(x, y, direction code)` reported for one robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultTriple {
    pub x: i32,
    pub y: i32,
    pub direction: char,
}

impl ResultTriple {
    pub const fn as_tuple(&self) -> (i32, i32, char) {
        (self.x, self.y, self.direction)
    }
}

impl From<Position> for ResultTriple {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            direction: position.direction.code(),
        }
    }
}

impl fmt::Display for ResultTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={} Y={} D={}", self.x, self.y, self.direction)
    }
}
