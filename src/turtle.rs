//! Robot state and the closed sets of headings and step commands.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString};

/// Compass heading of a robot.
///
/// Parsed from its full name or its one-letter code, ignoring ASCII case
/// (`north`, `NORTH`, `n` all yield [`Direction::North`]).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "North", serialize = "N")]
    North,
    #[strum(to_string = "South", serialize = "S")]
    South,
    #[strum(to_string = "East", serialize = "E")]
    East,
    #[strum(to_string = "West", serialize = "W")]
    West,
}

impl Direction {
    /// Headings in clockwise order, starting from north.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this heading in [`Direction::CLOCKWISE`].
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// One step clockwise (N -> E -> S -> W -> N).
    pub const fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// One step counter-clockwise (N -> W -> S -> E -> N).
    pub const fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Unit offset of a single forward move.
    ///
    /// North decreases `y` (row-major grid), east increases `x`.
    pub const fn forward(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, -1),
            Self::South => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::West => IVec2::new(-1, 0),
        }
    }

    /// First letter of the heading's name, as reported in results.
    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// A single route command.
///
/// Each step has a one-letter code; parsing ignores ASCII case.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Step {
    /// Move one cell along the current heading (`F`).
    #[strum(serialize = "F")]
    Forward,
    /// Move one cell against the current heading (`B`).
    #[strum(serialize = "B")]
    Backward,
    /// Rotate a quarter turn counter-clockwise (`L`).
    #[strum(serialize = "L")]
    TurnLeft,
    /// Rotate a quarter turn clockwise (`R`).
    #[strum(serialize = "R")]
    TurnRight,
}

impl Step {
    /// Looks up the step for a command letter, or `None` if the letter is unknown.
    pub fn from_code(code: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::from_str(code.encode_utf8(&mut buf)).ok()
    }

    /// The command letter for this step.
    pub const fn code(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Backward => 'B',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

/// Grid cell and heading of a robot.
///
/// Non-negative coordinates are only guaranteed for starting positions built by
/// the parser; moves are applied without any bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Position {
    pub const fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// The `(x, y)` cell as a vector.
    pub const fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Returns this position shifted by `delta`, heading unchanged.
    #[must_use]
    pub fn translated(self, delta: IVec2) -> Self {
        let cell = self.cell().saturating_add(delta);
        Self {
            x: cell.x,
            y: cell.y,
            ..self
        }
    }

    /// Returns this position with a new heading, cell unchanged.
    #[must_use]
    pub const fn facing(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }
}
