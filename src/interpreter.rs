//! Interpreter that walks a [`Route`] and computes where the robot ends up.
//!
//! The entry point is [`RouteInterpreter`]. Every move is looked up in a
//! [`TransitionTable`] keyed by the current heading and the step, so the
//! movement rules live in exactly one place and can be inspected directly.

use crate::config::TravelerConfig;
use crate::route::Route;
use crate::turtle::{Direction, Position, Step};
use glam::IVec2;
use strum::IntoEnumIterator;
use tracing::trace;

/// Outcome of applying one step under one heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Offset added to the robot's cell.
    pub delta: IVec2,
    /// Heading after the step.
    pub heading: Direction,
}

/// Complete `(Direction, Step) -> Transition` mapping.
///
/// | Step        | Cell change                            | Heading          |
/// |-------------|----------------------------------------|------------------|
/// | `F`         | N: y-1, S: y+1, W: x-1, E: x+1         | unchanged        |
/// | `B`         | inverse of `F`                         | unchanged        |
/// | `L`         | none                                   | counter-clockwise|
/// | `R`         | none                                   | clockwise        |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    entries: [[Transition; 4]; 4],
}

impl TransitionTable {
    /// Builds the table with forward/backward moves scaled by `step_length`.
    ///
    /// Scaling saturates, so extreme lengths clamp instead of overflowing.
    pub fn new(step_length: i32) -> Self {
        let mut entries = [[Transition {
            delta: IVec2::ZERO,
            heading: Direction::North,
        }; 4]; 4];

        for direction in Direction::iter() {
            for step in Step::iter() {
                let forward = direction.forward().saturating_mul(IVec2::splat(step_length));
                entries[direction.index()][step_index(step)] = match step {
                    Step::Forward => Transition {
                        delta: forward,
                        heading: direction,
                    },
                    Step::Backward => Transition {
                        delta: IVec2::ZERO.saturating_sub(forward),
                        heading: direction,
                    },
                    Step::TurnLeft => Transition {
                        delta: IVec2::ZERO,
                        heading: direction.turn_left(),
                    },
                    Step::TurnRight => Transition {
                        delta: IVec2::ZERO,
                        heading: direction.turn_right(),
                    },
                };
            }
        }

        Self { entries }
    }

    pub fn get(&self, direction: Direction, step: Step) -> Transition {
        self.entries[direction.index()][step_index(step)]
    }

    /// Applies a single step to `position`.
    pub fn apply(&self, position: Position, step: Step) -> Position {
        let transition = self.get(position.direction, step);
        position
            .translated(transition.delta)
            .facing(transition.heading)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new(1)
    }
}

const fn step_index(step: Step) -> usize {
    match step {
        Step::Forward => 0,
        Step::Backward => 1,
        Step::TurnLeft => 2,
        Step::TurnRight => 3,
    }
}

/// Simulates routes on an unbounded grid.
#[derive(Clone, Debug, Default)]
pub struct RouteInterpreter {
    table: TransitionTable,
}

impl RouteInterpreter {
    pub fn new(config: &TravelerConfig) -> Self {
        Self::with_table(TransitionTable::new(config.step_length))
    }

    /// Creates an interpreter around an existing table (builder pattern).
    pub fn with_table(table: TransitionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Returns the end position of `route`.
    ///
    /// Steps are folded left to right from the starting position. A route with
    /// no steps ends where it starts. The result is never bounds-checked, so
    /// `B` from `(0, 0, N)` legitimately yields `(0, 1, N)` and `F` yields
    /// `(0, -1, N)`.
    pub fn simulate(&self, route: &Route) -> Position {
        route
            .steps()
            .iter()
            .fold(route.start(), |position, &step| {
                let next = self.table.apply(position, step);
                trace!(?step, ?next, "applied step");
                next
            })
    }

    /// Returns every position visited by `route`, starting position first.
    ///
    /// The last element always equals [`simulate`](Self::simulate).
    pub fn trace(&self, route: &Route) -> Vec<Position> {
        let mut current = route.start();
        let mut visited = Vec::with_capacity(route.steps().len() + 1);
        visited.push(current);
        for &step in route.steps() {
            current = self.table.apply(current, step);
            visited.push(current);
        }
        visited
    }
}
