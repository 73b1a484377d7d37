//! # traveler
//!
//! Route interpretation for robots on an unbounded grid.
//!
//! Input text holds one block per robot, each opened by `POS=`: a starting
//! point `X,Y,Direction` followed by step letters (`F`, `B`, `L`, `R`). Lines
//! starting with `//` are comments. [`run`] returns the final
//! `(x, y, direction code)` of every robot, in input order:
//!
//! ```
//! let triples = traveler::run("POS=\r\n0,0,N\r\nFFRFF").unwrap();
//! assert_eq!(triples[0].as_tuple(), (2, -2, 'E'));
//! ```
//!
//! The pipeline is split into a [`RouteExtractor`], a [`RouteParser`] and a
//! [`RouteInterpreter`], composed by a [`Coordinator`].

pub mod config;
pub mod coordinator;
pub mod error;
pub mod extractor;
pub mod interpreter;
pub mod parser;
pub mod route;
pub mod turtle;

pub use config::*;
pub use coordinator::*;
pub use error::*;
pub use extractor::*;
pub use interpreter::*;
pub use parser::*;
pub use route::*;
pub use turtle::*;

/// Runs the pipeline with the default [`TravelerConfig`].
///
/// # Errors
///
/// Returns the first block that fails to parse; see [`Coordinator::run`].
pub fn run(raw: &str) -> Result<Vec<ResultTriple>, TravelError> {
    Coordinator::default().run(raw)
}
