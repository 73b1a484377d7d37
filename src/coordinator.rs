//! Composes extraction, parsing and simulation into a single run.

use crate::config::TravelerConfig;
use crate::error::{ConfigError, TravelError};
use crate::extractor::RouteExtractor;
use crate::interpreter::RouteInterpreter;
use crate::parser::RouteParser;
use crate::route::ResultTriple;
use tracing::info;

/// Runs the full route pipeline over raw input text.
///
/// Owns one of each component, all built from the same [`TravelerConfig`].
#[derive(Clone, Debug, Default)]
pub struct Coordinator {
    extractor: RouteExtractor,
    parser: RouteParser,
    interpreter: RouteInterpreter,
}

impl Coordinator {
    /// Builds the pipeline from `config`.
    ///
    /// # Errors
    ///
    /// Fails when any text marker in `config` is empty.
    pub fn new(config: &TravelerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            RouteExtractor::new(config),
            RouteParser::new(config),
            RouteInterpreter::new(config),
        ))
    }

    pub fn from_parts(
        extractor: RouteExtractor,
        parser: RouteParser,
        interpreter: RouteInterpreter,
    ) -> Self {
        Self {
            extractor,
            parser,
            interpreter,
        }
    }

    /// Computes the end position of every robot described in `raw`.
    ///
    /// Triples are returned in the order their blocks appear in the input.
    ///
    /// # Errors
    ///
    /// The first block that fails to parse aborts the whole run; no partial
    /// results are returned.
    pub fn run(&self, raw: &str) -> Result<Vec<ResultTriple>, TravelError> {
        let triples = self
            .extractor
            .extract_blocks(raw)
            .iter()
            .enumerate()
            .map(|(i, block)| -> Result<ResultTriple, TravelError> {
                let route = self
                    .parser
                    .parse_block(block)
                    .map_err(|source| TravelError {
                        index: i + 1,
                        source,
                    })?;
                Ok(ResultTriple::from(self.interpreter.simulate(&route)))
            })
            .collect::<Result<Vec<_>, TravelError>>()?;

        info!(robots = triples.len(), "computed end positions");
        Ok(triples)
    }
}
