use std::backtrace::Backtrace;

use crate::puzzle::attribute::{Attribute, Color};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A broken uniqueness invariant surfacing through a lookup.
///
/// Every variant is a programming error: on a fully generated arrangement
/// each attribute value has exactly one holder, so a miss can only mean the
/// state was corrupted. Callers propagate these, they never retry.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("no person holds {0}")]
    PersonNotFound(Attribute),
    #[error("no house is painted {0}")]
    HouseColorNotFound(Color),
    #[error("no house stands at position {0}")]
    HouseOrderNotFound(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
