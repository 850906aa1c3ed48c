use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// The one failure the core reports outward: HTML that has no recognizable
/// signature structure at all.
///
/// Content that is merely unrecognized inside an otherwise valid table is
/// dropped instead, see the parser's classification rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unparseable document: input is empty")]
    Empty,

    #[error("Unparseable document: no top-level <table> found")]
    NoTable,
}
