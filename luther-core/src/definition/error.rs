use std::path::PathBuf;

use luther_vfs::VfsError;
use thiserror::Error;

/// 转移表中的单行错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct TableError {
    /// 1-based
    pub line: usize,
    pub kind: TableErrorKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableErrorKind {
    #[error("state marker must be '+' or '-', found {0:?}")]
    BadMarker(String),
    #[error("expected {expected} transitions (one per alphabet symbol), found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("transition {0:?} is neither a state index nor 'E'")]
    BadTarget(String),
    #[error("transition to state {target} but the table has {state_count} states")]
    TargetOutOfRange { target: usize, state_count: usize },
    #[error("table defines no states")]
    Empty,
}

/// 配置错误：全部在扫描开始前报告
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: VfsError,
    },

    #[error("Alphabet is empty")]
    EmptyAlphabet,

    #[error("Invalid alphabet escape at column {column}: {reason}")]
    InvalidEscape { column: usize, reason: String },

    #[error("Symbol {symbol:?} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },

    #[error("{}:{line}: expected '<table-file> <identifier> [<literal-token>]'", .path.display())]
    MalformedEntry { path: PathBuf, line: usize },

    #[error("'{}' defines no automata", .path.display())]
    NoAutomata { path: PathBuf },

    #[error("Malformed transition table '{}': {source}", .path.display())]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}
