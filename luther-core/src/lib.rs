//! Luther Core - table-driven maximal-munch scanner
//!
//! Loads a scan definition (an alphabet plus one transition table per token
//! class), then partitions source text into tokens, picking the longest
//! match at each offset and breaking ties by definition order.
//!
//! File access goes through `luther-vfs`; logging goes through `tracing`
//! with the targets `luther::loader`, `luther::scanner` and `luther::emitter`.

pub mod alphabet;
pub mod automaton;
pub mod definition;
pub mod emit;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod position;
pub mod scanner;

pub use alphabet::Alphabet;
pub use automaton::{select_best_match, Automaton, BestMatch, TokenClass};
pub use definition::{DefinitionError, DefinitionLoader, ScanDefinition};
pub use emit::TokenWriter;
pub use encode::encode;
pub use error::{LexError, LutherError};
pub use pipeline::{prepare, scan_files, PreparedScan, ScanSummary};
pub use position::{PositionTracker, SourcePosition};
pub use scanner::{Scanner, Token, Tokens};

// Re-export config types from luther-config
pub use luther_config::{LoaderConfig, LutherConfig, Phase};
