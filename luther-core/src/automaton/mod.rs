//! 表驱动 DFA
//!
//! - `machine`: 单个自动机，显式状态数组 + 每状态转移表
//! - `manager`: 多个自动机的最长匹配仲裁

pub mod error;
pub mod machine;
pub mod manager;

pub use error::{AutomatonError, InvalidStateIdError};
pub use machine::{Automaton, State, StateId};
pub use manager::{select_best_match, BestMatch, Manager, TokenClass};
