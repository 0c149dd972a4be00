//! 扫描定义加载
//!
//! 定义文件格式：
//! - 第 1 行：字母表
//! - 其余非空行：`<转移表文件> <标识符> [<固定文本>]`，每行一个自动机
//!
//! 转移表文件每行一个状态（第一行为初始状态）：
//! `<'+'|'-'> <忽略字段> <t_1> ... <t_k>`，`t_i` 为目标状态下标或 `E`。

pub mod error;
pub mod loader;
pub mod table;

pub use error::{DefinitionError, TableError, TableErrorKind};
pub use loader::DefinitionLoader;
pub use table::parse_table;

use crate::alphabet::Alphabet;
use crate::automaton::TokenClass;

/// 加载完成的扫描定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDefinition {
    pub alphabet: Alphabet,
    /// 定义顺序即平局时的优先顺序
    pub classes: Vec<TokenClass>,
}
