//! 错误类型
//!
//! - [`LexError`]：扫描中途无法继续（所有自动机在某偏移处都不匹配）
//! - [`LutherError`]：完整流程的统一错误

use std::path::PathBuf;

use luther_vfs::VfsError;
use thiserror::Error;

use crate::definition::DefinitionError;
use crate::position::SourcePosition;

/// 词法错误：没有任何词法类别能在 `offset` 处匹配非空串
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{position}] No token class matches {found:?}")]
pub struct LexError {
    /// 字符偏移，0-based
    pub offset: usize,
    pub position: SourcePosition,
    /// 无法匹配的字符
    pub found: char,
}

impl LexError {
    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }
}

/// Luther 错误类型
#[derive(Error, Debug)]
pub enum LutherError {
    /// 定义文件或转移表错误
    #[error("{0}")]
    Definition(#[from] DefinitionError),

    /// 源文件无法读取
    #[error("Cannot read source '{}': {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: VfsError,
    },

    /// 词法错误
    #[error("Lexical error {0}")]
    Lex(#[from] LexError),

    /// 输出写入失败
    #[error("Cannot write tokens: {0}")]
    Output(#[from] std::io::Error),
}

impl LutherError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            LutherError::Lex(e) => Some(e.line()),
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            LutherError::Lex(e) => Some(e.column()),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            LutherError::Definition(_) | LutherError::Source { .. } => "loader",
            LutherError::Lex(_) => "scanner",
            LutherError::Output(_) => "emitter",
        }
    }
}
