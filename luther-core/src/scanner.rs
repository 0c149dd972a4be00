//! 扫描驱动
//!
//! 在每个偏移处运行所有自动机，按最长匹配仲裁，产出 token 并前进。
//! 连续 token 消费的子串恰好划分整个输入：无间隙、无重叠。

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::automaton::{Manager, TokenClass};
use crate::definition::ScanDefinition;
use crate::encode::encode_chars;
use crate::error::LexError;
use crate::position::{PositionTracker, SourcePosition};

const TARGET: &str = "luther::scanner";

/// Token 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 词法类别标识符
    pub identifier: String,
    /// 固定文本，或编码后的匹配文本
    pub text: String,
    /// 起始位置
    pub position: SourcePosition,
    /// 起始字符偏移，0-based
    pub offset: usize,
    /// 消费的字符数（总是大于 0）
    pub length: usize,
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 消费区间的结束偏移（不含）
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// 最长匹配扫描器
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    manager: Manager,
}

impl Scanner {
    pub fn new(classes: Vec<TokenClass>) -> Self {
        Self {
            manager: classes.into_iter().collect(),
        }
    }

    pub fn from_definition(definition: ScanDefinition) -> Self {
        Self::new(definition.classes)
    }

    pub fn classes(&self) -> &[TokenClass] {
        self.manager.classes()
    }

    /// 惰性切分 `input`
    ///
    /// 返回的迭代器在第一个词法错误之后结束。
    pub fn tokenize(&self, input: &str) -> Tokens<'_> {
        let input: Vec<char> = input.chars().collect();
        debug!(
            target: TARGET,
            chars = input.len(),
            classes = self.manager.len(),
            "Starting scan"
        );
        Tokens {
            manager: &self.manager,
            tracker: PositionTracker::new(&input),
            input,
            offset: 0,
            failed: false,
        }
    }

    /// 一次性切分，遇到错误即返回
    pub fn tokenize_all(&self, input: &str) -> Result<Vec<Token>, LexError> {
        self.tokenize(input).collect()
    }
}

/// [`Scanner::tokenize`] 返回的 token 序列
pub struct Tokens<'s> {
    manager: &'s Manager,
    input: Vec<char>,
    offset: usize,
    tracker: PositionTracker,
    failed: bool,
}

impl Tokens<'_> {
    /// 下一个 token 的起始偏移
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 按字符切分后的完整输入
    pub fn input(&self) -> &[char] {
        &self.input
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }

        let start = self.offset;
        let position = self.tracker.position(start);
        trace!(target: TARGET, offset = start, %position, "Scanning next token");

        let Some(best) = self.manager.best_match(&self.input, start) else {
            self.failed = true;
            let error = LexError {
                offset: start,
                position,
                found: self.input[start],
            };
            warn!(target: TARGET, %error, "No token class matches");
            return Some(Err(error));
        };

        let class = &self.manager.classes()[best.index];
        let lexeme = &self.input[start..start + best.length];
        let text = match &class.literal {
            Some(literal) => literal.clone(),
            None => encode_chars(lexeme.iter().copied()),
        };
        self.offset += best.length;

        debug!(
            target: TARGET,
            identifier = %class.identifier,
            text = %text,
            line = position.line,
            column = position.column,
            "Produced token"
        );
        Some(Ok(Token {
            identifier: class.identifier.clone(),
            text,
            position,
            offset: start,
            length: best.length,
        }))
    }
}

impl FusedIterator for Tokens<'_> {}
