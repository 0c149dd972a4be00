//! 字母表
//!
//! 转移表的列顺序即字母表顺序；匹配算法本身只关心符号是否相同。

use crate::definition::DefinitionError;

/// 有序、无重复的符号集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// 由符号序列创建，重复符号或空序列视为配置错误
    pub fn new<I>(symbols: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut collected: Vec<char> = Vec::new();
        for symbol in symbols {
            if collected.contains(&symbol) {
                return Err(DefinitionError::DuplicateSymbol { symbol });
            }
            collected.push(symbol);
        }
        if collected.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }
        Ok(Self { symbols: collected })
    }

    /// 解析定义文件首行
    ///
    /// 空格、制表符和换行被跳过；`x` 后紧跟两位十六进制数表示一个码点，
    /// 其余字符按字面处理。
    pub fn parse_header(line: &str) -> Result<Self, DefinitionError> {
        let mut symbols = Vec::new();
        let mut chars = line.chars().enumerate();

        while let Some((column, c)) = chars.next() {
            match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                'x' => {
                    let digits: String = chars.by_ref().take(2).map(|(_, d)| d).collect();
                    symbols.push(decode_escape(&digits, column + 1)?);
                }
                other => symbols.push(other),
            }
        }

        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

fn decode_escape(digits: &str, column: usize) -> Result<char, DefinitionError> {
    let invalid = |reason: String| DefinitionError::InvalidEscape { column, reason };

    if digits.chars().count() != 2 {
        return Err(invalid(format!(
            "expected two hex digits after 'x', found {:?}",
            digits
        )));
    }
    if !digits.chars().all(|d| d.is_ascii_hexdigit()) {
        return Err(invalid(format!("{:?} is not a hex number", digits)));
    }
    let code = u32::from_str_radix(digits, 16).map_err(|e| invalid(e.to_string()))?;
    char::from_u32(code).ok_or_else(|| invalid(format!("x{} is not a valid code point", digits)))
}
