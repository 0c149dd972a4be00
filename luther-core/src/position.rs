//! 源代码位置追踪
//!
//! 扫描前一次性记录所有换行符的偏移，扫描过程中只向前推进游标，
//! 把字符偏移转换为 1-based 的行列号。

use std::fmt;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 偏移 → 行列号的增量转换器
///
/// # 前置条件
/// 查询的偏移必须单调不减。换行记录被单向消费，回退查询会得到错误结果
/// （debug 构建下直接 panic）。
#[derive(Debug, Clone)]
pub struct PositionTracker {
    /// 所有 `'\n'` 的字符偏移，递增
    newlines: Vec<usize>,
    /// 下一个尚未消费的换行记录
    cursor: usize,
    line: usize,
    /// 最近一次消费的换行偏移
    last_newline: Option<usize>,
    last_offset: usize,
}

impl PositionTracker {
    pub fn new(input: &[char]) -> Self {
        let newlines = input
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == '\n')
            .map(|(offset, _)| offset)
            .collect();
        Self {
            newlines,
            cursor: 0,
            line: 1,
            last_newline: None,
            last_offset: 0,
        }
    }

    /// 输入中的换行总数
    pub fn newline_count(&self) -> usize {
        self.newlines.len()
    }

    /// 字符偏移 `offset` 处的位置
    ///
    /// 只越过严格位于 `offset` 之前的换行：从换行符本身开始的 token
    /// 仍然报告在它所结束的那一行末尾。
    pub fn position(&mut self, offset: usize) -> SourcePosition {
        debug_assert!(
            offset >= self.last_offset,
            "position queries must be non-decreasing ({} after {})",
            offset,
            self.last_offset
        );
        self.last_offset = offset;

        while let Some(&newline) = self.newlines.get(self.cursor) {
            if newline >= offset {
                break;
            }
            self.cursor += 1;
            self.line += 1;
            self.last_newline = Some(newline);
        }

        let column = match self.last_newline {
            Some(newline) => offset - newline,
            None => offset + 1,
        };
        SourcePosition::new(self.line, column)
    }
}

/// 不需要增量推进时的一次性计算（错误报告用）
pub fn position_of(input: &[char], offset: usize) -> SourcePosition {
    PositionTracker::new(input).position(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_position_start() {
        let input = chars("abc");
        let mut tracker = PositionTracker::new(&input);
        assert_eq!(tracker.position(0), SourcePosition::start());
        assert_eq!(tracker.position(2), SourcePosition::new(1, 3));
    }

    #[test]
    fn test_position_after_newline() {
        let input = chars("ab\ncd");
        let mut tracker = PositionTracker::new(&input);
        assert_eq!(tracker.position(0), SourcePosition::new(1, 1));
        assert_eq!(tracker.position(3), SourcePosition::new(2, 1));
        assert_eq!(tracker.position(4), SourcePosition::new(2, 2));
    }

    #[test]
    fn test_newline_token_reports_end_of_its_line() {
        let input = chars("ab\ncd");
        let mut tracker = PositionTracker::new(&input);
        assert_eq!(tracker.position(2), SourcePosition::new(1, 3));
        assert_eq!(tracker.position(3), SourcePosition::new(2, 1));
    }

    #[test]
    fn test_multi_line_jump() {
        // 一个跨越多行的 token 之后直接跳到第 4 行
        let input = chars("a\n\n\nbc");
        let mut tracker = PositionTracker::new(&input);
        assert_eq!(tracker.newline_count(), 3);
        assert_eq!(tracker.position(0), SourcePosition::new(1, 1));
        assert_eq!(tracker.position(5), SourcePosition::new(4, 2));
    }

    #[test]
    fn test_repeated_query_is_stable() {
        let input = chars("x\ny");
        let mut tracker = PositionTracker::new(&input);
        assert_eq!(tracker.position(2), SourcePosition::new(2, 1));
        assert_eq!(tracker.position(2), SourcePosition::new(2, 1));
    }

    #[test]
    fn test_columns_count_code_points() {
        let input = chars("中文\n🎉x");
        assert_eq!(position_of(&input, 1), SourcePosition::new(1, 2));
        assert_eq!(position_of(&input, 4), SourcePosition::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(SourcePosition::new(3, 7).to_string(), "3:7");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-decreasing")]
    fn test_backwards_query_panics_in_debug() {
        let input = chars("a\nb");
        let mut tracker = PositionTracker::new(&input);
        tracker.position(2);
        tracker.position(0);
    }
}
