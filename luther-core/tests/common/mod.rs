//! 测试辅助工具
//!
//! 在内存文件系统中搭建扫描定义并运行完整流程

#![allow(dead_code)]

use std::path::Path;

use luther_core::{scan_files, LutherConfig, LutherError, ScanSummary};
use luther_vfs::{MemoryFileSystem, VirtualFileSystem};

pub const DEFINITION: &str = "/lang/scan.def";
pub const SOURCE: &str = "/lang/input.src";

/// 字母表：a–z、0–9、空格、换行、`=`、`+`
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwx78yz 0123456789 x20 x0a = +";

/// 按字母表顺序生成一行转移：`targets(c)` 给出符号 c 的目标状态
pub fn row(accepting: bool, state: usize, targets: impl Fn(char) -> Option<usize>) -> String {
    let mut line = format!("{} {}", if accepting { '+' } else { '-' }, state);
    for symbol in alphabet_symbols() {
        match targets(symbol) {
            Some(to) => line.push_str(&format!(" {}", to)),
            None => line.push_str(" E"),
        }
    }
    line.push('\n');
    line
}

pub fn alphabet_symbols() -> Vec<char> {
    let mut symbols: Vec<char> = ('a'..='z').collect();
    symbols.extend('0'..='9');
    symbols.extend([' ', '\n', '=', '+']);
    symbols
}

/// 匹配固定单词的转移表
pub fn keyword_table(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut table = String::new();
    for state in 0..=chars.len() {
        let expected = chars.get(state).copied();
        table.push_str(&row(state == chars.len(), state, |c| {
            (Some(c) == expected).then_some(state + 1)
        }));
    }
    table
}

/// 匹配 `class` 中字符组成的非空串
pub fn repeat_table(class: impl Fn(char) -> bool + Copy) -> String {
    let mut table = row(false, 0, |c| class(c).then_some(1));
    table.push_str(&row(true, 1, |c| class(c).then_some(1)));
    table
}

/// 一个小型语言：关键字、标识符、数字、空白、`=`、`==`、`+`
pub fn toy_language() -> MemoryFileSystem {
    let fs = MemoryFileSystem::new();
    put(&fs, "/lang/let.tt", &keyword_table("let"));
    put(&fs, "/lang/id.tt", &repeat_table(|c| c.is_ascii_lowercase()));
    put(&fs, "/lang/num.tt", &repeat_table(|c| c.is_ascii_digit()));
    put(&fs, "/lang/ws.tt", &repeat_table(|c| c == ' ' || c == '\n'));
    put(&fs, "/lang/assign.tt", &keyword_table("="));
    put(&fs, "/lang/eq.tt", &keyword_table("=="));
    put(&fs, "/lang/plus.tt", &keyword_table("+"));
    put(
        &fs,
        DEFINITION,
        &format!(
            "{}\n\
             let.tt LET let\n\
             id.tt ID\n\
             num.tt NUM\n\
             \n\
             ws.tt WS\n\
             assign.tt ASSIGN\n\
             eq.tt EQ\n\
             plus.tt PLUS plus\n",
            ALPHABET
        ),
    );
    fs
}

pub fn put(fs: &MemoryFileSystem, path: &str, content: &str) {
    fs.write_file(Path::new(path), content.as_bytes()).unwrap();
}

/// 扫描 `source`，返回结果和输出文本
pub fn scan(fs: &MemoryFileSystem, source: &str) -> (Result<ScanSummary, LutherError>, String) {
    put(fs, SOURCE, source);
    let mut out = Vec::new();
    let result = scan_files(
        fs,
        &LutherConfig::default(),
        Path::new(DEFINITION),
        Path::new(SOURCE),
        &mut out,
    );
    (result, String::from_utf8(out).unwrap())
}

/// 输出中每行的标识符
pub fn identifiers(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect()
}
