//! 输出文本编码
//!
//! 把匹配到的子串转换为不含空白的安全文本，保证输出行可以按空格切分。
//! `x` 被保留为转义标记，因此它本身也会被转义。

use std::fmt::Write;

/// 原样输出的字符：A–Z、a–w、y–z、0–9
pub fn is_plain(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='w' | 'y'..='z' | '0'..='9')
}

/// 编码字符串
pub fn encode(text: &str) -> String {
    encode_chars(text.chars())
}

/// 编码字符序列
///
/// 非安全字符写成 `x` + 小写十六进制码点，至少两位（`' '` → `x20`，`'λ'` → `x3bb`）。
pub fn encode_chars<I>(chars: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut out = String::new();
    for c in chars {
        if is_plain(c) {
            out.push(c);
        } else {
            // 写入 String 不会失败
            let _ = write!(out, "x{:02x}", c as u32);
        }
    }
    out
}
