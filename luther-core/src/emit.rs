//! Token 输出
//!
//! 每个 token 一行：`<identifier> <text> <line> <column>`

use std::io::{self, Write};

use tracing::trace;

use crate::scanner::Token;

const TARGET: &str = "luther::emitter";

/// 把 token 记录逐行写入任意 `Write`
pub struct TokenWriter<W: Write> {
    sink: W,
    written: usize,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    pub fn write_token(&mut self, token: &Token) -> io::Result<()> {
        writeln!(
            self.sink,
            "{} {} {} {}",
            token.identifier, token.text, token.position.line, token.position.column
        )?;
        self.written += 1;
        trace!(target: TARGET, count = self.written, "Token written");
        Ok(())
    }

    /// 已写出的 token 数
    pub fn written(&self) -> usize {
        self.written
    }

    /// 刷新并取回底层 sink
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
