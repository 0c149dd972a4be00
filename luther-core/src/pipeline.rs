//! 完整扫描流程：加载定义 → 读取源文件 → 扫描 → 输出
//!
//! 配置错误总是在写出第一个 token 之前报告。

use std::io::Write;
use std::path::Path;

use luther_config::LutherConfig;
use luther_vfs::VirtualFileSystem;
use tracing::info;

use crate::definition::DefinitionLoader;
use crate::emit::TokenWriter;
use crate::error::LutherError;
use crate::scanner::Scanner;

/// 扫描结果统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub tokens: usize,
    pub chars: usize,
}

/// 已加载、可以开始扫描的任务
#[derive(Debug, Clone)]
pub struct PreparedScan {
    scanner: Scanner,
    source: String,
}

impl PreparedScan {
    pub fn new(scanner: Scanner, source: impl Into<String>) -> Self {
        Self {
            scanner,
            source: normalize_newlines(&source.into()),
        }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// 换行规范化后的源文本（错误报告的行列号基于它）
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 扫描并逐个写出 token
    ///
    /// 词法错误之前的 token 已经写入 `sink`。
    pub fn write_tokens<W: Write>(&self, sink: W) -> Result<ScanSummary, LutherError> {
        let mut writer = TokenWriter::new(sink);
        let mut tokens = self.scanner.tokenize(&self.source);
        let chars = tokens.input().len();

        let outcome = tokens.try_for_each(|token| -> Result<(), LutherError> {
            writer.write_token(&token?)?;
            Ok(())
        });
        let tokens = writer.written();
        writer.finish()?;
        outcome?;

        info!(target: "luther::scanner", tokens, chars, "Scan completed");
        Ok(ScanSummary { tokens, chars })
    }
}

/// 加载定义并读取源文件
pub fn prepare(
    fs: &dyn VirtualFileSystem,
    config: &LutherConfig,
    definition: &Path,
    source: &Path,
) -> Result<PreparedScan, LutherError> {
    let definition = DefinitionLoader::with_config(fs, config.loader.clone()).load(definition)?;
    let text = fs
        .read_to_string(source)
        .map_err(|e| LutherError::Source {
            path: source.to_path_buf(),
            source: e,
        })?;
    Ok(PreparedScan::new(Scanner::from_definition(definition), text))
}

/// 一步完成：加载、扫描、写出
pub fn scan_files<W: Write>(
    fs: &dyn VirtualFileSystem,
    config: &LutherConfig,
    definition: &Path,
    source: &Path,
    sink: W,
) -> Result<ScanSummary, LutherError> {
    prepare(fs, config, definition, source)?.write_tokens(sink)
}

/// 源文本按文本模式读取：`\r\n` 与单独的 `\r` 都视为 `\n`
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
