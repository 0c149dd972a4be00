use std::path::{Path, PathBuf};

use luther_config::LoaderConfig;
use luther_vfs::VirtualFileSystem;
use tracing::{debug, info, trace};

use super::error::DefinitionError;
use super::table::parse_table;
use super::ScanDefinition;
use crate::alphabet::Alphabet;
use crate::automaton::TokenClass;

const TARGET: &str = "luther::loader";

/// 扫描定义加载器
///
/// 所有文件都经由 [`VirtualFileSystem`] 读取。
pub struct DefinitionLoader<'fs> {
    fs: &'fs dyn VirtualFileSystem,
    config: LoaderConfig,
}

impl<'fs> DefinitionLoader<'fs> {
    pub fn new(fs: &'fs dyn VirtualFileSystem) -> Self {
        Self::with_config(fs, LoaderConfig::default())
    }

    pub fn with_config(fs: &'fs dyn VirtualFileSystem, config: LoaderConfig) -> Self {
        Self { fs, config }
    }

    /// 读取并解析定义文件及其引用的全部转移表
    pub fn load(&self, path: &Path) -> Result<ScanDefinition, DefinitionError> {
        info!(target: TARGET, path = %path.display(), "Loading scan definition");
        let text = self.read(path)?;
        let definition = self.parse(&text, path)?;
        info!(
            target: TARGET,
            symbols = definition.alphabet.len(),
            automata = definition.classes.len(),
            "Scan definition loaded"
        );
        Ok(definition)
    }

    /// 解析定义文本；`path` 用于错误信息和相对路径解析
    pub fn parse(&self, text: &str, path: &Path) -> Result<ScanDefinition, DefinitionError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(DefinitionError::EmptyAlphabet)?;
        let alphabet = Alphabet::parse_header(header)?;
        debug!(target: TARGET, alphabet = ?alphabet.symbols(), "Parsed alphabet");

        let mut classes = Vec::new();
        // 首行是字母表，条目从第 2 行开始
        for (line_number, line) in (2..).zip(lines) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [table, identifier, rest @ ..] => {
                    let automaton = self.load_table(table, path, &alphabet)?;
                    let mut class = TokenClass::new(automaton, *identifier);
                    if let Some(literal) = rest.first() {
                        class = class.with_literal(*literal);
                    }
                    debug!(
                        target: TARGET,
                        identifier = %class.identifier,
                        literal = ?class.literal,
                        states = class.automaton.state_count(),
                        "Registered token class"
                    );
                    classes.push(class);
                }
                [_] => {
                    return Err(DefinitionError::MalformedEntry {
                        path: path.to_path_buf(),
                        line: line_number,
                    })
                }
            }
        }

        if classes.is_empty() {
            return Err(DefinitionError::NoAutomata {
                path: path.to_path_buf(),
            });
        }
        Ok(ScanDefinition { alphabet, classes })
    }

    fn load_table(
        &self,
        table: &str,
        definition_path: &Path,
        alphabet: &Alphabet,
    ) -> Result<crate::automaton::Automaton, DefinitionError> {
        let table_path = self.resolve_table_path(table, definition_path);
        trace!(target: TARGET, table = %table_path.display(), "Reading transition table");
        let text = self.read(&table_path)?;
        parse_table(&text, alphabet).map_err(|source| DefinitionError::MalformedTable {
            path: table_path,
            source,
        })
    }

    /// 表路径先按原样（相对工作目录）解析；不存在且为相对路径时，
    /// 再相对定义文件所在目录解析
    fn resolve_table_path(&self, table: &str, definition_path: &Path) -> PathBuf {
        let as_given = PathBuf::from(table);
        if self.fs.exists(&as_given)
            || as_given.is_absolute()
            || !self.config.resolve_relative_to_definition
        {
            return as_given;
        }
        match definition_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                let candidate = dir.join(&as_given);
                if self.fs.exists(&candidate) {
                    trace!(
                        target: TARGET,
                        table = %candidate.display(),
                        "Resolved table relative to definition"
                    );
                    candidate
                } else {
                    as_given
                }
            }
            _ => as_given,
        }
    }

    fn read(&self, path: &Path) -> Result<String, DefinitionError> {
        self.fs
            .read_to_string(path)
            .map_err(|source| DefinitionError::Unreadable {
                path: path.to_path_buf(),
                source,
            })
    }
}
