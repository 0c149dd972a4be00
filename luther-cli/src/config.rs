//! CLI 配置
//!
//! 读取 JSON 配置文件并应用命令行覆盖项

use std::path::Path;

use luther_config::{LogLevel, LutherConfig};

/// Read the configuration file; no path means defaults
pub fn load_config(path: Option<&Path>) -> Result<LutherConfig, String> {
    let Some(path) = path else {
        return Ok(LutherConfig::default());
    };

    if !path.exists() {
        return Err(format!("未找到配置文件 '{}'", path.display()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("无法读取 '{}': {}", path.display(), e))?;

    serde_json::from_str(&content).map_err(|e| format!("解析 '{}' 失败: {}", path.display(), e))
}

/// Command-line flags win over file values
pub fn apply_overrides(config: &mut LutherConfig, log_level: Option<LogLevel>) {
    if let Some(level) = log_level {
        config.logging.level = level;
    }
}
