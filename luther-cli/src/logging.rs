//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制，输出到 stderr。

use std::io;

use luther_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 每个阶段一个 target，其余日志使用全局级别
pub fn build_targets(config: &LoggingConfig) -> Targets {
    Phase::all().into_iter().fold(
        Targets::new()
            .with_default(to_tracing_level(config.level))
            .with_target("luther::cli", to_tracing_level(config.level)),
        |targets, phase| targets.with_target(phase.target(), to_tracing_level(config.level_for(phase))),
    )
}

/// 使用指定格式和日志配置初始化日志系统
pub fn init(config: &LoggingConfig, format: LogFormat) {
    let layer = create_format_layer(format).with_filter(build_targets(config));
    tracing_subscriber::registry().with(layer).init();
}

fn create_format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
