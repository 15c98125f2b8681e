//! 扫描选项与结果概要（模块）
use std::path::PathBuf;

use crate::error::AcquireError;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 人类可读的多行文本
    #[default]
    Text,
    /// 单个 JSON 对象
    Json,
}

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 额外指示符规则文件（TOML）；为空则仅使用内置目录
    pub rules_path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// 单次调用的结果概要（便于 CLI 记录日志与决定退出码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// 扫描完成，附命中数量（0 表示未发现）
    Scanned { matches: usize },
    /// 获取失败，附分类退出码
    Failed { category: &'static str, exit_code: i32 },
}

impl ScanOutcome {
    /// 分类退出码：0 未发现，1 发现，2..=5 对应获取错误
    pub fn exit_code(&self) -> i32 {
        match *self {
            ScanOutcome::Scanned { matches: 0 } => 0,
            ScanOutcome::Scanned { .. } => 1,
            ScanOutcome::Failed { exit_code, .. } => exit_code,
        }
    }
}

impl From<&AcquireError> for ScanOutcome {
    fn from(err: &AcquireError) -> Self {
        ScanOutcome::Failed { category: err.category(), exit_code: err.exit_code() }
    }
}
