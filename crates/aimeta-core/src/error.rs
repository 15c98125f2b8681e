//! 错误类型（获取目标文件 / 规则文件）
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 读取扫描目标时的失败分类；扫描器本身不会失败，也不会看到这些错误
#[derive(Debug, Error)]
pub enum AcquireError {
    /// 路径不存在或不是常规文件（读取前检查）
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// 文件存在但无权读取
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf, #[source] source: io::Error },
    /// 其他操作系统层面的读取失败
    #[error("IO Error: {0}")]
    Io(#[source] io::Error),
    /// 兜底：不属于上述分类的异常
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AcquireError {
    /// 稳定的分类标签（JSON 输出使用）
    pub fn category(&self) -> &'static str {
        match self {
            AcquireError::NotFound(_) => "not_found",
            AcquireError::PermissionDenied { .. } => "permission_denied",
            AcquireError::Io(_) => "io_error",
            AcquireError::Unexpected(_) => "unexpected",
        }
    }

    /// `--exit-codes` 模式下的退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            AcquireError::NotFound(_) => 2,
            AcquireError::PermissionDenied { .. } => 3,
            AcquireError::Io(_) => 4,
            AcquireError::Unexpected(_) => 5,
        }
    }

    /// 底层错误文本（不含分类前缀）
    pub fn detail(&self) -> String {
        match self {
            AcquireError::NotFound(p) => p.display().to_string(),
            AcquireError::PermissionDenied { source, .. } => source.to_string(),
            AcquireError::Io(e) => e.to_string(),
            AcquireError::Unexpected(msg) => msg.clone(),
        }
    }
}

/// 规则文件（额外指示符）加载错误
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("read rules file {}", .path.display())]
    Read { path: PathBuf, #[source] source: io::Error },
    #[error("parse rules file {}", .path.display())]
    Parse { path: PathBuf, #[source] source: toml::de::Error },
    #[error("indicator #{index}: {reason}")]
    Invalid { index: usize, reason: String },
}
