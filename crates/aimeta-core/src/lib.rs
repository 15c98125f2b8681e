//! AI / 内容溯源元数据指示符扫描库
//!
//! 设计要点：
//! - 纯“字节级”包含判定：不解析 JPEG/PNG/EXIF/XMP/C2PA 结构，也不校验签名。
//! - 目录（Catalog）在进程启动时确定，之后只读；结果顺序即目录顺序。
//! - 扫描器是无副作用的全函数；所有文件获取错误都在边界处分类并渲染为报告。
//! - 只报告“是否出现”，不做置信度评估（通用词可能误报）。

mod acquire;
mod catalog;
mod engine_bytes;
mod error;
mod findings;
mod options;
mod render;
mod rules;
mod scan;
mod types;

pub use acquire::read_target;
pub use catalog::{Catalog, Indicator, BUILTIN_INDICATORS};
pub use engine_bytes::scan;
pub use error::{AcquireError, RulesError};
pub use findings::ScanResult;
pub use options::{OutputFormat, ScanOptions, ScanOutcome};
pub use render::{render_error_json, render_error_text, render_json, render_text};
pub use rules::load_catalog;
pub use scan::scan_and_write;
pub use types::{ErrorReportJson, ScanReportJson};
