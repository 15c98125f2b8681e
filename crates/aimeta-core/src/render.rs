//! 报告渲染：把扫描结果 / 获取错误转为可读文本或 JSON
//!
//! 渲染是全函数：指示符按有损 UTF-8 解码，非法字节替换为 U+FFFD。
use std::fmt::Write as _;
use std::path::Path;

use crate::error::AcquireError;
use crate::findings::ScanResult;
use crate::types::{ErrorReportJson, ScanReportJson};

/// 文本报告
pub fn render_text(result: &ScanResult<'_>) -> String {
    let path = result.path.display();
    if !result.found() {
        return format!("No AI metadata indicators found in: {path}.\n");
    }
    let mut out = format!("AI metadata indicators were FOUND in: {path}\n\nIndicators Found in Metadata:\n");
    for (i, ind) in result.matches.iter().enumerate() {
        // 写入 String 不会失败
        let _ = writeln!(out, " {:>2}. {}", i + 1, ind.display_text());
    }
    out
}

/// 获取失败的单行文本
pub fn render_error_text(err: &AcquireError) -> String {
    format!("{err}\n")
}

pub fn render_json(result: &ScanResult<'_>) -> serde_json::Result<String> {
    let path = result.path.to_string_lossy();
    let item = ScanReportJson {
        path: &path,
        found: result.found(),
        indicators: result.matches.iter().map(|i| i.display_text().into_owned()).collect(),
    };
    serde_json::to_string(&item).map(|s| s + "\n")
}

pub fn render_error_json(path: &Path, err: &AcquireError) -> serde_json::Result<String> {
    let path = path.to_string_lossy();
    let item = ErrorReportJson { path: &path, error: err.category(), message: err.detail() };
    serde_json::to_string(&item).map(|s| s + "\n")
}
