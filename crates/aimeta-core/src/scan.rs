//! 扫描主流程：获取 → 匹配 → 渲染 → 写出
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::acquire::read_target;
use crate::findings::ScanResult;
use crate::options::{OutputFormat, ScanOptions, ScanOutcome};
use crate::render::{render_error_json, render_error_text, render_json, render_text};
use crate::rules::load_catalog;

/// 扫描单个文件并把报告写入 `out`
/// - 目录在读取目标前构建（内置列表 + 可选规则文件），规则错误以 Err 返回
/// - 获取失败不会作为 Err 返回：分类后渲染为报告，扫描器不会被调用
/// - 其余 Err 仅来自写出失败（`out` 的 I/O 错误）
pub fn scan_and_write(path: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanOutcome> {
    let catalog = load_catalog(opts.rules_path.as_deref()).context("load indicator rules")?;

    let (report, outcome) = match read_target(path) {
        Ok(buf) => {
            let result = ScanResult::from_buffer(path, &buf, &catalog);
            debug!(?path, bytes = buf.len(), matches = result.matches.len(), "scan finished");
            let report = match opts.format {
                OutputFormat::Text => render_text(&result),
                OutputFormat::Json => render_json(&result)?,
            };
            (report, ScanOutcome::Scanned { matches: result.matches.len() })
        }
        Err(err) => {
            let report = match opts.format {
                OutputFormat::Text => render_error_text(&err),
                OutputFormat::Json => render_error_json(path, &err)?,
            };
            (report, ScanOutcome::from(&err))
        }
    };
    out.write_all(report.as_bytes())?;
    Ok(outcome)
}
