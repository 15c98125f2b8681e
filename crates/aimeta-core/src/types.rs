//! 公共类型（对外暴露）：JSON 报告结构
use serde::Serialize;

/// 扫描成功时的 JSON 输出
#[derive(Debug, Clone, Serialize)]
pub struct ScanReportJson<'a> {
    pub path: &'a str,
    pub found: bool,
    pub indicators: Vec<String>,
}

/// 获取失败时的 JSON 输出
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReportJson<'a> {
    pub path: &'a str,
    pub error: &'static str,
    pub message: String,
}
