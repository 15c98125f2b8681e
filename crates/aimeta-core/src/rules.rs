//! 规则文件加载（TOML）：在进程启动时向目录追加额外指示符
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::catalog::{Catalog, Indicator};
use crate::error::RulesError;

/// 单条指示符（text 或 hex 二选一）
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndicatorEntry {
    #[serde(default)]
    text: Option<String>,
    /// 原始字节，十六进制表示，忽略空白
    #[serde(default)]
    hex: Option<String>,
}

/// 顶层规则文件结构
#[derive(Debug, Clone, Deserialize)]
struct RuleFile {
    #[serde(default)]
    indicators: Vec<IndicatorEntry>,
}

/// 从 TOML 文本解析额外指示符（保持文件顺序）
pub(crate) fn parse_indicators(txt: &str, path: &Path) -> Result<Vec<Indicator>, RulesError> {
    let parsed: RuleFile = toml::from_str(txt)
        .map_err(|source| RulesError::Parse { path: path.to_path_buf(), source })?;
    let mut out = Vec::with_capacity(parsed.indicators.len());

    for (index, e) in parsed.indicators.into_iter().enumerate() {
        let bytes = match (e.text, e.hex) {
            (Some(t), None) => t.into_bytes(),
            (None, Some(h)) => {
                // 原始字节以十六进制书写，允许用空白分组
                let digits: String = h.chars().filter(|c| !c.is_whitespace()).collect();
                hex::decode(&digits).map_err(|e| RulesError::Invalid { index, reason: e.to_string() })?
            }
            (Some(_), Some(_)) => {
                return Err(RulesError::Invalid { index, reason: "both `text` and `hex` given".into() })
            }
            (None, None) => {
                return Err(RulesError::Invalid { index, reason: "missing `text` or `hex`".into() })
            }
        };
        if bytes.is_empty() {
            return Err(RulesError::Invalid { index, reason: "empty pattern".into() });
        }
        out.push(Indicator::from_vec(bytes));
    }

    Ok(out)
}

/// 构建扫描目录：内置列表 + 可选规则文件
pub fn load_catalog(rules_path: Option<&Path>) -> Result<Catalog, RulesError> {
    let catalog = Catalog::builtin();
    let path = match rules_path {
        Some(p) => p,
        None => return Ok(catalog),
    };
    let txt = std::fs::read_to_string(path)
        .map_err(|source| RulesError::Read { path: path.to_path_buf(), source })?;
    let extra = parse_indicators(&txt, path)?;
    let (catalog, added) = catalog.extend_unique(extra);
    info!(?path, added, total = catalog.len(), "loaded extra indicators");
    Ok(catalog)
}
