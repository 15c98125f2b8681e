//! 单次扫描结果
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Indicator};
use crate::engine_bytes::scan;

/// 单次扫描的结果：目标路径 + 按目录顺序排列的命中指示符
/// 不持久化，渲染后即丢弃
#[derive(Debug, Clone)]
pub struct ScanResult<'c> {
    pub path: PathBuf,
    pub matches: Vec<&'c Indicator>,
}

impl<'c> ScanResult<'c> {
    /// 对已读取的缓冲区执行扫描
    pub fn from_buffer(path: &Path, buf: &[u8], catalog: &'c Catalog) -> Self {
        Self { path: path.to_path_buf(), matches: scan(buf, catalog) }
    }

    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }
}
