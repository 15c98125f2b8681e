//! 目标文件获取：存在性检查 + 整读为单个字节缓冲
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::error::AcquireError;

/// 读取整个文件到内存（不分块、不流式）
/// - 读取前先判定路径是否为已存在的常规文件，否则返回 NotFound
/// - 打开/读取失败按 io 错误分类，不重试
pub fn read_target(path: &Path) -> Result<Vec<u8>, AcquireError> {
    if !path.is_file() {
        info!(?path, "target is not an existing file");
        return Err(AcquireError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| classify_io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| classify_io(path, e))?;
    debug!(?path, bytes = buf.len(), "target read");
    Ok(buf)
}

/// io 错误分类：权限 → PermissionDenied；带系统错误码 → Io；其余 → Unexpected
/// 注意：读取阶段出现的 NotFound（例如竞态删除）归为 Io，而非 NotFound
pub(crate) fn classify_io(path: &Path, e: io::Error) -> AcquireError {
    let err = if e.kind() == io::ErrorKind::PermissionDenied {
        AcquireError::PermissionDenied { path: path.to_path_buf(), source: e }
    } else if e.raw_os_error().is_some() {
        AcquireError::Io(e)
    } else {
        AcquireError::Unexpected(e.to_string())
    };
    info!(?path, category = err.category(), "failed to read target");
    err
}
