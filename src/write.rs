//! 幂等写出模块：目标路径不存在才写，存在则保持原样并如实汇报。
//! 不覆盖、不比对内容、不重试。

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// 一次写出的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 路径原先不存在，已写入渲染内容
    Created,
    /// 路径已存在（无论内容是什么），未做任何写操作
    SkippedExists,
}

/// 文件系统拒绝创建（权限、父目录缺失、磁盘满等）
#[derive(Debug, Error)]
#[error("写入文件失败: {path}")]
pub struct WriteFailed {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// 条件写出：`label` 仅用于汇报行，不影响行为。
/// 汇报使用绝对路径，成功创建打印 `<label>: <path> ... Done`，
/// 已存在则打印 `No change made. File exists: <path>`。
pub fn materialize(path: &Path, text: &str, label: &str) -> Result<Outcome, WriteFailed> {
    let shown = display_path(path);
    if path.exists() {
        println!("No change made. File exists: {}", shown.display());
        return Ok(Outcome::SkippedExists);
    }
    print!("{}: {} ... ", label, shown.display());
    let _ = io::stdout().flush();
    fs::write(path, text).map_err(|source| WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    println!("Done");
    Ok(Outcome::Created)
}

/// 展示用绝对路径；拿不到工作目录时退回原样
fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
