use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::infrastructure::{CheckerError, Result};

/// 递归列出 `root` 下的所有非目录项
///
/// 每层按文件名字典序遍历，结果顺序即报告顺序。
/// 任何一项无法读取都会中止整个遍历。
pub fn find_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CheckerError::Traversal {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source: e,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
