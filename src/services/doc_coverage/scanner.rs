//! 目录扫描器
//!
//! 递归枚举源码目录，按扩展名筛选出待分析的文件

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::types::{CoverageConfig, SourceFile};

/// 目录扫描器
pub struct DirectoryScanner {
    config: CoverageConfig,
    /// 编译后的忽略模式（glob patterns）
    ignore_patterns: Vec<glob::Pattern>,
}

impl DirectoryScanner {
    /// 创建新的目录扫描器
    pub fn new(config: CoverageConfig) -> Self {
        let ignore_patterns = config
            .ignore_patterns
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Invalid ignore pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();

        Self {
            config,
            ignore_patterns,
        }
    }

    /// 扫描目录，返回按路径排序的文件列表
    ///
    /// 排序保证同一棵目录树的多次扫描产生相同的报告。
    pub fn scan(&self, root_path: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root_path).into_iter().filter_entry(|e| {
            // 根目录本身不参与忽略判定
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !self.should_ignore(e.path(), &name)
        }) {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.is_supported_file(entry.path()) {
                continue;
            }

            // 跳过过大的文件
            let metadata = entry.metadata().map_err(ScanError::Walk)?;
            if metadata.len() > self.config.max_file_size {
                debug!(
                    "Skipping oversized file: {} ({} bytes)",
                    entry.path().display(),
                    metadata.len()
                );
                continue;
            }

            files.push(entry.into_path());
        }

        files.sort();
        Ok(files)
    }

    /// 读取源码文件为文本行序列
    pub fn read_source(&self, path: &Path) -> Result<SourceFile, ScanError> {
        let bytes =
            fs::read(path).map_err(|e| ScanError::IoError(path.to_path_buf(), e))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| ScanError::Encoding(path.to_path_buf()))?;

        Ok(SourceFile {
            path: path.to_path_buf(),
            lines: content.lines().map(|l| l.to_string()).collect(),
        })
    }

    /// 检查是否应该忽略该路径
    fn should_ignore(&self, path: &Path, name: &str) -> bool {
        // 忽略隐藏文件/目录（以 . 开头）
        if name.starts_with('.') {
            return true;
        }

        // 检查是否匹配忽略模式
        for pattern in &self.ignore_patterns {
            // 检查名称匹配
            if pattern.matches(name) {
                return true;
            }

            // 检查路径匹配
            if let Some(path_str) = path.to_str() {
                if pattern.matches(path_str) {
                    return true;
                }
            }
        }

        false
    }

    /// 检查是否是支持的文件类型
    fn is_supported_file(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();
            self.config.extensions.contains(&ext_str)
        } else {
            false
        }
    }
}

/// 扫描错误类型
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("路径不存在: {0}")]
    PathNotFound(PathBuf),

    #[error("路径不是目录: {0}")]
    NotADirectory(PathBuf),

    #[error("遍历目录失败: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO错误 ({0}): {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("文件不是有效的 UTF-8 文本: {0}")]
    Encoding(PathBuf),
}
