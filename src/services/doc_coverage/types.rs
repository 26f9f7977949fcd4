//! 覆盖率分析类型定义
//!
//! 定义导出点、判定结果、覆盖率报告等核心类型

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 导出声明的种类
///
/// 仅用于报告展示，后续判定逻辑不依赖该字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Function,
    Class,
    Const,
    Type,
    Interface,
    Enum,
}

impl DeclarationKind {
    /// 从声明关键字解析种类
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "function" => Some(Self::Function),
            "class" => Some(Self::Class),
            "const" => Some(Self::Const),
            "type" => Some(Self::Type),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }
}

/// 已读取的源码文件
///
/// 行序列按出现顺序保存，行号对外统一为 1 起始。
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// 文件路径
    pub path: PathBuf,
    /// 文本行
    pub lines: Vec<String>,
}

impl SourceFile {
    /// 用于报告展示的路径（统一正斜杠）
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}

/// 定位到的导出声明
#[derive(Debug, Clone, Serialize)]
pub struct ExportSite {
    /// 文件路径
    pub file: String,
    /// 行号（1 起始）
    pub line: usize,
    /// 符号名称
    pub symbol_name: String,
    /// 声明种类
    pub kind: DeclarationKind,
}

/// 单个导出点的文档判定结果
#[derive(Debug, Clone)]
pub struct DocVerdict {
    /// 对应的导出点
    pub site: ExportSite,
    /// 是否带有紧邻的文档注释
    pub documented: bool,
}

/// 覆盖率报告
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// 导出项总数
    pub total_items: usize,
    /// 带文档的导出项数
    pub documented_items: usize,
    /// 覆盖率百分比（保留两位小数；无导出项时不存在）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    /// 未带文档的导出点（按发现顺序）
    pub undocumented: Vec<ExportSite>,
    /// 生成时间
    pub generated_at: String,
}

/// 覆盖率分析配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// 参与扫描的文件扩展名
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// 忽略的目录/文件模式
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// 最大文件大小（字节，默认1MB）
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// 向上回溯查找文档注释的最大行数
    #[serde(default = "default_lookback_limit")]
    pub lookback_limit: usize,
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "out".to_string(),
        ".next".to_string(),
        ".cache".to_string(),
        ".idea".to_string(),
        ".vscode".to_string(),
        "coverage".to_string(),
        "target".to_string(),
    ]
}

fn default_max_file_size() -> u64 {
    1024 * 1024 // 1MB
}

fn default_lookback_limit() -> usize {
    9
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_patterns: default_ignore_patterns(),
            max_file_size: default_max_file_size(),
            lookback_limit: default_lookback_limit(),
        }
    }
}
