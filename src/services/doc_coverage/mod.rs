//! 导出文档覆盖率分析模块
//!
//! 静态扫描源码树，定位对外导出的声明，判断其是否带有紧邻的
//! 文档注释，并汇总覆盖率指标与缺失位置。
//!
//! # 管线
//!
//! 文件筛选 → 导出定位 → 文档分类 → 覆盖率聚合 → 报告输出，
//! 数据严格单向流动，各阶段只通过显式传参通信。
//!
//! # 使用示例
//!
//! ```ignore
//! use doccheck_rs::services::doc_coverage::{CoverageAnalyzer, render_report};
//! use doccheck_rs::services::doc_coverage::types::CoverageConfig;
//!
//! let analyzer = CoverageAnalyzer::new("src", CoverageConfig::default());
//! let report = analyzer.analyze()?;
//! render_report(&report, &mut std::io::stdout().lock())?;
//! ```

mod aggregator;
mod classifier;
mod locator;
mod reporter;
mod scanner;
pub mod types;

pub use reporter::{export_json, render_report};
pub use scanner::{DirectoryScanner, ScanError};
pub use types::CoverageReport;

use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use aggregator::CoverageAggregator;
use types::{CoverageConfig, DocVerdict};

/// 覆盖率分析器
pub struct CoverageAnalyzer {
    root: PathBuf,
    config: CoverageConfig,
}

impl CoverageAnalyzer {
    /// 创建新的覆盖率分析器
    pub fn new(root: impl Into<PathBuf>, config: CoverageConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// 执行完整分析管线，产出覆盖率报告
    ///
    /// 逐个文件读取、扫描、分类，单个文件分析完毕后即释放其文本；
    /// 任一文件不可读或非 UTF-8 文本时整次分析失败。
    pub fn analyze(&self) -> AppResult<CoverageReport> {
        let scanner = DirectoryScanner::new(self.config.clone());

        info!("Starting coverage scan: {}", self.root.display());
        let files = scanner
            .scan(&self.root)
            .map_err(|e| AppError::Analyzer(e.to_string()))?;
        info!("Collected {} source files", files.len());

        let mut aggregator = CoverageAggregator::new();

        for path in &files {
            let source = scanner
                .read_source(path)
                .map_err(|e| AppError::Analyzer(e.to_string()))?;

            let sites = locator::locate_exports(&source);
            debug!("{}: {} export sites", source.display_path(), sites.len());

            for site in sites {
                let documented =
                    classifier::is_documented(&source.lines, site.line, self.config.lookback_limit);
                aggregator.record(DocVerdict { site, documented });
            }
        }

        let report = aggregator.finish();
        info!(
            "Scan completed: {} exported items, {} documented",
            report.total_items, report.documented_items
        );

        Ok(report)
    }
}
