//! Export Docstring Coverage Auditor
//!
//! 静态扫描源码树中的导出声明，统计文档注释覆盖率，
//! 并列出未带文档的符号位置。

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod services;

use services::doc_coverage::{export_json, render_report};
use services::CoverageAnalyzer;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "doccheck-rs", version, about = "导出声明的文档注释覆盖率审计工具")]
struct Cli {
    /// 待扫描的根目录（默认取配置中的 source_dir）
    path: Option<PathBuf>,

    /// 将报告额外写为 JSON 文件
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// 覆盖率阈值（百分比），未达标时以状态码 1 退出
    #[arg(long, value_name = "PCT")]
    min_coverage: Option<f64>,

    /// 将本次生效的配置写回 config.json
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doccheck_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // 加载配置并套用命令行覆盖
    let mut app_config = config::get_config();
    if let Some(path) = &cli.path {
        app_config.source_dir = path.to_string_lossy().to_string();
    }
    if let Some(threshold) = cli.min_coverage {
        app_config.min_coverage = Some(threshold);
    }

    if cli.save_config {
        config::set_config(app_config.clone())?;
        info!("Configuration saved");
    }

    info!("Starting docstring coverage audit: {}", app_config.source_dir);

    let analyzer = CoverageAnalyzer::new(&app_config.source_dir, app_config.coverage.clone());
    let report = analyzer.analyze()?;

    // 文本报告输出到标准输出
    let stdout = std::io::stdout();
    render_report(&report, &mut stdout.lock())?;

    // 可选的 JSON 导出
    if let Some(json_path) = &cli.json {
        export_json(&report, json_path)?;
        info!("Report exported: {}", json_path.display());
    }

    // 阈值检查属于调用方策略，分析器核心不感知
    if let Some(threshold) = app_config.min_coverage {
        let met = report.coverage.map(|c| c >= threshold).unwrap_or(false);
        if !met {
            warn!(
                "Coverage below threshold: {:.2}% < {:.2}%",
                report.coverage.unwrap_or(0.0),
                threshold
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
