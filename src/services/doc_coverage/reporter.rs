//! 报告输出
//!
//! 将覆盖率报告渲染为行文本，或序列化为 JSON 文件。

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{AppError, AppResult};

use super::types::CoverageReport;

/// 渲染文本报告到任意行输出端
pub fn render_report<W: Write>(report: &CoverageReport, out: &mut W) -> io::Result<()> {
    if report.total_items == 0 {
        writeln!(out, "No exported items found.")?;
        return Ok(());
    }

    writeln!(out, "Total exported items: {}", report.total_items)?;
    writeln!(out, "Items with docstrings: {}", report.documented_items)?;
    if let Some(coverage) = report.coverage {
        writeln!(out, "Docstring coverage: {:.2}%", coverage)?;
    }

    if !report.undocumented.is_empty() {
        writeln!(out)?;
        writeln!(out, "Missing docstrings:")?;
        for site in &report.undocumented {
            writeln!(out, "{}:{} - {}", site.file, site.line, site.symbol_name)?;
        }
    }

    Ok(())
}

/// 将报告写为 JSON 文件
pub fn export_json(report: &CoverageReport, path: &Path) -> AppResult<()> {
    let content = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Report(format!("序列化报告失败: {}", e)))?;
    fs::write(path, content)
        .map_err(|e| AppError::Report(format!("写入报告文件失败: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::doc_coverage::types::{DeclarationKind, ExportSite};

    fn sample_report() -> CoverageReport {
        CoverageReport {
            total_items: 3,
            documented_items: 1,
            coverage: Some(33.33),
            undocumented: vec![
                ExportSite {
                    file: "src/a.ts".to_string(),
                    line: 4,
                    symbol_name: "foo".to_string(),
                    kind: DeclarationKind::Function,
                },
                ExportSite {
                    file: "src/b.ts".to_string(),
                    line: 11,
                    symbol_name: "Bar".to_string(),
                    kind: DeclarationKind::Class,
                },
            ],
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_render_full_report() {
        let mut buf = Vec::new();
        render_report(&sample_report(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Total exported items: 3\n\
             Items with docstrings: 1\n\
             Docstring coverage: 33.33%\n\
             \n\
             Missing docstrings:\n\
             src/a.ts:4 - foo\n\
             src/b.ts:11 - Bar\n"
        );
    }

    #[test]
    fn test_render_empty_corpus_notice() {
        let report = CoverageReport {
            total_items: 0,
            documented_items: 0,
            coverage: None,
            undocumented: Vec::new(),
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let mut buf = Vec::new();
        render_report(&report, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "No exported items found.\n");
    }

    #[test]
    fn test_render_fully_documented_omits_missing_section() {
        let report = CoverageReport {
            total_items: 2,
            documented_items: 2,
            coverage: Some(100.0),
            undocumented: Vec::new(),
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let mut buf = Vec::new();
        render_report(&report, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Total exported items: 2\n\
             Items with docstrings: 2\n\
             Docstring coverage: 100.00%\n"
        );
    }

    #[test]
    fn test_export_json_shape() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        export_json(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["total_items"], 3);
        assert_eq!(value["documented_items"], 1);
        assert_eq!(value["undocumented"][0]["symbol_name"], "foo");
        assert_eq!(value["undocumented"][1]["kind"], "class");
    }
}
