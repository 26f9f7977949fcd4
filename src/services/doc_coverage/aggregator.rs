//! 覆盖率聚合器
//!
//! 按发现顺序累计每个导出点的判定结果，产出最终报告。

use chrono::Utc;

use super::types::{CoverageReport, DocVerdict, ExportSite};

/// 覆盖率聚合器
///
/// 不排序、不去重：每个导出点恰好贡献一次。
#[derive(Debug, Default)]
pub struct CoverageAggregator {
    total_items: usize,
    documented_items: usize,
    undocumented: Vec<ExportSite>,
}

impl CoverageAggregator {
    /// 创建新的聚合器
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个导出点的判定结果
    pub fn record(&mut self, verdict: DocVerdict) {
        self.total_items += 1;
        if verdict.documented {
            self.documented_items += 1;
        } else {
            self.undocumented.push(verdict.site);
        }
    }

    /// 汇总为覆盖率报告
    ///
    /// 百分比保留两位小数；无导出项时不产生百分比。
    pub fn finish(self) -> CoverageReport {
        let coverage = if self.total_items > 0 {
            let pct = (self.documented_items as f64 / self.total_items as f64) * 100.0;
            Some((pct * 100.0).round() / 100.0)
        } else {
            None
        };

        CoverageReport {
            total_items: self.total_items,
            documented_items: self.documented_items,
            coverage,
            undocumented: self.undocumented,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::doc_coverage::types::DeclarationKind;

    fn site(file: &str, line: usize, name: &str) -> ExportSite {
        ExportSite {
            file: file.to_string(),
            line,
            symbol_name: name.to_string(),
            kind: DeclarationKind::Function,
        }
    }

    fn verdict(file: &str, line: usize, name: &str, documented: bool) -> DocVerdict {
        DocVerdict {
            site: site(file, line, name),
            documented,
        }
    }

    #[test]
    fn test_counters_and_percentage() {
        let mut agg = CoverageAggregator::new();
        agg.record(verdict("a.ts", 1, "a", true));
        agg.record(verdict("a.ts", 5, "b", true));
        agg.record(verdict("b.ts", 2, "c", false));
        agg.record(verdict("b.ts", 4, "d", false));
        agg.record(verdict("b.ts", 9, "e", false));

        let report = agg.finish();
        assert_eq!(report.total_items, 5);
        assert_eq!(report.documented_items, 2);
        assert_eq!(report.coverage, Some(40.0));
        assert_eq!(
            report.undocumented.len(),
            report.total_items - report.documented_items
        );
    }

    #[test]
    fn test_undocumented_preserves_discovery_order() {
        let mut agg = CoverageAggregator::new();
        agg.record(verdict("b.ts", 7, "later", false));
        agg.record(verdict("b.ts", 9, "latest", false));
        agg.record(verdict("c.ts", 1, "other", false));

        let report = agg.finish();
        let names: Vec<_> = report
            .undocumented
            .iter()
            .map(|s| s.symbol_name.as_str())
            .collect();
        assert_eq!(names, vec!["later", "latest", "other"]);
    }

    #[test]
    fn test_empty_corpus_has_no_percentage() {
        let report = CoverageAggregator::new().finish();
        assert_eq!(report.total_items, 0);
        assert_eq!(report.documented_items, 0);
        assert!(report.coverage.is_none());
        assert!(report.undocumented.is_empty());
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let mut agg = CoverageAggregator::new();
        agg.record(verdict("a.ts", 1, "a", true));
        agg.record(verdict("a.ts", 2, "b", false));
        agg.record(verdict("a.ts", 3, "c", false));

        // 1/3 = 33.333... → 33.33
        let report = agg.finish();
        assert_eq!(report.coverage, Some(33.33));
    }
}
