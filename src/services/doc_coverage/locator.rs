//! 导出声明定位器
//!
//! 用单行正则定位 `export` 引入的声明，提取符号名与声明种类。
//! 声明头跨多行（符号名不在 `export` 所在行）的写法不被识别，
//! 这是启发式扫描的既定限制。

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{DeclarationKind, ExportSite, SourceFile};

static RE_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:async\s+)?(function|class|const|type|interface|enum)\s+([A-Za-z0-9_]+)")
        .unwrap()
});

/// 定位文件中的全部导出声明
///
/// 每行最多产生一个导出点，取行内第一处匹配。
pub fn locate_exports(file: &SourceFile) -> Vec<ExportSite> {
    let mut sites = Vec::new();
    let display_path = file.display_path();

    for (i, line) in file.lines.iter().enumerate() {
        if let Some(caps) = RE_EXPORT.captures(line) {
            let keyword = caps.get(1).unwrap().as_str();
            let symbol_name = caps.get(2).unwrap().as_str();
            // 关键字集合与正则的候选分支一致，解析必然成功
            let kind = DeclarationKind::from_keyword(keyword).unwrap();

            sites.push(ExportSite {
                file: display_path.clone(),
                line: i + 1,
                symbol_name: symbol_name.to_string(),
                kind,
            });
        }
    }

    sites
}
