//! 文档注释分类器
//!
//! 从导出声明所在行向上回溯，判断其是否带有紧邻的文档注释。
//! 回溯窗口是绝对的：空行与装饰器行同样消耗回溯额度。

/// 回溯扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 正在向上查找
    Scanning,
    /// 正在跳过装饰器链
    SkippingDecorators,
    /// 已得出判定
    Done(bool),
}

/// 单行状态转移
///
/// 注释判定优先于装饰器判定：一行若同时以 `@` 开头、以 `*/` 结尾，
/// 按文档注释处理。
fn step(state: ScanState, line: &str) -> ScanState {
    let trimmed = line.trim();

    // 空行不打断查找
    if trimmed.is_empty() {
        return state;
    }

    if trimmed.ends_with("*/") || trimmed.starts_with("///") {
        return ScanState::Done(true);
    }

    // 装饰器对查找透明，继续向上
    if trimmed.starts_with('@') {
        return ScanState::SkippingDecorators;
    }

    // 其他代码行打断查找链
    ScanState::Done(false)
}

/// 判定位于 `site_line`（1 起始）的导出声明是否带文档注释
///
/// 自声明上一行起至多检查 `lookback_limit` 行，越过文件顶部即止。
/// 额度耗尽仍未命中注释时判定为未带文档。
pub fn is_documented(lines: &[String], site_line: usize, lookback_limit: usize) -> bool {
    let idx = site_line - 1;
    let lower = idx.saturating_sub(lookback_limit);

    let mut state = ScanState::Scanning;
    for j in (lower..idx).rev() {
        state = step(state, &lines[j]);
        if let ScanState::Done(documented) = state {
            return documented;
        }
    }

    false
}
