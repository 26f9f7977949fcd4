//! 统一错误处理模块
//!
//! 定义应用级错误类型，供配置层和分析管线共用。

use thiserror::Error;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 覆盖率分析错误
    #[error("分析错误: {0}")]
    Analyzer(String),

    /// 报告输出错误
    #[error("报告错误: {0}")]
    Report(String),
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
