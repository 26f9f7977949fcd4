//! 服务层模块

pub mod doc_coverage;

pub use doc_coverage::CoverageAnalyzer;
