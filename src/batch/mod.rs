//! # 批量处理模块
//!
//! 批量解析计算输出文件。
//!
//! ## 功能
//! - 单文件或目录输入
//! - glob 模式收集文件
//! - 并行解析与导出
//! - 汇总成功/跳过/失败
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
