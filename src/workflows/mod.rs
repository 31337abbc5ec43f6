//! # 工作流模块
//!
//! 把多个计算按顺序串起来。
//!
//! ## 依赖关系
//! - 被 `commands/bandevaluation.rs` 使用
//! - 使用 `calculations/`, `utils/launcher.rs`
//! - 子模块: bandevaluation

pub mod bandevaluation;

pub use bandevaluation::BandEvaluation;
