//! # 工具函数模块
//!
//! 提供美化输出、进度显示和外部程序启动等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `calculations/`, `workflows/` 使用
//! - 子模块: output, progress, launcher

pub mod launcher;
pub mod output;
pub mod progress;
