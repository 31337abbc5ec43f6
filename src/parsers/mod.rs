//! # 解析器模块
//!
//! 解析 tbmodels 的输出文件和 tbcalc 的参数文件。
//!
//! ## 依赖关系
//! - 被 `calculations/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: container, dos, eigenvals, model, params

pub mod container;
pub mod dos;
pub mod eigenvals;
pub mod model;
pub mod params;
