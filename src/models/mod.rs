//! # 数据模型模块
//!
//! 定义计算输入参数和解析结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `calculations/`, `parsers/` 和 `commands/` 使用
//! - 子模块: dos, kpoints, bands, model_file

pub mod bands;
pub mod dos;
pub mod kpoints;
pub mod model_file;

pub use bands::BandsData;
pub use dos::{DosParameters, DosResult};
pub use kpoints::KpointsInput;
pub use model_file::ModelFile;
