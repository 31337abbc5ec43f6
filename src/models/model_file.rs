//! # 模型文件记录
//!
//! parse / symmetrize 计算输出的紧束缚模型文件。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 单文件记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFile {
    /// 文件路径
    pub path: PathBuf,
    /// 文件大小 (bytes)
    pub size_bytes: u64,
}
