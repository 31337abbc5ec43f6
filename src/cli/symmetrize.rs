//! # symmetrize 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/symmetrize.rs`

use super::RunArgs;
use clap::Args;
use std::path::PathBuf;

/// symmetrize 子命令参数
#[derive(Args, Debug)]
pub struct SymmetrizeArgs {
    /// Unsymmetrized tight-binding model file
    #[arg(long)]
    pub model: PathBuf,

    /// Symmetry operations file
    #[arg(long)]
    pub symmetries: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}
