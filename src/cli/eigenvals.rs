//! # eigenvals 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/eigenvals.rs`

use super::RunArgs;
use clap::Args;
use std::path::PathBuf;

/// eigenvals 子命令参数
#[derive(Args, Debug)]
pub struct EigenvalsArgs {
    /// Tight-binding model file
    #[arg(long)]
    pub model: PathBuf,

    /// k-points file (a bands file also works)
    #[arg(long)]
    pub kpoints: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,

    /// Export the bands to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
