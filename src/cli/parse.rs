//! # parse 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use super::RunArgs;
use crate::calculations::parse::DEFAULT_PREFIX;
use clap::Args;
use std::path::PathBuf;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Wannier90 output folder
    #[arg(long)]
    pub wannier_folder: PathBuf,

    /// Wannier90 file prefix (reads <prefix>_hr.dat)
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    #[command(flatten)]
    pub run: RunArgs,
}
