//! # export 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// DOS result file or directory of result files
    pub input: PathBuf,

    /// File name pattern(s) in directory mode (comma-separated)
    #[arg(long, default_value = "dos.hdf5,dos.h5,dos.npz,*.dos.npz")]
    pub pattern: String,

    /// Search directories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = all CPUs)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing CSV files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
