//! # bandevaluation 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bandevaluation.rs`

use crate::calculations::DEFAULT_CODE;
use crate::workflows::bandevaluation::DEFAULT_BANDS_CODE;
use clap::Args;
use std::path::PathBuf;

/// bandevaluation 子命令参数
#[derive(Args, Debug)]
pub struct BandEvaluationArgs {
    /// Tight-binding model file
    #[arg(long)]
    pub model: PathBuf,

    /// Reference bands file
    #[arg(long)]
    pub reference_bands: PathBuf,

    /// tbmodels executable
    #[arg(long, env = "TBMODELS_CODE", default_value = DEFAULT_CODE)]
    pub tbmodels_code: String,

    /// Band comparison executable
    #[arg(long, env = "BANDS_INSPECT_CODE", default_value = DEFAULT_BANDS_CODE)]
    pub bands_code: String,

    /// Root working directory of the workflow
    #[arg(long, default_value = "bandevaluation")]
    pub workdir: PathBuf,

    /// Output file name of the eigenvals step
    #[arg(long)]
    pub output_filename: Option<String>,
}
