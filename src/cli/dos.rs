//! # dos 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dos.rs`

use super::RunArgs;
use crate::models::DosParameters;
use clap::Args;
use std::path::PathBuf;

/// dos 子命令参数
#[derive(Args, Debug)]
pub struct DosArgs {
    /// Tight-binding model file
    #[arg(long)]
    pub model: PathBuf,

    /// Parameter file (TOML); command-line values take precedence
    #[arg(long)]
    pub parameters: Option<PathBuf>,

    /// k-point mesh
    #[arg(long, num_args = 3, value_names = ["NX", "NY", "NZ"])]
    pub kmesh: Option<Vec<u32>>,

    // ─────────────────────────────────────────────────────────────
    // DOS 参数
    // ─────────────────────────────────────────────────────────────
    /// Lower bound of the energy range (eV)
    #[arg(long, allow_hyphen_values = true)]
    pub emin: Option<f64>,

    /// Upper bound of the energy range (eV)
    #[arg(long, allow_hyphen_values = true)]
    pub emax: Option<f64>,

    /// Energy step (eV)
    #[arg(long, allow_hyphen_values = true)]
    pub de: Option<f64>,

    /// Smearing type code
    #[arg(long)]
    pub smearing_type: Option<u32>,

    /// Smearing width (eV)
    #[arg(long)]
    pub smearing_width: Option<f64>,

    #[command(flatten)]
    pub run: RunArgs,

    // ─────────────────────────────────────────────────────────────
    // 导出
    // ─────────────────────────────────────────────────────────────
    /// Export the DOS curve to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Export the DOS curve to XY
    #[arg(long)]
    pub xy: Option<PathBuf>,

    /// Plot the DOS curve (PNG, or SVG by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

impl DosArgs {
    /// 命令行给出的 DOS 参数
    pub fn cli_parameters(&self) -> DosParameters {
        DosParameters {
            energy_min: self.emin,
            energy_max: self.emax,
            energy_step: self.de,
            smearing_type: self.smearing_type,
            smearing_width: self.smearing_width,
        }
    }
}
