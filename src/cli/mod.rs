//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `dos`: 态密度计算
//! - `eigenvals`: 本征值计算
//! - `symmetrize`: 模型对称化
//! - `parse`: Wannier90 输出转换为模型文件
//! - `export`: 解析已有的 DOS 输出文件并导出
//! - `bandevaluation`: 模型能带与参考能带比较
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: dos, eigenvals, symmetrize, parse, export, bandevaluation

pub mod bandevaluation;
pub mod dos;
pub mod eigenvals;
pub mod export;
pub mod parse;
pub mod symmetrize;

use crate::calculations::{CalcOptions, DEFAULT_CODE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tbcalc - tbmodels 计算适配器
#[derive(Parser)]
#[command(name = "tbcalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Run and parse tbmodels tight-binding calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the density of states of a tight-binding model
    Dos(dos::DosArgs),

    /// Compute eigenvalues of a tight-binding model at given k-points
    Eigenvals(eigenvals::EigenvalsArgs),

    /// Symmetrize a tight-binding model
    Symmetrize(symmetrize::SymmetrizeArgs),

    /// Build a tight-binding model from Wannier90 output
    Parse(parse::ParseArgs),

    /// Parse existing DOS result files and export them to CSV
    Export(export::ExportArgs),

    /// Compare the bands of a model against reference bands
    Bandevaluation(bandevaluation::BandEvaluationArgs),
}

/// 所有计算共用的运行参数
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// tbmodels executable
    #[arg(long, env = "TBMODELS_CODE", default_value = DEFAULT_CODE)]
    pub code: String,

    /// Working directory for the calculation
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// Output file name written by tbmodels (extension selects the reader)
    #[arg(long)]
    pub output_filename: Option<String>,

    /// Only prepare the working directory and print the command line
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl RunArgs {
    /// 转换为计算配置
    pub fn to_options(&self) -> CalcOptions {
        let opts = CalcOptions::new(&self.code, &self.workdir);
        match &self.output_filename {
            Some(name) => opts.with_output_filename(name),
            None => opts,
        }
    }
}
