//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `calculations/`, `parsers/`, `export/`, `utils/`
//! - 子模块: dos, eigenvals, symmetrize, parse, export, bandevaluation

pub mod bandevaluation;
pub mod dos;
pub mod eigenvals;
pub mod export;
pub mod parse;
pub mod symmetrize;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::DosResult;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Dos(args) => dos::execute(args),
        Commands::Eigenvals(args) => eigenvals::execute(args),
        Commands::Symmetrize(args) => symmetrize::execute(args),
        Commands::Parse(args) => parse::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Bandevaluation(args) => bandevaluation::execute(args),
    }
}

/// DOS 摘要表格行
#[derive(Debug, Clone, Tabled)]
struct DosSummaryRow {
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Energy range (eV)")]
    energy_range: String,
    #[tabled(rename = "Peak DOS (states/eV)")]
    peak: String,
    #[tabled(rename = "Integrated DOS")]
    integrated: String,
}

/// 打印 DOS 摘要
pub(crate) fn print_dos_summary(result: &DosResult) {
    let row = DosSummaryRow {
        points: result.len(),
        energy_range: result
            .energy_range()
            .map(|(lo, hi)| format!("{:.3} .. {:.3}", lo, hi))
            .unwrap_or_else(|| "-".to_string()),
        peak: result
            .peak()
            .map(|(e, d)| format!("{:.4} @ {:.3} eV", d, e))
            .unwrap_or_else(|| "-".to_string()),
        integrated: format!("{:.4}", result.integrated()),
    };

    output::print_separator();
    println!("{}", Table::new(vec![row]));
}
