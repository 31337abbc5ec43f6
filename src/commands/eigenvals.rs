//! # eigenvals 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/eigenvals.rs` 定义的参数
//! - 使用 `calculations/eigenvals.rs`, `export/`

use crate::calculations::runner::{self, RunOutcome};
use crate::calculations::EigenvalsCalculation;
use crate::cli::eigenvals::EigenvalsArgs;
use crate::error::Result;
use crate::export;
use crate::utils::output;

/// 执行 eigenvals 命令
pub fn execute(args: EigenvalsArgs) -> Result<()> {
    output::print_header("tbmodels Eigenvalue Calculation");
    output::print_field("Model", &args.model.display().to_string());
    output::print_field("k-points", &args.kpoints.display().to_string());

    let calc = EigenvalsCalculation::new(&args.model, &args.kpoints);
    let options = args.run.to_options();

    let bands = match runner::run(&calc, &options, args.run.dry_run)? {
        RunOutcome::Prepared(_) => return Ok(()),
        RunOutcome::Finished(info, bands) => {
            output::print_field("Retrieved", &info.retrieve_list.join(", "));
            bands
        }
    };

    output::print_separator();
    output::print_field("k-points", &bands.num_kpoints().to_string());
    output::print_field("Bands", &bands.num_bands().to_string());
    if let Some((lo, hi)) = bands.energy_window() {
        output::print_field("Energy window", &format!("{:.4} .. {:.4} eV", lo, hi));
    }

    if let Some(path) = &args.csv {
        export::bands_to_csv(&bands, path)?;
        output::print_success(&format!("CSV written to {}", path.display()));
    }
    Ok(())
}
