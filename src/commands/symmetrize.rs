//! # symmetrize 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/symmetrize.rs` 定义的参数
//! - 使用 `calculations/symmetrize.rs`

use crate::calculations::runner::{self, RunOutcome};
use crate::calculations::SymmetrizeCalculation;
use crate::cli::symmetrize::SymmetrizeArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 symmetrize 命令
pub fn execute(args: SymmetrizeArgs) -> Result<()> {
    output::print_header("tbmodels Symmetrization");
    output::print_field("Model", &args.model.display().to_string());
    output::print_field("Symmetries", &args.symmetries.display().to_string());

    let calc = SymmetrizeCalculation::new(&args.model, &args.symmetries);
    let options = args.run.to_options();

    if let RunOutcome::Finished(_, model) = runner::run(&calc, &options, args.run.dry_run)? {
        output::print_done(&format!(
            "Symmetrized model: {} ({} bytes)",
            model.path.display(),
            model.size_bytes
        ));
    }
    Ok(())
}
