//! # parse 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `calculations/parse.rs`

use crate::calculations::runner::{self, RunOutcome};
use crate::calculations::ParseCalculation;
use crate::cli::parse::ParseArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("tbmodels Wannier90 Import");
    output::print_field("Wannier90 folder", &args.wannier_folder.display().to_string());
    output::print_field("Prefix", &args.prefix);

    let calc = ParseCalculation::new(&args.wannier_folder).with_prefix(&args.prefix);
    let options = args.run.to_options();

    if let RunOutcome::Finished(_, model) = runner::run(&calc, &options, args.run.dry_run)? {
        output::print_done(&format!(
            "Tight-binding model: {} ({} bytes)",
            model.path.display(),
            model.size_bytes
        ));
    }
    Ok(())
}
