//! # bandevaluation 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/bandevaluation.rs` 定义的参数
//! - 使用 `workflows/bandevaluation.rs`

use crate::cli::bandevaluation::BandEvaluationArgs;
use crate::error::Result;
use crate::utils::output;
use crate::workflows::BandEvaluation;

/// 执行 bandevaluation 命令
pub fn execute(args: BandEvaluationArgs) -> Result<()> {
    output::print_header("Band Evaluation Workflow");
    output::print_field("Model", &args.model.display().to_string());
    output::print_field("Reference", &args.reference_bands.display().to_string());

    let workflow = BandEvaluation {
        model: args.model,
        reference_bands: args.reference_bands,
        tbmodels_code: args.tbmodels_code,
        bands_code: args.bands_code,
        workdir: args.workdir,
        output_filename: args.output_filename,
    };

    let result = workflow.run()?;

    output::print_separator();
    output::print_field(
        "Calculated bands",
        &format!(
            "{} k-points x {} bands",
            result.calculated_bands.num_kpoints(),
            result.calculated_bands.num_bands()
        ),
    );
    output::print_done(&format!("Band difference: {}", result.difference));
    Ok(())
}
