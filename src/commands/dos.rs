//! # dos 命令实现
//!
//! ## 功能
//! - 合并参数文件和命令行参数
//! - 预检并运行 `tbmodels dos`
//! - 打印摘要，可选导出 CSV/XY/图像
//!
//! ## 依赖关系
//! - 使用 `cli/dos.rs` 定义的参数
//! - 使用 `calculations/dos.rs`, `parsers/params.rs`, `export/`

use super::print_dos_summary;
use crate::calculations::runner::{self, RunOutcome};
use crate::calculations::DosCalculation;
use crate::cli::dos::DosArgs;
use crate::error::{Result, TbCalcError};
use crate::export;
use crate::models::{DosParameters, DosResult, KpointsInput};
use crate::parsers::params;
use crate::utils::output;

/// 执行 dos 命令
pub fn execute(args: DosArgs) -> Result<()> {
    output::print_header("tbmodels DOS Calculation");

    let (parameters, kpoints) = resolve_inputs(&args)?;
    output::print_field("Model", &args.model.display().to_string());
    output::print_field(
        "k-points",
        &format!("{} ({} points)", kpoints, kpoints.num_kpoints()),
    );

    let calc = DosCalculation::new(&args.model, kpoints, parameters);
    let options = args.run.to_options();

    match runner::run(&calc, &options, args.run.dry_run)? {
        RunOutcome::Prepared(info) => {
            output::print_field("Staged files", &info.staged.len().to_string());
            Ok(())
        }
        RunOutcome::Finished(info, result) => {
            output::print_field("Retrieved", &info.retrieve_list.join(", "));
            print_dos_summary(&result);
            export_result(&args, &result)
        }
    }
}

/// 合并参数文件与命令行参数，得到最终的参数和 k 点
fn resolve_inputs(args: &DosArgs) -> Result<(DosParameters, KpointsInput)> {
    let (file_params, file_kpoints) = match &args.parameters {
        Some(path) => {
            let input = params::parse_dos_input_file(path)?;
            output::print_info(&format!("Loaded parameters from {}", path.display()));
            (input.parameters, input.kpoints)
        }
        None => (DosParameters::default(), None),
    };

    let parameters = file_params.merge(&args.cli_parameters());

    let kpoints = match &args.kmesh {
        Some(mesh) => match mesh.as_slice() {
            [nx, ny, nz] => KpointsInput::mesh(*nx, *ny, *nz),
            _ => {
                return Err(TbCalcError::InvalidMesh(format!(
                    "--kmesh needs 3 values, found {}",
                    mesh.len()
                )))
            }
        },
        None => file_kpoints.ok_or_else(|| {
            TbCalcError::InvalidMesh("no k-point mesh given (--kmesh or kmesh in parameters)".to_string())
        })?,
    };

    Ok((parameters, kpoints))
}

fn export_result(args: &DosArgs, result: &DosResult) -> Result<()> {
    let title = args
        .model
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("DOS");

    if let Some(path) = &args.csv {
        export::dos_to_csv(result, path)?;
        output::print_success(&format!("CSV written to {}", path.display()));
    }
    if let Some(path) = &args.xy {
        export::dos_to_xy(result, title, path)?;
        output::print_success(&format!("XY written to {}", path.display()));
    }
    if let Some(path) = &args.plot {
        export::plot::generate_dos_plot(result, path, title, 1200, 800)?;
        output::print_success(&format!("Plot written to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn dos_args(argv: &[&str]) -> DosArgs {
        let mut full = vec!["tbcalc", "dos", "--model", "model.hdf5"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Dos(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_requires_mesh() {
        let args = dos_args(&["--de", "0.1"]);
        assert!(matches!(
            resolve_inputs(&args),
            Err(TbCalcError::InvalidMesh(_))
        ));
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(
            &path,
            "energy_range = [-10, 10]\nenergy_step = 0.1\nkmesh = [2, 2, 2]\n",
        )
        .unwrap();

        let path_str = path.display().to_string();
        let args = dos_args(&["--parameters", path_str.as_str(), "--de", "0.05", "--kmesh", "4", "4", "4"]);
        let (params, kpoints) = resolve_inputs(&args).unwrap();

        assert_eq!(params.energy_min, Some(-10.0));
        assert_eq!(params.energy_step, Some(0.05));
        assert_eq!(kpoints.get_mesh(), Some([4, 4, 4]));
    }

    #[test]
    fn test_resolve_mesh_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "kmesh = [3, 3, 1]\n").unwrap();

        let path_str = path.display().to_string();
        let args = dos_args(&["--parameters", path_str.as_str()]);
        let (params, kpoints) = resolve_inputs(&args).unwrap();
        assert_eq!(params, DosParameters::default());
        assert_eq!(kpoints.get_mesh(), Some([3, 3, 1]));
    }
}
