//! # 计算执行器
//!
//! 串联一次计算的完整流程：预检 → 准备工作目录 → 启动外部程序 →
//! 检查取回文件 → 解析输出。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `workflows/` 调用
//! - 使用 `utils/launcher.rs`, `utils/output.rs`

use super::{CalcInfo, CalcOptions, Calculation};
use crate::error::Result;
use crate::utils::{launcher, output};

/// 一次计算的执行结果
#[derive(Debug)]
pub enum RunOutcome<T> {
    /// 仅生成了工作目录（dry run）
    Prepared(CalcInfo),
    /// 计算完成并解析了输出
    Finished(CalcInfo, T),
}

/// 执行一次计算
pub fn run<C: Calculation>(
    calc: &C,
    options: &CalcOptions,
    dry_run: bool,
) -> Result<RunOutcome<C::Output>> {
    let info = calc.prepare(options)?;
    launcher::stage_inputs(&options.workdir, &info.staged)?;

    let cmdline = launcher::format_cmdline(&options.code, &info.cmdline);
    if dry_run {
        output::print_info(&format!(
            "[DRY] {} prepared in {}",
            calc.name(),
            options.workdir.display()
        ));
        output::print_info(&format!("[DRY] {}", cmdline));
        return Ok(RunOutcome::Prepared(info));
    }

    output::print_info(&format!("Running {} calculation: {}", calc.name(), cmdline));
    launcher::run_code(&options.code, &info.cmdline, &options.workdir)?;
    launcher::check_retrieved(&options.workdir, &info.retrieve_list)?;

    let parsed = calc.parse(&options.workdir, options)?;
    output::print_success(&format!("{} calculation finished", calc.name()));
    Ok(RunOutcome::Finished(info, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::DosCalculation;
    use crate::error::TbCalcError;
    use crate::models::{DosParameters, KpointsInput};
    use crate::parsers::container::testing::write_npz_1d;

    #[test]
    fn test_dry_run_stages_without_launching() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("InSb.hdf5");
        std::fs::write(&model, b"model").unwrap();

        let calc = DosCalculation::new(&model, KpointsInput::mesh(4, 4, 4), DosParameters::default());
        let work = dir.path().join("dos");
        let opts = CalcOptions::new("tbcalc-no-such-binary", &work);

        match run(&calc, &opts, true).unwrap() {
            RunOutcome::Prepared(info) => {
                assert_eq!(info.cmdline[0], "dos");
                assert!(work.join("model.hdf5").is_file());
            }
            RunOutcome::Finished(..) => panic!("dry run must not launch"),
        }
    }

    #[test]
    fn test_preflight_error_leaves_no_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("dos");
        let calc = DosCalculation::new(
            dir.path().join("model.hdf5"),
            KpointsInput::List(vec![]),
            DosParameters::default(),
        );
        let err = run(&calc, &CalcOptions::new("tbmodels", &work), false).unwrap_err();
        assert!(matches!(err, TbCalcError::InvalidMesh(_)));
        assert!(!work.exists());
    }

    #[test]
    fn test_missing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model_in.hdf5");
        std::fs::write(&model, b"model").unwrap();

        let calc = DosCalculation::new(&model, KpointsInput::mesh(2, 2, 2), DosParameters::default());
        let opts = CalcOptions::new("tbcalc-no-such-binary", dir.path().join("w"));
        assert!(matches!(
            run(&calc, &opts, false),
            Err(TbCalcError::CommandNotFound { .. })
        ));
    }

    // 以 `sh` 作为外部程序：`sh dos -k ...` 执行工作目录中名为 `dos` 的脚本
    #[cfg(unix)]
    fn fake_dos_run(dir: &std::path::Path, script: &str) -> (DosCalculation, CalcOptions) {
        let model = dir.join("InSb.hdf5");
        std::fs::write(&model, b"model").unwrap();

        let work = dir.join("work");
        std::fs::create_dir_all(&work).unwrap();
        std::fs::write(work.join("dos"), script).unwrap();

        let calc = DosCalculation::new(&model, KpointsInput::mesh(4, 4, 4), DosParameters::default());
        let opts = CalcOptions::new("sh", &work).with_output_filename("dos.npz");
        (calc, opts)
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("fixture.npz");
        write_npz_1d(
            &fixture,
            &[("energy", vec![-1.0, 0.0, 1.0]), ("dos", vec![0.1, 0.2, 0.3])],
        );
        let script = format!(
            "[ \"$1 $2 $3 $4\" = \"-k 4 4 4\" ] || exit 7\n[ -f model.hdf5 ] || exit 8\ncp '{}' dos.npz\n",
            fixture.display()
        );
        let (calc, opts) = fake_dos_run(dir.path(), &script);

        match run(&calc, &opts, false).unwrap() {
            RunOutcome::Finished(info, result) => {
                assert_eq!(info.retrieve_list, vec!["dos.npz".to_string()]);
                assert_eq!(result.energy, vec![-1.0, 0.0, 1.0]);
                assert_eq!(result.dos, vec![0.1, 0.2, 0.3]);
                assert_eq!(result.energy_unit, "eV");
                assert_eq!(result.dos_unit, "states/eV");
            }
            RunOutcome::Prepared(_) => panic!("expected a finished run"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let (calc, opts) = fake_dos_run(dir.path(), "echo 'model file is corrupt' >&2\nexit 1\n");

        match run(&calc, &opts, false).unwrap_err() {
            TbCalcError::CommandFailed { command, stderr } => {
                assert!(command.starts_with("sh dos -k 4 4 4"));
                assert_eq!(stderr, "model file is corrupt");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_without_output_is_postflight_error() {
        let dir = tempfile::tempdir().unwrap();
        let (calc, opts) = fake_dos_run(dir.path(), "exit 0\n");

        let err = run(&calc, &opts, false).unwrap_err();
        assert!(matches!(err, TbCalcError::MissingOutputFile { .. }));
        assert_eq!(err.exit_code(), Some(300));
        assert_eq!(err.process_status(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_malformed_output_after_run() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("fixture.npz");
        write_npz_1d(
            &fixture,
            &[("energy", vec![0.0; 10]), ("dos", vec![0.0; 9])],
        );
        let script = format!("cp '{}' dos.npz\n", fixture.display());
        let (calc, opts) = fake_dos_run(dir.path(), &script);

        let err = run(&calc, &opts, false).unwrap_err();
        assert_eq!(err.exit_code(), Some(301));
    }

    #[test]
    fn test_dry_run_in_model_directory_keeps_model() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.hdf5");
        std::fs::write(&model, b"precious model data").unwrap();

        let calc = DosCalculation::new(&model, KpointsInput::mesh(4, 4, 4), DosParameters::default());
        let opts = CalcOptions::new("tbmodels", dir.path());
        assert!(run(&calc, &opts, true).is_ok());
        assert_eq!(std::fs::read(&model).unwrap(), b"precious model data");
    }
}
