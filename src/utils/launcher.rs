//! # 外部程序启动工具
//!
//! 准备工作目录、启动外部程序并检查输出文件。
//!
//! ## 依赖关系
//! - 被 `calculations/runner.rs`, `workflows/` 使用
//! - 使用 `utils/progress.rs` 显示运行状态

use crate::calculations::StagedFile;
use crate::error::{Result, TbCalcError};
use crate::utils::progress;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

/// 创建工作目录并复制输入文件
pub fn stage_inputs(workdir: &Path, staged: &[StagedFile]) -> Result<()> {
    fs::create_dir_all(workdir).map_err(|e| TbCalcError::FileWriteError {
        path: workdir.display().to_string(),
        source: e,
    })?;

    for file in staged {
        if !file.source.is_file() {
            return Err(TbCalcError::FileNotFound {
                path: file.source.display().to_string(),
            });
        }
        let dest = workdir.join(&file.target);
        // 源文件已在目标位置时不复制，fs::copy 会先截断目标文件
        if is_same_file(&file.source, &dest) {
            continue;
        }
        fs::copy(&file.source, &dest).map_err(|e| TbCalcError::FileWriteError {
            path: dest.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

/// 两个路径是否指向同一个已存在的文件
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 拼接完整命令行（用于显示）
pub fn format_cmdline(code: &str, args: &[String]) -> String {
    std::iter::once(code)
        .chain(args.iter().map(|s| s.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 在工作目录中运行外部程序，非零退出视为失败
pub fn run_code(code: &str, args: &[String], workdir: &Path) -> Result<Output> {
    let spinner = progress::create_spinner(&format!("Running {}", format_cmdline(code, args)));

    let result = Command::new(code).args(args).current_dir(workdir).output();
    spinner.finish_and_clear();

    let out = result.map_err(|e| match e.kind() {
        ErrorKind::NotFound => TbCalcError::CommandNotFound {
            command: code.to_string(),
        },
        _ => TbCalcError::CommandFailed {
            command: format_cmdline(code, args),
            stderr: e.to_string(),
        },
    })?;

    if !out.status.success() {
        return Err(TbCalcError::CommandFailed {
            command: format_cmdline(code, args),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(out)
}

/// 检查取回列表中的文件是否全部存在
pub fn check_retrieved(workdir: &Path, retrieve_list: &[String]) -> Result<()> {
    match retrieve_list
        .iter()
        .map(|name| workdir.join(name))
        .find(|path| !path.is_file())
    {
        Some(missing) => Err(TbCalcError::missing_output(&missing)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cmdline() {
        let args = vec!["dos".to_string(), "-k".to_string(), "4".to_string()];
        assert_eq!(format_cmdline("tbmodels", &args), "tbmodels dos -k 4");
    }

    #[test]
    fn test_stage_inputs_copies_files() {
        let src = tempfile::tempdir().unwrap();
        let model = src.path().join("InSb.hdf5");
        fs::write(&model, b"model").unwrap();

        let work = src.path().join("work");
        stage_inputs(&work, &[StagedFile::new(&model, "model.hdf5")]).unwrap();
        assert_eq!(fs::read(work.join("model.hdf5")).unwrap(), b"model");
    }

    #[test]
    fn test_stage_inputs_in_place_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.hdf5");
        fs::write(&model, b"precious model data").unwrap();

        stage_inputs(dir.path(), &[StagedFile::new(&model, "model.hdf5")]).unwrap();
        assert_eq!(fs::read(&model).unwrap(), b"precious model data");

        // 经由相对路径成分指向同一文件
        let indirect = dir.path().join("sub").join("..").join("model.hdf5");
        fs::create_dir(dir.path().join("sub")).unwrap();
        stage_inputs(dir.path(), &[StagedFile::new(&indirect, "model.hdf5")]).unwrap();
        assert_eq!(fs::read(&model).unwrap(), b"precious model data");
    }

    #[test]
    fn test_stage_inputs_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = stage_inputs(
            dir.path(),
            &[StagedFile::new(dir.path().join("nope.hdf5"), "model.hdf5")],
        )
        .unwrap_err();
        assert!(matches!(err, TbCalcError::FileNotFound { .. }));
    }

    #[test]
    fn test_check_retrieved() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dos.hdf5"), b"").unwrap();

        assert!(check_retrieved(dir.path(), &["dos.hdf5".to_string()]).is_ok());
        let err = check_retrieved(dir.path(), &["eigenvals.hdf5".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), Some(300));
    }

    #[test]
    fn test_run_code_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_code("tbcalc-no-such-binary", &[], dir.path()).unwrap_err();
        assert!(matches!(err, TbCalcError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_code_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()];
        match run_code("sh", &args, dir.path()).unwrap_err() {
            TbCalcError::CommandFailed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_code_uses_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec!["-c".to_string(), "echo done > marker".to_string()];
        let out = run_code("sh", &args, dir.path()).unwrap();
        assert!(out.status.success());
        assert!(dir.path().join("marker").is_file());
    }
}
