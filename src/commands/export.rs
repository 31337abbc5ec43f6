//! # export 命令实现
//!
//! 解析已有的 DOS 输出文件并导出为 CSV（与源文件同目录，扩展名 `.csv`）。
//!
//! ## 功能
//! - 单文件模式：打印摘要
//! - 目录模式：并行解析并汇总
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `batch/`, `parsers/dos.rs`, `export/`

use super::print_dos_summary;
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::export::ExportArgs;
use crate::error::{Result, TbCalcError};
use crate::export;
use crate::models::DosResult;
use crate::parsers;
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting DOS Results");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(TbCalcError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &ExportArgs) -> Result<()> {
    let result = parsers::dos::parse_dos_file(&args.input)?;
    print_dos_summary(&result);

    match write_csv(&args.input, &result, args.overwrite) {
        ProcessResult::Success(msg) => output::print_success(&msg),
        ProcessResult::Skipped(msg) => output::print_skip(&msg),
        ProcessResult::Failed(_, err) => return Err(TbCalcError::Other(err)),
    }
    Ok(())
}

/// 目录模式
fn execute_batch(args: &ExportArgs) -> Result<()> {
    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' in {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }
    output::print_info(&format!("Found {} result files", files.len()));

    let overwrite = args.overwrite;
    let result = BatchRunner::new(args.jobs).run(files, |file| process_file(file, overwrite))?;

    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }
    output::print_separator();
    output::print_done(&format!(
        "Processed {} files: {} parsed, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));
    Ok(())
}

/// CSV 输出路径
fn csv_path_for(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

/// 将已解析的结果写到输入文件旁的 CSV
fn write_csv(input: &Path, result: &DosResult, overwrite: bool) -> ProcessResult {
    let csv_path = csv_path_for(input);
    if csv_path.exists() && !overwrite {
        return ProcessResult::Skipped(format!("{} exists", csv_path.display()));
    }

    match export::dos_to_csv(result, &csv_path) {
        Ok(()) => ProcessResult::Success(format!(
            "{} -> {} ({} points)",
            input.display(),
            csv_path.display(),
            result.len()
        )),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 解析单个文件并导出 CSV
fn process_file(input: &Path, overwrite: bool) -> ProcessResult {
    let csv_path = csv_path_for(input);
    if csv_path.exists() && !overwrite {
        return ProcessResult::Skipped(format!("{} exists", csv_path.display()));
    }

    match parsers::dos::parse_dos_file(input) {
        Ok(result) => write_csv(input, &result, overwrite),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}
