//! # 能带评估工作流
//!
//! 比较紧束缚模型的能带与参考能带：
//! 1. `eigenvals`：以参考能带的 k 点计算模型能带
//! 2. `difference`：调用能带比较程序计算两套能带的差异
//! 3. 汇总差异值
//!
//! 每一步在根目录下各自的子目录中运行。
//!
//! ## 依赖关系
//! - 使用 `calculations/eigenvals.rs`, `calculations/runner.rs`
//! - 使用 `utils/launcher.rs` 启动能带比较程序

use crate::calculations::runner::{self, RunOutcome};
use crate::calculations::{CalcOptions, Calculation, EigenvalsCalculation};
use crate::error::{Result, TbCalcError};
use crate::models::BandsData;
use crate::utils::{launcher, output};

use regex::Regex;
use std::path::PathBuf;

/// 默认的能带比较程序
pub const DEFAULT_BANDS_CODE: &str = "bands-inspect";

/// 能带评估工作流
#[derive(Debug, Clone)]
pub struct BandEvaluation {
    /// 紧束缚模型
    pub model: PathBuf,
    /// 参考能带文件
    pub reference_bands: PathBuf,
    /// tbmodels 可执行文件
    pub tbmodels_code: String,
    /// 能带比较可执行文件
    pub bands_code: String,
    /// 工作流根目录
    pub workdir: PathBuf,
    /// eigenvals 输出文件名（None 使用默认值）
    pub output_filename: Option<String>,
}

/// 工作流结果
#[derive(Debug, Clone)]
pub struct BandEvaluationResult {
    /// 模型计算得到的能带
    pub calculated_bands: BandsData,
    /// 与参考能带的差异
    pub difference: f64,
}

impl BandEvaluation {
    fn eigenvals_options(&self) -> CalcOptions {
        let opts = CalcOptions::new(&self.tbmodels_code, self.workdir.join("eigenvals"));
        match &self.output_filename {
            Some(name) => opts.with_output_filename(name),
            None => opts,
        }
    }

    /// 运行整个工作流
    pub fn run(&self) -> Result<BandEvaluationResult> {
        output::print_info("Running tbmodels eigenvals calculation...");
        let calc = EigenvalsCalculation::new(&self.model, &self.reference_bands);
        let opts = self.eigenvals_options();
        let calculated_bands = match runner::run(&calc, &opts, false)? {
            RunOutcome::Finished(_, bands) => bands,
            RunOutcome::Prepared(_) => {
                return Err(TbCalcError::Other(
                    "eigenvals step did not run".to_string(),
                ))
            }
        };
        let calculated_file = opts.workdir.join(calc.output_filename(&opts));

        output::print_info("Running band difference calculation...");
        let difference = self.calculate_difference(&calculated_file)?;

        Ok(BandEvaluationResult {
            calculated_bands,
            difference,
        })
    }

    /// 调用比较程序：`<bands_code> difference <reference> <calculated>`
    fn calculate_difference(&self, calculated: &std::path::Path) -> Result<f64> {
        let workdir = self.workdir.join("difference");
        launcher::stage_inputs(&workdir, &[])?;

        let args = vec![
            "difference".to_string(),
            absolute(&self.reference_bands).display().to_string(),
            absolute(calculated).display().to_string(),
        ];
        let out = launcher::run_code(&self.bands_code, &args, &workdir)?;
        parse_difference(&String::from_utf8_lossy(&out.stdout))
    }
}

fn absolute(path: &std::path::Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// 从比较程序的标准输出中读取差异值（最后一个浮点数）
pub fn parse_difference(stdout: &str) -> Result<f64> {
    let re = Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?")
        .map_err(|e| TbCalcError::Other(e.to_string()))?;

    re.find_iter(stdout)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .last()
        .ok_or_else(|| TbCalcError::ParseError {
            format: "difference output".to_string(),
            path: "<stdout>".to_string(),
            reason: format!("no number found in '{}'", stdout.trim()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difference_plain() {
        assert_eq!(parse_difference("0.0123\n").unwrap(), 0.0123);
    }

    #[test]
    fn test_parse_difference_with_label() {
        assert_eq!(parse_difference("difference: 1.5e-3\n").unwrap(), 1.5e-3);
    }

    #[test]
    fn test_parse_difference_empty() {
        assert!(matches!(
            parse_difference("nothing here"),
            Err(TbCalcError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_tbmodels_aborts_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.hdf5");
        let reference = dir.path().join("bands.hdf5");
        std::fs::write(&model, b"m").unwrap();
        std::fs::write(&reference, b"b").unwrap();

        let wf = BandEvaluation {
            model,
            reference_bands: reference,
            tbmodels_code: "tbcalc-no-such-binary".to_string(),
            bands_code: DEFAULT_BANDS_CODE.to_string(),
            workdir: dir.path().join("wf"),
            output_filename: None,
        };
        assert!(matches!(
            wf.run(),
            Err(TbCalcError::CommandNotFound { .. })
        ));
        assert!(!dir.path().join("wf").join("difference").exists());
    }
}
