//! # eigenvals 计算
//!
//! 对应 `tbmodels eigenvals`：在给定 k 点上计算紧束缚模型的本征值。
//!
//! ## 命令行格式
//! ```text
//! eigenvals -i model.hdf5 -k kpoints.hdf5 -o <output>
//! ```
//!
//! ## 依赖关系
//! - 使用 `parsers/eigenvals.rs` 解析输出
//! - 被 `workflows/bandevaluation.rs` 使用

use super::{CalcInfo, CalcOptions, Calculation, StagedFile, MODEL_FILENAME};
use crate::error::{Result, TbCalcError};
use crate::models::BandsData;
use crate::parsers;

use std::path::{Path, PathBuf};

/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "eigenvals.hdf5";

/// 工作目录中的 k 点文件名
pub const KPOINTS_FILENAME: &str = "kpoints.hdf5";

/// 本征值计算
#[derive(Debug, Clone)]
pub struct EigenvalsCalculation {
    /// 紧束缚模型文件
    pub model: PathBuf,
    /// k 点文件（能带数据文件也可作为 k 点来源）
    pub kpoints: PathBuf,
}

impl EigenvalsCalculation {
    pub fn new(model: impl Into<PathBuf>, kpoints: impl Into<PathBuf>) -> Self {
        EigenvalsCalculation {
            model: model.into(),
            kpoints: kpoints.into(),
        }
    }
}

impl Calculation for EigenvalsCalculation {
    type Output = BandsData;

    fn name(&self) -> &'static str {
        "eigenvals"
    }

    fn default_output_filename(&self) -> &'static str {
        DEFAULT_OUTPUT_FILE
    }

    fn prepare(&self, options: &CalcOptions) -> Result<CalcInfo> {
        if !self.kpoints.is_file() {
            return Err(TbCalcError::FileNotFound {
                path: self.kpoints.display().to_string(),
            });
        }

        let output = self.output_filename(options).to_string();
        Ok(CalcInfo {
            cmdline: vec![
                "eigenvals".to_string(),
                "-i".to_string(),
                MODEL_FILENAME.to_string(),
                "-k".to_string(),
                KPOINTS_FILENAME.to_string(),
                "-o".to_string(),
                output.clone(),
            ],
            staged: vec![
                StagedFile::new(&self.model, MODEL_FILENAME),
                StagedFile::new(&self.kpoints, KPOINTS_FILENAME),
            ],
            retrieve_list: vec![output],
        })
    }

    fn parse(&self, retrieved: &Path, options: &CalcOptions) -> Result<BandsData> {
        parsers::eigenvals::parse_eigenvals_file(&retrieved.join(self.output_filename(options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_requires_kpoints_file() {
        let calc = EigenvalsCalculation::new("model.hdf5", "/nonexistent/kpoints.hdf5");
        assert!(matches!(
            calc.prepare(&CalcOptions::default()),
            Err(TbCalcError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_prepare_cmdline() {
        let dir = tempfile::tempdir().unwrap();
        let kpoints = dir.path().join("bands.hdf5");
        std::fs::write(&kpoints, b"").unwrap();

        let calc = EigenvalsCalculation::new("model.hdf5", &kpoints);
        let opts = CalcOptions::default().with_output_filename("ev.npz");
        let info = calc.prepare(&opts).unwrap();

        assert_eq!(
            info.cmdline,
            vec!["eigenvals", "-i", "model.hdf5", "-k", "kpoints.hdf5", "-o", "ev.npz"]
        );
        assert_eq!(info.staged[1], StagedFile::new(&kpoints, KPOINTS_FILENAME));
        assert_eq!(info.retrieve_list, vec!["ev.npz".to_string()]);
    }
}
