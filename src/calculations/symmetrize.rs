//! # symmetrize 计算
//!
//! 对应 `tbmodels symmetrize`：用给定的对称操作对称化紧束缚模型。
//!
//! ## 命令行格式
//! ```text
//! symmetrize -i model.hdf5 -s symmetries.hdf5 -o <output>
//! ```
//!
//! ## 依赖关系
//! - 使用 `parsers/model.rs` 读取输出模型

use super::{CalcInfo, CalcOptions, Calculation, StagedFile, MODEL_FILENAME};
use crate::error::{Result, TbCalcError};
use crate::models::ModelFile;
use crate::parsers;

use std::path::{Path, PathBuf};

/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "model_sym.hdf5";

/// 工作目录中的对称操作文件名
pub const SYMMETRIES_FILENAME: &str = "symmetries.hdf5";

/// 对称化计算
#[derive(Debug, Clone)]
pub struct SymmetrizeCalculation {
    /// 未对称化的模型文件
    pub model: PathBuf,
    /// 对称操作文件
    pub symmetries: PathBuf,
}

impl SymmetrizeCalculation {
    pub fn new(model: impl Into<PathBuf>, symmetries: impl Into<PathBuf>) -> Self {
        SymmetrizeCalculation {
            model: model.into(),
            symmetries: symmetries.into(),
        }
    }
}

impl Calculation for SymmetrizeCalculation {
    type Output = ModelFile;

    fn name(&self) -> &'static str {
        "symmetrize"
    }

    fn default_output_filename(&self) -> &'static str {
        DEFAULT_OUTPUT_FILE
    }

    fn prepare(&self, options: &CalcOptions) -> Result<CalcInfo> {
        let output = self.output_filename(options).to_string();
        if output == MODEL_FILENAME || output == SYMMETRIES_FILENAME {
            return Err(TbCalcError::InvalidArgument(format!(
                "output file '{}' would overwrite an input file",
                output
            )));
        }

        Ok(CalcInfo {
            cmdline: vec![
                "symmetrize".to_string(),
                "-i".to_string(),
                MODEL_FILENAME.to_string(),
                "-s".to_string(),
                SYMMETRIES_FILENAME.to_string(),
                "-o".to_string(),
                output.clone(),
            ],
            staged: vec![
                StagedFile::new(&self.model, MODEL_FILENAME),
                StagedFile::new(&self.symmetries, SYMMETRIES_FILENAME),
            ],
            retrieve_list: vec![output],
        })
    }

    fn parse(&self, retrieved: &Path, options: &CalcOptions) -> Result<ModelFile> {
        parsers::model::parse_model_file(&retrieved.join(self.output_filename(options)))
    }
}
