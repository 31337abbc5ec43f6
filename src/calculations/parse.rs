//! # parse 计算
//!
//! 对应 `tbmodels parse`：把 Wannier90 的输出目录转换为 tbmodels 模型文件。
//!
//! ## 命令行格式
//! ```text
//! parse -p <prefix> -o <output>
//! ```
//! Wannier90 目录中的文件按原名放入工作目录，至少需要 `<prefix>_hr.dat`。
//!
//! ## 依赖关系
//! - 使用 `parsers/model.rs` 读取输出模型

use super::{CalcInfo, CalcOptions, Calculation, StagedFile};
use crate::error::{Result, TbCalcError};
use crate::models::ModelFile;
use crate::parsers;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "model.hdf5";

/// Wannier90 默认文件前缀
pub const DEFAULT_PREFIX: &str = "wannier90";

/// Wannier90 输出解析计算
#[derive(Debug, Clone)]
pub struct ParseCalculation {
    /// Wannier90 输出目录
    pub wannier_folder: PathBuf,
    /// 文件前缀（`<prefix>_hr.dat` 等）
    pub prefix: String,
}

impl ParseCalculation {
    pub fn new(wannier_folder: impl Into<PathBuf>) -> Self {
        ParseCalculation {
            wannier_folder: wannier_folder.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// 设置文件前缀
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 目录中需要放入工作目录的文件（按文件名排序）
    fn folder_files(&self) -> Result<Vec<StagedFile>> {
        if !self.wannier_folder.is_dir() {
            return Err(TbCalcError::FileNotFound {
                path: self.wannier_folder.display().to_string(),
            });
        }

        let mut staged = Vec::new();
        for entry in WalkDir::new(&self.wannier_folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| TbCalcError::Other(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            staged.push(StagedFile::new(entry.path(), name));
        }
        Ok(staged)
    }
}

impl Calculation for ParseCalculation {
    type Output = ModelFile;

    fn name(&self) -> &'static str {
        "parse"
    }

    fn default_output_filename(&self) -> &'static str {
        DEFAULT_OUTPUT_FILE
    }

    fn prepare(&self, options: &CalcOptions) -> Result<CalcInfo> {
        if self.prefix.is_empty() {
            return Err(TbCalcError::InvalidArgument(
                "Wannier90 prefix must not be empty".to_string(),
            ));
        }

        let staged = self.folder_files()?;
        let hr_file = format!("{}_hr.dat", self.prefix);
        if !staged.iter().any(|f| f.target == hr_file) {
            return Err(TbCalcError::InvalidArgument(format!(
                "{} does not contain {}",
                self.wannier_folder.display(),
                hr_file
            )));
        }

        let output = self.output_filename(options).to_string();
        if staged.iter().any(|f| f.target == output) {
            return Err(TbCalcError::InvalidArgument(format!(
                "output file '{}' would overwrite an input file",
                output
            )));
        }

        Ok(CalcInfo {
            cmdline: vec![
                "parse".to_string(),
                "-p".to_string(),
                self.prefix.clone(),
                "-o".to_string(),
                output.clone(),
            ],
            staged,
            retrieve_list: vec![output],
        })
    }

    fn parse(&self, retrieved: &Path, options: &CalcOptions) -> Result<ModelFile> {
        parsers::model::parse_model_file(&retrieved.join(self.output_filename(options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn wannier_folder(prefix: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{}_hr.dat", prefix)), b"hr").unwrap();
        fs::write(dir.path().join(format!("{}.win", prefix)), b"win").unwrap();
        fs::write(dir.path().join(format!("{}_centres.xyz", prefix)), b"xyz").unwrap();
        fs::create_dir(dir.path().join("scratch")).unwrap();
        dir
    }

    #[test]
    fn test_prepare_stages_folder_files() {
        let dir = wannier_folder("wannier90");
        let calc = ParseCalculation::new(dir.path());
        let info = calc.prepare(&CalcOptions::default()).unwrap();

        assert_eq!(info.cmdline, vec!["parse", "-p", "wannier90", "-o", "model.hdf5"]);
        let targets: Vec<&str> = info.staged.iter().map(|f| f.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["wannier90.win", "wannier90_centres.xyz", "wannier90_hr.dat"]
        );
        assert_eq!(info.retrieve_list, vec!["model.hdf5".to_string()]);
    }

    #[test]
    fn test_prepare_custom_prefix_and_output() {
        let dir = wannier_folder("bi");
        let calc = ParseCalculation::new(dir.path()).with_prefix("bi");
        let opts = CalcOptions::default().with_output_filename("bi_model.hdf5");
        let info = calc.prepare(&opts).unwrap();
        assert_eq!(info.cmdline, vec!["parse", "-p", "bi", "-o", "bi_model.hdf5"]);
    }

    #[test]
    fn test_prepare_requires_hr_file() {
        let dir = wannier_folder("bi");
        let err = ParseCalculation::new(dir.path()).prepare(&CalcOptions::default());
        assert!(matches!(err, Err(TbCalcError::InvalidArgument(_))));
    }

    #[test]
    fn test_prepare_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let calc = ParseCalculation::new(dir.path().join("bi_wannier_output"));
        assert!(matches!(
            calc.prepare(&CalcOptions::default()),
            Err(TbCalcError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_prepare_rejects_output_collision() {
        let dir = wannier_folder("wannier90");
        let opts = CalcOptions::default().with_output_filename("wannier90.win");
        assert!(matches!(
            ParseCalculation::new(dir.path()).prepare(&opts),
            Err(TbCalcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_returns_model_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.hdf5"), b"tb model").unwrap();

        let calc = ParseCalculation::new(dir.path());
        let model = calc.parse(dir.path(), &CalcOptions::default()).unwrap();
        assert_eq!(model.size_bytes, 8);
    }
}
