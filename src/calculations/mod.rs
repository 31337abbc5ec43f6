//! # 计算模块
//!
//! 每种 tbmodels 子命令对应一个计算：先做参数预检，再生成命令行、
//! 需要放入工作目录的输入文件以及运行结束后必须存在的输出文件列表。
//!
//! 运行配置通过 `CalcOptions` 显式传入，不依赖任何全局注册表。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `workflows/` 使用
//! - 使用 `models/`, `parsers/`
//! - 子模块: dos, eigenvals, symmetrize, parse, runner

pub mod dos;
pub mod eigenvals;
pub mod parse;
pub mod runner;
pub mod symmetrize;

pub use dos::DosCalculation;
pub use eigenvals::EigenvalsCalculation;
pub use parse::ParseCalculation;
pub use symmetrize::SymmetrizeCalculation;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// 工作目录中的输入模型文件名
pub const MODEL_FILENAME: &str = "model.hdf5";

/// 默认的 tbmodels 可执行文件
pub const DEFAULT_CODE: &str = "tbmodels";

/// 计算运行配置
#[derive(Debug, Clone)]
pub struct CalcOptions {
    /// 外部程序路径或名称
    pub code: String,
    /// 工作目录
    pub workdir: PathBuf,
    /// 输出文件名，None 时使用计算的默认值
    pub output_filename: Option<String>,
}

impl CalcOptions {
    pub fn new(code: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        CalcOptions {
            code: code.into(),
            workdir: workdir.into(),
            output_filename: None,
        }
    }

    /// 设置输出文件名
    pub fn with_output_filename(mut self, name: impl Into<String>) -> Self {
        self.output_filename = Some(name.into());
        self
    }

    /// 实际使用的输出文件名
    pub fn output_filename_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.output_filename.as_deref().unwrap_or(default)
    }
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions::new(DEFAULT_CODE, ".")
    }
}

/// 需要复制到工作目录的输入文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// 源文件
    pub source: PathBuf,
    /// 工作目录中的目标文件名
    pub target: String,
}

impl StagedFile {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        StagedFile {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// 计算的提交信息
#[derive(Debug, Clone, PartialEq)]
pub struct CalcInfo {
    /// 命令行参数（不含可执行文件）
    pub cmdline: Vec<String>,
    /// 需要放入工作目录的文件
    pub staged: Vec<StagedFile>,
    /// 运行结束后需要取回的文件
    pub retrieve_list: Vec<String>,
}

/// 一个外部计算：预检 + 生成提交信息 + 解析输出
pub trait Calculation {
    /// 解析得到的结果类型
    type Output;

    /// 计算名称（用于日志）
    fn name(&self) -> &'static str;

    /// 默认输出文件名
    fn default_output_filename(&self) -> &'static str;

    /// 参数预检并生成提交信息
    fn prepare(&self, options: &CalcOptions) -> Result<CalcInfo>;

    /// 解析取回目录中的输出文件
    fn parse(&self, retrieved: &Path, options: &CalcOptions) -> Result<Self::Output>;

    /// 实际输出文件名
    fn output_filename<'a>(&'a self, options: &'a CalcOptions) -> &'a str {
        options.output_filename_or(self.default_output_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename_fallback() {
        let opts = CalcOptions::default();
        assert_eq!(opts.output_filename_or("dos.hdf5"), "dos.hdf5");

        let opts = opts.with_output_filename("dos.npz");
        assert_eq!(opts.output_filename_or("dos.hdf5"), "dos.npz");
    }
}
