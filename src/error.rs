//! # 统一错误处理模块
//!
//! 定义 tbcalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! 计算相关的错误分为两类：
//! - 预检错误 (pre-flight)：在启动外部程序之前发现，不消耗计算资源
//! - 后检错误 (post-flight)：外部程序运行结束后检查输出时发现
//!
//! 每个计算错误都有固定的退出码，取代宿主平台的全局退出码注册表。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::Path;
use thiserror::Error;

/// tbcalc 统一错误类型
#[derive(Error, Debug)]
pub enum TbCalcError {
    // ─────────────────────────────────────────────────────────────
    // 预检错误 (400-)
    // ─────────────────────────────────────────────────────────────
    #[error("Wrong input parameter: kmesh ({0})")]
    InvalidMesh(String),

    #[error("Wrong input parameter: energy range ({0})")]
    InvalidEnergyRange(String),

    #[error("Wrong input parameter: energy step ({0})")]
    InvalidEnergyStep(String),

    // ─────────────────────────────────────────────────────────────
    // 后检错误 (300-)
    // ─────────────────────────────────────────────────────────────
    #[error("Output file not retrieved: {path}")]
    MissingOutputFile { path: String },

    #[error("Malformed output file: {path}\nReason: {reason}")]
    MalformedOutput { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl TbCalcError {
    /// 构造 MissingOutputFile
    pub fn missing_output(path: &Path) -> Self {
        TbCalcError::MissingOutputFile {
            path: path.display().to_string(),
        }
    }

    /// 构造 MalformedOutput
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        TbCalcError::MalformedOutput {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// 计算退出码（无对应退出码的错误返回 None）
    pub fn exit_code(&self) -> Option<u16> {
        match self {
            TbCalcError::InvalidMesh(_) => Some(400),
            TbCalcError::InvalidEnergyRange(_) => Some(401),
            TbCalcError::InvalidEnergyStep(_) => Some(402),
            TbCalcError::MissingOutputFile { .. } => Some(300),
            TbCalcError::MalformedOutput { .. } => Some(301),
            _ => None,
        }
    }

    /// 是否为预检错误
    pub fn is_preflight(&self) -> bool {
        matches!(self.exit_code(), Some(code) if code >= 400)
    }

    /// 是否为后检错误
    pub fn is_postflight(&self) -> bool {
        matches!(self.exit_code(), Some(code) if (300..400).contains(&code))
    }

    /// 进程退出状态：预检 2，后检 3，其他 1
    pub fn process_status(&self) -> i32 {
        if self.is_preflight() {
            2
        } else if self.is_postflight() {
            3
        } else {
            1
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TbCalcError>;
