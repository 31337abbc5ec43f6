//! # 模型文件解析器
//!
//! parse 和 symmetrize 的输出是一个新的模型文件，只需确认其存在并记录下来。

use crate::error::{Result, TbCalcError};
use crate::models::ModelFile;
use std::fs;
use std::path::Path;

/// 读取模型文件记录
pub fn parse_model_file(path: &Path) -> Result<ModelFile> {
    if !path.is_file() {
        return Err(TbCalcError::missing_output(path));
    }
    let metadata = fs::metadata(path).map_err(|e| TbCalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(ModelFile {
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
    })
}
