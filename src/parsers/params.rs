//! # DOS 参数文件解析器
//!
//! 从 TOML 文件读取 DOS 计算输入。
//!
//! ## 格式说明
//! ```text
//! energy_range = [-10, 10]     # 或 energy_min / energy_max
//! energy_step = 0.1
//! smearing_type = 0
//! smearing_width = 0.1
//! kmesh = [4, 4, 4]            # 可选，也可在命令行给出
//! kmesh_offset = [0, 0, 0]     # 可选
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 使用
//! - 使用 `models/dos.rs`, `models/kpoints.rs`

use crate::error::{Result, TbCalcError};
use crate::models::{DosParameters, KpointsInput};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 参数文件内容
#[derive(Debug, Clone, PartialEq)]
pub struct DosInput {
    pub parameters: DosParameters,
    pub kpoints: Option<KpointsInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDosInput {
    energy_range: Option<Vec<f64>>,
    energy_min: Option<f64>,
    energy_max: Option<f64>,
    energy_step: Option<f64>,
    smearing_type: Option<u32>,
    smearing_width: Option<f64>,
    kmesh: Option<Vec<u32>>,
    kmesh_offset: Option<[f64; 3]>,
    kpoints: Option<Vec<[f64; 3]>>,
}

/// 解析参数文件
pub fn parse_dos_input_file(path: &Path) -> Result<DosInput> {
    let content = fs::read_to_string(path).map_err(|e| TbCalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_dos_input_str(&content, &path.display().to_string())
}

/// 从字符串解析参数
pub fn parse_dos_input_str(content: &str, source_name: &str) -> Result<DosInput> {
    let raw: RawDosInput = toml::from_str(content).map_err(|e| TbCalcError::ParseError {
        format: "toml".to_string(),
        path: source_name.to_string(),
        reason: e.to_string(),
    })?;

    let (energy_min, energy_max) = match raw.energy_range {
        Some(_) if raw.energy_min.is_some() || raw.energy_max.is_some() => {
            return Err(TbCalcError::InvalidArgument(
                "give either energy_range or energy_min/energy_max, not both".to_string(),
            ));
        }
        Some(range) => match range.as_slice() {
            [min, max] => (Some(*min), Some(*max)),
            _ => {
                return Err(TbCalcError::InvalidEnergyRange(format!(
                    "energy_range needs 2 values, found {}",
                    range.len()
                )));
            }
        },
        None => (raw.energy_min, raw.energy_max),
    };

    let kpoints = match (raw.kmesh, raw.kpoints) {
        (Some(_), Some(_)) => {
            return Err(TbCalcError::InvalidArgument(
                "give either kmesh or kpoints, not both".to_string(),
            ));
        }
        (Some(mesh), None) => match mesh.as_slice() {
            [nx, ny, nz] => Some(
                KpointsInput::mesh(*nx, *ny, *nz).with_offset(raw.kmesh_offset.unwrap_or([0.0; 3])),
            ),
            _ => {
                return Err(TbCalcError::InvalidMesh(format!(
                    "kmesh needs 3 values, found {}",
                    mesh.len()
                )));
            }
        },
        (None, Some(points)) => Some(KpointsInput::List(points)),
        (None, None) => None,
    };

    Ok(DosInput {
        parameters: DosParameters {
            energy_min,
            energy_max,
            energy_step: raw.energy_step,
            smearing_type: raw.smearing_type,
            smearing_width: raw.smearing_width,
        },
        kpoints,
    })
}
