//! # dos 计算
//!
//! 对应 `tbmodels dos`：由紧束缚模型在规则 k 点网格上计算态密度。
//!
//! ## 命令行格式
//! ```text
//! dos -k <nx> <ny> <nz> [-emin <v> -emax <v>] [-de <v>] [-s <v>] [-w <v>]
//! ```
//! 只输出已设置参数对应的选项，顺序固定。
//!
//! ## 依赖关系
//! - 使用 `models/dos.rs`, `models/kpoints.rs`
//! - 使用 `parsers/dos.rs` 解析输出

use super::{CalcInfo, CalcOptions, Calculation, StagedFile, MODEL_FILENAME};
use crate::error::{Result, TbCalcError};
use crate::models::{DosParameters, DosResult, KpointsInput};
use crate::parsers;

use std::path::{Path, PathBuf};

/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "dos.hdf5";

/// 从 k 点输入中取出规则网格
pub fn require_mesh(kpoints: &KpointsInput) -> Result<[u32; 3]> {
    kpoints.get_mesh().ok_or_else(|| {
        TbCalcError::InvalidMesh(match kpoints {
            KpointsInput::Mesh { mesh, .. } => format!(
                "mesh {}x{}x{} must have positive entries",
                mesh[0], mesh[1], mesh[2]
            ),
            KpointsInput::List(_) => "k-points carry no regular mesh".to_string(),
        })
    })
}

/// 参数预检，返回第一个不满足的约束
///
/// 检查顺序：k 点网格、能量范围、能量步长。未设置的参数不检查。
pub fn validate(parameters: &DosParameters, kpoints: &KpointsInput) -> Result<()> {
    require_mesh(kpoints)?;

    if let (Some(min), Some(max)) = (parameters.energy_min, parameters.energy_max) {
        // NaN 和无穷大同样视为无效
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(TbCalcError::InvalidEnergyRange(format!(
                "energy_min ({}) must be smaller than energy_max ({})",
                min, max
            )));
        }
    }

    if let Some(step) = parameters.energy_step {
        if !(step.is_finite() && step > 0.0) {
            return Err(TbCalcError::InvalidEnergyStep(format!(
                "energy_step ({}) must be a positive finite number",
                step
            )));
        }
    }

    Ok(())
}

/// 生成 dos 子命令的参数列表
///
/// 数值使用 `Display` 格式化，不会出现科学计数法（`-10.0` 输出为 `-10`）。
pub fn build_cmdline(mesh: [u32; 3], parameters: &DosParameters) -> Vec<String> {
    let mut cmdline = vec![
        "dos".to_string(),
        "-k".to_string(),
        mesh[0].to_string(),
        mesh[1].to_string(),
        mesh[2].to_string(),
    ];

    if let (Some(min), Some(max)) = (parameters.energy_min, parameters.energy_max) {
        cmdline.extend([
            "-emin".to_string(),
            min.to_string(),
            "-emax".to_string(),
            max.to_string(),
        ]);
    }

    if let Some(step) = parameters.energy_step {
        cmdline.extend(["-de".to_string(), step.to_string()]);
    }

    if let Some(smearing_type) = parameters.smearing_type {
        cmdline.extend(["-s".to_string(), smearing_type.to_string()]);
    }

    if let Some(width) = parameters.smearing_width {
        cmdline.extend(["-w".to_string(), width.to_string()]);
    }

    cmdline
}

/// DOS 计算
#[derive(Debug, Clone)]
pub struct DosCalculation {
    /// 紧束缚模型文件
    pub model: PathBuf,
    /// k 点输入
    pub kpoints: KpointsInput,
    /// DOS 参数
    pub parameters: DosParameters,
}

impl DosCalculation {
    pub fn new(model: impl Into<PathBuf>, kpoints: KpointsInput, parameters: DosParameters) -> Self {
        DosCalculation {
            model: model.into(),
            kpoints,
            parameters,
        }
    }
}

impl Calculation for DosCalculation {
    type Output = DosResult;

    fn name(&self) -> &'static str {
        "dos"
    }

    fn default_output_filename(&self) -> &'static str {
        DEFAULT_OUTPUT_FILE
    }

    fn prepare(&self, options: &CalcOptions) -> Result<CalcInfo> {
        validate(&self.parameters, &self.kpoints)?;
        let mesh = require_mesh(&self.kpoints)?;

        Ok(CalcInfo {
            cmdline: build_cmdline(mesh, &self.parameters),
            staged: vec![StagedFile::new(&self.model, MODEL_FILENAME)],
            retrieve_list: vec![self.output_filename(options).to_string()],
        })
    }

    fn parse(&self, retrieved: &Path, options: &CalcOptions) -> Result<DosResult> {
        parsers::dos::parse_dos_file(&retrieved.join(self.output_filename(options)))
    }
}
