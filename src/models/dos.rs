//! # DOS 数据模型
//!
//! DOS 计算的输入参数和解析后的结果曲线。
//!
//! ## 依赖关系
//! - 被 `calculations/dos.rs`, `parsers/dos.rs` 使用
//! - 被 `export/` 和 `commands/` 使用

use serde::{Deserialize, Serialize};

/// 能量单位
pub const ENERGY_UNIT: &str = "eV";

/// 态密度单位
pub const DOS_UNIT: &str = "states/eV";

/// DOS 计算参数，未设置的字段交给外部程序使用默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DosParameters {
    /// 能量下限 (eV)
    pub energy_min: Option<f64>,
    /// 能量上限 (eV)
    pub energy_max: Option<f64>,
    /// 能量步长 (eV)
    pub energy_step: Option<f64>,
    /// 展宽类型代码
    pub smearing_type: Option<u32>,
    /// 展宽宽度 (eV)
    pub smearing_width: Option<f64>,
}

impl DosParameters {
    /// 用 `other` 中已设置的字段覆盖当前值
    pub fn merge(mut self, other: &DosParameters) -> Self {
        self.energy_min = other.energy_min.or(self.energy_min);
        self.energy_max = other.energy_max.or(self.energy_max);
        self.energy_step = other.energy_step.or(self.energy_step);
        self.smearing_type = other.smearing_type.or(self.smearing_type);
        self.smearing_width = other.smearing_width.or(self.smearing_width);
        self
    }
}

#[cfg(test)]
impl DosParameters {
    /// 设置能量范围
    pub fn with_energy_range(mut self, min: f64, max: f64) -> Self {
        self.energy_min = Some(min);
        self.energy_max = Some(max);
        self
    }

    /// 设置能量步长
    pub fn with_energy_step(mut self, step: f64) -> Self {
        self.energy_step = Some(step);
        self
    }

    /// 设置展宽类型和宽度
    pub fn with_smearing(mut self, smearing_type: u32, width: f64) -> Self {
        self.smearing_type = Some(smearing_type);
        self.smearing_width = Some(width);
        self
    }
}

/// DOS 计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosResult {
    /// 能量
    pub energy: Vec<f64>,
    /// 态密度
    pub dos: Vec<f64>,
    /// 能量单位
    pub energy_unit: String,
    /// 态密度单位
    pub dos_unit: String,
}

impl DosResult {
    /// 由等长数组创建，单位固定为 eV 和 states/eV
    pub fn new(energy: Vec<f64>, dos: Vec<f64>) -> Self {
        debug_assert_eq!(energy.len(), dos.len());
        DosResult {
            energy,
            dos,
            energy_unit: ENERGY_UNIT.to_string(),
            dos_unit: DOS_UNIT.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// (energy, dos) 数据点
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energy.iter().copied().zip(self.dos.iter().copied())
    }

    /// 能量范围 (min, max)
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let min = self.energy.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.energy.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// 最大态密度及其能量位置 (energy, dos)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, (e, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((e, d)),
            })
    }

    /// 梯形积分得到的总态数
    pub fn integrated(&self) -> f64 {
        self.energy
            .windows(2)
            .zip(self.dos.windows(2))
            .map(|(e, d)| (e[1] - e[0]) * (d[0] + d[1]) / 2.0)
            .sum()
    }
}
