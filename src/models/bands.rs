//! # 能带数据模型
//!
//! eigenvals 计算的输出：每个 k 点上的本征值。
//!
//! ## 依赖关系
//! - 被 `parsers/eigenvals.rs` 构造
//! - 被 `export/` 和 `commands/` 使用

use serde::{Deserialize, Serialize};

/// 能带数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandsData {
    /// k 点（分数坐标）
    pub kpoints: Vec<[f64; 3]>,
    /// 本征值，按 k 点排列，每行长度相同 (eV)
    pub eigenvals: Vec<Vec<f64>>,
}

impl BandsData {
    pub fn num_kpoints(&self) -> usize {
        self.kpoints.len()
    }

    pub fn num_bands(&self) -> usize {
        self.eigenvals.first().map(|row| row.len()).unwrap_or(0)
    }

    /// 全部本征值的能量窗口 (min, max)
    pub fn energy_window(&self) -> Option<(f64, f64)> {
        let mut values = self.eigenvals.iter().flatten().copied().peekable();
        values.peek()?;
        Some(values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_extraction() {
        let bands = BandsData {
            kpoints: vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]],
            eigenvals: vec![vec![-1.0, 2.0], vec![-0.5, 3.0]],
        };
        assert_eq!(bands.num_kpoints(), 2);
        assert_eq!(bands.num_bands(), 2);
        assert_eq!(bands.energy_window(), Some((-1.0, 3.0)));
    }

    #[test]
    fn test_empty_bands() {
        let bands = BandsData {
            kpoints: vec![],
            eigenvals: vec![],
        };
        assert_eq!(bands.num_bands(), 0);
        assert_eq!(bands.energy_window(), None);
    }
}
