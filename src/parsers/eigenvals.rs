//! # eigenvals 输出解析器
//!
//! 解析 `tbmodels eigenvals` 的输出容器：
//! ```text
//! kpoints    [N, 3]
//! eigenvals  [N, B]  (eV)
//! ```
//!
//! ## 依赖关系
//! - 被 `calculations/eigenvals.rs` 使用
//! - 使用 `parsers/container.rs`, `models/bands.rs`

use super::container::{self, ArrayContainer};
use crate::error::{Result, TbCalcError};
use crate::models::BandsData;
use std::path::Path;

/// k 点数组名
pub const KPOINTS_ARRAY: &str = "kpoints";

/// 本征值数组名
pub const EIGENVALS_ARRAY: &str = "eigenvals";

/// 解析本征值结果文件
pub fn parse_eigenvals_file(path: &Path) -> Result<BandsData> {
    let mut container = container::open_container(path)?;
    parse_eigenvals_container(container.as_mut(), path)
}

/// 从已打开的容器解析本征值
pub fn parse_eigenvals_container(
    container: &mut dyn ArrayContainer,
    path: &Path,
) -> Result<BandsData> {
    let raw_kpoints = container.read_2d(KPOINTS_ARRAY)?;
    let eigenvals = container.read_2d(EIGENVALS_ARRAY)?;

    let kpoints = raw_kpoints
        .iter()
        .map(|row| match row.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(TbCalcError::malformed(
                path,
                format!("k-points must have 3 components, found {}", row.len()),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    if kpoints.len() != eigenvals.len() {
        return Err(TbCalcError::malformed(
            path,
            format!(
                "{} k-points but eigenvalues for {}",
                kpoints.len(),
                eigenvals.len()
            ),
        ));
    }

    Ok(BandsData { kpoints, eigenvals })
}
