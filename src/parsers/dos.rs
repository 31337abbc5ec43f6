//! # DOS 输出解析器
//!
//! 解析 `tbmodels dos` 的输出容器：
//! ```text
//! energy  [N]  (eV)
//! dos     [N]  (states/eV)
//! ```
//! 两个数组必须同时存在且长度相同，否则不返回任何结果。
//!
//! ## 依赖关系
//! - 被 `calculations/dos.rs`, `commands/export.rs` 使用
//! - 使用 `parsers/container.rs`, `models/dos.rs`

use super::container::{self, ArrayContainer};
use crate::error::{Result, TbCalcError};
use crate::models::DosResult;
use std::path::Path;

/// 能量数组名
pub const ENERGY_ARRAY: &str = "energy";

/// 态密度数组名
pub const DOS_ARRAY: &str = "dos";

/// 解析 DOS 结果文件
pub fn parse_dos_file(path: &Path) -> Result<DosResult> {
    let mut container = container::open_container(path)?;
    parse_dos_container(container.as_mut(), path)
}

/// 从已打开的容器解析 DOS
pub fn parse_dos_container(container: &mut dyn ArrayContainer, path: &Path) -> Result<DosResult> {
    let energy = container.read_1d(ENERGY_ARRAY)?;
    let dos = container.read_1d(DOS_ARRAY)?;

    if energy.len() != dos.len() {
        return Err(TbCalcError::malformed(
            path,
            format!(
                "'{}' has {} points but '{}' has {}",
                ENERGY_ARRAY,
                energy.len(),
                DOS_ARRAY,
                dos.len()
            ),
        ));
    }

    Ok(DosResult::new(energy, dos))
}
