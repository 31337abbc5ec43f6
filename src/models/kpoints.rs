//! # k 点输入数据模型
//!
//! 规则网格 (mesh) 或显式 k 点列表。只有规则网格可以用于 DOS 计算。
//!
//! ## 依赖关系
//! - 被 `calculations/dos.rs` 使用
//! - 被 `parsers/params.rs` 构造

use serde::{Deserialize, Serialize};

/// k 点输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KpointsInput {
    /// 规则网格 (nx, ny, nz) 及偏移
    Mesh { mesh: [u32; 3], offset: [f64; 3] },
    /// 显式 k 点列表（分数坐标）
    List(Vec<[f64; 3]>),
}

impl KpointsInput {
    /// 创建无偏移的规则网格
    pub fn mesh(nx: u32, ny: u32, nz: u32) -> Self {
        KpointsInput::Mesh {
            mesh: [nx, ny, nz],
            offset: [0.0; 3],
        }
    }

    /// 设置网格偏移（列表形式不受影响）
    pub fn with_offset(self, offset: [f64; 3]) -> Self {
        match self {
            KpointsInput::Mesh { mesh, .. } => KpointsInput::Mesh { mesh, offset },
            list => list,
        }
    }

    /// 获取规则网格；列表形式或含零分量的网格返回 None
    pub fn get_mesh(&self) -> Option<[u32; 3]> {
        match self {
            KpointsInput::Mesh { mesh, .. } if mesh.iter().all(|&n| n > 0) => Some(*mesh),
            _ => None,
        }
    }

    /// k 点总数
    pub fn num_kpoints(&self) -> usize {
        match self {
            KpointsInput::Mesh { mesh, .. } => mesh.iter().map(|&n| n as usize).product(),
            KpointsInput::List(points) => points.len(),
        }
    }
}

impl std::fmt::Display for KpointsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpointsInput::Mesh { mesh, .. } => {
                write!(f, "{}x{}x{} mesh", mesh[0], mesh[1], mesh[2])
            }
            KpointsInput::List(points) => write!(f, "list of {} k-points", points.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_is_available() {
        let k = KpointsInput::mesh(4, 4, 4);
        assert_eq!(k.get_mesh(), Some([4, 4, 4]));
        assert_eq!(k.num_kpoints(), 64);
    }

    #[test]
    fn test_zero_mesh_entry_has_no_mesh() {
        assert_eq!(KpointsInput::mesh(4, 0, 4).get_mesh(), None);
    }

    #[test]
    fn test_list_has_no_mesh() {
        let k = KpointsInput::List(vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]]);
        assert_eq!(k.get_mesh(), None);
        assert_eq!(k.num_kpoints(), 2);
        assert_eq!(k.to_string(), "list of 2 k-points");
    }

    #[test]
    fn test_offset_keeps_mesh() {
        let k = KpointsInput::mesh(2, 3, 4).with_offset([0.5, 0.5, 0.5]);
        assert_eq!(k.get_mesh(), Some([2, 3, 4]));
        assert_eq!(k.to_string(), "2x3x4 mesh");
    }
}
