//! # 结果容器
//!
//! tbmodels 的输出是包含若干命名数组的二进制容器。
//! 本模块用 `ArrayContainer` trait 屏蔽具体格式：
//! - `.npz`: numpy 数组压缩包（`ndarray-npy`），始终可用
//! - `.hdf5` / `.h5`: HDF5 文件（`hdf5` feature，默认启用）
//!
//! 数组缺失、维度不对或元素类型不是浮点数都报告为 `MalformedOutput`。
//!
//! ## 依赖关系
//! - 被 `parsers/dos.rs`, `parsers/eigenvals.rs` 使用

use crate::error::{Result, TbCalcError};

use ndarray::{Array1, Array2};
use ndarray_npy::NpzReader;
use std::fs::File;
use std::path::{Path, PathBuf};

/// 命名数组容器
pub trait ArrayContainer {
    /// 读取一维浮点数组
    fn read_1d(&mut self, name: &str) -> Result<Vec<f64>>;

    /// 读取二维浮点数组（按行）
    fn read_2d(&mut self, name: &str) -> Result<Vec<Vec<f64>>>;
}

/// 根据扩展名打开结果容器
pub fn open_container(path: &Path) -> Result<Box<dyn ArrayContainer>> {
    if !path.is_file() {
        return Err(TbCalcError::missing_output(path));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "npz" => Ok(Box::new(NpzContainer::open(path)?)),
        "hdf5" | "h5" => open_hdf5(path),
        _ => Err(TbCalcError::UnsupportedFormat(format!(
            "Cannot determine result container format for: {}",
            path.display()
        ))),
    }
}

#[cfg(feature = "hdf5")]
fn open_hdf5(path: &Path) -> Result<Box<dyn ArrayContainer>> {
    Ok(Box::new(hdf5_backend::Hdf5Container::open(path)?))
}

#[cfg(not(feature = "hdf5"))]
fn open_hdf5(path: &Path) -> Result<Box<dyn ArrayContainer>> {
    Err(TbCalcError::UnsupportedFormat(format!(
        "{} is an HDF5 file; rebuild tbcalc with `--features hdf5` to read it",
        path.display()
    )))
}

/// numpy `.npz` 容器
pub struct NpzContainer {
    path: PathBuf,
    reader: NpzReader<File>,
}

impl NpzContainer {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| TbCalcError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let reader =
            NpzReader::new(file).map_err(|e| TbCalcError::malformed(path, e.to_string()))?;
        Ok(NpzContainer {
            path: path.to_path_buf(),
            reader,
        })
    }

    /// 查找数组在压缩包中的序号（名称可带或不带 `.npy` 后缀）
    fn index_of(&mut self, name: &str) -> Result<usize> {
        let names = self
            .reader
            .names()
            .map_err(|e| TbCalcError::malformed(&self.path, e.to_string()))?;
        names
            .iter()
            .position(|n| n == name || n.strip_suffix(".npy") == Some(name))
            .ok_or_else(|| {
                TbCalcError::malformed(
                    &self.path,
                    format!("missing array '{}' (found: {})", name, names.join(", ")),
                )
            })
    }
}

impl ArrayContainer for NpzContainer {
    fn read_1d(&mut self, name: &str) -> Result<Vec<f64>> {
        let index = self.index_of(name)?;
        let array: Array1<f64> = self.reader.by_index(index).map_err(|e| {
            TbCalcError::malformed(&self.path, format!("array '{}': {}", name, e))
        })?;
        Ok(array.to_vec())
    }

    fn read_2d(&mut self, name: &str) -> Result<Vec<Vec<f64>>> {
        let index = self.index_of(name)?;
        let array: Array2<f64> = self.reader.by_index(index).map_err(|e| {
            TbCalcError::malformed(&self.path, format!("array '{}': {}", name, e))
        })?;
        Ok(array.outer_iter().map(|row| row.to_vec()).collect())
    }
}

#[cfg(feature = "hdf5")]
mod hdf5_backend {
    use super::ArrayContainer;
    use crate::error::{Result, TbCalcError};
    use std::path::{Path, PathBuf};

    /// HDF5 容器
    pub struct Hdf5Container {
        path: PathBuf,
        file: hdf5::File,
    }

    impl Hdf5Container {
        pub fn open(path: &Path) -> Result<Self> {
            let file = hdf5::File::open(path)
                .map_err(|e| TbCalcError::malformed(path, e.to_string()))?;
            Ok(Hdf5Container {
                path: path.to_path_buf(),
                file,
            })
        }

        fn dataset(&self, name: &str) -> Result<hdf5::Dataset> {
            if !self.file.link_exists(name) {
                return Err(TbCalcError::malformed(
                    &self.path,
                    format!("missing array '{}'", name),
                ));
            }
            self.file
                .dataset(name)
                .map_err(|e| TbCalcError::malformed(&self.path, format!("'{}': {}", name, e)))
        }
    }

    impl ArrayContainer for Hdf5Container {
        fn read_1d(&mut self, name: &str) -> Result<Vec<f64>> {
            let ds = self.dataset(name)?;
            if ds.ndim() != 1 {
                return Err(TbCalcError::malformed(
                    &self.path,
                    format!("array '{}' has {} dimensions, expected 1", name, ds.ndim()),
                ));
            }
            ds.read_raw::<f64>()
                .map_err(|e| TbCalcError::malformed(&self.path, format!("'{}': {}", name, e)))
        }

        fn read_2d(&mut self, name: &str) -> Result<Vec<Vec<f64>>> {
            let ds = self.dataset(name)?;
            let shape = ds.shape();
            if shape.len() != 2 {
                return Err(TbCalcError::malformed(
                    &self.path,
                    format!("array '{}' has {} dimensions, expected 2", name, shape.len()),
                ));
            }
            let raw = ds
                .read_raw::<f64>()
                .map_err(|e| TbCalcError::malformed(&self.path, format!("'{}': {}", name, e)))?;
            let (rows, cols) = (shape[0], shape[1]);
            if cols == 0 {
                return Ok(vec![Vec::new(); rows]);
            }
            Ok(raw.chunks(cols).map(|row| row.to_vec()).collect())
        }
    }
}

/// 测试用：写入 `.npz` 结果文件
#[cfg(test)]
pub(crate) mod testing {
    use ndarray::{Array1, Array2};
    use ndarray_npy::NpzWriter;
    use std::fs::File;
    use std::path::Path;

    pub fn write_npz_1d(path: &Path, arrays: &[(&str, Vec<f64>)]) {
        let mut npz = NpzWriter::new(File::create(path).unwrap());
        for (name, data) in arrays {
            npz.add_array(*name, &Array1::from(data.clone())).unwrap();
        }
        npz.finish().unwrap();
    }

    pub fn write_npz_2d(path: &Path, arrays: &[(&str, Array2<f64>)]) {
        let mut npz = NpzWriter::new(File::create(path).unwrap());
        for (name, data) in arrays {
            npz.add_array(*name, data).unwrap();
        }
        npz.finish().unwrap();
    }

    #[cfg(feature = "hdf5")]
    pub fn write_hdf5_1d(path: &Path, arrays: &[(&str, Vec<f64>)]) {
        let file = hdf5::File::create(path).unwrap();
        for (name, data) in arrays {
            file.new_dataset_builder()
                .with_data(&Array1::from(data.clone()))
                .create(*name)
                .unwrap();
        }
    }

    #[cfg(feature = "hdf5")]
    pub fn write_hdf5_2d(path: &Path, arrays: &[(&str, Array2<f64>)]) {
        let file = hdf5::File::create(path).unwrap();
        for (name, data) in arrays {
            file.new_dataset_builder().with_data(data).create(*name).unwrap();
        }
    }
}
