//! # 数据导出
//!
//! 导出 DOS 曲线和能带数据。
//!
//! ## 支持格式
//! - CSV: DOS (energy, dos)；能带 (k 点序号, kx, ky, kz, 各能带)
//! - XY: 带注释头的两列文本
//! - PNG/SVG: DOS 曲线图（见 `plot` 子模块）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/dos.rs`, `models/bands.rs`
//! - 使用 `csv` 库写入 CSV 文件

pub mod plot;

use crate::error::{Result, TbCalcError};
use crate::models::{BandsData, DosResult};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出 DOS 为 CSV
pub fn dos_to_csv(result: &DosResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        format!("energy_{}", result.energy_unit),
        format!("dos_{}", result.dos_unit.replace('/', "_per_")),
    ])?;

    for (energy, dos) in result.points() {
        wtr.write_record([energy.to_string(), dos.to_string()])?;
    }

    wtr.flush().map_err(|e| TbCalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出 DOS 为 XY 格式
pub fn dos_to_xy(result: &DosResult, title: &str, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| TbCalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "# DOS: {}", title).map_err(write_err)?;
    writeln!(
        w,
        "# Columns: energy ({}), dos ({})",
        result.energy_unit, result.dos_unit
    )
    .map_err(write_err)?;
    writeln!(w, "#").map_err(write_err)?;

    for (energy, dos) in result.points() {
        writeln!(w, "{:.6}\t{:.6}", energy, dos).map_err(write_err)?;
    }

    w.flush().map_err(write_err)?;
    Ok(())
}

/// 导出能带为 CSV
pub fn bands_to_csv(bands: &BandsData, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec![
        "k_index".to_string(),
        "kx".to_string(),
        "ky".to_string(),
        "kz".to_string(),
    ];
    header.extend((0..bands.num_bands()).map(|i| format!("band_{}", i + 1)));
    wtr.write_record(&header)?;

    for (i, (k, row)) in bands.kpoints.iter().zip(&bands.eigenvals).enumerate() {
        let mut record = vec![
            i.to_string(),
            k[0].to_string(),
            k[1].to_string(),
            k[2].to_string(),
        ];
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| TbCalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_dos_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.csv");
        let result = DosResult::new(vec![-1.0, 0.0, 1.0], vec![0.1, 0.2, 0.3]);

        dos_to_csv(&result, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "energy_eV,dos_states_per_eV");
        assert_eq!(lines[1], "-1,0.1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_dos_to_xy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.xy");
        let result = DosResult::new(vec![0.5], vec![2.0]);

        dos_to_xy(&result, "InSb", &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# DOS: InSb\n"));
        assert!(text.contains("0.500000\t2.000000"));
    }

    #[test]
    fn test_bands_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.csv");
        let bands = BandsData {
            kpoints: vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]],
            eigenvals: vec![vec![-1.0, 2.0], vec![-0.5, 3.0]],
        };

        bands_to_csv(&bands, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "k_index,kx,ky,kz,band_1,band_2");
        assert_eq!(lines[2], "1,0.5,0,0,-0.5,3");
    }
}
