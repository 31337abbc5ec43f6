//! # DOS 曲线图
//!
//! 使用 `plotters` 绘制 DOS 曲线，支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 调用
//! - 使用 `models/dos.rs`

use crate::error::{Result, TbCalcError};
use crate::models::DosResult;

use plotters::prelude::*;
use std::path::Path;

/// 生成 DOS 曲线图，按扩展名选择 SVG 或 PNG
pub fn generate_dos_plot(
    result: &DosResult,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    if result.is_empty() {
        return Err(TbCalcError::InvalidArgument(
            "cannot plot an empty DOS curve".to_string(),
        ));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_dos_chart(&root, result, title)?;
        root.present()
            .map_err(|e| TbCalcError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_dos_chart(&root, result, title)?;
        root.present()
            .map_err(|e| TbCalcError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制 DOS 图表
fn draw_dos_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    result: &DosResult,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| TbCalcError::Other(format!("{:?}", e)))?;

    let (x_min, x_max) = result.energy_range().unwrap_or((0.0, 1.0));
    let (x_min, x_max) = if x_max > x_min {
        (x_min, x_max)
    } else {
        (x_min - 0.5, x_max + 0.5)
    };
    let y_max = result
        .peak()
        .map(|(_, d)| d)
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0)
        * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| TbCalcError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(format!("Energy ({})", result.energy_unit))
        .y_desc(format!("DOS ({})", result.dos_unit))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| TbCalcError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(result.points(), line_color.stroke_width(2)))
        .map_err(|e| TbCalcError::Other(format!("{:?}", e)))?;

    let fill_color = RGBColor(0, 102, 204).mix(0.2);
    chart
        .draw_series(AreaSeries::new(result.points(), 0.0, fill_color))
        .map_err(|e| TbCalcError::Other(format!("{:?}", e)))?;

    Ok(())
}
