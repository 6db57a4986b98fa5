//! Time-series chart: monthly sales line with a shaded profit overlay.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;
use viz_core::formatting::format_axis_dollars;
use viz_core::models::MonthlyTotals;
use viz_core::{Result, VizError};

use crate::style::{ChartStyle, MONTHLY_TREND_SIZE};

const TITLE: &str = "Monthly Sales and Profit Over Time";

/// Render the monthly sales/profit chart as a PNG at `path`.
///
/// Sales are drawn as a line, profit as a translucent area below it, with a
/// legend distinguishing the two.  An empty view still produces a chart with
/// caption and background but no series.
pub fn render_monthly_trend(
    months: &[MonthlyTotals],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    draw(months, style, path).map_err(|e| VizError::Render {
        name: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!("Chart saved: {}", path.display());
    Ok(())
}

fn draw(
    months: &[MonthlyTotals],
    style: &ChartStyle,
    path: &Path,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, MONTHLY_TREND_SIZE).into_drawing_area();
    root.fill(&style.background)?;

    if months.is_empty() {
        // Nothing to plot; emit the captioned empty canvas.
        root.titled(
            TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )?;
        root.present()?;
        return Ok(());
    }

    let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
    let sales: Vec<f64> = months.iter().map(|m| m.totals.sales).collect();
    let profits: Vec<f64> = months.iter().map(|m| m.totals.profit).collect();

    let x_max = (months.len() as i32 - 1).max(1);
    let (y_min, y_max) = value_range(&sales, &profits);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Order Month")
        .y_desc("Amount (USD)")
        .x_labels(labels.len().min(12))
        .y_labels(10)
        .axis_style(ShapeStyle::from(&style.axis).stroke_width(1))
        .light_line_style(ShapeStyle::from(&style.grid).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&style.grid).stroke_width(2))
        .x_label_style((style.font, style.label_size).into_font().color(&style.text))
        .y_label_style((style.font, style.label_size).into_font().color(&style.text))
        .x_label_formatter(&|x| {
            labels
                .get(*x as usize)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format_axis_dollars(*y))
        .draw()?;

    // Shaded profit area first so the sales line stays on top.
    let area_color = style.profit_area.mix(style.profit_area_alpha);
    chart
        .draw_series(AreaSeries::new(
            profits.iter().enumerate().map(|(i, &p)| (i as i32, p)),
            0.0,
            area_color,
        ))?
        .label("Total Profit")
        .legend({
            let fill = style.profit_area.mix(style.profit_area_alpha);
            move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], fill.filled())
        });

    let line_style = ShapeStyle::from(&style.sales_line).stroke_width(3);
    chart
        .draw_series(LineSeries::new(
            sales.iter().enumerate().map(|(i, &s)| (i as i32, s)),
            line_style,
        ))?
        .label("Total Sales")
        .legend({
            let color = style.sales_line;
            move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], ShapeStyle::from(&color).stroke_width(3))
        });

    chart
        .configure_series_labels()
        .background_style(style.background.mix(0.8))
        .border_style(style.axis)
        .label_font((style.font, style.label_size).into_font().color(&style.text))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Y range covering both series with 5% headroom; always includes zero so
/// the profit baseline is visible.
fn value_range(sales: &[f64], profits: &[f64]) -> (f64, f64) {
    let max = sales
        .iter()
        .chain(profits.iter())
        .copied()
        .fold(f64::MIN, f64::max);
    let min = sales
        .iter()
        .chain(profits.iter())
        .copied()
        .fold(f64::MAX, f64::min);

    let upper = if max > 0.0 { max * 1.05 } else { 1.0 };
    let lower = if min < 0.0 { min * 1.05 } else { 0.0 };
    (lower, upper)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
