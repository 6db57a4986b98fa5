//! Bar charts: sales by sub-category (horizontal) and by segment (vertical).

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;
use viz_core::formatting::format_axis_dollars;
use viz_core::models::GroupTotals;
use viz_core::{Result, VizError};

use crate::style::{bar_color_for_profit, ChartStyle, SEGMENT_SIZE, SUBCATEGORY_SIZE};

const SUBCATEGORY_TITLE: &str = "Sales Performance by Product Sub-Category";
const SEGMENT_TITLE: &str = "Total Sales by Customer Segment";

// ── Sub-category chart ────────────────────────────────────────────────────────

/// Render the horizontal sales-per-sub-category bar chart at `path`.
///
/// Groups are expected in descending-sales order; the largest bar is drawn
/// at the top.  Bar color reflects the sign of the group's total profit.
pub fn render_subcategory_bars(
    groups: &[GroupTotals],
    style: &ChartStyle,
    path: &Path,
) -> Result<()> {
    draw_subcategory(groups, style, path).map_err(|e| VizError::Render {
        name: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!("Chart saved: {}", path.display());
    Ok(())
}

fn draw_subcategory(
    groups: &[GroupTotals],
    style: &ChartStyle,
    path: &Path,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, SUBCATEGORY_SIZE).into_drawing_area();
    root.fill(&style.background)?;

    if groups.is_empty() {
        root.titled(
            SUBCATEGORY_TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )?;
        root.present()?;
        return Ok(());
    }

    let n = groups.len() as i32;
    let x_max = padded_max(groups.iter().map(|g| g.totals.sales));

    // Y axis runs bottom-up, so reverse the (descending) input order to put
    // the biggest seller at the top of the chart.
    let names: Vec<&str> = groups.iter().rev().map(|g| g.name.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            SUBCATEGORY_TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(160)
        .build_cartesian_2d(0f64..x_max, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .x_desc("Total Sales (USD)")
        .y_desc("Product Sub-Category")
        .axis_style(ShapeStyle::from(&style.axis).stroke_width(1))
        .light_line_style(ShapeStyle::from(&style.grid).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&style.grid).stroke_width(1))
        .x_label_style((style.font, style.label_size).into_font().color(&style.text))
        .y_label_style((style.font, style.label_size).into_font().color(&style.text))
        .x_label_formatter(&|x| format_axis_dollars(*x))
        .y_label_formatter(&|y| match y {
            SegmentValue::CenterOf(i) => names
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(i, group)| {
        let slot = n - 1 - i as i32;
        let color = bar_color_for_profit(style, group.totals.profit);
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(slot)),
                (group.totals.sales, SegmentValue::Exact(slot + 1)),
            ],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

// ── Segment chart ─────────────────────────────────────────────────────────────

/// Render the vertical sales-per-segment bar chart at `path`.
///
/// One bar per customer segment in the given (descending-sales) order,
/// colored from the fixed palette.
pub fn render_segment_bars(groups: &[GroupTotals], style: &ChartStyle, path: &Path) -> Result<()> {
    draw_segment(groups, style, path).map_err(|e| VizError::Render {
        name: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!("Chart saved: {}", path.display());
    Ok(())
}

fn draw_segment(
    groups: &[GroupTotals],
    style: &ChartStyle,
    path: &Path,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, SEGMENT_SIZE).into_drawing_area();
    root.fill(&style.background)?;

    if groups.is_empty() {
        root.titled(
            SEGMENT_TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )?;
        root.present()?;
        return Ok(());
    }

    let n = groups.len() as i32;
    let y_max = padded_max(groups.iter().map(|g| g.totals.sales));
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            SEGMENT_TITLE,
            (style.font, style.caption_size).into_font().color(&style.text),
        )
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Customer Segment")
        .y_desc("Total Sales (USD)")
        .disable_x_mesh()
        .axis_style(ShapeStyle::from(&style.axis).stroke_width(1))
        .light_line_style(ShapeStyle::from(&style.grid).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&style.grid).stroke_width(1))
        .x_label_style((style.font, style.label_size).into_font().color(&style.text))
        .y_label_style((style.font, style.label_size).into_font().color(&style.text))
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => names
                .get(*i as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format_axis_dollars(*y))
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(i, group)| {
        let color = style.palette_color(i);
        Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), group.totals.sales),
            ],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Largest value plus 5% headroom; falls back to 1.0 when every value is
/// zero or negative so the axis range stays non-degenerate.
fn padded_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(f64::MIN, f64::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
