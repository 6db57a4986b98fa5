//! Static chart rendering for the Superstore summary views.
//!
//! Each renderer turns one summary view into a PNG artifact with fixed
//! styling described by [`style::ChartStyle`].  Rendering is the sole
//! observable result; the functions return nothing on success.

pub mod bars;
pub mod style;
pub mod timeseries;

pub use bars::{render_segment_bars, render_subcategory_bars};
pub use style::{bar_color_for_profit, ChartStyle};
pub use timeseries::render_monthly_trend;
