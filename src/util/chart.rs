//! Doughnut chart for the match score: geometry, lifecycle, and drawing.
//!
//! ARCHITECTURE
//! ============
//! `ChartSlot` owns at most one `DoughnutChart`. Replacing the chart releases
//! the previous instance first, and `draw` clears the canvas before painting,
//! so repeated analyses never accumulate chart state.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Fill for the score segment.
pub const SCORE_COLOR: &str = "#8A2BE2";
/// Fill for the remainder segment.
pub const REMAINDER_COLOR: &str = "rgba(255, 255, 255, 0.1)";
/// Inner radius as a fraction of the outer radius.
pub const CUTOUT_RATIO: f64 = 0.7;

/// Angular span of one doughnut segment, in radians.
///
/// Angles start at 12 o'clock and run clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub start: f64,
    pub end: f64,
}

impl Arc {
    pub fn sweep(self) -> f64 {
        self.end - self.start
    }
}

/// One chart instance: the score segment and the remainder segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoughnutChart {
    id: u64,
    data: [u8; 2],
}

impl DoughnutChart {
    /// Identifier unique within the owning slot.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Segment values: `[score, 100 - score]`.
    pub fn data(&self) -> [u8; 2] {
        self.data
    }

    pub fn score(&self) -> u8 {
        self.data[0]
    }

    /// Segment arcs in data order.
    pub fn arcs(&self) -> [Arc; 2] {
        let start = -FRAC_PI_2;
        let split = start + (TAU * f64::from(self.data[0]) / 100.0);
        [Arc { start, end: split }, Arc { start: split, end: start + TAU }]
    }

    /// Paint the chart onto `canvas`, clearing whatever was drawn before.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    #[cfg(feature = "csr")]
    pub fn draw(&self, canvas: &web_sys::HtmlCanvasElement) -> Result<(), wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        ctx.clear_rect(0.0, 0.0, width, height);

        let cx = width * 0.5;
        let cy = height * 0.5;
        let outer = cx.min(cy);
        let inner = outer * CUTOUT_RATIO;

        for (arc, color) in self.arcs().into_iter().zip([SCORE_COLOR, REMAINDER_COLOR]) {
            if arc.sweep() <= 0.0 {
                continue;
            }
            ctx.begin_path();
            ctx.arc(cx, cy, outer, arc.start, arc.end)?;
            ctx.arc_with_anticlockwise(cx, cy, inner, arc.end, arc.start, true)?;
            ctx.close_path();
            ctx.set_fill_style_str(color);
            ctx.fill();
        }
        Ok(())
    }
}

/// Holder for the single live chart instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSlot {
    current: Option<DoughnutChart>,
    next_id: u64,
}

impl ChartSlot {
    /// Release the current chart (if any) and install a new one for `score`.
    ///
    /// Returns the released instance.
    pub fn replace(&mut self, score: u8) -> Option<DoughnutChart> {
        let released = self.release();
        let score = score.min(100);
        self.next_id += 1;
        self.current = Some(DoughnutChart { id: self.next_id, data: [score, 100 - score] });
        released
    }

    /// Drop the current chart, returning it.
    pub fn release(&mut self) -> Option<DoughnutChart> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&DoughnutChart> {
        self.current.as_ref()
    }

    /// Number of live chart instances (0 or 1).
    pub fn live_instances(&self) -> usize {
        usize::from(self.current.is_some())
    }
}
