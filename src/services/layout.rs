//! Week-grid geometry for rendered appointment blocks.

use serde::{Deserialize, Serialize};

use crate::core::error::CalendarResult;
use crate::time::wall_minutes;

/// Vertical geometry of the week grid.
///
/// `origin_hour` is the first displayed hour (the zero point for `top`),
/// `px_per_hour` the vertical scale. Values are deliberately not clamped:
/// an appointment starting before the origin hour yields a negative `top`,
/// which the grid renders as overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub origin_hour: u32,
    pub px_per_hour: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            origin_hour: 9,
            px_per_hour: 80.0,
        }
    }
}

/// Pixel position of one appointment block inside a day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockPosition {
    pub top: f64,
    pub height: f64,
}

impl GridGeometry {
    /// Compute the pixel position for a `HH:MM` start/end pair.
    ///
    /// Height is floored at one hour-unit so very short appointments stay
    /// clickable.
    pub fn position(&self, start_time: &str, end_time: &str) -> CalendarResult<BlockPosition> {
        let start = wall_minutes(start_time)? as f64;
        let end = wall_minutes(end_time)? as f64;
        let origin = f64::from(self.origin_hour * 60);

        let top = (start - origin) / 60.0 * self.px_per_hour;
        let height = ((end - start) / 60.0 * self.px_per_hour).max(self.px_per_hour);

        Ok(BlockPosition { top, height })
    }
}
