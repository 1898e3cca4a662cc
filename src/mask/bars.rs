use super::Mask;
use crate::{rings::RingTable, FresnelArray};

/// Physical distance between two consecutive support bars [m]
const BAR_SPACING: f64 = 0.01;
/// Physical thickness of a support bar [m]
const BAR_THICKNESS: f64 = 2e-4;

impl Mask {
    /// Stamps the periodic opaque support bars over the filled grid
    ///
    /// Bars are laid out every [`BAR_SPACING`] from the innermost ring
    /// radius outward, on both sides of the grid center and along both
    /// axes. A row falling within a bar is blanked whole and takes
    /// precedence over the column bars; open pixels are only ever
    /// turned opaque.
    pub(crate) fn overlay_bars(&mut self, array: &FresnelArray, rings: &RingTable) {
        let size = self.size;
        let half = (size / 2) as isize;
        let pixel_width = array.width / size as f64;
        let mut bar_distance = rings[0].inner;
        while bar_distance < array.width / 2f64 {
            let lo_px = ((bar_distance - BAR_THICKNESS / 2f64) / pixel_width).floor() as isize;
            let hi_px = ((bar_distance + BAR_THICKNESS / 2f64) / pixel_width).floor() as isize;
            let first = (half - 1 - hi_px, half - 1 - lo_px);
            let second = (half + lo_px, half + hi_px);
            let within =
                |n: isize| (first.0 < n && n < first.1) || (second.0 < n && n < second.1);
            for (i, row) in self.cells.chunks_mut(size).enumerate() {
                if within(i as isize) {
                    row.fill(false);
                } else {
                    for (j, cell) in row.iter_mut().enumerate() {
                        if within(j as isize) {
                            *cell = false;
                        }
                    }
                }
            }
            bar_distance += BAR_SPACING;
        }
    }
}
