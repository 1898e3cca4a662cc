use rayon::prelude::*;

use super::Mask;
use crate::{rings::RingTable, FresnelArray};

impl Mask {
    /// Fills the grid from one quadrant mirrored about the grid center
    ///
    /// A pixel is open if its radial distance from the array center falls
    /// within a transparent ring, unless both its quadrant indices reach
    /// into the central square obstruction. The top rows are paired with
    /// their bottom mirrors so each pair is filled independently.
    pub(crate) fn fill(&mut self, array: &FresnelArray, rings: &RingTable) {
        let size = self.size;
        let half = size / 2;
        let pixel_width = array.width / size as f64;
        let obstruction_px = half as isize - (array.obstruction / pixel_width / 2f64) as isize;
        let x_ref = (-array.width + pixel_width) / 2f64;
        let y_ref = x_ref;
        let (top, bottom) = self.cells.split_at_mut(half * size);
        top.par_chunks_mut(size)
            .zip(bottom.par_chunks_mut(size).rev())
            .enumerate()
            .for_each(|(i, (upper, lower))| {
                for j in 0..half {
                    let open = if i as isize >= obstruction_px && j as isize >= obstruction_px {
                        false
                    } else {
                        let x = x_ref + i as f64 * pixel_width;
                        let y = y_ref + j as f64 * pixel_width;
                        rings.transmits((x * x + y * y).sqrt())
                    };
                    upper[j] = open;
                    upper[size - 1 - j] = open;
                    lower[j] = open;
                    lower[size - 1 - j] = open;
                }
            });
    }
}
