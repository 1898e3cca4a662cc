use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{mask::Mask, rings::RingTable, Error};

/// Physical description of a Fresnel zone array
///
/// The default array is 65mm wide with 160 zones, no central obstruction,
/// a 0.75 ring index offset and a 260nm design wavelength.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FresnelArray {
    /// aperture width [m]
    pub(crate) width: f64,
    /// number of Fresnel zones
    pub(crate) n_zones: usize,
    /// side of the central square obstruction [m]
    pub(crate) obstruction: f64,
    /// offset applied to the ring index in the radius formula
    pub(crate) offset: f64,
    /// design wavelength [m]
    pub(crate) wavelength: f64,
    /// ring half-width parameter
    pub(crate) beta0: f64,
}
impl Default for FresnelArray {
    fn default() -> Self {
        Self {
            width: 65e-3,
            n_zones: 160,
            obstruction: 0f64,
            offset: 0.75,
            wavelength: 260e-9,
            beta0: 0.25,
        }
    }
}
impl FresnelArray {
    /// Sets the aperture width [m]
    pub fn width(self, width: f64) -> Self {
        Self { width, ..self }
    }
    /// Sets the number of Fresnel zones
    pub fn zones(self, n_zones: usize) -> Self {
        Self { n_zones, ..self }
    }
    /// Sets the side of the central square obstruction [m]
    pub fn obstruction(self, obstruction: f64) -> Self {
        Self {
            obstruction,
            ..self
        }
    }
    /// Sets the ring index offset
    pub fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }
    /// Sets the design wavelength [m]
    pub fn wavelength(self, wavelength: f64) -> Self {
        Self { wavelength, ..self }
    }
    /// Sets the ring half-width parameter
    pub fn beta0(self, beta0: f64) -> Self {
        Self { beta0, ..self }
    }
    /// Returns the focal length [m] derived from the array geometry
    pub fn focal_length(&self) -> f64 {
        (self.width / 2f64).powi(2) / (2f64 * self.n_zones as f64 + self.offset - 0.75)
            / self.wavelength
    }
    /// Returns the array parameters as a `(keyword, value, comment)` list
    pub fn params(&self) -> Vec<(&'static str, f64, &'static str)> {
        vec![
            ("WIDTH", self.width, "Width of the grid"),
            ("NZONES", self.n_zones as f64, "Number of Fresnel areas"),
            ("OBSTR", self.obstruction, "Central obstruction"),
            ("OFFSET", self.offset, "Central offset"),
            ("LAMBDA", self.wavelength, "Wavelength"),
        ]
    }
    /// Computes the binary transmission mask sampled on a `size`x`size` pixel grid
    ///
    /// The grid side must be an even number of at least 2 pixels, the mask
    /// being assembled from one quadrant mirrored about the grid center.
    pub fn transmission(&self, size: usize) -> Result<Mask, Error> {
        let rings = RingTable::build(self)?;
        let mut mask = Mask::new(size)?;
        log::info!("Filling the {0}x{0} transmission mask...", size);
        mask.fill(self, &rings);
        mask.overlay_bars(self, &rings);
        Ok(mask)
    }
}
impl fmt::Display for FresnelArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}mm Fresnel array: {} zones @ {:.0}nm (f: {:.3}m)",
            self.width * 1e3,
            self.n_zones,
            self.wavelength * 1e9,
            self.focal_length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MaskError, RingError};

    #[test]
    fn focal_length() {
        let array = FresnelArray::default();
        assert!((array.focal_length() - 12.6953125).abs() < 1e-9);
    }

    #[test]
    fn transmission() -> Result<(), Error> {
        let mask = FresnelArray::default()
            .width(0.01)
            .zones(5)
            .obstruction(0.001)
            .offset(0.25)
            .wavelength(5e-7)
            .beta0(0.05)
            .transmission(64)?;
        assert_eq!(mask.size(), 64);
        assert_eq!(mask.len(), 64 * 64);
        // the central obstruction blanks the 4 center-most pixels
        for (i, j) in [(31, 31), (31, 32), (32, 31), (32, 32)] {
            assert!(!mask.at(i, j));
        }
        Ok(())
    }

    #[test]
    fn params() {
        let keywords: Vec<_> = FresnelArray::default()
            .params()
            .into_iter()
            .map(|(keyword, _, _)| keyword)
            .collect();
        assert_eq!(
            keywords,
            vec!["WIDTH", "NZONES", "OBSTR", "OFFSET", "LAMBDA"]
        );
    }

    #[test]
    fn idempotence() -> Result<(), Error> {
        let array = FresnelArray::default().zones(20);
        assert_eq!(array.transmission(128)?, array.transmission(128)?);
        Ok(())
    }

    #[test]
    fn odd_size() {
        let result = FresnelArray::default().transmission(65);
        assert!(matches!(result, Err(Error::Mask(MaskError::Size(65)))));
    }

    #[test]
    fn no_zones() {
        let result = FresnelArray::default().zones(0).transmission(64);
        assert!(matches!(result, Err(Error::Rings(RingError::Zones))));
    }
}
