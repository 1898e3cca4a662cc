use std::ops::Deref;

use crate::FresnelArray;

#[derive(thiserror::Error, Debug)]
pub enum RingError {
    #[error("The array must have at least 1 Fresnel zone")]
    Zones,
    #[error("The aperture width must be positive, got {0}")]
    Width(f64),
    #[error("The wavelength must be positive, got {0}")]
    Wavelength(f64),
    #[error("Ring #{ring} radius is undefined: negative radicand ({radicand})")]
    NegativeRadicand { ring: usize, radicand: f64 },
}

/// One transparent annulus bounded by its inner and outer radius [m]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner: f64,
    pub outer: f64,
}

/// The ordered transparent ring boundaries of a Fresnel array
///
/// The table holds `2 * n_zones` rings, the radii increasing with the
/// ring index by construction.
#[derive(Debug)]
pub struct RingTable(Vec<Ring>);
impl Deref for RingTable {
    type Target = [Ring];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl RingTable {
    /// Derives the ring boundaries from the array geometry
    pub fn build(array: &FresnelArray) -> Result<Self, RingError> {
        if array.n_zones < 1 {
            return Err(RingError::Zones);
        }
        if array.width <= 0f64 {
            return Err(RingError::Width(array.width));
        }
        if array.wavelength <= 0f64 {
            return Err(RingError::Wavelength(array.wavelength));
        }
        let focal_length = array.focal_length();
        let wavelength = array.wavelength;
        let radius = |ring: usize, k: f64| {
            let radicand = 2f64 * wavelength * focal_length * k + (wavelength * k).powi(2);
            if radicand < 0f64 {
                Err(RingError::NegativeRadicand { ring, radicand })
            } else {
                Ok(radicand.sqrt())
            }
        };
        let rings = (0..2 * array.n_zones)
            .map(|i| {
                let k = i as f64 + array.offset;
                Ok(Ring {
                    inner: radius(i, k - array.beta0)?,
                    outer: radius(i, k + array.beta0)?,
                })
            })
            .collect::<Result<Vec<Ring>, RingError>>()?;
        log::info!(
            "Ring table: {} rings, outermost radius {:.6}m",
            rings.len(),
            rings.last().map(|ring| ring.outer).unwrap_or_default()
        );
        Ok(Self(rings))
    }
    /// Returns the transmission at a radial distance [m] from the array center
    ///
    /// Scans the table from the outermost ring inward, a distance beyond the
    /// outermost boundary or below all inner boundaries being opaque.
    pub fn transmits(&self, distance: f64) -> bool {
        for ring in self.iter().rev() {
            if distance >= ring.outer {
                return false;
            }
            if distance >= ring.inner {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn array() -> FresnelArray {
        FresnelArray::default()
            .width(0.01)
            .zones(5)
            .obstruction(0.001)
            .offset(0.25)
            .wavelength(5e-7)
            .beta0(0.05)
    }

    #[test]
    fn table_length() {
        let rings = RingTable::build(&array()).unwrap();
        assert_eq!(rings.len(), 10);
        let rings = RingTable::build(&FresnelArray::default().zones(1)).unwrap();
        assert_eq!(rings.len(), 2);
    }

    #[test]
    fn monotonic() {
        let rings = RingTable::build(&array()).unwrap();
        for ring in rings.iter() {
            assert!(ring.inner < ring.outer);
        }
        for (a, b) in rings.iter().tuple_windows() {
            assert!(a.outer <= b.inner);
        }
    }

    #[test]
    fn transmission_bands() {
        let rings = RingTable::build(&array()).unwrap();
        let mid = |ring: &Ring| 0.5 * (ring.inner + ring.outer);
        assert!(rings.transmits(mid(&rings[0])));
        assert!(rings.transmits(mid(&rings[9])));
        // between two rings
        assert!(!rings.transmits(0.5 * (rings[0].outer + rings[1].inner)));
        // below the innermost and beyond the outermost ring
        assert!(!rings.transmits(rings[0].inner * 0.5));
        assert!(!rings.transmits(rings[9].outer * 2f64));
    }

    #[test]
    fn negative_radicand() {
        let result = RingTable::build(&FresnelArray::default().offset(0f64));
        assert!(matches!(
            result,
            Err(RingError::NegativeRadicand { ring: 0, .. })
        ));
    }

    #[test]
    fn invalid_width() {
        assert!(matches!(
            RingTable::build(&array().width(0f64)),
            Err(RingError::Width(_))
        ));
    }

    #[test]
    fn invalid_wavelength() {
        assert!(matches!(
            RingTable::build(&array().wavelength(-1f64)),
            Err(RingError::Wavelength(_))
        ));
    }
}
