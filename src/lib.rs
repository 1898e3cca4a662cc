/*!
# Fresnel array binary transmission

This library computes the binary transmission mask of a Fresnel zone array,
a diffractive optical element that focuses light through a pattern of
alternating transparent and opaque concentric rings held together by thin
support bars.

## Key Components

- [`FresnelArray`] - the physical description of the array
- [`RingTable`] - the transparent ring boundaries derived from the array geometry
- [`Mask`] - the sampled square transmission grid

## Usage

```no_run
use fresnel_array::FresnelArray;

let mask = FresnelArray::default()
    .width(65e-3)
    .zones(160)
    .transmission(2048)?;
mask.summary();
# Ok::<(), fresnel_array::Error>(())
```
*/

mod array;
mod error;
mod mask;
mod rings;

pub use array::FresnelArray;
pub use error::Error;
pub use mask::{Mask, MaskError};
pub use rings::{Ring, RingError, RingTable};
