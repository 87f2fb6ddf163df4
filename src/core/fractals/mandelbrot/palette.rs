use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::height_map::HeightMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Randomly drawn control points per channel, between the pinned ends.
pub const INTERIOR_KNOTS: usize = 10;
pub const KNOT_COUNT: usize = INTERIOR_KNOTS + 2;
pub const MAX_BUCKET: f64 = 255.0;

/// Rescaled intensities are kept strictly inside `(0, 255)`.
pub const LOWEST_BUCKET: f64 = 0.1;
pub const HIGHEST_BUCKET: f64 = 254.9;

const ENDPOINT_VALUE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    BucketOutsideDomain { bucket: f64 },
    KnotsNotIncreasing,
    KnotsNotPinned { first: f64, last: f64 },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BucketOutsideDomain { bucket } => {
                write!(f, "bucket {} is outside the palette domain [0, 255]", bucket)
            }
            Self::KnotsNotIncreasing => write!(f, "palette knots must be strictly increasing"),
            Self::KnotsNotPinned { first, last } => {
                write!(f, "palette knots must run from 0 to 255, got {} to {}", first, last)
            }
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelBufferError> for PaletteError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps an intensity bucket in `[0, 255]` to a colour by linear
/// interpolation between fixed control points, one curve per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    knots: [f64; KNOT_COUNT],
    red: [f64; KNOT_COUNT],
    green: [f64; KNOT_COUNT],
    blue: [f64; KNOT_COUNT],
}

impl Palette {
    /// Draws the interior control points from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let red = channel_values(rng);
        let green = channel_values(rng);
        let blue = channel_values(rng);

        // distinct buckets in 1..=254 keep the knots strictly increasing
        let mut interior: Vec<usize> = index::sample(rng, MAX_BUCKET as usize - 1, INTERIOR_KNOTS)
            .into_iter()
            .map(|bucket| bucket + 1)
            .collect();
        interior.sort_unstable();

        let mut knots = [0.0; KNOT_COUNT];
        for (knot, bucket) in knots[1..=INTERIOR_KNOTS].iter_mut().zip(interior) {
            *knot = bucket as f64;
        }
        knots[KNOT_COUNT - 1] = MAX_BUCKET;

        Self {
            knots,
            red,
            green,
            blue,
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    pub fn from_control_points(
        knots: [f64; KNOT_COUNT],
        red: [f64; KNOT_COUNT],
        green: [f64; KNOT_COUNT],
        blue: [f64; KNOT_COUNT],
    ) -> Result<Self, PaletteError> {
        if knots[0] != 0.0 || knots[KNOT_COUNT - 1] != MAX_BUCKET {
            return Err(PaletteError::KnotsNotPinned {
                first: knots[0],
                last: knots[KNOT_COUNT - 1],
            });
        }

        if knots.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PaletteError::KnotsNotIncreasing);
        }

        Ok(Self {
            knots,
            red,
            green,
            blue,
        })
    }

    #[must_use]
    pub fn knots(&self) -> &[f64; KNOT_COUNT] {
        &self.knots
    }

    pub fn colour_at(&self, bucket: f64) -> Result<Colour, PaletteError> {
        if !(0.0..=MAX_BUCKET).contains(&bucket) {
            return Err(PaletteError::BucketOutsideDomain { bucket });
        }

        let segment = self
            .knots
            .partition_point(|&knot| knot <= bucket)
            .clamp(1, KNOT_COUNT - 1)
            - 1;
        let (left, right) = (self.knots[segment], self.knots[segment + 1]);
        let t = (bucket - left) / (right - left);
        let lerp = |channel: &[f64; KNOT_COUNT]| {
            (channel[segment] + t * (channel[segment + 1] - channel[segment])) as u8
        };

        Ok(Colour {
            r: lerp(&self.red),
            g: lerp(&self.green),
            b: lerp(&self.blue),
        })
    }

    /// Colours every sample of `field`, scaled so its maximum lands on the
    /// top of the palette.
    pub fn get_colors(&self, field: &HeightMap) -> Result<PixelBuffer, PaletteError> {
        let max = field.max();
        let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

        for &value in field.values() {
            let Colour { r, g, b } = self.colour_at(rescale_bucket(value, max))?;
            buffer.push(r);
            buffer.push(g);
            buffer.push(b);
        }

        Ok(PixelBuffer::from_data(field.resolution(), buffer)?)
    }
}

fn channel_values<R: Rng + ?Sized>(rng: &mut R) -> [f64; KNOT_COUNT] {
    let mut values = [ENDPOINT_VALUE; KNOT_COUNT];

    for value in values[1..=INTERIOR_KNOTS].iter_mut() {
        *value = f64::from(rng.gen_range(0u8..255));
    }

    values
}

/// Scales `value` by `255 / max` and nudges it into
/// `[LOWEST_BUCKET, HIGHEST_BUCKET]`.
#[must_use]
pub fn rescale_bucket(value: f64, max: f64) -> f64 {
    let scaled = if max > 0.0 { value * MAX_BUCKET / max } else { 0.0 };

    if scaled.is_nan() || scaled <= 0.0 {
        LOWEST_BUCKET
    } else if scaled >= MAX_BUCKET {
        HIGHEST_BUCKET
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    fn ramp_palette() -> Palette {
        let mut knots = [0.0; KNOT_COUNT];
        for (i, knot) in knots.iter_mut().enumerate() {
            *knot = 20.0 * i as f64;
        }
        knots[KNOT_COUNT - 1] = MAX_BUCKET;

        Palette::from_control_points(knots, knots, [0.0; KNOT_COUNT], knots).unwrap()
    }

    #[test]
    fn test_seeded_palettes_are_reproducible() {
        assert_eq!(Palette::seeded(7), Palette::seeded(7));
        assert_ne!(Palette::seeded(7), Palette::seeded(8));
    }

    #[test]
    fn test_random_knots_are_pinned_and_increasing() {
        for seed in 0..50 {
            let palette = Palette::seeded(seed);
            let knots = palette.knots();

            assert_eq!(knots[0], 0.0);
            assert_eq!(knots[KNOT_COUNT - 1], MAX_BUCKET);
            assert!(knots.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_endpoints_are_black() {
        let palette = Palette::seeded(3);

        assert_eq!(palette.colour_at(0.0).unwrap(), Colour::default());
        assert_eq!(palette.colour_at(MAX_BUCKET).unwrap(), Colour::default());
    }

    #[test]
    fn test_linear_interpolation_between_knots() {
        let palette = ramp_palette();
        let colour = palette.colour_at(110.0).unwrap();

        assert_eq!(colour, Colour { r: 110, g: 0, b: 110 });
        assert_eq!(palette.colour_at(100.0).unwrap().r, 100);
    }

    #[test]
    fn test_colour_outside_domain_is_an_error() {
        let palette = Palette::seeded(1);

        assert_eq!(
            palette.colour_at(255.5),
            Err(PaletteError::BucketOutsideDomain { bucket: 255.5 })
        );
        assert!(palette.colour_at(-0.1).is_err());
        assert!(palette.colour_at(f64::NAN).is_err());
    }

    #[test]
    fn test_control_points_validation() {
        let mut knots = [0.0; KNOT_COUNT];
        knots[KNOT_COUNT - 1] = MAX_BUCKET;
        let flat = [0.0; KNOT_COUNT];

        assert_eq!(
            Palette::from_control_points(knots, flat, flat, flat),
            Err(PaletteError::KnotsNotIncreasing)
        );

        knots[KNOT_COUNT - 1] = 200.0;
        assert_eq!(
            Palette::from_control_points(knots, flat, flat, flat),
            Err(PaletteError::KnotsNotPinned {
                first: 0.0,
                last: 200.0
            })
        );
    }

    #[test]
    fn test_rescale_never_touches_domain_edges() {
        assert_eq!(rescale_bucket(0.0, 50.0), LOWEST_BUCKET);
        assert_eq!(rescale_bucket(50.0, 50.0), HIGHEST_BUCKET);
        assert_eq!(rescale_bucket(25.0, 50.0), 127.5);
        assert_eq!(rescale_bucket(3.0, 0.0), LOWEST_BUCKET);

        for value in 0..=100 {
            let bucket = rescale_bucket(f64::from(value), 100.0);
            assert!(bucket > 0.0 && bucket < MAX_BUCKET);
        }
    }

    #[test]
    fn test_get_colors_shape() {
        let palette = Palette::seeded(11);
        let field = HeightMap::from_values(
            Resolution::new(3, 2).unwrap(),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        );

        let image = palette.get_colors(&field).unwrap();

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.buffer().len(), 18);
        assert_eq!(image.pixel(0, 0).unwrap(), palette.colour_at(LOWEST_BUCKET).unwrap());
        assert_eq!(image.pixel(1, 2).unwrap(), palette.colour_at(HIGHEST_BUCKET).unwrap());
    }
}
