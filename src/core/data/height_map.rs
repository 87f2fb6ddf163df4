use crate::core::data::resolution::Resolution;

/// Row-major scalar field of `height` rows by `width` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightMap {
    resolution: Resolution,
    values: Vec<f64>,
}

impl HeightMap {
    /// `values.len()` must equal `resolution.size()`.
    pub(crate) fn from_values(resolution: Resolution, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), resolution.size());
        Self { resolution, values }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.resolution.height()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height() && col < self.width() {
            Some(self.values[row * self.width() + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Min-max normalised to one byte per sample. A flat field maps to 0.
    #[must_use]
    pub fn to_grayscale(&self) -> Vec<u8> {
        let min = self.min();
        let span = self.max() - min;

        self.values
            .iter()
            .map(|&value| {
                if span > 0.0 {
                    ((value - min) / span * 255.0) as u8
                } else {
                    0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_row_major() {
        let map = HeightMap::from_values(
            Resolution::new(3, 2).unwrap(),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        );

        assert_eq!(map.get(1, 0), Some(3.0));
        assert_eq!(map.get(0, 2), Some(2.0));
        assert_eq!(map.get(2, 0), None);
    }

    #[test]
    fn test_grayscale_spans_full_range() {
        let map = HeightMap::from_values(Resolution::new(3, 1).unwrap(), vec![10.0, 15.0, 20.0]);

        assert_eq!(map.to_grayscale(), vec![0, 127, 255]);
    }

    #[test]
    fn test_grayscale_of_flat_field_is_black() {
        let map = HeightMap::from_values(Resolution::new(2, 1).unwrap(), vec![7.0, 7.0]);

        assert_eq!(map.to_grayscale(), vec![0, 0]);
    }
}
