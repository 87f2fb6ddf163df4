use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_range::ViewRange;

const DEFAULT_SAMPLES: usize = 500;
const DEFAULT_MIN_RES: usize = 500;

pub(crate) fn default_view() -> ViewRange {
    ViewRange::new(-2.0, 1.0, -1.5, 1.5).expect("default view range is valid")
}

/// Everything needed to build a [`MandelbrotSet`](super::mandelbrot_set::MandelbrotSet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotSetConfig {
    pub view: ViewRange,
    pub n_real: usize,
    pub n_imag: usize,
    /// Refinement kicks in after a zoom leaves either axis below this.
    pub min_res: Resolution,
    pub backend: EscapeBackendKind,
    /// `None` draws the palette from OS entropy.
    pub palette_seed: Option<u64>,
}

impl Default for MandelbrotSetConfig {
    fn default() -> Self {
        Self {
            view: default_view(),
            n_real: DEFAULT_SAMPLES,
            n_imag: DEFAULT_SAMPLES,
            min_res: Resolution::new(DEFAULT_MIN_RES, DEFAULT_MIN_RES)
                .expect("default minimum resolution is valid"),
            backend: EscapeBackendKind::default(),
            palette_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_consistent() {
        let config = MandelbrotSetConfig::default();

        assert!(config.n_real >= 2);
        assert!(config.n_imag >= 2);
        assert!(config.n_real >= config.min_res.width());
        assert!(config.n_imag >= config.min_res.height());
        assert_eq!(config.view, default_view());
        assert_eq!(config.backend, EscapeBackendKind::Rayon);
    }
}
