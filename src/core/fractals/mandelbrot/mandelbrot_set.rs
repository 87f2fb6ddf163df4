use log::{debug, trace};
use num_complex::Complex64;

use crate::core::backend::escape_backend::EscapeBackend;
use crate::core::backend::factory::escape_backend_factory;
use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::backend::orbit_cell::OrbitCell;
use crate::core::data::grid::{Grid, upsampled_len};
use crate::core::data::height_map::HeightMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_range::ViewRange;
use crate::core::fractals::mandelbrot::complex_grid::ComplexGrid;
use crate::core::fractals::mandelbrot::config::MandelbrotSetConfig;
use crate::core::fractals::mandelbrot::errors::MandelbrotSetError;
use crate::core::fractals::mandelbrot::iteration_state::IterationState;
use crate::core::fractals::mandelbrot::palette::Palette;
use crate::core::fractals::mandelbrot::resample::GridInterpolator;

/// Smallest axis length that still defines a sample spacing.
const MIN_SAMPLES: usize = 2;

/// Escape-time field over a shrinking window of the complex plane.
///
/// Cells that have escaped are frozen and never revisited. Zooming crops the
/// grid in place; once the crop drops below `min_res` the grid is upsampled
/// and only the inserted cells are iterated up to the shared round count.
///
/// Inserted cells start from `z = 0` with no history of their own, so after
/// a refinement their escape times are what a fresh run of `n_iterations`
/// rounds gives at that coordinate, not what they would read had the grid
/// been fine from the start of a session with interleaved zooms.
#[derive(Debug)]
pub struct MandelbrotSet {
    view: ViewRange,
    grid: ComplexGrid,
    state: IterationState,
    min_res: Resolution,
    n_iterations: u64,
    backend: Box<dyn EscapeBackend>,
    palette: Palette,
}

impl MandelbrotSet {
    pub fn new(
        view: ViewRange,
        n_real: usize,
        n_imag: usize,
        min_res: Resolution,
        backend: Box<dyn EscapeBackend>,
        palette: Palette,
    ) -> Result<Self, MandelbrotSetError> {
        let grid = ComplexGrid::new(&view, n_real, n_imag)?;
        let state = IterationState::fresh(n_imag, n_real);

        debug!(
            "created {}x{} grid over [{}, {}] x [{}, {}] using {} backend",
            n_real,
            n_imag,
            view.real_lower(),
            view.real_upper(),
            view.imag_lower(),
            view.imag_upper(),
            backend.display_name()
        );

        Ok(Self {
            view,
            grid,
            state,
            min_res,
            n_iterations: 0,
            backend,
            palette,
        })
    }

    pub fn from_config(config: &MandelbrotSetConfig) -> Result<Self, MandelbrotSetError> {
        let palette = match config.palette_seed {
            Some(seed) => Palette::seeded(seed),
            None => Palette::from_entropy(),
        };

        Self::new(
            config.view,
            config.n_real,
            config.n_imag,
            config.min_res,
            escape_backend_factory(config.backend),
            palette,
        )
    }

    /// Advances every active cell by `steps` rounds.
    pub fn iterate(&mut self, steps: u32) {
        if steps == 0 {
            return;
        }

        let cells = self.state.active_cells(self.grid.c());
        let active_before = cells.len();
        let survivors = run_rounds(self.backend.as_ref(), &mut self.state, cells, u64::from(steps));

        for cell in &survivors {
            self.state.store(cell);
        }
        self.state.set_active(survivors.iter().map(|cell| cell.index).collect());
        self.n_iterations += u64::from(steps);

        trace!(
            "iterated {} rounds: {} -> {} active cells, {} rounds total",
            steps,
            active_before,
            survivors.len(),
            self.n_iterations
        );
    }

    /// Strips `border` cells from every edge and shrinks the view to match,
    /// refining the grid if it ends up below `min_res`.
    pub fn zoom(&mut self, border: usize) -> Result<(), MandelbrotSetError> {
        if border == 0 {
            return Ok(());
        }

        let (n_real, n_imag) = self.shape();
        let leaves_too_few = |samples: usize| {
            border
                .checked_mul(2)
                .is_none_or(|crop| crop >= samples || samples - crop < MIN_SAMPLES)
        };

        if leaves_too_few(n_real) || leaves_too_few(n_imag) {
            return Err(MandelbrotSetError::CropTooLarge {
                border,
                n_real,
                n_imag,
            });
        }

        let view = self.view.shrunk(
            border as f64 * self.grid.d_real(),
            border as f64 * self.grid.d_imag(),
        )?;

        self.grid = self.grid.cropped(border);
        self.state = self.state.cropped(border);
        self.view = view;

        debug!(
            "cropped {} cells per edge: {}x{} -> {}x{}",
            border,
            n_real,
            n_imag,
            self.grid.n_real(),
            self.grid.n_imag()
        );

        while self.below_min_res() {
            self.increase_resolution()?;
        }

        Ok(())
    }

    /// Doubles the sample density (`N -> 2N - 1`) over the unchanged view
    /// and brings the inserted cells up to `n_iterations` rounds.
    pub fn increase_resolution(&mut self) -> Result<(), MandelbrotSetError> {
        let (n_real, n_imag) = self.shape();
        let grid = ComplexGrid::new(&self.view, upsampled_len(n_real), upsampled_len(n_imag))?;
        let mut state = self.state.interleaved();

        let inserted = state.inserted_cells(grid.c());
        let inserted_count = inserted.len();
        let survivors = run_rounds(self.backend.as_ref(), &mut state, inserted, self.n_iterations);

        for cell in &survivors {
            state.store(cell);
        }
        state.rebuild_active();

        debug!(
            "refined {}x{} -> {}x{}: {} inserted cells replayed {} rounds, {} still active",
            n_real,
            n_imag,
            grid.n_real(),
            grid.n_imag(),
            inserted_count,
            self.n_iterations,
            survivors.len()
        );

        self.grid = grid;
        self.state = state;

        Ok(())
    }

    /// Escape times resampled onto a `resolution` lattice, `[height][width]`.
    pub fn get_hmap(&self, resolution: Resolution) -> Result<HeightMap, MandelbrotSetError> {
        let interpolator = GridInterpolator::new(self.state.escape_time())?;

        Ok(interpolator.resample(resolution)?)
    }

    /// [`Self::get_hmap`] coloured through the palette.
    pub fn get_image(&self, resolution: Resolution) -> Result<PixelBuffer, MandelbrotSetError> {
        let hmap = self.get_hmap(resolution)?;

        Ok(self.palette.get_colors(&hmap)?)
    }

    /// `(N_real, N_imag)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.grid.n_real(), self.grid.n_imag())
    }

    #[must_use]
    pub fn view_range(&self) -> ViewRange {
        self.view
    }

    #[must_use]
    pub fn min_res(&self) -> Resolution {
        self.min_res
    }

    #[must_use]
    pub fn n_iterations(&self) -> u64 {
        self.n_iterations
    }

    #[must_use]
    pub fn grid(&self) -> &ComplexGrid {
        &self.grid
    }

    #[must_use]
    pub fn z(&self) -> &Grid<Complex64> {
        self.state.z()
    }

    /// True where the cell has not escaped yet.
    #[must_use]
    pub fn active_mask(&self) -> &Grid<bool> {
        self.state.active_mask()
    }

    #[must_use]
    pub fn escape_time(&self) -> &Grid<u32> {
        self.state.escape_time()
    }

    /// `None` outside the grid. Rows run along the imaginary axis.
    #[must_use]
    pub fn escape_time_at(&self, row: usize, col: usize) -> Option<u32> {
        self.state.escape_time().get(row, col)
    }

    #[must_use]
    pub fn is_active_at(&self, row: usize, col: usize) -> Option<bool> {
        self.state.active_mask().get(row, col)
    }

    #[must_use]
    pub fn z_at(&self, row: usize, col: usize) -> Option<Complex64> {
        self.state.z().get(row, col)
    }

    #[must_use]
    pub fn active_cell_count(&self) -> usize {
        self.state.active_count()
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn backend_kind(&self) -> EscapeBackendKind {
        self.backend.kind()
    }

    fn below_min_res(&self) -> bool {
        let (n_real, n_imag) = self.shape();
        n_real < self.min_res.width() || n_imag < self.min_res.height()
    }
}

/// Runs up to `rounds` rounds over `cells`, writing each cell back into
/// `state` as it escapes. Returns the cells still active at the end.
fn run_rounds(
    backend: &dyn EscapeBackend,
    state: &mut IterationState,
    mut cells: Vec<OrbitCell>,
    rounds: u64,
) -> Vec<OrbitCell> {
    for _ in 0..rounds {
        if cells.is_empty() {
            break;
        }

        backend.advance(&mut cells);
        cells.retain(|cell| {
            if !cell.active {
                state.store(cell);
            }
            cell.active
        });
    }

    cells
}
