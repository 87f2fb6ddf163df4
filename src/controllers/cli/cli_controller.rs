use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::controllers::cli::args::{AnimateArgs, Cli, Command, StillArgs, WindowArgs};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{Deadline, NeverCancel};
use crate::core::actions::render_request::render_request::{RenderRequest, render, render_height_map};
use crate::core::actions::zoom_animation::zoom_animation::{ZoomAnimation, ZoomAnimationError};
use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_range::ViewRange;
use crate::core::fractals::mandelbrot::config::MandelbrotSetConfig;
use crate::core::fractals::mandelbrot::mandelbrot_set::MandelbrotSet;
use crate::presenters::file::frame_directory::FrameDirectory;

const DEFAULT_IMAGE_PATH: &str = "output/mandelbrot.ppm";
const DEFAULT_HMAP_PATH: &str = "output/hmap.pgm";

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run(&self, cli: &Cli) -> Result<(), Box<dyn Error>> {
        match &cli.command {
            Command::Render(args) => {
                let request = still_request(args, cli.backend, cli.seed)?;
                let output = output_path(args, DEFAULT_IMAGE_PATH);
                self.render(&request, &output)
            }
            Command::Hmap(args) => {
                let request = still_request(args, cli.backend, cli.seed)?;
                let output = output_path(args, DEFAULT_HMAP_PATH);
                self.height_map(&request, &output)
            }
            Command::Animate(args) => {
                let (config, animation) = animation_settings(args, cli.backend, cli.seed)?;
                self.animate(&config, &animation, &args.output_dir, args.time_limit_secs)
            }
        }
    }

    pub fn render(&self, request: &RenderRequest, output: &Path) -> Result<(), Box<dyn Error>> {
        info!(
            "rendering {} with {} iterations on the {} backend",
            request.resolution, request.iterations, request.backend
        );

        let start = Instant::now();
        let image = render(request)?;
        info!("rendered in {:?}", start.elapsed());

        ensure_parent(output)?;
        self.presenter.present(&image, output)?;
        info!("saved to {}", output.display());

        Ok(())
    }

    pub fn height_map(&self, request: &RenderRequest, output: &Path) -> Result<(), Box<dyn Error>> {
        info!(
            "rendering {} height map with {} iterations",
            request.resolution, request.iterations
        );

        let map = render_height_map(request)?;

        ensure_parent(output)?;
        self.presenter.present_height_map(&map, output)?;
        info!("saved to {}", output.display());

        Ok(())
    }

    pub fn animate(
        &self,
        config: &MandelbrotSetConfig,
        animation: &ZoomAnimation,
        output_dir: &Path,
        time_limit_secs: Option<u64>,
    ) -> Result<(), Box<dyn Error>> {
        let mut set = MandelbrotSet::from_config(config)?;
        let mut frames = FrameDirectory::create(&self.presenter, output_dir)?;

        info!(
            "animating {} frames at {} into {}",
            animation.frames,
            animation.frame_resolution,
            output_dir.display()
        );

        let outcome = match time_limit_secs {
            Some(secs) => animation.run(
                &mut set,
                &mut frames,
                &Deadline::after(Duration::from_secs(secs)),
            ),
            None => animation.run(&mut set, &mut frames, &NeverCancel),
        };

        match outcome {
            Ok(report) => {
                info!(
                    "wrote {} frames; final grid {}x{} after {} rounds",
                    report.frames, report.final_shape.0, report.final_shape.1, report.n_iterations
                );
                Ok(())
            }
            Err(ZoomAnimationError::Cancelled(_)) => {
                info!("time limit reached after {} frames", frames.written());
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn view_range(window: &WindowArgs) -> Result<ViewRange, Box<dyn Error>> {
    Ok(ViewRange::new(
        window.real_lower,
        window.real_upper,
        window.imag_lower,
        window.imag_upper,
    )?)
}

fn still_request(
    args: &StillArgs,
    backend: EscapeBackendKind,
    palette_seed: Option<u64>,
) -> Result<RenderRequest, Box<dyn Error>> {
    Ok(RenderRequest {
        view: view_range(&args.window)?,
        resolution: Resolution::new(args.width, args.height)?,
        iterations: args.iterations,
        backend,
        palette_seed,
    })
}

fn output_path(args: &StillArgs, default: &str) -> PathBuf {
    args.output.clone().unwrap_or_else(|| PathBuf::from(default))
}

fn animation_settings(
    args: &AnimateArgs,
    backend: EscapeBackendKind,
    palette_seed: Option<u64>,
) -> Result<(MandelbrotSetConfig, ZoomAnimation), Box<dyn Error>> {
    let defaults = MandelbrotSetConfig::default();
    let config = MandelbrotSetConfig {
        view: view_range(&args.window)?,
        n_real: args.samples_real.unwrap_or(defaults.n_real),
        n_imag: args.samples_imag.unwrap_or(defaults.n_imag),
        min_res: match args.min_res {
            Some((width, height)) => Resolution::new(width, height)?,
            None => defaults.min_res,
        },
        backend,
        palette_seed,
    };

    let default_animation = ZoomAnimation::default();
    let animation = ZoomAnimation {
        warmup_iterations: args.warmup_iterations.unwrap_or(default_animation.warmup_iterations),
        iterations_per_frame: args
            .iterations_per_frame
            .unwrap_or(default_animation.iterations_per_frame),
        frames: args.frames.unwrap_or(default_animation.frames),
        border: args.border.unwrap_or(default_animation.border),
        frame_resolution: match args.frame_size {
            Some((width, height)) => Resolution::new(width, height)?,
            None => default_animation.frame_resolution,
        },
    };

    Ok((config, animation))
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::height_map::HeightMap;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use clap::Parser;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        images: RefCell<Vec<(PathBuf, usize, usize)>>,
        height_maps: RefCell<Vec<(PathBuf, usize, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.images
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.width(), buffer.height()));
            Ok(())
        }

        fn present_height_map(&self, map: &HeightMap, filepath: &Path) -> std::io::Result<()> {
            self.height_maps
                .borrow_mut()
                .push((filepath.to_path_buf(), map.width(), map.height()));
            Ok(())
        }

        fn frame_extension(&self) -> &str {
            "rec"
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join("mandelbrot_zoom_cli_tests").join(name)
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["mandelbrot_zoom", "--backend", "serial", "--seed", "1"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_render_presents_one_image() {
        let output = scratch_dir("render").join("still.ppm");
        let output_arg = output.to_string_lossy().to_string();
        let cli = parse(&["render", "--width", "12", "--height", "9", "-n", "20", "-o", &output_arg]);
        let controller = CliController::new(RecordingPresenter::default());

        controller.run(&cli).unwrap();

        assert_eq!(*controller.presenter.images.borrow(), vec![(output, 12, 9)]);
        assert!(controller.presenter.height_maps.borrow().is_empty());
    }

    #[test]
    fn test_hmap_presents_height_map() {
        let output = scratch_dir("hmap").join("field.pgm");
        let output_arg = output.to_string_lossy().to_string();
        let cli = parse(&["hmap", "--width", "10", "--height", "6", "-o", &output_arg]);
        let controller = CliController::new(RecordingPresenter::default());

        controller.run(&cli).unwrap();

        assert_eq!(*controller.presenter.height_maps.borrow(), vec![(output, 10, 6)]);
    }

    #[test]
    fn test_animate_writes_each_frame() {
        let output_dir = scratch_dir("animate");
        let output_arg = output_dir.to_string_lossy().to_string();
        let cli = parse(&[
            "animate",
            "--samples-real",
            "40",
            "--samples-imag",
            "30",
            "--min-res",
            "30x20",
            "--frames",
            "4",
            "--border",
            "3",
            "--warmup-iterations",
            "5",
            "--iterations-per-frame",
            "2",
            "--frame-size",
            "16x12",
            "-o",
            &output_arg,
        ]);
        let controller = CliController::new(RecordingPresenter::default());

        controller.run(&cli).unwrap();

        let images = controller.presenter.images.borrow();
        assert_eq!(images.len(), 4);
        assert_eq!(images[0], (output_dir.join("frame_00000.rec"), 16, 12));
        assert_eq!(images[3].0, output_dir.join("frame_00003.rec"));
    }

    #[test]
    fn test_animate_with_spent_time_limit_writes_nothing() {
        let output_dir = scratch_dir("animate_deadline");
        let output_arg = output_dir.to_string_lossy().to_string();
        let cli = parse(&[
            "animate",
            "--samples-real",
            "20",
            "--samples-imag",
            "20",
            "--min-res",
            "10x10",
            "--time-limit-secs",
            "0",
            "-o",
            &output_arg,
        ]);
        let controller = CliController::new(RecordingPresenter::default());

        controller.run(&cli).unwrap();

        assert!(controller.presenter.images.borrow().is_empty());
    }

    #[test]
    fn test_invalid_window_is_an_error() {
        let cli = parse(&["render", "--real-lower", "2", "--real-upper", "1"]);
        let controller = CliController::new(RecordingPresenter::default());

        assert!(controller.run(&cli).is_err());
        assert!(controller.presenter.images.borrow().is_empty());
    }
}
