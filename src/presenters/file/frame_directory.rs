use std::error::Error;
use std::path::{Path, PathBuf};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::zoom_animation::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes each frame to `<directory>/frame_<index>.<ext>`.
pub struct FrameDirectory<'a, P: FilePresenterPort> {
    presenter: &'a P,
    directory: PathBuf,
    written: usize,
}

impl<'a, P: FilePresenterPort> FrameDirectory<'a, P> {
    pub fn create(presenter: &'a P, directory: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::create_dir_all(directory.as_ref())?;

        Ok(Self {
            presenter,
            directory: directory.as_ref().to_path_buf(),
            written: 0,
        })
    }

    #[must_use]
    pub fn frame_path(&self, frame_index: usize) -> PathBuf {
        self.directory.join(format!(
            "frame_{:05}.{}",
            frame_index,
            self.presenter.frame_extension()
        ))
    }

    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<P: FilePresenterPort> FrameSink for FrameDirectory<'_, P> {
    fn accept(&mut self, frame_index: usize, frame: &PixelBuffer) -> Result<(), Box<dyn Error>> {
        self.presenter.present(frame, &self.frame_path(frame_index))?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::file::ppm::PpmFilePresenter;

    #[test]
    fn test_frame_paths_are_zero_padded() {
        let presenter = PpmFilePresenter::new();
        let directory = std::env::temp_dir().join("mandelbrot_zoom_frame_paths");
        let frames = FrameDirectory::create(&presenter, &directory).unwrap();

        assert_eq!(frames.frame_path(42), directory.join("frame_00042.ppm"));
        assert_eq!(frames.written(), 0);
    }
}
