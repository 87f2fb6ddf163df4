use clap::Parser;
use mandelbrot_zoom::{Cli, CliController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let controller = CliController::new(PpmFilePresenter::new());

    controller.run(&cli)
}
