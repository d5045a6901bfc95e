//! Pixel frame engine demo binary.
//!
//! Opens a window of `logical * pixel_scale` device pixels and runs the demo
//! scene until the window is closed or Escape is pressed.

mod cli;
mod demo;

use std::process::ExitCode;

use clap::Parser;
use pfe_core::FrameLoop;
use pfe_render::DesktopBackend;

use cli::Cli;
use demo::Demo;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match cli.engine_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Pixel frame engine starting...");

    let mut frame_loop = match FrameLoop::new(config, Demo::new(), DesktopBackend::new()) {
        Ok(frame_loop) => frame_loop,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match frame_loop.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Engine failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
