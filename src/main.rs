#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// SentraIntel - Advanced Security Solutions
#[derive(Parser, Debug)]
#[command(name = "sentraintel-desktop")]
#[command(about = "SentraIntel - Advanced Security Solutions")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Start with a maximized window
    #[arg(long)]
    maximized: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        width = args.width,
        height = args.height,
        maximized = args.maximized,
        "Starting SentraIntel desktop"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SentraIntel - Advanced Security Solutions")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_maximized(args.maximized)
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
