//! VidVault Desktop Application
//!
//! Sign in, then upload, play, and delete the videos in your storage space.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "vidvault=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting VidVault...");

    let window = WindowBuilder::new()
        .with_title("VidVault")
        .with_inner_size(LogicalSize::new(960.0, 760.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
