mod app;
mod config;
mod content;
mod input;
mod io;
mod layout;
mod message;
mod model;
mod state;
mod style;
mod subscription;
mod view;

use app::Portfolio;
use config::Config;
use eframe::egui;
use io::EmailJsRelay;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = Config::create_default() {
        warn!("Could not create default config: {}", e);
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title(&config.site.title),
        ..Default::default()
    };

    let title = config.site.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let relay = EmailJsRelay::new(config.relay.clone())?;
            Ok(Box::new(Portfolio::new(cc, config, Arc::new(relay))))
        }),
    )
}
