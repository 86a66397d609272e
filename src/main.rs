// Copyright 2020 TwoCookingMice

use glimmer::core::scene::default_scene;
use glimmer::core::settings::{RenderSettings, USAGE};
use glimmer::io::{exr_utils, png_utils};
use glimmer::renderers::progressive::{ProgressiveRenderer, ProgressiveSession};
use indicatif::{ProgressBar, ProgressStyle};

use std::env;
use std::time::Instant;

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let settings = match RenderSettings::parse_args(&args[1..]) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Usage: {} {}", args[0], USAGE);
            std::process::exit(1);
        }
    };

    let mut renderer = ProgressiveRenderer::default();
    if let Some(threads) = settings.threads {
        renderer = renderer.with_thread_count(threads);
    }
    log::info!("Rendering {} frames at {}x{} on {} threads.",
               settings.frames, settings.width, settings.height, renderer.thread_count());

    let mut session = ProgressiveSession::new(Box::new(renderer),
                                              default_scene(),
                                              settings.camera(),
                                              settings.width,
                                              settings.height);

    let progress = ProgressBar::new(settings.frames as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} frames")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    for _ in 0..settings.frames {
        session.render_frame();
        progress.inc(1);
    }
    progress.finish_and_clear();
    log::info!("Accumulated {} frames in {:.2?}.", session.frame_count(), start.elapsed());

    if let Err(e) = exr_utils::write_bitmap_to_exr(session.accumulation(), &settings.output_path) {
        log::error!("failed to write {}: {}", settings.output_path, e);
        std::process::exit(2);
    }
    if let Some(png_path) = &settings.png_path {
        if let Err(e) = png_utils::write_bitmap_to_png(session.accumulation(), png_path) {
            log::error!("failed to write {}: {}", png_path, e);
            std::process::exit(2);
        }
    }
}
