use glimmer::core::accumulator::accumulate;
use glimmer::core::scene::default_scene;
use glimmer::core::settings::{RenderSettings, USAGE};
use glimmer::math::spectrum::RGBSpectrum;
use glimmer::renderers::progressive::ProgressiveRenderer;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <x> <y> {}", args[0], USAGE);
        std::process::exit(1);
    }

    let x: usize = args[1].parse().unwrap_or(0);
    let y: usize = args[2].parse().unwrap_or(0);
    let settings = match RenderSettings::parse_args(&args[3..]) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if x >= settings.width || y >= settings.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, settings.width, settings.height);
        std::process::exit(2);
    }

    let scene = default_scene();
    let camera = settings.camera();
    let renderer = ProgressiveRenderer::default();
    let size = (settings.width, settings.height);

    let mut accum = RGBSpectrum::default();
    for frame in 0..settings.frames {
        let estimate = renderer.sample_pixel(&scene, &camera, (x, y), size, frame);
        accum = accumulate(accum, estimate, frame);
        println!(
            "frame {:>4}: estimate R {:.6}, G {:.6}, B {:.6} | mean R {:.6}, G {:.6}, B {:.6}",
            frame, estimate[0], estimate[1], estimate[2], accum[0], accum[1], accum[2]
        );
    }
}
