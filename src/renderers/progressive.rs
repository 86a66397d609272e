// Copyright @yucwang 2026

use crate::core::accumulator::{accumulate, AccumulationState};
use crate::core::integrator::Integrator;
use crate::core::rng::WangRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::integrators::path::PathIntegrator;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::perspective::PerspectiveCamera;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

/// Edge length of the square invocation groups a frame is dispatched in.
pub const GROUP_SIZE: usize = 16;
pub const SAMPLES_PER_PIXEL: u32 = 4;

/// Number of groups along each axis needed to cover a `width` x `height`
/// image. The last row and column may be partially outside the image.
pub fn dispatch_size(width: usize, height: usize) -> (usize, usize) {
    ((width + GROUP_SIZE - 1) / GROUP_SIZE, (height + GROUP_SIZE - 1) / GROUP_SIZE)
}

/// Offset of sample `index` inside its pixel. The four samples land in the
/// four quadrants, each jittered within its quadrant.
pub fn subpixel_offset(index: u32, rng: &mut WangRng) -> Vector2f {
    let stratum = Vector2f::new((index % 2) as Float, (index / 2) as Float) * 0.5;
    stratum + rng.random_in_unit_square() * 0.5
}

pub struct ProgressiveRenderer {
    integrator: Box<dyn Integrator>,
    thread_count: usize,
}

impl ProgressiveRenderer {
    pub fn new(integrator: Box<dyn Integrator>) -> Self {
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { integrator, thread_count }
    }

    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count.max(1);
        self
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// This frame's estimate for pixel `(x, y)`: the mean of
    /// `SAMPLES_PER_PIXEL` stratified paths.
    pub fn sample_pixel(&self,
                        scene: &Scene,
                        sensor: &dyn Sensor,
                        pixel: (usize, usize),
                        size: (usize, usize),
                        frame_count: u32) -> RGBSpectrum {
        let (x, y) = pixel;
        let (width, height) = size;
        let id = (x as u32, y as u32);
        let mut rng = WangRng::for_invocation(id, id, frame_count);

        let mut color = RGBSpectrum::default();
        for i in 0..SAMPLES_PER_PIXEL {
            let offset = subpixel_offset(i, &mut rng);
            let uv = Vector2f::new((x as Float + offset.x) / width as Float,
                                   (y as Float + offset.y) / height as Float);
            let ray = sensor.sample_ray(&uv);
            color += self.integrator.trace_ray_forward(scene, ray, &mut rng);
        }

        color / SAMPLES_PER_PIXEL as Float
    }
}

impl Default for ProgressiveRenderer {
    fn default() -> Self {
        Self::new(Box::new(PathIntegrator::default()))
    }
}

impl Renderer for ProgressiveRenderer {
    fn render_frame(&self,
                    scene: &Scene,
                    sensor: &dyn Sensor,
                    frame_count: u32,
                    output: &mut Bitmap,
                    accumulation: &mut Bitmap) {
        assert_eq!((output.width(), output.height()), (accumulation.width(), accumulation.height()),
                   "output and accumulation images must have the same size");

        let (width, height) = (accumulation.width(), accumulation.height());
        if width == 0 || height == 0 {
            return;
        }

        let (groups_x, groups_y) = dispatch_size(width, height);
        let total_groups = groups_x * groups_y;
        log::debug!("frame {} ({:?}): {}x{} groups on {} threads",
                    frame_count, AccumulationState::from_frame_count(frame_count),
                    groups_x, groups_y, self.thread_count);

        let scene_ref: &Scene = scene;
        let history: &Bitmap = accumulation;

        let next_group = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel::<Vec<(usize, usize, RGBSpectrum)>>();
        let mut resolved = vec![RGBSpectrum::default(); width * height];

        thread::scope(|scope| {
            for _ in 0..self.thread_count {
                let next_group = Arc::clone(&next_group);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let group_index = next_group.fetch_add(1, Ordering::Relaxed);
                        if group_index >= total_groups {
                            break;
                        }

                        let x0 = (group_index % groups_x) * GROUP_SIZE;
                        let y0 = (group_index / groups_x) * GROUP_SIZE;

                        let mut group = Vec::with_capacity(GROUP_SIZE * GROUP_SIZE);
                        for y in y0..y0 + GROUP_SIZE {
                            for x in x0..x0 + GROUP_SIZE {
                                // Invocations past the image edge do nothing.
                                if !history.contains(x, y) {
                                    continue;
                                }

                                let current = self.sample_pixel(scene_ref, sensor, (x, y),
                                                                (width, height), frame_count);
                                let previous = RGBSpectrum::from_rgba(&history[(x, y)]);
                                group.push((x, y, accumulate(previous, current, frame_count)));
                            }
                        }
                        if tx.send(group).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for _ in 0..total_groups {
                if let Ok(group) = rx.recv() {
                    for (x, y, color) in group {
                        resolved[x + width * y] = color;
                    }
                }
            }
        });

        for y in 0..height {
            for x in 0..width {
                let rgba = resolved[x + width * y].to_rgba();
                accumulation[(x, y)] = rgba;
                output[(x, y)] = rgba;
            }
        }
    }
}

/// Host side of progressive rendering: owns both images and the frame
/// counter, and restarts accumulation whenever the view changes.
pub struct ProgressiveSession {
    renderer: Box<dyn Renderer>,
    scene: Scene,
    camera: PerspectiveCamera,
    output: Bitmap,
    accumulation: Bitmap,
    frame_count: u32,
}

impl ProgressiveSession {
    pub fn new(renderer: Box<dyn Renderer>,
               scene: Scene,
               camera: PerspectiveCamera,
               width: usize,
               height: usize) -> Self {
        log::info!("progressive session: {}x{}, {} objects", width, height, scene.len());
        log::debug!("{}", camera.describe());
        for object in scene.objects() {
            log::debug!("  {}: {} ({})", object.name.as_deref().unwrap_or("unnamed"),
                        object.shape().describe(), object.material.name());
        }
        Self {
            renderer,
            scene,
            camera,
            output: Bitmap::new(width, height),
            accumulation: Bitmap::new(width, height),
            frame_count: 0,
        }
    }

    /// Renders the next frame, then advances the counter. The first frame
    /// after construction or a reset overwrites the accumulation image.
    pub fn render_frame(&mut self) {
        self.renderer.render_frame(&self.scene, &self.camera, self.frame_count,
                                   &mut self.output, &mut self.accumulation);
        self.frame_count = self.frame_count.saturating_add(1);
    }

    /// Discards accumulated history. The buffers keep their contents, but
    /// the next frame ignores them.
    pub fn reset(&mut self) {
        log::info!("resetting accumulation after {} frames", self.frame_count);
        self.frame_count = 0;
    }

    pub fn set_camera(&mut self, camera: PerspectiveCamera) {
        if camera != self.camera {
            self.camera = camera;
            self.reset();
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of frames folded into the accumulation image so far.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn state(&self) -> AccumulationState {
        AccumulationState::from_frame_count(self.frame_count)
    }

    pub fn output(&self) -> &Bitmap {
        &self.output
    }

    pub fn accumulation(&self) -> &Bitmap {
        &self.accumulation
    }
}
