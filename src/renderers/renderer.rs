// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;

pub trait Renderer {
    /// Renders one frame: every pixel's estimate is folded into
    /// `accumulation` according to `frame_count`, and the blended result is
    /// also written to `output`.
    fn render_frame(&self,
                    scene: &Scene,
                    sensor: &dyn Sensor,
                    frame_count: u32,
                    output: &mut Bitmap,
                    accumulation: &mut Bitmap);
}
