// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

/// Whether the accumulation buffer holds history worth blending with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccumulationState {
    /// Frame 0: whatever the buffer contains is ignored.
    Cold,
    /// Frame n > 0: the buffer holds the mean of the previous n frames.
    Warm,
}

impl AccumulationState {
    pub fn from_frame_count(frame_count: u32) -> Self {
        if frame_count == 0 {
            AccumulationState::Cold
        } else {
            AccumulationState::Warm
        }
    }
}

/// Weight of the newest frame in an incremental mean over `frame_count + 1`
/// frames.
pub fn blend_weight(frame_count: u32) -> Float {
    1.0 / (frame_count as Float + 1.0)
}

/// Folds this frame's estimate into the running mean.
pub fn accumulate(previous: RGBSpectrum, current: RGBSpectrum, frame_count: u32) -> RGBSpectrum {
    match AccumulationState::from_frame_count(frame_count) {
        AccumulationState::Cold => current,
        AccumulationState::Warm => previous + (current - previous) * blend_weight(frame_count),
    }
}
