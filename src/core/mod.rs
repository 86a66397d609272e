// Copyright @yucwang 2021

pub mod accumulator;
pub mod bsdf;
pub mod integrator;
pub mod interaction;
pub mod rng;
pub mod sensor;
pub mod scene;
pub mod settings;
pub mod shape;
