// Copyright @yucwang 2026

pub mod dielectric;
pub mod fresnel;
pub mod lambertian_diffuse;
pub mod metal;
