// Copyright @yucwang 2026

pub mod progressive;
pub mod renderer;
