//! Tint transform — parameter definitions, per-color evaluation, and the
//! lookup cube.

pub mod evaluate;
pub mod lut;
pub mod params;
