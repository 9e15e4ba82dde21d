// src/debug/visualization/mod.rs
pub mod svg;

pub use self::svg::{render_diagram, render_svg, save_svg};
