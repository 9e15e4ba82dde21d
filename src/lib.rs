// src/lib.rs

//! Voronoi diagrams of at most three sites inside a rectangular viewport,
//! plus the record format and batch reader around them.

pub mod debug;
pub mod io;
pub mod math;
pub mod session;

pub use session::DiagramSession;
