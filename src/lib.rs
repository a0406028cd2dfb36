//! Hello-world demo on Candle: a greeting, a tensor vector, and a small column frame.

pub mod demo;
pub mod frame;
pub mod render;

pub use demo::{run, run_stdout, GREETING};
pub use frame::Frame;
// Re-export core Candle types for convenience in downstream crates
pub use candle_core::{DType, Device, Tensor};
