//! The entry routine: three unconditional steps written in order.

use std::io::Write;

use anyhow::Result;
use candle_core::{Device, Tensor};

use crate::frame::Frame;
use crate::render::render_1d;

pub const GREETING: &str = "Hello, World!";

/// Write the full demo transcript to `out`: the greeting line, the
/// labeled vector line, and the labeled table block.
///
/// Holds no state; calling it twice on the same writer yields the
/// transcript twice, byte for byte.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let dev = Device::Cpu;

    writeln!(out, "{GREETING}")?;

    let xs = Tensor::from_slice(&[1i64, 2, 3, 4, 5], 5, &dev)?;
    writeln!(out, "Numpy Array: {}", render_1d(&xs)?)?;

    let table = Frame::from_columns(&[("A", &[1, 2, 3]), ("B", &[4, 5, 6])], &dev)?;
    writeln!(out, "Pandas DataFrame:")?;
    writeln!(out, "{}", table.render()?)?;

    Ok(())
}

/// Run the demo against locked stdout. This is all the binary does.
pub fn run_stdout() -> Result<()> {
    let stdout = std::io::stdout();
    run(&mut stdout.lock())
}
