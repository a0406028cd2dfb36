//! Numpy-style textual rendering for 1-D integer tensors.

use anyhow::Result;
use candle_core::Tensor;

/// Render a 1-D `I64` tensor the way numpy prints a vector: `[1 2 3 4 5]`.
pub fn render_1d(t: &Tensor) -> Result<String> {
    anyhow::ensure!(t.dims().len() == 1, "tensor must be 1-D");
    let values = t.to_vec1::<i64>()?;
    let body = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("[{body}]"))
}
