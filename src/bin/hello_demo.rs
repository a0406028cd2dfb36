//! Minimal hello demo binary
//!
//! Build: cargo build --release --bin hello_demo

use anyhow::Result;

fn main() -> Result<()> {
    hellocandleframe::run_stdout()
}
