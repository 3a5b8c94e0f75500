//! # Parking Driver
//!
//! Entry point for the `parking` binary. Rolls out random-policy episodes in
//! the parking environment, the same loop used to eyeball the reward signal
//! while developing it. Pass `--frames <dir>` to dump every rendered frame as
//! a PNG and `--pace` to slow stepping down to real time.

mod app;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    app::run(app::Args::parse())
}
