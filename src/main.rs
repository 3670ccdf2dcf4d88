//! Client entrypoint for the WASM build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use log::error;
use starfield_backdrop::{init_logging, run};

fn main() {
	init_logging();

	if let Err(e) = run() {
		error!("starfield: startup failed: {e}");
	}
}
