//! starfield-backdrop: animated night-sky canvas background for static pages.
//!
//! This crate compiles to WASM and attaches to an existing page: it animates
//! stars, dust, constellations and meteors on a fixed canvas and turns a
//! "back" link into a delayed exit transition.

use log::{Level, info};

pub mod components;
pub mod config;
pub mod error;
pub mod host;

pub use components::exit_link::{ClickOutcome, ExitTransition};
pub use components::starfield::{BackdropHandle, Starfield, Theme};
pub use config::SkyConfig;
pub use error::StartupError;
pub use host::{Cancelable, Page, PageHost};

use components::{exit_link, starfield};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Attach the backdrop and exit link to the current page.
///
/// Fails if the canvas or link is missing. On success the body receives the
/// loaded class after the configured delay.
pub fn run() -> Result<BackdropHandle, StartupError> {
	let page = Page::current()?;
	let config = config::load(&page.document);

	let canvas = page.element(&config.ids.canvas, "HtmlCanvasElement")?;
	exit_link::attach(&page, &config)?;

	let (host, loaded) = (page.clone(), config.classes.loaded.clone());
	page.set_timeout(
		config.loaded_delay_ms,
		Box::new(move || host.add_body_class(&loaded)),
	);

	starfield::start(&page, canvas, config, Theme::default())
}
