//! Tuning knobs for the backdrop and the ids/classes it expects on the page.
//!
//! Defaults reproduce the stock look. A page may override any subset by
//! embedding JSON in `<script type="application/json" id="starfield-config">`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

/// Id of the optional script element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "starfield-config";

/// Element ids the backdrop attaches to.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostIds {
	/// The `<canvas>` the sky is drawn on.
	pub canvas: String,
	/// The link whose click plays the exit transition.
	pub exit_link: String,
}

impl Default for HostIds {
	fn default() -> Self {
		Self {
			canvas: "huo-bu".into(),
			exit_link: "fan-hui-an-niu".into(),
		}
	}
}

/// Body classes toggled to drive the page's CSS transitions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageClasses {
	/// Added shortly after startup.
	pub loaded: String,
	/// Added when the exit link is clicked.
	pub exiting: String,
}

impl Default for PageClasses {
	fn default() -> Self {
		Self {
			loaded: "jia-zai-wan-cheng".into(),
			exiting: "tui-chu-dong-hua".into(),
		}
	}
}

/// Complete backdrop configuration.
///
/// Speeds are in pixels per frame and durations in frames unless the field
/// name says otherwise; the animation is frame-locked.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
	/// Number of twinkling stars.
	pub star_count: usize,
	/// Upper bound on star radius.
	pub star_max_size: f64,
	/// Number of dust motes.
	pub dust_count: usize,
	/// Maximum star drift per axis.
	pub star_speed: f64,
	/// Maximum dust drift per axis.
	pub dust_speed: f64,
	/// Core radius of constellation points.
	pub planet_radius: f64,
	/// Base glow added around each constellation point.
	pub planet_glow: f64,
	/// Slowest twinkle rate, radians per frame.
	pub twinkle_speed_base: f64,
	/// Probability of spawning a meteor on any given frame.
	pub meteor_chance: f64,
	/// Slowest meteor speed.
	pub meteor_speed_base: f64,
	/// Meteor fade-in window.
	pub meteor_fade_in: f64,
	/// Meteor fade-out window.
	pub meteor_fade_out: f64,
	/// Delay before the loaded class is added.
	pub loaded_delay_ms: u32,
	/// Delay between an exit click and navigation.
	pub exit_delay_ms: u32,
	/// Element ids on the host page.
	pub ids: HostIds,
	/// Body classes for the page transitions.
	pub classes: PageClasses,
}

impl Default for SkyConfig {
	fn default() -> Self {
		Self {
			star_count: 60,
			star_max_size: 3.0,
			dust_count: 80,
			star_speed: 0.1,
			dust_speed: 0.1,
			planet_radius: 1.0,
			planet_glow: 2.0,
			twinkle_speed_base: 0.008,
			meteor_chance: 0.003,
			meteor_speed_base: 4.0,
			meteor_fade_in: 40.0,
			meteor_fade_out: 60.0,
			loaded_delay_ms: 100,
			exit_delay_ms: 1000,
			ids: HostIds::default(),
			classes: PageClasses::default(),
		}
	}
}

impl SkyConfig {
	/// Parse a (possibly partial) JSON override document.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Read overrides from the page, falling back to defaults.
///
/// A missing script element is normal; malformed JSON is logged and ignored.
pub fn load(document: &Document) -> SkyConfig {
	let Some(json_text) = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return SkyConfig::default();
	};

	match SkyConfig::from_json(&json_text) {
		Ok(config) => {
			info!("starfield: loaded config overrides from #{CONFIG_ELEMENT_ID}");
			config
		}
		Err(e) => {
			warn!("starfield: ignoring malformed config: {}", e);
			SkyConfig::default()
		}
	}
}
