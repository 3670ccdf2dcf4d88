//! Exit transition for the "back" link.
//!
//! A click is intercepted, the body gets the exiting class so CSS can play
//! its fade-out, and the real navigation happens after a fixed delay.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::config::SkyConfig;
use crate::error::StartupError;
use crate::host::{Cancelable, Page, PageHost};

/// What a click on the exit link resulted in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	/// Default navigation was suppressed and a delayed one was queued.
	Scheduled {
		/// The link's `href`.
		target: String,
		/// Delay before navigating.
		delay_ms: u32,
	},
	/// The link has no target; the browser handles the click as usual.
	Ignored,
}

/// Exit transition settings.
#[derive(Clone, Debug)]
pub struct ExitTransition {
	exiting_class: String,
	delay_ms: u32,
}

impl ExitTransition {
	/// Transition that adds `exiting_class` and navigates after `delay_ms`.
	pub fn new(exiting_class: impl Into<String>, delay_ms: u32) -> Self {
		Self {
			exiting_class: exiting_class.into(),
			delay_ms,
		}
	}

	/// Transition using the configured exiting class and delay.
	pub fn from_config(config: &SkyConfig) -> Self {
		Self::new(config.classes.exiting.clone(), config.exit_delay_ms)
	}

	/// Handle a click on the link whose `href` attribute is `target`.
	pub fn on_click<E, H>(&self, event: &E, target: Option<String>, host: &H) -> ClickOutcome
	where
		E: Cancelable,
		H: PageHost,
	{
		let Some(target) = target.filter(|t| !t.is_empty()) else {
			warn!("starfield: exit link has no href, leaving click alone");
			return ClickOutcome::Ignored;
		};

		event.prevent_default();
		host.add_body_class(&self.exiting_class);

		let (nav_host, nav_target) = (host.clone(), target.clone());
		host.set_timeout(
			self.delay_ms,
			Box::new(move || nav_host.navigate(&nav_target)),
		);
		debug!("starfield: leaving for {target} in {}ms", self.delay_ms);

		ClickOutcome::Scheduled {
			target,
			delay_ms: self.delay_ms,
		}
	}
}

/// Install the click handler on the configured exit link.
///
/// The listener lives for the rest of the page.
pub fn attach(page: &Page, config: &SkyConfig) -> Result<(), StartupError> {
	let link: Element = page.element(&config.ids.exit_link, "Element")?;
	let transition = ExitTransition::from_config(config);

	let (host, link_cb) = (page.clone(), link.clone());
	let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		transition.on_click(&ev, link_cb.get_attribute("href"), &host);
	});
	link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();

	Ok(())
}
