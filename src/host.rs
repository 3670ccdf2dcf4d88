//! The slice of the browser the backdrop talks to.
//!
//! [`PageHost`] and [`Cancelable`] cover the side effects of the exit
//! transition so that logic can run against a recording fake in tests.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::error::StartupError;

/// Page-level side effects: body classes, timers, navigation.
pub trait PageHost: Clone + 'static {
	/// Add a class to `<body>`.
	fn add_body_class(&self, class: &str);
	/// Run `task` once after `delay_ms` milliseconds.
	fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
	/// Navigate the page to `url`.
	fn navigate(&self, url: &str);
}

/// An event whose default action can be suppressed.
pub trait Cancelable {
	/// Suppress the default action.
	fn prevent_default(&self);
}

impl Cancelable for Event {
	fn prevent_default(&self) {
		Event::prevent_default(self);
	}
}

/// Handles to the live window, document and body.
#[derive(Clone, Debug)]
pub struct Page {
	/// Global window.
	pub window: Window,
	/// The window's document.
	pub document: Document,
	/// The document's `<body>`.
	pub body: HtmlElement,
}

impl Page {
	/// Look up the current page, failing if any piece is absent.
	pub fn current() -> Result<Self, StartupError> {
		let window = web_sys::window().ok_or(StartupError::MissingWindow)?;
		let document = window.document().ok_or(StartupError::MissingDocument)?;
		let body = document.body().ok_or(StartupError::MissingBody)?;
		Ok(Self {
			window,
			document,
			body,
		})
	}

	/// Fetch a required element by id and cast it to `T`.
	pub fn element<T: JsCast>(&self, id: &str, expected: &'static str) -> Result<T, StartupError> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| StartupError::MissingElement { id: id.to_owned() })?
			.dyn_into::<T>()
			.map_err(|_| StartupError::WrongElementType {
				id: id.to_owned(),
				expected,
			})
	}

	/// Current viewport size in CSS pixels.
	pub fn viewport_size(&self) -> (f64, f64) {
		viewport_size(&self.window)
	}
}

/// Current `innerWidth`/`innerHeight`, or zero if the browser refuses.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

impl PageHost for Page {
	fn add_body_class(&self, class: &str) {
		if let Err(e) = self.body.class_list().add_1(class) {
			warn!("starfield: could not add body class {class}: {e:?}");
		}
	}

	fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
		let callback = Closure::once_into_js(move || task());
		let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
		if let Err(e) = self
			.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
		{
			warn!("starfield: setTimeout failed: {e:?}");
		}
	}

	fn navigate(&self, url: &str) {
		if let Err(e) = self.window.location().set_href(url) {
			warn!("starfield: navigation to {url} failed: {e:?}");
		}
	}
}
