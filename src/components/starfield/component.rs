//! Browser wiring for the starfield canvas.
//!
//! [`start`] sizes the canvas to the viewport, listens for window resizes and
//! drives [`Starfield::tick`] plus [`render::render`] from
//! `requestAnimationFrame`. The returned [`BackdropHandle`] stops the loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::Starfield;
use super::theme::Theme;
use crate::config::SkyConfig;
use crate::error::StartupError;
use crate::host::{Page, viewport_size};

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Control over a running backdrop.
///
/// Dropping the handle leaves the animation running for the life of the
/// page; call [`BackdropHandle::stop`] to tear it down.
pub struct BackdropHandle {
	window: Window,
	field: Rc<RefCell<Starfield>>,
	running: Rc<Cell<bool>>,
	frame_request: Rc<Cell<Option<i32>>>,
	animate: Callback,
	resize_cb: Callback,
}

impl BackdropHandle {
	/// False once [`BackdropHandle::stop`] has been called.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Cancel the pending frame, drop the resize listener and release the
	/// callbacks. Calling it again is a no-op.
	pub fn stop(&mut self) {
		if !self.running.replace(false) {
			return;
		}
		if let Some(id) = self.frame_request.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		if let Some(cb) = self.resize_cb.borrow_mut().take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.animate.borrow_mut().take();
		info!("starfield: stopped after {} frames", self.field.borrow().frame);
	}
}

fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window) -> (f64, f64) {
	let (w, h) = viewport_size(window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

/// Start animating `canvas` at full viewport size.
pub fn start(
	page: &Page,
	canvas: HtmlCanvasElement,
	config: SkyConfig,
	theme: Theme,
) -> Result<BackdropHandle, StartupError> {
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(StartupError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| StartupError::ContextUnavailable)?;

	let window = page.window.clone();
	let (w, h) = fit_canvas(&canvas, &window);
	let seed = js_sys::Date::now().to_bits();
	let field = Rc::new(RefCell::new(Starfield::new(config, w, h, seed)));

	let running = Rc::new(Cell::new(true));
	let frame_request: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));

	let (field_resize, window_resize) = (field.clone(), window.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let (nw, nh) = fit_canvas(&canvas, &window_resize);
		field_resize.borrow_mut().resize(nw, nh);
		debug!("starfield: resized to {nw}x{nh}");
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (field_anim, animate_inner, running_anim, request_anim, window_anim) = (
		field.clone(),
		animate.clone(),
		running.clone(),
		frame_request.clone(),
		window.clone(),
	);
	*animate.borrow_mut() = Some(Closure::new(move || {
		if !running_anim.get() {
			return;
		}
		{
			let mut sf = field_anim.borrow_mut();
			sf.tick();
			render::render(&sf, &ctx, &theme);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			request_anim.set(window_anim.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		frame_request.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
	}

	info!(
		"starfield: running on {w}x{h} with {} stars, {} dust",
		field.borrow().stars.len(),
		field.borrow().dust.len()
	);

	Ok(BackdropHandle {
		window,
		field,
		running,
		frame_request,
		animate,
		resize_cb,
	})
}
