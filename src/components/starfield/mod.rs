//! Animated night-sky backdrop.
//!
//! Draws four independent layers on a full-viewport canvas:
//! - Drifting dust motes
//! - Stars that fade in, twinkle, fade out and reappear elsewhere
//! - Two copies of a small glowing constellation
//! - Occasional meteors with a gradient tail
//!
//! # Example
//!
//! ```ignore
//! let page = Page::current()?;
//! let canvas = page.element("huo-bu", "HtmlCanvasElement")?;
//! let mut handle = starfield::start(&page, canvas, SkyConfig::default(), Theme::default())?;
//! // later
//! handle.stop();
//! ```

mod component;
mod constellation;
mod meteor;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::{BackdropHandle, start};
pub use constellation::{Constellation, Planet};
pub use meteor::{FadeWindows, Meteor};
pub use particles::{Dust, Fade, Star, wrap};
pub use state::Starfield;
pub use theme::Theme;
