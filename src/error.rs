//! Startup failures.
//!
//! Everything after startup is best-effort drawing, so the only errors the
//! crate surfaces are the ones that stop the backdrop from being wired up.

use std::fmt;

use wasm_bindgen::JsValue;

/// Reasons the backdrop could not be attached to the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupError {
	/// No global `window` (not running in a browser main thread).
	MissingWindow,
	/// The window has no document.
	MissingDocument,
	/// The document has no `<body>`.
	MissingBody,
	/// No element with the given id exists.
	MissingElement {
		/// The id that was looked up.
		id: String,
	},
	/// The element exists but is not of the expected DOM type.
	WrongElementType {
		/// The id that was looked up.
		id: String,
		/// Name of the DOM interface that was required.
		expected: &'static str,
	},
	/// The canvas refused to hand out a 2D context.
	ContextUnavailable,
	/// A DOM call threw.
	Js(String),
}

impl fmt::Display for StartupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingWindow => f.write_str("no global window available"),
			Self::MissingDocument => f.write_str("window has no document"),
			Self::MissingBody => f.write_str("document has no body"),
			Self::MissingElement { id } => write!(f, "required element #{id} not found"),
			Self::WrongElementType { id, expected } => {
				write!(f, "element #{id} is not a {expected}")
			}
			Self::ContextUnavailable => f.write_str("canvas 2d context unavailable"),
			Self::Js(msg) => write!(f, "DOM call failed: {msg}"),
		}
	}
}

impl std::error::Error for StartupError {}

impl From<JsValue> for StartupError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl From<StartupError> for JsValue {
	fn from(err: StartupError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn messages_name_the_missing_piece() {
		let err = StartupError::MissingElement {
			id: "huo-bu".into(),
		};
		assert_eq!(err.to_string(), "required element #huo-bu not found");

		let err = StartupError::WrongElementType {
			id: "huo-bu".into(),
			expected: "HtmlCanvasElement",
		};
		assert_eq!(err.to_string(), "element #huo-bu is not a HtmlCanvasElement");
	}
}
