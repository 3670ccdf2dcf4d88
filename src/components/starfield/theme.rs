//! Colors and stroke settings for the sky.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the existing alpha, clamping to `[0, 1]`.
	pub fn fade(self, factor: f64) -> Self {
		self.with_alpha((self.a * factor).clamp(0.0, 1.0))
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Star rendering: a four-point sparkle.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Fill or stroke color.
	pub color: Color,
	/// Number of points.
	pub spikes: u32,
	/// Inner vertex radius as a fraction of the outer one.
	pub inner_ratio: f64,
}

/// Meteor rendering: a straight gradient streak.
#[derive(Clone, Debug)]
pub struct MeteorStyle {
	/// Fill or stroke color.
	pub color: Color,
	/// Alpha at the head when the meteor is fully visible.
	pub head_alpha: f64,
	/// Stroke width in pixels.
	pub line_width: f64,
}

/// Constellation rendering: thin edges, glowing points.
#[derive(Clone, Debug)]
pub struct ConstellationStyle {
	/// Edge stroke color.
	pub line_color: Color,
	/// Stroke width in pixels.
	pub line_width: f64,
	/// Color at the inner edge of the glow.
	pub glow_color: Color,
	/// Fill of the solid core dot.
	pub core_color: Color,
	/// Core dot radius as a fraction of the point radius.
	pub core_scale: f64,
	/// Glow oscillation rate in radians per frame.
	pub glow_speed: f64,
	/// Glow oscillation amplitude in pixels.
	pub glow_swing: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Star layer.
	pub star: StarStyle,
	/// Dust fill; alpha comes from each mote.
	pub dust: Color,
	/// Meteor layer.
	pub meteor: MeteorStyle,
	/// Constellation layer.
	pub constellation: ConstellationStyle,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			star: StarStyle {
				color: Color::WHITE,
				spikes: 4,
				inner_ratio: 0.4,
			},
			dust: Color::WHITE,
			meteor: MeteorStyle {
				color: Color::WHITE,
				head_alpha: 0.8,
				line_width: 2.0,
			},
			constellation: ConstellationStyle {
				line_color: Color::rgba(220, 220, 220, 0.3),
				line_width: 1.0,
				glow_color: Color::rgba(255, 255, 255, 0.8),
				core_color: Color::WHITE,
				core_scale: 0.6,
				glow_speed: 0.03,
				glow_swing: 0.5,
			},
		}
	}
}
