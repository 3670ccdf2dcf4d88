//! Drifting background particles: twinkling stars and faint dust.

use std::f64::consts::TAU;

use fastrand::Rng;

use crate::config::SkyConfig;

/// Wrap a coordinate into `[0, extent)`.
///
/// Degenerate extents (zero-sized surface) and non-finite input collapse to 0
/// so positions always stay drawable.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if !value.is_finite() || extent.is_nan() || extent <= 0.0 {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid rounds tiny negatives up to `extent` itself
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// Velocity component centered on zero: `(U - 0.5) * speed`.
fn drift(rng: &mut Rng, speed: f64) -> f64 {
	(rng.f64() - 0.5) * speed
}

/// Which way a star's opacity is currently heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
	/// Opacity rising toward the maximum.
	In,
	/// Opacity falling toward zero.
	Out,
}

/// A twinkling star that fades in and out forever.
#[derive(Clone, Debug)]
pub struct Star {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity in pixels per frame.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Current opacity.
	pub opacity: f64,
	/// Peak opacity of the fade cycle.
	pub max_opacity: f64,
	/// Opacity change per frame.
	pub fade_step: f64,
	/// Current fade direction.
	pub fade: Fade,
	/// Twinkle rate in radians per frame.
	pub twinkle_speed: f64,
	/// Twinkle phase offset in radians.
	pub twinkle_phase: f64,
}

impl Star {
	/// A randomized particle somewhere on the surface.
	pub fn spawn(rng: &mut Rng, config: &SkyConfig, width: f64, height: f64) -> Self {
		Self {
			x: rng.f64() * width,
			y: rng.f64() * height,
			size: rng.f64() * config.star_max_size,
			opacity: 0.0,
			fade: Fade::In,
			max_opacity: 0.3 + rng.f64() * 0.5,
			fade_step: 0.005 + rng.f64() * 0.01,
			twinkle_speed: config.twinkle_speed_base + rng.f64() * 0.005,
			twinkle_phase: rng.f64() * TAU,
			vx: drift(rng, config.star_speed),
			vy: drift(rng, config.star_speed),
		}
	}

	/// Advance one frame. A star that has fully faded out reappears elsewhere.
	pub fn update(&mut self, rng: &mut Rng, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);

		match self.fade {
			Fade::In => {
				self.opacity = (self.opacity + self.fade_step).min(self.max_opacity);
				if self.opacity >= self.max_opacity {
					self.fade = Fade::Out;
				}
			}
			Fade::Out => {
				self.opacity = (self.opacity - self.fade_step).max(0.0);
				if self.opacity <= 0.0 {
					self.fade = Fade::In;
					self.x = wrap(rng.f64() * width, width);
					self.y = wrap(rng.f64() * height, height);
				}
			}
		}
	}

	/// Twinkle factor in `[0.4, 1.0]` for frame `time`.
	pub fn twinkle(&self, time: f64) -> f64 {
		0.4 + 0.6 * (time * self.twinkle_speed + self.twinkle_phase).sin().abs()
	}
}

/// A faint mote drifting in a straight line.
#[derive(Clone, Debug)]
pub struct Dust {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity in pixels per frame.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Current opacity.
	pub opacity: f64,
}

impl Dust {
	/// A randomized particle somewhere on the surface.
	pub fn spawn(rng: &mut Rng, config: &SkyConfig, width: f64, height: f64) -> Self {
		Self {
			x: rng.f64() * width,
			y: rng.f64() * height,
			size: 0.5 + rng.f64(),
			opacity: 0.1 + rng.f64() * 0.3,
			vx: drift(rng, config.dust_speed),
			vy: drift(rng, config.dust_speed),
		}
	}

	/// Drift one frame, wrapping at the edges.
	pub fn update(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn wrap_stays_in_half_open_range() {
		assert!((wrap(-0.05, 100.0) - 99.95).abs() < 1e-9);
		assert_eq!(wrap(100.0, 100.0), 0.0);
		assert_eq!(wrap(250.0, 100.0), 50.0);
		assert_eq!(wrap(-1e-20, 100.0), 0.0);
		assert_eq!(wrap(f64::NAN, 100.0), 0.0);
		assert_eq!(wrap(5.0, 0.0), 0.0);
	}

	#[test]
	fn star_opacity_stays_within_its_max() {
		let mut rng = Rng::with_seed(7);
		let config = SkyConfig::default();
		let mut stars: Vec<Star> = (0..40)
			.map(|_| Star::spawn(&mut rng, &config, 320.0, 200.0))
			.collect();

		for _ in 0..2_000 {
			for star in &mut stars {
				star.update(&mut rng, 320.0, 200.0);
				assert!(star.opacity >= 0.0);
				assert!(star.opacity <= star.max_opacity);
			}
		}
	}

	#[test]
	fn star_fade_cycles_and_relocates() {
		let mut rng = Rng::with_seed(1);
		let mut star = Star {
			x: 10.0,
			y: 10.0,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			opacity: 0.0,
			max_opacity: 0.5,
			fade_step: 0.25,
			fade: Fade::In,
			twinkle_speed: 0.01,
			twinkle_phase: 0.0,
		};

		star.update(&mut rng, 100.0, 100.0);
		assert_eq!((star.opacity, star.fade), (0.25, Fade::In));
		star.update(&mut rng, 100.0, 100.0);
		assert_eq!((star.opacity, star.fade), (0.5, Fade::Out));
		star.update(&mut rng, 100.0, 100.0);
		assert_eq!((star.opacity, star.fade), (0.25, Fade::Out));
		star.update(&mut rng, 100.0, 100.0);
		assert_eq!((star.opacity, star.fade), (0.0, Fade::In));
		assert!((0.0..100.0).contains(&star.x));
		assert!((0.0..100.0).contains(&star.y));
	}

	#[test]
	fn twinkle_is_bounded() {
		let mut rng = Rng::with_seed(3);
		let star = Star::spawn(&mut rng, &SkyConfig::default(), 100.0, 100.0);
		for t in 0..5_000 {
			let k = star.twinkle(t as f64);
			assert!((0.4..=1.0).contains(&k), "twinkle {k} at frame {t}");
		}
	}

	#[test]
	fn dust_wraps_across_every_edge() {
		let mut dust = Dust {
			x: 99.9,
			y: 0.05,
			vx: 0.2,
			vy: -0.1,
			size: 1.0,
			opacity: 0.2,
		};
		dust.update(100.0, 50.0);
		assert!((0.0..100.0).contains(&dust.x));
		assert!((0.0..50.0).contains(&dust.y));
		assert!(dust.x < 1.0);
		assert!(dust.y > 49.0);
	}
}
