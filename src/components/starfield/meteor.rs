//! Shooting stars with a bounded lifetime.

use std::f64::consts::FRAC_PI_4;

use fastrand::Rng;

use crate::config::SkyConfig;

/// Fade-in and fade-out windows, in frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeWindows {
	/// Frames spent ramping from transparent to opaque.
	pub fade_in: f64,
	/// Frames spent ramping back to transparent before the budget ends.
	pub fade_out: f64,
}

impl FadeWindows {
	/// Windows from `meteor_fade_in`/`meteor_fade_out`.
	pub fn from_config(config: &SkyConfig) -> Self {
		Self {
			fade_in: config.meteor_fade_in,
			fade_out: config.meteor_fade_out,
		}
	}

	/// Opacity of a meteor at `age` frames into a lifetime of `max_age`.
	///
	/// Ramps up over `fade_in`, holds at 1, ramps down over the last
	/// `fade_out` frames. The hold is exactly 1.0, not the last ramp value.
	pub fn opacity(&self, age: f64, max_age: f64) -> f64 {
		let (fade_in, fade_out) = (self.fade_in.max(1.0), self.fade_out.max(1.0));
		let fade_out_start = max_age - fade_out;
		if age < fade_in {
			age / fade_in
		} else if age > fade_out_start {
			1.0 - (age - fade_out_start) / fade_out
		} else {
			1.0
		}
	}
}

/// A single streak crossing the sky.
#[derive(Clone, Debug)]
pub struct Meteor {
	/// Head position, horizontal.
	pub x: f64,
	/// Head position, vertical.
	pub y: f64,
	/// Heading in radians (0 = right, π/2 = down).
	pub angle: f64,
	/// Pixels per frame.
	pub speed: f64,
	/// Tail length in pixels.
	pub length: f64,
	/// Current opacity in `[0, 1]`, recomputed each update.
	pub opacity: f64,
	/// Frames lived so far.
	pub age: u32,
	/// Frames after which the meteor is dropped.
	pub max_age: f64,
	/// Fade timing for this meteor.
	pub windows: FadeWindows,
}

impl Meteor {
	/// A meteor at age 0 with the given head, heading and timing.
	pub fn new(
		x: f64,
		y: f64,
		angle: f64,
		speed: f64,
		length: f64,
		max_age: f64,
		windows: FadeWindows,
	) -> Self {
		Self {
			x,
			y,
			angle,
			speed,
			length,
			opacity: 0.0,
			age: 0,
			max_age,
			windows,
		}
	}

	/// A meteor starting somewhere in the upper half, heading down-right.
	pub fn spawn(rng: &mut Rng, config: &SkyConfig, width: f64, height: f64) -> Self {
		let (x, y) = (rng.f64() * width, rng.f64() * height * 0.5);
		let length = 100.0 + rng.f64() * 80.0;
		let angle = FRAC_PI_4 + (rng.f64() - 0.5) * 0.2;
		let speed = config.meteor_speed_base + rng.f64() * 3.0;
		let max_age = 200.0 + rng.f64() * 50.0;
		Self::new(x, y, angle, speed, length, max_age, FadeWindows::from_config(config))
	}

	/// Advance one frame and report whether the meteor is still alive.
	pub fn update(&mut self, width: f64, height: f64) -> bool {
		self.age += 1;
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;
		self.opacity = self.windows.opacity(self.age as f64, self.max_age);
		self.is_alive(width, height)
	}

	/// False once the head leaves the surface padded by the tail length, the
	/// age budget is spent, or the meteor has faded out.
	pub fn is_alive(&self, width: f64, height: f64) -> bool {
		let pad = self.length;
		let on_surface =
			(-pad..=width + pad).contains(&self.x) && (-pad..=height + pad).contains(&self.y);
		on_surface && (self.age as f64) <= self.max_age && self.opacity > 0.0
	}

	/// Tail end of the streak.
	pub fn tail(&self) -> (f64, f64) {
		(
			self.x - self.angle.cos() * self.length,
			self.y - self.angle.sin() * self.length,
		)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parked(max_age: f64, fade_in: f64, fade_out: f64) -> Meteor {
		let windows = FadeWindows { fade_in, fade_out };
		Meteor::new(500.0, 500.0, FRAC_PI_4, 0.0, 100.0, max_age, windows)
	}

	#[test]
	fn half_way_through_fade_in_is_half_opaque() {
		let mut meteor = parked(250.0, 50.0, 60.0);
		for _ in 0..25 {
			assert!(meteor.update(1000.0, 1000.0));
		}
		assert_eq!(meteor.age, 25);
		assert_eq!(meteor.opacity, 0.5);
	}

	#[test]
	fn holds_full_opacity_between_fades() {
		let mut meteor = parked(250.0, 40.0, 60.0);
		for _ in 0..100 {
			meteor.update(1000.0, 1000.0);
		}
		assert_eq!(meteor.opacity, 1.0);
	}

	#[test]
	fn dies_when_fade_out_reaches_zero() {
		let mut meteor = parked(100.0, 10.0, 20.0);
		for frame in 1..100 {
			assert!(meteor.update(1000.0, 1000.0), "died early at frame {frame}");
		}
		assert!(meteor.opacity > 0.0);
		assert!(!meteor.update(1000.0, 1000.0));
		assert_eq!(meteor.opacity, 0.0);
	}

	#[test]
	fn dies_once_age_exceeds_budget() {
		// Fade-in outlasts the budget, so opacity is still rising at the cutoff.
		let mut meteor = parked(100.0, 300.0, 1.0);
		for _ in 0..100 {
			assert!(meteor.update(1000.0, 1000.0));
		}
		assert_eq!(meteor.age, 100);

		assert!(!meteor.update(1000.0, 1000.0));
		assert_eq!(meteor.age, 101);
		assert!(meteor.opacity > 0.0, "opacity {} should not be the cause", meteor.opacity);
	}

	#[test]
	fn dies_after_leaving_padded_bounds() {
		let windows = FadeWindows {
			fade_in: 1.0,
			fade_out: 1.0,
		};
		// Heading right at 30px/frame, 50px tail, 100px wide surface.
		let mut meteor = Meteor::new(90.0, 10.0, 0.0, 30.0, 50.0, 1_000.0, windows);
		assert!(meteor.update(100.0, 100.0)); // x = 120
		assert!(meteor.update(100.0, 100.0)); // x = 150, on the padding edge
		assert!(!meteor.update(100.0, 100.0)); // x = 180
	}

	#[test]
	fn spawns_in_upper_half() {
		let mut rng = Rng::with_seed(11);
		let config = SkyConfig::default();
		for _ in 0..200 {
			let m = Meteor::spawn(&mut rng, &config, 800.0, 600.0);
			assert!((0.0..800.0).contains(&m.x));
			assert!((0.0..300.0).contains(&m.y));
			assert!((200.0..250.0).contains(&m.max_age));
			assert!((FRAC_PI_4 - 0.1..=FRAC_PI_4 + 0.1).contains(&m.angle));
			assert_eq!(m.age, 0);
		}
	}

	#[test]
	fn tail_trails_behind_the_head() {
		let windows = FadeWindows {
			fade_in: 40.0,
			fade_out: 60.0,
		};
		let m = Meteor::new(100.0, 50.0, 0.0, 4.0, 30.0, 200.0, windows);
		assert_eq!(m.tail(), (70.0, 50.0));
	}
}
