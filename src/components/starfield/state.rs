//! Simulation state for the whole sky.
//!
//! [`Starfield`] owns every particle pool, the frame counter, the surface
//! bounds and the random source. `tick` advances one frame without touching
//! the DOM; drawing lives in `render`.

use fastrand::Rng;

use super::constellation::Constellation;
use super::meteor::Meteor;
use super::particles::{Dust, Star};
use crate::config::SkyConfig;

/// Every particle pool plus the bounds and clock they move in.
pub struct Starfield {
	/// Twinkling stars; never removed.
	pub stars: Vec<Star>,
	/// Background dust; never removed.
	pub dust: Vec<Dust>,
	/// Placed constellations, rebuilt on resize.
	pub constellations: Vec<Constellation>,
	/// Live meteors; expired ones are dropped each tick.
	pub meteors: Vec<Meteor>,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Frames elapsed since creation.
	pub frame: u64,
	config: SkyConfig,
	rng: Rng,
}

impl Starfield {
	/// Populate the pools for a `width` x `height` surface from `seed`.
	pub fn new(config: SkyConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Rng::with_seed(seed);
		let stars = (0..config.star_count)
			.map(|_| Star::spawn(&mut rng, &config, width, height))
			.collect();
		let dust = (0..config.dust_count)
			.map(|_| Dust::spawn(&mut rng, &config, width, height))
			.collect();
		let constellations = Constellation::layout(&mut rng, &config, width, height);

		Self {
			stars,
			dust,
			constellations,
			meteors: Vec::new(),
			width,
			height,
			frame: 0,
			config,
			rng,
		}
	}

	/// Configuration the field was built with.
	pub fn config(&self) -> &SkyConfig {
		&self.config
	}

	/// Frame counter as the time base for oscillations.
	pub fn time(&self) -> f64 {
		self.frame as f64
	}

	/// Advance every pool by one frame.
	///
	/// Order matches the draw order: dust, stars, then meteors. A meteor may
	/// spawn with probability `meteor_chance` per frame, so the spawn rate
	/// follows the display refresh rate.
	pub fn tick(&mut self) {
		self.frame += 1;
		let (w, h) = (self.width, self.height);

		for d in &mut self.dust {
			d.update(w, h);
		}
		for s in &mut self.stars {
			s.update(&mut self.rng, w, h);
		}

		if self.rng.f64() < self.config.meteor_chance {
			let meteor = Meteor::spawn(&mut self.rng, &self.config, w, h);
			self.meteors.push(meteor);
		}
		self.meteors.retain_mut(|m| m.update(w, h));
	}

	/// Adopt new surface bounds and re-place the constellations.
	///
	/// Stars and dust keep their positions and wrap into the new bounds on
	/// the next tick.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.constellations = Constellation::layout(&mut self.rng, &self.config, width, height);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn field(config: SkyConfig) -> Starfield {
		Starfield::new(config, 640.0, 480.0, 42)
	}

	fn assert_inside(sf: &Starfield) {
		let (w, h) = (sf.width, sf.height);
		for s in &sf.stars {
			let inside = (0.0..w).contains(&s.x) && (0.0..h).contains(&s.y);
			assert!(inside, "star at ({}, {})", s.x, s.y);
		}
		for d in &sf.dust {
			let inside = (0.0..w).contains(&d.x) && (0.0..h).contains(&d.y);
			assert!(inside, "dust at ({}, {})", d.x, d.y);
		}
	}

	#[test]
	fn pools_are_sized_from_config() {
		let sf = field(SkyConfig::default());
		assert_eq!(sf.stars.len(), 60);
		assert_eq!(sf.dust.len(), 80);
		assert_eq!(sf.constellations.len(), 2);
		assert!(sf.meteors.is_empty());
		assert_eq!(sf.frame, 0);
	}

	#[test]
	fn tick_advances_frame_counter() {
		let mut sf = field(SkyConfig::default());
		for _ in 0..10 {
			sf.tick();
		}
		assert_eq!(sf.frame, 10);
		assert_eq!(sf.time(), 10.0);
	}

	#[test]
	fn particles_stay_on_surface() {
		let config = SkyConfig {
			star_speed: 25.0,
			dust_speed: 25.0,
			..SkyConfig::default()
		};
		let mut sf = field(config);
		for _ in 0..500 {
			sf.tick();
			assert_inside(&sf);
		}
	}

	#[test]
	fn particles_wrap_into_shrunken_surface() {
		let mut sf = field(SkyConfig::default());
		sf.resize(100.0, 50.0);
		sf.tick();
		assert_inside(&sf);
	}

	#[test]
	fn resize_replaces_constellations_proportionally() {
		let mut sf = field(SkyConfig::default());
		sf.resize(2000.0, 1000.0);

		let offsets: Vec<_> = sf
			.constellations
			.iter()
			.map(|c| (c.offset_x, c.offset_y))
			.collect();
		assert_eq!(offsets, vec![(1500.0, 250.0), (500.0, 750.0)]);
		assert_eq!(sf.constellations[0].scale, 2.5);
	}

	#[test]
	fn meteors_spawn_and_expire() {
		let config = SkyConfig {
			meteor_chance: 1.0,
			..SkyConfig::default()
		};
		let mut sf = field(config);
		sf.tick();
		assert_eq!(sf.meteors.len(), 1);

		let config = SkyConfig {
			meteor_chance: 0.0,
			..SkyConfig::default()
		};
		let mut quiet = field(config);
		let meteor = Meteor::spawn(&mut Rng::with_seed(9), quiet.config(), 640.0, 480.0);
		quiet.meteors.push(meteor);
		// Age budget is at most 250 frames.
		for _ in 0..260 {
			quiet.tick();
		}
		assert!(quiet.meteors.is_empty());
	}

	#[test]
	fn live_meteors_are_always_visible() {
		let config = SkyConfig {
			meteor_chance: 0.2,
			..SkyConfig::default()
		};
		let mut sf = field(config);
		for _ in 0..1_000 {
			sf.tick();
			for m in &sf.meteors {
				assert!(m.opacity > 0.0 && m.opacity <= 1.0);
				assert!((m.age as f64) <= m.max_age);
				assert!(m.x.is_finite() && m.y.is_finite());
			}
		}
	}
}
