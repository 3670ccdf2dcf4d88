//! A small fixed constellation, drawn twice across the sky.

use std::f64::consts::TAU;

use fastrand::Rng;

use crate::config::SkyConfig;

/// Point layout in local units, before offset and scale.
pub const SHAPE: [(f64, f64); 5] = [
	(-30.0, 40.0),
	(10.0, 20.0),
	(0.0, -20.0),
	(50.0, -30.0),
	(80.0, 10.0),
];

/// Edges between points of [`SHAPE`], by index.
pub const EDGES: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 3), (3, 4), (1, 3)];

/// Where each copy sits, as fractions of surface width and height.
pub const PLACEMENTS: [(f64, f64); 2] = [(0.75, 0.25), (0.25, 0.75)];

/// One glowing point of a constellation.
#[derive(Clone, Debug)]
pub struct Planet {
	/// Absolute horizontal position.
	pub x: f64,
	/// Absolute vertical position.
	pub y: f64,
	/// Core radius before glow.
	pub radius: f64,
	/// Phase offset for the glow oscillation.
	pub glow_phase: f64,
}

/// A placed constellation: absolute point positions plus edges.
#[derive(Clone, Debug)]
pub struct Constellation {
	/// Horizontal origin of the local layout on the surface.
	pub offset_x: f64,
	/// Vertical origin of the local layout on the surface.
	pub offset_y: f64,
	/// Local units to pixels.
	pub scale: f64,
	/// Points in [`SHAPE`] order.
	pub planets: Vec<Planet>,
	/// Index pairs into `planets`.
	pub edges: &'static [(usize, usize)],
}

impl Constellation {
	/// Place [`SHAPE`] at the given offset and scale.
	pub fn new(rng: &mut Rng, offset_x: f64, offset_y: f64, scale: f64, radius: f64) -> Self {
		let planets = SHAPE
			.iter()
			.map(|&(px, py)| Planet {
				x: offset_x + px * scale,
				y: offset_y + py * scale,
				radius,
				glow_phase: rng.f64() * TAU,
			})
			.collect();

		Self {
			offset_x,
			offset_y,
			scale,
			planets,
			edges: &EDGES,
		}
	}

	/// Place every copy for a surface of the given size.
	///
	/// Call again after a resize: positions are absolute.
	pub fn layout(rng: &mut Rng, config: &SkyConfig, width: f64, height: f64) -> Vec<Self> {
		let scale = width.min(height) / 1000.0 * 2.5;
		PLACEMENTS
			.iter()
			.map(|&(fx, fy)| Self::new(rng, width * fx, height * fy, scale, config.planet_radius))
			.collect()
	}

	/// Endpoints of every edge.
	pub fn segments(&self) -> impl Iterator<Item = (&Planet, &Planet)> + '_ {
		self.edges
			.iter()
			.filter_map(|&(a, b)| Some((self.planets.get(a)?, self.planets.get(b)?)))
	}
}

impl Planet {
	/// Outer glow radius at frame `time`.
	pub fn glow_radius(&self, time: f64, base_glow: f64, speed: f64, swing: f64) -> f64 {
		self.radius + base_glow + swing * (time * speed + self.glow_phase).sin()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn layout_is_proportional_to_surface() {
		let mut rng = Rng::with_seed(5);
		let config = SkyConfig::default();

		let shapes = Constellation::layout(&mut rng, &config, 1000.0, 800.0);
		assert_eq!(shapes.len(), 2);
		assert_eq!((shapes[0].offset_x, shapes[0].offset_y), (750.0, 200.0));
		assert_eq!((shapes[1].offset_x, shapes[1].offset_y), (250.0, 600.0));
		assert_eq!(shapes[0].scale, 2.0);

		let first = &shapes[0].planets[0];
		assert_eq!((first.x, first.y), (750.0 - 60.0, 200.0 + 80.0));
	}

	#[test]
	fn segments_follow_edge_list() {
		let mut rng = Rng::with_seed(5);
		let shape = Constellation::new(&mut rng, 0.0, 0.0, 1.0, 1.0);
		let segments: Vec<_> = shape
			.segments()
			.map(|(a, b)| ((a.x, a.y), (b.x, b.y)))
			.collect();

		assert_eq!(segments.len(), EDGES.len());
		assert_eq!(segments[4], ((10.0, 20.0), (50.0, -30.0)));
	}

	#[test]
	fn glow_oscillates_around_base() {
		let planet = Planet {
			x: 0.0,
			y: 0.0,
			radius: 1.0,
			glow_phase: 0.0,
		};
		for t in 0..1_000 {
			let r = planet.glow_radius(t as f64, 2.0, 0.03, 0.5);
			assert!((2.5..=3.5).contains(&r));
		}
	}
}
