//! Canvas rendering for the sky.
//!
//! Layers are painted back to front:
//! 1. Dust
//! 2. Twinkling stars
//! 3. Constellation edges, glows and cores
//! 4. Meteors

use std::f64::consts::{FRAC_PI_2, PI};

use web_sys::CanvasRenderingContext2d;

use super::constellation::Constellation;
use super::meteor::Meteor;
use super::particles::Star;
use super::state::Starfield;
use super::theme::{ConstellationStyle, MeteorStyle, StarStyle, Theme};

/// Clears the canvas and draws the current frame.
pub fn render(field: &Starfield, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	let time = field.time();

	for d in &field.dust {
		ctx.set_fill_style_str(&theme.dust.with_alpha(d.opacity).to_css());
		ctx.begin_path();
		let _ = ctx.arc(d.x, d.y, d.size, 0.0, PI * 2.0);
		ctx.fill();
	}

	for s in &field.stars {
		draw_star(ctx, s, time, &theme.star);
	}

	let glow = field.config().planet_glow;
	for c in &field.constellations {
		draw_constellation(ctx, c, time, glow, &theme.constellation);
	}

	for m in &field.meteors {
		draw_meteor(ctx, m, &theme.meteor);
	}
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &Star, time: f64, style: &StarStyle) {
	let twinkle = star.twinkle(time);
	let outer = star.size * twinkle;
	let inner = outer * style.inner_ratio;
	let points = style.spikes * 2;

	ctx.begin_path();
	for i in 0..points {
		let radius = if i % 2 == 0 { outer } else { inner };
		let angle = f64::from(i) * PI / f64::from(style.spikes) - FRAC_PI_2;
		let (x, y) = (star.x + radius * angle.cos(), star.y + radius * angle.sin());
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();
	ctx.set_fill_style_str(&style.color.fade(star.opacity * twinkle).to_css());
	ctx.fill();
}

fn draw_constellation(
	ctx: &CanvasRenderingContext2d,
	shape: &Constellation,
	time: f64,
	base_glow: f64,
	style: &ConstellationStyle,
) {
	ctx.set_stroke_style_str(&style.line_color.to_css());
	ctx.set_line_width(style.line_width);
	ctx.begin_path();
	for (a, b) in shape.segments() {
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
	}
	ctx.stroke();

	for p in &shape.planets {
		let glow_radius = p.glow_radius(time, base_glow, style.glow_speed, style.glow_swing);
		if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, p.radius, p.x, p.y, glow_radius) {
			let _ = gradient.add_color_stop(0.0, &style.glow_color.to_css());
			let _ = gradient.add_color_stop(1.0, &style.glow_color.with_alpha(0.0).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, PI * 2.0);
			ctx.fill();
		}

		ctx.set_fill_style_str(&style.core_color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius * style.core_scale, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_meteor(ctx: &CanvasRenderingContext2d, meteor: &Meteor, style: &MeteorStyle) {
	let (tail_x, tail_y) = meteor.tail();
	let gradient = ctx.create_linear_gradient(meteor.x, meteor.y, tail_x, tail_y);
	let head = style.color.with_alpha(meteor.opacity * style.head_alpha);
	let _ = gradient.add_color_stop(0.0, &head.to_css());
	let _ = gradient.add_color_stop(1.0, &style.color.with_alpha(0.0).to_css());

	ctx.begin_path();
	ctx.move_to(meteor.x, meteor.y);
	ctx.line_to(tail_x, tail_y);
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(style.line_width);
	ctx.stroke();
}
