use std::collections::HashMap;
use std::f64::consts::PI;

use log::warn;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::content::{avatar_url, category_info};
use super::graph::Node;
use super::state::SpreadGraphState;

const TRAIL_FADE: &str = "rgba(0, 0, 0, 0.2)";
const LINK_ALPHA: f64 = 0.6;
const RING_ALPHA: f64 = 0.53;
const HALO_ALPHA: f64 = 0.2;
const ARROW_LENGTH: f64 = 15.0;
const ARROW_WIDTH: f64 = 8.0;
const TOOLTIP_CHARS: usize = 36;

/// Profile images, loaded once per avatar index.
#[derive(Default)]
pub struct AvatarCache {
	images: HashMap<usize, HtmlImageElement>,
}

impl AvatarCache {
	/// The image for `index`, once the browser has finished decoding it.
	fn get(&mut self, index: usize) -> Option<&HtmlImageElement> {
		if !self.images.contains_key(&index) {
			match HtmlImageElement::new() {
				Ok(image) => {
					image.set_src(&avatar_url(index));
					self.images.insert(index, image);
				}
				Err(err) => {
					warn!("Could not create avatar image: {:?}", err);
					return None;
				}
			}
		}
		self.images
			.get(&index)
			.filter(|image| image.complete() && image.natural_width() > 0)
	}
}

/// Shortens `text` to at most `max_chars` characters, marking the cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}
	let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
	format!("{}…", kept.trim_end())
}

pub fn render(state: &SpreadGraphState, ctx: &CanvasRenderingContext2d, avatars: &mut AvatarCache) {
	// translucent fill leaves motion trails
	ctx.set_fill_style_str(TRAIL_FADE);
	ctx.fill_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx, avatars);
	if let Some(node) = state.hovered() {
		draw_tooltip(state, node, ctx);
	}
}

fn draw_links(state: &SpreadGraphState, ctx: &CanvasRenderingContext2d) {
	let radius = state.params.node_radius;
	ctx.set_line_width(3.0);
	for link in &state.graph.links {
		let (Some(source), Some(target)) = (
			state.graph.nodes.get(link.source),
			state.graph.nodes.get(link.target),
		) else {
			continue;
		};
		let (dx, dy) = (target.x - source.x, target.y - source.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let color = category_info(target.post.category).color.rgba(LINK_ALPHA);
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.set_stroke_style_str(&color);
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.stroke();

		let (tip_x, tip_y) = (target.x - ux * radius, target.y - uy * radius);
		let (back_x, back_y) = (tip_x - ux * ARROW_LENGTH, tip_y - uy * ARROW_LENGTH);
		let (px, py) = (-uy * ARROW_WIDTH, ux * ARROW_WIDTH);
		ctx.set_fill_style_str(&color);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &SpreadGraphState, ctx: &CanvasRenderingContext2d, avatars: &mut AvatarCache) {
	let radius = state.params.node_radius;
	for node in &state.graph.nodes {
		let (x, y) = (node.x, node.y);
		let color = category_info(node.post.category).color;

		if node.post.is_original {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 5.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&color.rgba(HALO_ALPHA));
			ctx.fill();
		}

		ctx.save();
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.clip();
		if let Some(image) = avatars.get(node.post.avatar) {
			let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
				image,
				x - radius,
				y - radius,
				radius * 2.0,
				radius * 2.0,
			);
		}
		let ring = if node.post.is_original {
			color.css()
		} else {
			color.rgba(RING_ALPHA)
		};
		ctx.set_stroke_style_str(&ring);
		ctx.set_line_width(4.0);
		ctx.stroke();
		ctx.restore();
	}
}

fn draw_tooltip(state: &SpreadGraphState, node: &Node, ctx: &CanvasRenderingContext2d) {
	let Some((mx, my)) = state.mouse else {
		return;
	};
	let post = &node.post;
	ctx.set_fill_style_str("rgba(0, 0, 0, 0.9)");
	ctx.fill_rect(mx + 10.0, my + 10.0, 250.0, 80.0);

	ctx.set_fill_style_str("white");
	ctx.set_font("14px Arial");
	let _ = ctx.fill_text(&format!("@{}", post.author), mx + 20.0, my + 30.0);
	ctx.set_font("12px Arial");
	let _ = ctx.fill_text_with_max_width(
		&truncate(&post.content, TOOLTIP_CHARS),
		mx + 20.0,
		my + 50.0,
		230.0,
	);
	ctx.set_fill_style_str("gray");
	let _ = ctx.fill_text(
		&format!("❤️ {} 🔄 {}", post.likes, post.retweets),
		mx + 20.0,
		my + 70.0,
	);
}
