use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::graph::{Graph, Node};
use super::physics::{self, PhysicsParams, Viewport};
use super::types::Post;

/// Everything the animation loop owns between frames.
pub struct SpreadGraphState {
	pub graph: Graph,
	pub params: PhysicsParams,
	pub viewport: Viewport,
	/// Cursor position in canvas pixels, if it is over the canvas.
	pub mouse: Option<(f64, f64)>,
	rng: SmallRng,
}

impl SpreadGraphState {
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		Self {
			graph: Graph::default(),
			params: PhysicsParams::default(),
			viewport: Viewport { width, height },
			mouse: None,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Rebuilds nodes and links from the latest post snapshot.
	pub fn sync(&mut self, posts: &[Post]) {
		self.graph = Graph::build(
			posts,
			&self.graph.nodes,
			self.viewport,
			&self.params,
			&mut self.rng,
		);
	}

	pub fn tick(&mut self) {
		if self.graph.nodes.is_empty() {
			return;
		}
		physics::step(
			&mut self.graph.nodes,
			&self.graph.links,
			self.viewport,
			&self.params,
		);
	}

	pub fn hovered(&self) -> Option<&Node> {
		let (x, y) = self.mouse?;
		physics::node_at(&self.graph.nodes, x, y, self.params.node_radius)
			.map(|i| &self.graph.nodes[i])
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport { width, height };
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::spread_graph::types::{Category, PostId, Reactions};

	fn root() -> Post {
		Post {
			id: PostId(0),
			content: "seed".into(),
			author: "CosmicThinker5".into(),
			timestamp_ms: 0.0,
			likes: 0,
			retweets: 0,
			is_original: true,
			variant: "original".into(),
			avatar: 0,
			parent_id: None,
			reactions: Reactions::default(),
			category: Category::Health,
		}
	}

	#[test]
	fn sync_then_tick_moves_nothing_out_of_bounds() {
		let mut state = SpreadGraphState::new(800.0, 600.0, 7);
		let mut posts = vec![root()];
		for id in 1..10 {
			let mut child = root();
			child.id = PostId(id);
			child.parent_id = Some(PostId(id / 2));
			child.is_original = false;
			posts.push(child);
			state.sync(&posts);
			for _ in 0..30 {
				state.tick();
			}
		}
		assert_eq!(state.graph.nodes.len(), 10);
		assert_eq!(state.graph.links.len(), 9);
		for node in &state.graph.nodes {
			assert!((30.0..=770.0).contains(&node.x));
			assert!((30.0..=570.0).contains(&node.y));
		}
	}

	#[test]
	fn hover_needs_a_cursor_over_a_node() {
		let mut state = SpreadGraphState::new(800.0, 600.0, 1);
		state.sync(&[root()]);
		assert!(state.hovered().is_none());

		let (x, y) = (state.graph.nodes[0].x, state.graph.nodes[0].y);
		state.mouse = Some((x + 5.0, y - 5.0));
		assert_eq!(state.hovered().map(|n| n.id), Some(PostId(0)));

		state.mouse = Some((x + 50.0, y));
		assert!(state.hovered().is_none());
	}

	#[test]
	fn reset_posts_clear_the_graph() {
		let mut state = SpreadGraphState::new(800.0, 600.0, 1);
		state.sync(&[root()]);
		state.sync(&[]);
		assert!(state.graph.nodes.is_empty());
		state.tick();
	}
}
