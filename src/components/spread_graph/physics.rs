use std::f64::consts::PI;

use rand::Rng;

use super::graph::{Link, Node};
use super::types::Post;

pub const NODE_RADIUS: f64 = 30.0;

/// Force constants for [`step`].
#[derive(Clone, Debug)]
pub struct PhysicsParams {
	pub node_radius: f64,
	pub repulsion_strength: f64,
	pub link_strength: f64,
	pub damping: f64,
	pub center_gravity: f64,
	/// Repulsion only acts between nodes closer than this.
	pub min_distance: f64,
	pub hierarchy_strength: f64,
	pub level_height: f64,
	pub ideal_link_distance: f64,
}

impl Default for PhysicsParams {
	fn default() -> Self {
		Self {
			node_radius: NODE_RADIUS,
			repulsion_strength: 1000.0,
			link_strength: 0.01,
			damping: 0.98,
			center_gravity: 0.005,
			min_distance: 200.0,
			hierarchy_strength: 0.15,
			level_height: 100.0,
			ideal_link_distance: 150.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn center_x(&self) -> f64 {
		self.width / 2.0
	}

	/// Resting height of nodes at `depth`.
	pub fn level_y(&self, depth: usize, params: &PhysicsParams) -> f64 {
		self.height / 4.0 + depth as f64 * params.level_height
	}
}

/// Initial particle for a post that has no node yet.
pub fn place<R: Rng>(
	post: &Post,
	depth: usize,
	viewport: Viewport,
	params: &PhysicsParams,
	rng: &mut R,
) -> Node {
	let angle = rng.gen_range(0.0..2.0 * PI);
	let offset = 50.0 + rng.gen_range(0.0..50.0) + depth as f64 * 100.0;
	let jitter = rng.gen_range(-12.5..12.5);
	Node {
		id: post.id,
		x: viewport.center_x() + angle.cos() * offset,
		y: viewport.level_y(depth, params) + jitter,
		vx: 0.0,
		vy: 0.0,
		post: post.clone(),
		depth,
	}
}

/// Advances every node by one animation frame.
///
/// Coincident pairs contribute no repulsion or spring force. Positions are
/// clamped into the viewport inset by the node radius; velocities are left
/// as they are.
pub fn step(nodes: &mut [Node], links: &[Link], viewport: Viewport, params: &PhysicsParams) {
	let center_x = viewport.center_x();

	for i in 0..nodes.len() {
		let (x, y, depth) = (nodes[i].x, nodes[i].y, nodes[i].depth);
		let mut dvx = 0.0;
		let mut dvy = (viewport.level_y(depth, params) - y) * params.hierarchy_strength;

		for (j, other) in nodes.iter().enumerate() {
			if i == j {
				continue;
			}
			let (dx, dy) = (other.x - x, other.y - y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance == 0.0 || distance >= params.min_distance {
				continue;
			}
			let same_level = other.depth == depth;
			let level_factor = if same_level { 2.0 } else { 1.0 };
			let force = params.repulsion_strength * level_factor / (distance * distance);
			let falloff = ((params.min_distance - distance) / params.min_distance).powi(2);
			// siblings spread sideways rather than stacking
			let horizontal = if same_level { 1.5 } else { 1.0 };
			dvx -= dx / distance * force * falloff * horizontal;
			dvy -= dy / distance * force * falloff;
		}

		dvx += (center_x - x) * params.center_gravity / (depth as f64 + 1.0);

		nodes[i].vx += dvx;
		nodes[i].vy += dvy;
	}

	for link in links {
		let (Some(source), Some(target)) = (nodes.get(link.source), nodes.get(link.target)) else {
			continue;
		};
		let (dx, dy) = (target.x - source.x, target.y - source.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance == 0.0 {
			continue;
		}
		let force = (distance - params.ideal_link_distance) * link.strength;
		let (fx, fy) = (
			dx / distance * force * params.damping,
			dy / distance * force * params.damping,
		);
		nodes[link.source].vx += fx;
		nodes[link.source].vy += fy;
		nodes[link.target].vx -= fx;
		nodes[link.target].vy -= fy;
	}

	let margin = params.node_radius;
	for node in nodes.iter_mut() {
		node.vx *= params.damping;
		node.vy *= params.damping;
		node.x += node.vx;
		node.y += node.vy;
		node.x = node.x.min(viewport.width - margin).max(margin);
		node.y = node.y.min(viewport.height - margin).max(margin);
	}
}

/// Topmost node whose disc contains `(x, y)`.
pub fn node_at(nodes: &[Node], x: f64, y: f64, radius: f64) -> Option<usize> {
	nodes.iter().rposition(|node| {
		let (dx, dy) = (x - node.x, y - node.y);
		dx * dx + dy * dy < radius * radius
	})
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::spread_graph::types::{Category, PostId, Reactions};

	const VIEW: Viewport = Viewport {
		width: 1200.0,
		height: 800.0,
	};

	fn post(id: u64, parent: Option<u64>) -> Post {
		Post {
			id: PostId(id),
			content: String::new(),
			author: "GlobalEye1".into(),
			timestamp_ms: 0.0,
			likes: 0,
			retweets: 0,
			is_original: parent.is_none(),
			variant: String::new(),
			avatar: 0,
			parent_id: parent.map(PostId),
			reactions: Reactions::default(),
			category: Category::Technology,
		}
	}

	fn node_at_pos(id: u64, parent: Option<u64>, depth: usize, x: f64, y: f64) -> Node {
		Node {
			id: PostId(id),
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			post: post(id, parent),
			depth,
		}
	}

	#[test]
	fn placement_follows_depth_rings() {
		let params = PhysicsParams::default();
		let mut rng = SmallRng::seed_from_u64(1);
		for depth in 0..5 {
			let node = place(&post(1, None), depth, VIEW, &params, &mut rng);
			let offset = (node.x - VIEW.center_x()).abs();
			assert!(offset <= 100.0 + depth as f64 * 100.0);
			let expected_y = VIEW.height / 4.0 + depth as f64 * params.level_height;
			assert!((node.y - expected_y).abs() <= 12.5);
			assert_eq!((node.vx, node.vy), (0.0, 0.0));
			assert_eq!(node.depth, depth);
		}
	}

	#[test]
	fn positions_stay_inside_the_inset_viewport() {
		let params = PhysicsParams::default();
		let mut rng = SmallRng::seed_from_u64(42);
		let mut nodes: Vec<Node> = (0..21)
			.map(|i| {
				let x = rng.gen_range(0.0..VIEW.width);
				let y = rng.gen_range(0.0..VIEW.height);
				node_at_pos(i, (i > 0).then(|| (i - 1) / 2), (i as usize + 1).ilog2() as usize, x, y)
			})
			.collect();
		let links: Vec<Link> = (1..nodes.len())
			.map(|i| Link {
				source: (i - 1) / 2,
				target: i,
				strength: params.link_strength,
			})
			.collect();

		for _ in 0..500 {
			step(&mut nodes, &links, VIEW, &params);
			for node in &nodes {
				assert!(node.x >= NODE_RADIUS && node.x <= VIEW.width - NODE_RADIUS);
				assert!(node.y >= NODE_RADIUS && node.y <= VIEW.height - NODE_RADIUS);
			}
		}
	}

	#[test]
	fn coincident_nodes_do_not_produce_nan() {
		let params = PhysicsParams::default();
		let mut nodes = vec![
			node_at_pos(0, None, 0, 600.0, 200.0),
			node_at_pos(1, Some(0), 1, 600.0, 200.0),
		];
		let links = [Link {
			source: 0,
			target: 1,
			strength: params.link_strength,
		}];

		step(&mut nodes, &links, VIEW, &params);

		for node in &nodes {
			assert!(node.x.is_finite() && node.y.is_finite());
			assert!(node.vx.is_finite() && node.vy.is_finite());
			// only hierarchy pull and centering act, neither moves x here
			assert_eq!(node.x, 600.0);
		}
		// root sits on its level, the child is pulled down toward the next one
		assert_eq!(nodes[0].y, 200.0);
		assert!(nodes[1].y > 200.0);
	}

	#[test]
	fn same_level_neighbours_push_apart_sideways() {
		let params = PhysicsParams::default();
		let mut nodes = vec![
			node_at_pos(0, Some(9), 1, 590.0, 300.0),
			node_at_pos(1, Some(9), 1, 610.0, 300.0),
		];
		step(&mut nodes, &[], VIEW, &params);
		assert!(nodes[0].x < 590.0);
		assert!(nodes[1].x > 610.0);
	}

	#[test]
	fn stretched_link_pulls_endpoints_together() {
		let params = PhysicsParams::default();
		let mut nodes = vec![
			node_at_pos(0, None, 0, 300.0, 200.0),
			node_at_pos(1, Some(0), 0, 900.0, 200.0),
		];
		let links = [Link {
			source: 0,
			target: 1,
			strength: params.link_strength,
		}];
		let gap_before = nodes[1].x - nodes[0].x;
		step(&mut nodes, &links, VIEW, &params);
		assert!(nodes[1].x - nodes[0].x < gap_before);
	}

	#[test]
	fn clamping_keeps_velocity() {
		let params = PhysicsParams::default();
		let mut nodes = vec![node_at_pos(0, None, 0, 600.0, 200.0)];
		nodes[0].vx = -5_000.0;
		step(&mut nodes, &[], VIEW, &params);
		assert_eq!(nodes[0].x, NODE_RADIUS);
		assert!(nodes[0].vx < 0.0);
	}

	#[test]
	fn hit_test_prefers_the_topmost_node() {
		let nodes = vec![
			node_at_pos(0, None, 0, 100.0, 100.0),
			node_at_pos(1, Some(0), 1, 110.0, 100.0),
		];
		assert_eq!(node_at(&nodes, 105.0, 100.0, NODE_RADIUS), Some(1));
		assert_eq!(node_at(&nodes, 75.0, 100.0, NODE_RADIUS), Some(0));
		assert_eq!(node_at(&nodes, 100.0, 130.0, NODE_RADIUS), None);
	}

	/// Only the term under test acts; gravity and level pull are switched off.
	fn isolated() -> PhysicsParams {
		PhysicsParams {
			center_gravity: 0.0,
			hierarchy_strength: 0.0,
			..PhysicsParams::default()
		}
	}

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < 1e-12,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn same_level_repulsion_is_doubled_and_widened() {
		let params = isolated();
		let mut nodes = vec![
			node_at_pos(0, Some(9), 1, 550.0, 300.0),
			node_at_pos(1, Some(9), 1, 650.0, 300.0),
		];
		step(&mut nodes, &[], VIEW, &params);
		// 1000 * 2 / 100^2, falloff ((200 - 100) / 200)^2, sideways 1.5
		let dv = 1000.0 * 2.0 / 10_000.0 * 0.25 * 1.5;
		assert_close(nodes[0].vx, -dv * params.damping);
		assert_close(nodes[1].vx, dv * params.damping);
		assert_close(nodes[0].vy, 0.0);
	}

	#[test]
	fn cross_level_repulsion_has_no_level_factors() {
		let params = isolated();
		let mut nodes = vec![
			node_at_pos(0, None, 0, 550.0, 300.0),
			node_at_pos(1, Some(0), 1, 650.0, 300.0),
		];
		step(&mut nodes, &[], VIEW, &params);
		let dv = 1000.0 / 10_000.0 * 0.25;
		assert_close(nodes[0].vx, -dv * params.damping);
		assert_close(nodes[1].vx, dv * params.damping);
	}

	#[test]
	fn vertical_repulsion_is_not_widened() {
		let params = isolated();
		let mut nodes = vec![
			node_at_pos(0, Some(9), 1, 600.0, 250.0),
			node_at_pos(1, Some(9), 1, 600.0, 300.0),
		];
		step(&mut nodes, &[], VIEW, &params);
		// distance 50: 1000 * 2 / 50^2, falloff (150 / 200)^2
		let dv = 1000.0 * 2.0 / 2_500.0 * 0.5625;
		assert_close(nodes[0].vy, -dv * params.damping);
		assert_close(nodes[1].vy, dv * params.damping);
		assert_close(nodes[0].vx, 0.0);
	}

	#[test]
	fn centering_weakens_with_depth() {
		let params = PhysicsParams {
			hierarchy_strength: 0.0,
			..PhysicsParams::default()
		};
		let mut nodes = vec![node_at_pos(0, Some(9), 2, 400.0, 400.0)];
		step(&mut nodes, &[], VIEW, &params);
		let dv = (VIEW.center_x() - 400.0) * params.center_gravity / 3.0;
		assert_close(nodes[0].vx, dv * params.damping);
		assert_close(nodes[0].x, 400.0 + dv * params.damping);
	}

	#[test]
	fn hierarchy_pulls_toward_the_level_line() {
		let params = PhysicsParams::default();
		let mut nodes = vec![node_at_pos(0, None, 0, VIEW.center_x(), 100.0)];
		step(&mut nodes, &[], VIEW, &params);
		// level 0 rests at height / 4 = 200
		let dv = (200.0 - 100.0) * params.hierarchy_strength;
		assert_close(nodes[0].vy, dv * params.damping);
		assert_close(nodes[0].vx, 0.0);
	}

	#[test]
	fn link_spring_is_scaled_by_damping_twice() {
		let params = isolated();
		// 400 apart, beyond the repulsion range
		let mut nodes = vec![
			node_at_pos(0, None, 0, 400.0, 200.0),
			node_at_pos(1, Some(0), 0, 800.0, 200.0),
		];
		let links = [Link {
			source: 0,
			target: 1,
			strength: params.link_strength,
		}];
		step(&mut nodes, &links, VIEW, &params);
		let f = (400.0 - params.ideal_link_distance) * params.link_strength * params.damping;
		assert_close(nodes[0].vx, f * params.damping);
		assert_close(nodes[1].vx, -f * params.damping);
	}
}
