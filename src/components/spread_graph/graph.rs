use std::collections::HashMap;

use rand::Rng;

use super::depth::depths;
use super::physics::{PhysicsParams, Viewport, place};
use super::types::{Post, PostId};

/// Simulation particle for one post.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: PostId,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub post: Post,
	pub depth: usize,
}

/// Parent → child spring, as indices into the node list it was built with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub links: Vec<Link>,
}

impl Graph {
	/// Derives nodes and links from `posts`.
	///
	/// Nodes already present in `previous` keep their position and velocity;
	/// their post copy and depth are refreshed. New posts are placed fresh.
	/// Nodes come out ordered by depth. Posts whose parent is not in `posts`
	/// get no link.
	pub fn build<R: Rng>(
		posts: &[Post],
		previous: &[Node],
		viewport: Viewport,
		params: &PhysicsParams,
		rng: &mut R,
	) -> Self {
		let depth_of = depths(posts);
		let existing: HashMap<PostId, &Node> = previous.iter().map(|n| (n.id, n)).collect();

		let mut nodes: Vec<Node> = posts
			.iter()
			.map(|post| {
				let depth = depth_of.get(&post.id).copied().unwrap_or_default();
				match existing.get(&post.id) {
					Some(node) => Node {
						post: post.clone(),
						depth,
						..(*node).clone()
					},
					None => place(post, depth, viewport, params, rng),
				}
			})
			.collect();
		nodes.sort_by_key(|n| n.depth);

		let index: HashMap<PostId, usize> =
			nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
		let links = posts
			.iter()
			.filter_map(|post| {
				let source = *index.get(&post.parent_id?)?;
				let target = *index.get(&post.id)?;
				Some(Link {
					source,
					target,
					strength: params.link_strength,
				})
			})
			.collect();

		Self { nodes, links }
	}
}
