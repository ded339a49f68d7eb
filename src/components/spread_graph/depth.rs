use std::collections::HashMap;

use super::types::{Post, PostId};

/// Edge count from `post` up to its nearest ancestor without a parent.
///
/// A parent id that does not resolve within `posts` counts as one hop, so an
/// orphaned post sits at depth 1. The walk is bounded by the collection size.
pub fn depth(post: &Post, posts: &[Post]) -> usize {
	let mut depth = 0;
	let mut current = post;
	for _ in 0..=posts.len() {
		let Some(parent_id) = current.parent_id else {
			return depth;
		};
		depth += 1;
		match posts.iter().find(|p| p.id == parent_id) {
			Some(parent) => current = parent,
			None => return depth,
		}
	}
	depth
}

/// Depth of every post in one pass, sharing ancestor results.
///
/// Same values as calling [`depth`] per post.
pub fn depths(posts: &[Post]) -> HashMap<PostId, usize> {
	let by_id: HashMap<PostId, &Post> = posts.iter().map(|p| (p.id, p)).collect();
	let mut memo: HashMap<PostId, usize> = HashMap::with_capacity(posts.len());
	let mut chain = Vec::new();

	for post in posts {
		chain.clear();
		let mut current = post;
		// depth of the last post pushed onto `chain`
		let last_depth = loop {
			if let Some(&known) = memo.get(&current.id) {
				break known + 1;
			}
			chain.push(current.id);
			if chain.len() > posts.len() {
				break 0;
			}
			let Some(parent_id) = current.parent_id else {
				break 0;
			};
			match by_id.get(&parent_id) {
				Some(parent) => current = parent,
				None => break 1,
			}
		};
		for (offset, id) in chain.iter().rev().enumerate() {
			memo.insert(*id, last_depth + offset);
		}
	}
	memo
}
