//! Post feed generator: the timer-driven state machine that grows a spread.
//!
//! Everything random goes through the injected [`Rng`], and the clock is
//! passed in by the caller, so a generator is reproducible from its seed.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use super::content::{AVATAR_COUNT, category_info};
use super::depth::depths;
use super::types::{Category, Lens, Post, PostId, Reactions};

pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 2.0;

const ADJECTIVES: [&str; 8] = [
	"Truth", "Real", "Free", "Patriot", "Wake", "Digital", "Cosmic", "Global",
];
const NOUNS: [&str; 8] = [
	"Seeker", "Warrior", "Thinker", "Voice", "Spirit", "Insider", "Guardian", "Eye",
];

#[derive(Clone, Debug)]
pub struct FeedParams {
	/// Tick period at speed 1.0.
	pub base_interval_ms: f64,
	pub engagement_chance: f64,
	pub max_spawns_per_tick: usize,
	pub recent_parent_chance: f64,
	pub recent_window: usize,
	/// Posts at this depth or deeper are never picked from the wider pool.
	pub max_parent_depth: usize,
}

impl Default for FeedParams {
	fn default() -> Self {
		Self {
			base_interval_ms: 2000.0,
			engagement_chance: 0.3,
			max_spawns_per_tick: 2,
			recent_parent_chance: 0.7,
			recent_window: 3,
			max_parent_depth: 4,
		}
	}
}

impl FeedParams {
	/// Timer period for a speed multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
	pub fn tick_interval(&self, speed: f64) -> Duration {
		let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
		Duration::from_secs_f64(self.base_interval_ms / speed / 1000.0)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
	#[default]
	Idle,
	Running,
	Paused,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
	pub total_spread: u32,
	/// Display-only number, re-rolled every tick.
	pub reach_per_minute: u32,
	pub active_threads: usize,
	category_breakdown: [u32; 3],
	pub reactions: Reactions,
}

impl Stats {
	/// Posts spawned for `category` since the last reset.
	pub fn spread_for(&self, category: Category) -> u32 {
		self.category_breakdown[category.index()]
	}
}

/// `adjective + noun + number`, no separator.
pub fn username<R: Rng>(rng: &mut R) -> String {
	let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
	let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
	let number = rng.gen_range(0..1000);
	format!("{adjective}{noun}{number}")
}

/// A unit draw landing in the top `p` of `[0, 1)`.
fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
	rng.r#gen::<f64>() >= 1.0 - p
}

/// Per-attempt spawn probability for `lens`.
///
/// `attempt` is the index of the spawn attempt within the tick; `post_count`
/// and `max_depth` describe the collection as it stood when the tick began.
pub fn spread_probability(
	lens: Lens,
	category: Category,
	attempt: usize,
	post_count: usize,
	max_depth: usize,
) -> f64 {
	match lens {
		Lens::Postman if category == Category::Technology => 0.4,
		Lens::Postman => 0.25,
		Lens::Nguyen if post_count < 10 => 0.35,
		Lens::Nguyen => 0.2,
		Lens::Peirce if attempt == 0 => 0.35,
		Lens::Peirce => 0.2,
		Lens::Leonelli if max_depth < 3 => 0.35,
		Lens::Leonelli => 0.2,
		Lens::Descartes => 0.3,
	}
}

pub struct FeedGenerator<R> {
	params: FeedParams,
	status: Status,
	category: Category,
	lens: Lens,
	posts: Vec<Post>,
	stats: Stats,
	next_id: u64,
	rng: R,
}

impl<R: Rng> FeedGenerator<R> {
	pub fn new(rng: R) -> Self {
		Self::with_params(FeedParams::default(), rng)
	}

	pub fn with_params(params: FeedParams, rng: R) -> Self {
		Self {
			params,
			status: Status::Idle,
			category: Category::Health,
			lens: Lens::default(),
			posts: Vec::new(),
			stats: Stats::default(),
			next_id: 0,
			rng,
		}
	}

	pub fn params(&self) -> &FeedParams {
		&self.params
	}

	pub fn status(&self) -> Status {
		self.status
	}

	pub fn posts(&self) -> &[Post] {
		&self.posts
	}

	pub fn stats(&self) -> &Stats {
		&self.stats
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn lens(&self) -> Lens {
		self.lens
	}

	/// Takes effect from the next tick.
	pub fn set_category(&mut self, category: Category) {
		self.category = category;
	}

	pub fn set_lens(&mut self, lens: Lens) {
		self.lens = lens;
	}

	/// Seeds a new spread with the category's original post.
	///
	/// Only accepted while idle; returns whether the generator started.
	pub fn start(&mut self, category: Category, now_ms: f64) -> bool {
		if self.status != Status::Idle {
			return false;
		}
		self.category = category;
		let root = Post {
			id: self.fresh_id(),
			content: category_info(category).active_seed().original.to_string(),
			author: username(&mut self.rng),
			timestamp_ms: now_ms,
			likes: 0,
			retweets: 0,
			is_original: true,
			variant: "original".into(),
			avatar: self.rng.gen_range(0..AVATAR_COUNT),
			parent_id: None,
			reactions: Reactions::default(),
			category,
		};
		info!("Starting spread for {} as {}", category.key(), root.author);
		self.posts = vec![root];
		self.status = Status::Running;
		true
	}

	pub fn pause(&mut self) {
		if self.status == Status::Running {
			self.status = Status::Paused;
		}
	}

	pub fn resume(&mut self) {
		if self.status == Status::Paused {
			self.status = Status::Running;
		}
	}

	pub fn toggle_pause(&mut self) {
		match self.status {
			Status::Running => self.pause(),
			Status::Paused => self.resume(),
			Status::Idle => {}
		}
	}

	/// Back to idle with no posts and zeroed stats.
	pub fn reset(&mut self) {
		info!("Resetting spread ({} posts)", self.posts.len());
		self.status = Status::Idle;
		self.posts.clear();
		self.stats = Stats::default();
	}

	/// Advances the feed by one timer period. Returns the number of new posts.
	pub fn tick(&mut self, now_ms: f64) -> usize {
		if self.status != Status::Running {
			return 0;
		}

		self.bump_engagement();

		let seed = category_info(self.category).active_seed();
		let capacity = seed.variants.len() + 1;
		let attempts = capacity
			.saturating_sub(self.posts.len())
			.min(self.params.max_spawns_per_tick);

		let snapshot = self.posts.len();
		let depth_of = depths(&self.posts);
		let max_depth = depth_of.values().copied().max().unwrap_or(0);
		let recent: Vec<PostId> = self.posts[snapshot - snapshot.min(self.params.recent_window)..]
			.iter()
			.map(|p| p.id)
			.collect();
		let eligible: Vec<PostId> = self
			.posts
			.iter()
			.filter(|p| depth_of.get(&p.id).is_some_and(|&d| d < self.params.max_parent_depth))
			.map(|p| p.id)
			.collect();

		let mut spawned = 0;
		for attempt in 0..attempts {
			let p = spread_probability(self.lens, self.category, attempt, snapshot, max_depth);
			if !chance(&mut self.rng, p) || self.posts.len() >= capacity {
				continue;
			}
			if let Some(post) = self.spawn(&recent, &eligible, snapshot, now_ms) {
				debug!("{} spread {} from {:?}", post.author, post.id, post.parent_id);
				self.posts.push(post);
				spawned += 1;
			}
		}

		self.refresh_stats(spawned);
		spawned
	}

	fn bump_engagement(&mut self) {
		let engagement_chance = self.params.engagement_chance;
		for post in &mut self.posts {
			if !chance(&mut self.rng, engagement_chance) {
				continue;
			}
			post.likes += self.rng.gen_range(0..15);
			post.retweets += self.rng.gen_range(0..8);
			for counter in post.reactions.counters_mut() {
				*counter += self.rng.gen_range(0..4);
			}
		}
	}

	fn spawn(
		&mut self,
		recent: &[PostId],
		eligible: &[PostId],
		snapshot: usize,
		now_ms: f64,
	) -> Option<Post> {
		let pool = if chance(&mut self.rng, self.params.recent_parent_chance) {
			recent
		} else {
			eligible
		};
		let parent_id = *pool.choose(&mut self.rng)?;

		let seed = category_info(self.category).active_seed();
		let unused: Vec<&str> = seed
			.variants
			.iter()
			.copied()
			.filter(|v| !self.posts.iter().any(|p| p.content == *v))
			.collect();
		let content = unused.choose(&mut self.rng)?.to_string();

		let mut reactions = Reactions::default();
		for counter in reactions.counters_mut() {
			*counter = self.rng.gen_range(0..8);
		}
		Some(Post {
			id: self.fresh_id(),
			content,
			author: username(&mut self.rng),
			timestamp_ms: now_ms,
			likes: self.rng.gen_range(0..15),
			retweets: self.rng.gen_range(0..8),
			is_original: false,
			variant: format!("variant-{snapshot}"),
			avatar: self.rng.gen_range(0..AVATAR_COUNT),
			parent_id: Some(parent_id),
			reactions,
			category: self.category,
		})
	}

	fn refresh_stats(&mut self, spawned: usize) {
		let spawned = spawned as u32;
		let stats = &mut self.stats;
		stats.total_spread += spawned;
		stats.reach_per_minute = self.rng.gen_range(100..300);
		stats.active_threads = self.posts.len();
		stats.category_breakdown[self.category.index()] += spawned;
		stats.reactions = self.posts.iter().fold(Reactions::default(), |mut acc, p| {
			acc += p.reactions;
			acc
		});
	}

	fn fresh_id(&mut self) -> PostId {
		let id = PostId(self.next_id);
		self.next_id += 1;
		id
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;
	use rand::rngs::mock::StepRng;

	use super::*;

	fn seeded(seed: u64) -> FeedGenerator<SmallRng> {
		FeedGenerator::new(SmallRng::seed_from_u64(seed))
	}

	#[test]
	fn start_creates_a_single_original_root() {
		let mut feed = seeded(1);
		assert!(feed.start(Category::Health, 1_000.0));

		assert_eq!(feed.status(), Status::Running);
		assert_eq!(feed.posts().len(), 1);
		let root = &feed.posts()[0];
		assert!(root.is_original);
		assert_eq!(root.parent_id, None);
		assert_eq!(root.likes, 0);
		assert_eq!(root.retweets, 0);
		assert_eq!(root.reactions, Reactions::default());
		assert_eq!(root.category, Category::Health);
		assert_eq!(root.content, category_info(Category::Health).active_seed().original);
		assert_eq!(depths(feed.posts())[&root.id], 0);
	}

	#[test]
	fn start_is_ignored_unless_idle() {
		let mut feed = seeded(2);
		assert!(feed.start(Category::Politics, 0.0));
		assert!(!feed.start(Category::Health, 0.0));
		feed.pause();
		assert!(!feed.start(Category::Health, 0.0));
		assert_eq!(feed.category(), Category::Politics);
	}

	#[test]
	fn zero_randomness_never_spawns_or_bumps() {
		let mut feed = FeedGenerator::new(StepRng::new(0, 0));
		feed.start(Category::Health, 0.0);
		let before = feed.posts().to_vec();

		for tick in 0..5 {
			assert_eq!(feed.tick(tick as f64 * 2000.0), 0);
		}
		assert_eq!(feed.posts(), &before[..]);
		assert_eq!(feed.stats().total_spread, 0);
		assert_eq!(feed.stats().reactions, Reactions::default());
	}

	#[test]
	fn never_exceeds_pool_or_repeats_a_variant() {
		for lens in Lens::ALL {
			for category in Category::ALL {
				let mut feed = seeded(7);
				feed.set_lens(lens);
				feed.start(category, 0.0);
				for t in 0..400 {
					feed.tick(t as f64);
				}
				let capacity = category_info(category).active_seed().variants.len() + 1;
				assert!(feed.posts().len() <= capacity);

				let contents: HashSet<&str> =
					feed.posts().iter().map(|p| p.content.as_str()).collect();
				assert_eq!(contents.len(), feed.posts().len(), "{lens:?} {category:?}");
			}
		}
	}

	#[test]
	fn a_long_run_exhausts_the_pool() {
		let mut feed = seeded(11);
		feed.set_lens(Lens::Descartes);
		feed.start(Category::Technology, 0.0);
		for t in 0..2_000 {
			feed.tick(t as f64);
		}
		assert_eq!(feed.posts().len(), 21);
		assert_eq!(feed.tick(0.0), 0);
	}

	#[test]
	fn parents_exist_earlier_and_are_shallow() {
		let mut feed = seeded(3);
		feed.start(Category::Health, 0.0);
		for t in 0..300 {
			feed.tick(t as f64);
		}
		let posts = feed.posts();
		let depth_of = depths(posts);
		for (i, post) in posts.iter().enumerate().skip(1) {
			let parent = post.parent_id.expect("child post without parent");
			let parent_index = posts[..i]
				.iter()
				.position(|p| p.id == parent)
				.expect("parent listed after child");
			// either the depth-limited pool or the recent window
			assert!(depth_of[&posts[parent_index].id] < 4 || i - parent_index <= 4);
			assert!(!post.is_original);
		}
	}

	#[test]
	fn paused_ticks_change_nothing() {
		let mut feed = seeded(4);
		feed.start(Category::Health, 0.0);
		feed.toggle_pause();
		assert_eq!(feed.status(), Status::Paused);
		let before = feed.posts().to_vec();
		for t in 0..50 {
			assert_eq!(feed.tick(t as f64), 0);
		}
		assert_eq!(feed.posts(), &before[..]);
		feed.toggle_pause();
		assert_eq!(feed.status(), Status::Running);
	}

	#[test]
	fn reset_returns_to_idle_and_clears() {
		let mut feed = seeded(5);
		feed.start(Category::Health, 0.0);
		for t in 0..30 {
			feed.tick(t as f64);
		}
		feed.reset();
		assert_eq!(feed.status(), Status::Idle);
		assert!(feed.posts().is_empty());
		assert_eq!(feed.stats(), &Stats::default());
		assert_eq!(feed.tick(0.0), 0);
		assert!(feed.start(Category::Politics, 0.0));
	}

	#[test]
	fn stats_track_the_collection() {
		let mut feed = seeded(6);
		feed.start(Category::Politics, 0.0);
		for t in 0..40 {
			feed.tick(t as f64);
		}
		let stats = feed.stats();
		let posts = feed.posts();
		assert_eq!(stats.active_threads, posts.len());
		assert_eq!(stats.total_spread as usize, posts.len() - 1);
		assert_eq!(stats.spread_for(Category::Politics), stats.total_spread);
		assert_eq!(stats.spread_for(Category::Health), 0);
		assert!((100..300).contains(&stats.reach_per_minute));
		let summed: u32 = posts.iter().map(|p| p.reactions.total()).sum();
		assert_eq!(stats.reactions.total(), summed);
	}

	#[test]
	fn spread_probability_follows_the_lens() {
		use Category::*;
		assert_eq!(spread_probability(Lens::Postman, Technology, 0, 1, 0), 0.4);
		assert_eq!(spread_probability(Lens::Postman, Health, 0, 1, 0), 0.25);
		assert_eq!(spread_probability(Lens::Nguyen, Health, 0, 9, 0), 0.35);
		assert_eq!(spread_probability(Lens::Nguyen, Health, 0, 10, 0), 0.2);
		assert_eq!(spread_probability(Lens::Peirce, Health, 0, 5, 0), 0.35);
		assert_eq!(spread_probability(Lens::Peirce, Health, 1, 5, 0), 0.2);
		assert_eq!(spread_probability(Lens::Leonelli, Health, 0, 5, 2), 0.35);
		assert_eq!(spread_probability(Lens::Leonelli, Health, 0, 5, 3), 0.2);
		assert_eq!(spread_probability(Lens::Descartes, Politics, 1, 20, 9), 0.3);
	}

	#[test]
	fn usernames_join_adjective_noun_and_number() {
		let mut rng = SmallRng::seed_from_u64(9);
		for _ in 0..50 {
			let name = username(&mut rng);
			let adjective = ADJECTIVES.iter().find(|a| name.starts_with(*a)).unwrap();
			let rest = &name[adjective.len()..];
			let noun = NOUNS.iter().find(|n| rest.starts_with(*n)).unwrap();
			let number: u32 = rest[noun.len()..].parse().unwrap();
			assert!(number < 1000);
		}
	}

	#[test]
	fn tick_interval_scales_with_speed() {
		let params = FeedParams::default();
		assert_eq!(params.tick_interval(1.0), Duration::from_millis(2000));
		assert_eq!(params.tick_interval(2.0), Duration::from_millis(1000));
		assert_eq!(params.tick_interval(10.0), Duration::from_millis(1000));
		assert_eq!(params.tick_interval(0.1), Duration::from_millis(4000));
	}

	fn counters(reactions: &Reactions) -> [u32; 4] {
		[
			reactions.angry,
			reactions.wow,
			reactions.support,
			reactions.skeptical,
		]
	}

	#[test]
	fn engagement_bumps_stay_in_range() {
		let params = FeedParams {
			engagement_chance: 1.0,
			max_spawns_per_tick: 0,
			..FeedParams::default()
		};
		let mut feed = FeedGenerator::with_params(params, SmallRng::seed_from_u64(12));
		feed.start(Category::Health, 0.0);

		let mut bumped = false;
		for t in 0..30 {
			let before = feed.posts()[0].clone();
			assert_eq!(feed.tick(t as f64), 0);
			let after = &feed.posts()[0];

			let likes = after.likes - before.likes;
			let retweets = after.retweets - before.retweets;
			assert!(likes < 15, "likes grew by {likes}");
			assert!(retweets < 8, "retweets grew by {retweets}");
			let old = counters(&before.reactions);
			let new = counters(&after.reactions);
			for (o, n) in old.iter().zip(new.iter()) {
				assert!(n - o < 4, "reaction grew by {}", n - o);
			}
			bumped |= likes > 0 || retweets > 0 || new != old;
		}
		assert!(bumped, "root gained no engagement in 30 ticks");
		assert_eq!(feed.stats().reactions, feed.posts()[0].reactions);
	}

	#[test]
	fn spawned_posts_start_small_and_carry_a_variant_tag() {
		let mut feed = seeded(8);
		feed.start(Category::Politics, 0.0);
		let root = feed.posts()[0].clone();
		assert_eq!(root.variant, "original");

		let mut spawned = 0;
		for t in 1..200 {
			let snapshot = feed.posts().len();
			let now = t as f64 * 2000.0;
			feed.tick(now);
			for post in &feed.posts()[snapshot..] {
				spawned += 1;
				assert!(!post.is_original);
				assert!(post.likes < 15);
				assert!(post.retweets < 8);
				assert!(counters(&post.reactions).iter().all(|&c| c < 8));
				assert!(post.avatar < AVATAR_COUNT);
				assert_eq!(post.variant, format!("variant-{snapshot}"));
				assert_eq!(post.timestamp_ms, now);
				assert_eq!(post.category, Category::Politics);
			}
		}
		assert!(spawned > 0);
	}
}
