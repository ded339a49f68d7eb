use std::fmt;

/// Opaque identity of a post within one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "post-{}", self.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Health,
	Politics,
	Technology,
}

impl Category {
	pub const ALL: [Category; 3] = [Category::Health, Category::Politics, Category::Technology];

	/// Stable key used by `<select>` values.
	pub fn key(self) -> &'static str {
		match self {
			Category::Health => "HEALTH",
			Category::Politics => "POLITICS",
			Category::Technology => "TECHNOLOGY",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.key() == key)
	}

	pub(crate) fn index(self) -> usize {
		match self {
			Category::Health => 0,
			Category::Politics => 1,
			Category::Technology => 2,
		}
	}
}

/// Commentary/behavior policy selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lens {
	#[default]
	Postman,
	Peirce,
	Nguyen,
	Leonelli,
	Descartes,
}

impl Lens {
	pub const ALL: [Lens; 5] = [
		Lens::Postman,
		Lens::Peirce,
		Lens::Nguyen,
		Lens::Leonelli,
		Lens::Descartes,
	];

	pub fn key(self) -> &'static str {
		match self {
			Lens::Postman => "POSTMAN",
			Lens::Peirce => "PEIRCE",
			Lens::Nguyen => "NGUYEN",
			Lens::Leonelli => "LEONELLI",
			Lens::Descartes => "DESCARTES",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|l| l.key() == key)
	}

	pub fn name(self) -> &'static str {
		match self {
			Lens::Postman => "Neil Postman",
			Lens::Peirce => "Charles Peirce",
			Lens::Nguyen => "C Thi Nguyen",
			Lens::Leonelli => "Sabina Leonelli",
			Lens::Descartes => "René Descartes",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Lens::Postman => "Media ecology perspective",
			Lens::Peirce => "Pragmatic approach to truth",
			Lens::Nguyen => "Echo chambers expert",
			Lens::Leonelli => "Data-centric analysis",
			Lens::Descartes => "Methodological skepticism",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reactions {
	pub angry: u32,
	pub wow: u32,
	pub support: u32,
	pub skeptical: u32,
}

impl Reactions {
	pub fn counters_mut(&mut self) -> [&mut u32; 4] {
		[
			&mut self.angry,
			&mut self.wow,
			&mut self.support,
			&mut self.skeptical,
		]
	}

	pub fn total(&self) -> u32 {
		self.angry + self.wow + self.support + self.skeptical
	}
}

impl std::ops::AddAssign for Reactions {
	fn add_assign(&mut self, rhs: Self) {
		self.angry += rhs.angry;
		self.wow += rhs.wow;
		self.support += rhs.support;
		self.skeptical += rhs.skeptical;
	}
}

/// A single post in the simulated feed.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
	pub id: PostId,
	pub content: String,
	pub author: String,
	/// Milliseconds since the Unix epoch.
	pub timestamp_ms: f64,
	pub likes: u32,
	pub retweets: u32,
	pub is_original: bool,
	pub variant: String,
	/// Index of the profile avatar, see `content::avatar_url`.
	pub avatar: usize,
	pub parent_id: Option<PostId>,
	pub reactions: Reactions,
	pub category: Category,
}

/// An sRGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub fn css(self) -> String {
		format!("rgb({}, {}, {})", self.0, self.1, self.2)
	}

	pub fn rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_round_trip_through_from_key() {
		for category in Category::ALL {
			assert_eq!(Category::from_key(category.key()), Some(category));
		}
		for lens in Lens::ALL {
			assert_eq!(Lens::from_key(lens.key()), Some(lens));
		}
		assert_eq!(Category::from_key("SPORTS"), None);
	}

	#[test]
	fn rgba_formats_valid_css() {
		assert_eq!(Rgb(220, 38, 38).rgba(0.6), "rgba(220, 38, 38, 0.6)");
		assert_eq!(Rgb(16, 185, 129).css(), "rgb(16, 185, 129)");
	}
}
