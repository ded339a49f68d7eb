mod commentary;
mod component;
mod content;
mod depth;
pub mod feed;
mod graph;
mod physics;
mod render;
mod state;
mod types;

pub use commentary::commentary;
pub use component::{SpreadGraphCanvas, random_seed};
pub use content::{avatar_url, category_info};
pub use feed::{FeedGenerator, Status};
pub use types::{Category, Lens, Post};
