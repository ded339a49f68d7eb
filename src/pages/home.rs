use leptos::prelude::*;
use log::error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;

use crate::components::spread_graph::feed::{MAX_SPEED, MIN_SPEED};
use crate::components::spread_graph::{
	Category, FeedGenerator, Lens, Post, SpreadGraphCanvas, Status, avatar_url, category_info,
	commentary, random_seed,
};

type Feed = FeedGenerator<SmallRng>;

fn now_ms() -> f64 {
	js_sys::Date::now()
}

fn format_time(timestamp_ms: f64) -> String {
	js_sys::Date::new(&JsValue::from_f64(timestamp_ms))
		.to_locale_time_string("en-US")
		.into()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let feed = RwSignal::new(Feed::new(SmallRng::seed_from_u64(random_seed())));
	let speed = RwSignal::new(1.0_f64);
	let selected = RwSignal::new(None::<Post>);
	let show_info = RwSignal::new(true);

	let status = Memo::new(move |_| feed.with(|f| f.status()));
	let lens = Memo::new(move |_| feed.with(|f| f.lens()));
	let posts = Signal::derive(move || feed.with(|f| f.posts().to_vec()));

	// Feed timer: only armed while running, re-armed when the speed changes.
	let ticker = StoredValue::new(None::<IntervalHandle>);
	let stop_ticker = move || {
		ticker.try_update_value(|slot| {
			if let Some(handle) = slot.take() {
				handle.clear();
			}
		});
	};
	Effect::new(move |_| {
		let running = status.get() == Status::Running;
		let speed = speed.get();
		stop_ticker();
		if !running {
			return;
		}
		let interval = feed.with_untracked(|f| f.params().tick_interval(speed));
		let tick = move || {
			feed.update(|f| {
				f.tick(now_ms());
			})
		};
		match set_interval_with_handle(tick, interval) {
			Ok(handle) => ticker.set_value(Some(handle)),
			Err(err) => error!("Could not schedule feed ticks: {:?}", err),
		}
	});
	on_cleanup(stop_ticker);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="spread-layout">
				<div class="graph-pane">
					<SpreadGraphCanvas posts=posts />
					<div class="graph-overlay">
						<h2>"Misinformation Network"</h2>
						<p class="subtitle">"Watch how false information spreads and connects"</p>
					</div>
				</div>
				<aside class="side-panel">
					<h1>"Live Misinformation Spread"</h1>
					<ControlPanel feed=feed speed=speed show_info=show_info />
					<FeedList posts=posts selected=selected />
				</aside>
				{move || {
					selected
						.get()
						.map(|post| view! { <CommentaryPopup post=post lens=lens.get() selected=selected /> })
				}}
				{move || show_info.get().then(|| view! { <InfoModal show=show_info /> })}
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn ControlPanel(feed: RwSignal<Feed>, speed: RwSignal<f64>, show_info: RwSignal<bool>) -> impl IntoView {
	let status = Memo::new(move |_| feed.with(|f| f.status()));
	let lens = Memo::new(move |_| feed.with(|f| f.lens()));
	let stats = Memo::new(move |_| feed.with(|f| f.stats().clone()));

	view! {
		<div class="controls">
			<div class="control-row">
				<select on:change=move |ev| {
					if let Some(category) = Category::from_key(&event_target_value(&ev)) {
						feed.update(|f| f.set_category(category));
					}
				}>
					{Category::ALL
						.into_iter()
						.map(|category| {
							view! {
								<option
									value=category.key()
									selected=move || feed.with(|f| f.category()) == category
								>
									{category_info(category).name}
								</option>
							}
						})
						.collect_view()}
				</select>
				<select on:change=move |ev| {
					if let Some(lens) = Lens::from_key(&event_target_value(&ev)) {
						feed.update(|f| f.set_lens(lens));
					}
				}>
					{Lens::ALL
						.into_iter()
						.map(|option| {
							view! {
								<option value=option.key() selected=move || lens.get() == option>
									{option.name()}
								</option>
							}
						})
						.collect_view()}
				</select>
				<input
					type="range"
					min=MIN_SPEED.to_string()
					max=MAX_SPEED.to_string()
					step="0.1"
					prop:value=move || speed.get().to_string()
					on:input=move |ev| {
						if let Ok(value) = event_target_value(&ev).parse::<f64>() {
							speed.set(value.clamp(MIN_SPEED, MAX_SPEED));
						}
					}
				/>
			</div>
			<p class="lens-description">{move || lens.get().description()}</p>

			<div class="control-row">
				<button
					class="start"
					on:click=move |_| {
						feed.update(|f| {
							f.start(f.category(), now_ms());
						})
					}
					disabled=move || status.get() != Status::Idle
				>
					"Start"
				</button>
				<button
					class=move || if status.get() == Status::Paused { "resume" } else { "pause" }
					on:click=move |_| feed.update(|f| f.toggle_pause())
					disabled=move || status.get() == Status::Idle
				>
					{move || if status.get() == Status::Paused { "Resume" } else { "Pause" }}
				</button>
				<button class="instructions" on:click=move |_| show_info.set(true)>
					"Instructions"
				</button>
				<button
					class="reset"
					on:click=move |_| feed.update(|f| f.reset())
					disabled=move || status.get() == Status::Idle
				>
					"Reset"
				</button>
			</div>

			<div class="reactions">
				<p>"😠 " {move || stats.get().reactions.angry}</p>
				<p>"😮 " {move || stats.get().reactions.wow}</p>
				<p>"👍 " {move || stats.get().reactions.support}</p>
				<p>"🤔 " {move || stats.get().reactions.skeptical}</p>
			</div>

			<dl class="stats">
				<dt>"Total spread"</dt>
				<dd>{move || stats.get().total_spread}</dd>
				<dt>"Reach / min"</dt>
				<dd>{move || stats.get().reach_per_minute}</dd>
				<dt>"Active threads"</dt>
				<dd>{move || stats.get().active_threads}</dd>
				<dt>"Reactions"</dt>
				<dd>{move || stats.get().reactions.total()}</dd>
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<dt style:color=category_info(category).color.css()>
								{category_info(category).name}
							</dt>
							<dd>{move || stats.get().spread_for(category)}</dd>
						}
					})
					.collect_view()}
			</dl>
		</div>
	}
}

#[component]
fn FeedList(#[prop(into)] posts: Signal<Vec<Post>>, selected: RwSignal<Option<Post>>) -> impl IntoView {
	view! {
		<div class="feed">
			<h2>"Live Feed"</h2>
			<div class="feed-items">
				{move || {
					posts
						.get()
						.into_iter()
						.map(|post| view! { <FeedItem post=post selected=selected /> })
						.collect_view()
				}}
			</div>
		</div>
	}
}

#[component]
fn FeedItem(post: Post, selected: RwSignal<Option<Post>>) -> impl IntoView {
	let color = category_info(post.category).color.css();
	let time = format_time(post.timestamp_ms);
	let avatar = avatar_url(post.avatar);
	let id = post.id.to_string();
	let (author, content, likes, retweets) = (
		post.author.clone(),
		post.content.clone(),
		post.likes,
		post.retweets,
	);

	view! {
		<div id=id class="feed-item" style:border-left-color=color>
			<img src=avatar alt="Profile" class="avatar" />
			<div class="feed-body">
				<p class="author">"@" {author}</p>
				<p class="content">{content}</p>
				<div class="meta">
					<span>"❤️ " {likes}</span>
					<span>"🔄 " {retweets}</span>
					<span>{time}</span>
				</div>
				<button class="analysis" on:click=move |_| selected.set(Some(post.clone()))>
					"View Analysis"
				</button>
			</div>
		</div>
	}
}

#[component]
fn CommentaryPopup(post: Post, lens: Lens, selected: RwSignal<Option<Post>>) -> impl IntoView {
	let text = commentary(&post, lens);

	view! {
		<div class="popup-backdrop" on:click=move |_| selected.set(None)>
			<div class="popup" on:click=|ev| ev.stop_propagation()>
				<div class="popup-header">
					<h2>{lens.name()} "'s Analysis"</h2>
					<button class="close" on:click=move |_| selected.set(None)>
						"×"
					</button>
				</div>
				<div class="popup-post">
					<p class="author">"@" {post.author}</p>
					<p>{post.content}</p>
				</div>
				<p class="label">"Commentary:"</p>
				<p class="commentary">{text}</p>
				<p class="lens-description">{lens.description()}</p>
			</div>
		</div>
	}
}

fn lens_blurb(lens: Lens) -> &'static str {
	match lens {
		Lens::Postman => {
			"Focuses on how media technology shapes information spread, creating wider, more connected networks."
		}
		Lens::Peirce => {
			"Emphasizes methodical, scientific approach with structured, hierarchical networks."
		}
		Lens::Nguyen => {
			"Explores echo chambers and epistemic bubbles, creating tight information clusters."
		}
		Lens::Leonelli => "Focuses on data relationships and connections in knowledge spread.",
		Lens::Descartes => {
			"Applies methodological skepticism, questioning all claims until reaching clear and distinct truths."
		}
	}
}

/// Welcome screen, open on first load and reopened from the control panel.
#[component]
fn InfoModal(show: RwSignal<bool>) -> impl IntoView {
	view! {
		<div class="popup-backdrop">
			<div class="popup info-modal">
				<h2>"Welcome to the Misinformation Network Simulator"</h2>

				<section>
					<h3>"How It Works"</h3>
					<p>
						"Watch how misinformation spreads across social networks through different categories: Health, Politics, and Technology. Start with a seed post and observe how it evolves and spreads through the network."
					</p>
					<p>
						"Use the controls to adjust the simulation speed, pause, or reset the network. You can also switch between different philosophical modes to see how each perspective interprets the spread of misinformation."
					</p>
				</section>

				<section>
					<h3>"Philosophical Lenses"</h3>
					{Lens::ALL
						.into_iter()
						.map(|lens| {
							view! {
								<h4>{lens.name()}</h4>
								<p>{lens_blurb(lens)}</p>
							}
						})
						.collect_view()}
				</section>

				<section>
					<h3>"Controls"</h3>
					<ul>
						<li>"Choose a misinformation category to start the simulation."</li>
						<li>
							"Adjust the spread speed with the slider to see how quickly misinformation can propagate."
						</li>
						<li>"Use the start, pause, or reset buttons to control the simulation flow."</li>
						<li>"Switch between philosophical modes using the lens menu."</li>
						<li>
							<strong>
								"Click \"View Analysis\" below any post to see that philosopher's specific commentary on it."
							</strong>
						</li>
					</ul>
				</section>

				<section>
					<h3>"Viewing Philosophical Commentary"</h3>
					<p>"1. Select a philosopher from the lens menu"</p>
					<p>"2. Find a post you want to analyze in the feed"</p>
					<p>"3. Click the \"View Analysis\" button below that post"</p>
					<p>"4. A popup will appear with the philosopher's specific analysis of that post's content"</p>
				</section>

				<button class="dismiss" on:click=move |_| show.set(false)>
					"Got it, let's start!"
				</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn every_lens_has_its_own_blurb() {
		let blurbs: HashSet<&str> = Lens::ALL.into_iter().map(lens_blurb).collect();
		assert_eq!(blurbs.len(), Lens::ALL.len());
		assert!(blurbs.iter().all(|b| b.ends_with('.')));
		assert!(lens_blurb(Lens::Nguyen).contains("echo chambers"));
	}
}
