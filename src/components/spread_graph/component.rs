use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use leptos::ev;
use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render::{self, AvatarCache};
use super::state::SpreadGraphState;
use super::types::Post;

type SharedState = Rc<RefCell<Option<SpreadGraphState>>>;

/// Per-view animation loop: one physics step and one redraw per frame.
struct FrameLoop {
	state: SharedState,
	ctx: CanvasRenderingContext2d,
	avatars: RefCell<AvatarCache>,
	alive: Arc<AtomicBool>,
	pending: Arc<Mutex<Option<AnimationFrameRequestHandle>>>,
}

impl FrameLoop {
	fn schedule(self: Rc<Self>) {
		let pending = self.pending.clone();
		match request_animation_frame_with_handle(move || self.run()) {
			Ok(handle) => {
				if let Ok(mut slot) = pending.lock() {
					*slot = Some(handle);
				}
			}
			Err(err) => error!("requestAnimationFrame failed: {:?}", err),
		}
	}

	fn run(self: Rc<Self>) {
		if !self.alive.load(Ordering::Relaxed) {
			return;
		}
		if let Some(ref mut s) = *self.state.borrow_mut() {
			s.tick();
			render::render(s, &self.ctx, &mut self.avatars.borrow_mut());
		}
		self.schedule();
	}
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let from_parent = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0);
	from_parent
		.or_else(|| {
			let window = web_sys::window()?;
			Some((
				window.inner_width().ok()?.as_f64()?,
				window.inner_height().ok()?.as_f64()?,
			))
		})
		.unwrap_or((800.0, 600.0))
}

/// True the first time it is called for `attempted`, false ever after.
fn claim_setup(attempted: StoredValue<bool>) -> bool {
	attempted
		.try_update_value(|done| !std::mem::replace(done, true))
		.unwrap_or(false)
}

/// Seed for the simulation RNGs, drawn from the browser.
pub fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Canvas view of the spread: rebuilds the graph whenever `posts` changes and
/// animates it until the component is torn down.
#[component]
pub fn SpreadGraphCanvas(#[prop(into)] posts: Signal<Vec<Post>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let pending: Arc<Mutex<Option<AnimationFrameRequestHandle>>> = Arc::new(Mutex::new(None));
	// setup runs once; a missing context is not retried on every post update
	let setup_attempted = StoredValue::new(false);

	let (state_sync, alive_init, pending_init) = (state.clone(), alive.clone(), pending.clone());
	Effect::new(move |_| {
		let posts = posts.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if claim_setup(setup_attempted) {
			let (w, h) = canvas_size(&canvas);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			let ctx = canvas
				.get_context("2d")
				.ok()
				.flatten()
				.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
			let Some(ctx) = ctx else {
				warn!("2d canvas context unavailable, spread graph will not animate");
				return;
			};
			*state_sync.borrow_mut() = Some(SpreadGraphState::new(w, h, random_seed()));
			info!("Spread graph canvas ready ({w}x{h})");

			Rc::new(FrameLoop {
				state: state_sync.clone(),
				ctx,
				avatars: RefCell::new(AvatarCache::default()),
				alive: alive_init.clone(),
				pending: pending_init.clone(),
			})
			.schedule();
		}

		if let Some(ref mut s) = *state_sync.borrow_mut() {
			s.sync(&posts);
		}
	});

	let state_resize = state.clone();
	let resize = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = canvas_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(w, h);
		}
	});

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		if let Ok(mut slot) = pending.lock() {
			if let Some(handle) = slot.take() {
				handle.cancel();
			}
		}
		resize.remove();
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.mouse = Some((x, y));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.mouse = None;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="spread-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
