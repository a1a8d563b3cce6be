use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::tree::{
	CoupleGroup, DetailOverlay, DetailState, FamilyTree, LayoutLimits, PersonNode, build_layout,
	select_root,
};

#[derive(Clone, Debug, PartialEq)]
enum TreeState {
	Loading,
	Empty,
	Ready(CoupleGroup),
	Failed,
}

fn tree_state(result: Result<Vec<PersonNode>, ApiError>, config: &AppConfig) -> TreeState {
	let nodes = match result {
		Ok(nodes) => nodes,
		Err(e) => {
			warn!("family tree failed: {}", e);
			return TreeState::Failed;
		}
	};
	match select_root(&nodes, config.preferred_root.as_deref()) {
		Some(root) => {
			let layout = build_layout(root, &LayoutLimits {
				max_depth: config.max_depth,
			});
			debug!(
				"laid out {} people over {} generations",
				layout.person_count(),
				layout.generations()
			);
			TreeState::Ready(layout)
		}
		None => TreeState::Empty,
	}
}

/// Family tree view with the member detail overlay
#[component]
pub fn FamilyTreePage() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let session = use_context::<SessionContext>().unwrap_or_default();

	let tree = RwSignal::new(TreeState::Loading);
	let detail = RwSignal::new(DetailState::Closed);
	let reload = RwSignal::new(0u32);

	// Responses that land after the page is gone must not touch its signals.
	let alive = Arc::new(AtomicBool::new(true));
	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let (tree_config, tree_session, tree_alive) = (config.clone(), session.clone(), alive.clone());
	Effect::new(move |_| {
		reload.track();
		tree.set(TreeState::Loading);
		let client = ApiClient::new(tree_config.clone(), tree_session.clone());
		let (config, alive) = (tree_config.clone(), tree_alive.clone());
		spawn_local(async move {
			let state = tree_state(client.family_tree().await, &config);
			if alive.load(Ordering::Relaxed) {
				tree.set(state);
			}
		});
	});

	let (detail_config, detail_alive) = (config.clone(), alive);
	let on_view = Callback::new(move |id: String| {
		detail.set(DetailState::Loading);
		let client = ApiClient::new(detail_config.clone(), session.clone());
		let alive = detail_alive.clone();
		spawn_local(async move {
			let result = client.member(&id).await;
			if !alive.load(Ordering::Relaxed) {
				return;
			}
			if let Some(next) = detail.with_untracked(|state| state.resolve(result)) {
				detail.set(next);
			}
		});
	});

	let image_url = Callback::new(move |path: String| config.url(&path));

	let summary = move || {
		tree.with(|t| match t {
			TreeState::Ready(root) => Some(format!(
				"{} người · {} đời",
				root.person_count(),
				root.generations()
			)),
			_ => None,
		})
	};

	view! {
		<section class="tree-page">
			<header class="tree-header">
				<h1>"Cây gia phả"</h1>
				<span class="tree-summary">{summary}</span>
				<button class="reload" on:click=move |_| reload.update(|n| *n += 1)>
					"Tải lại"
				</button>
			</header>
			{move || match tree.get() {
				TreeState::Loading => view! { <p class="tree-status">"Đang tải..."</p> }.into_any(),
				TreeState::Empty => view! { <p class="tree-status">"Chưa có dữ liệu gia phả."</p> }.into_any(),
				TreeState::Failed => {
					view! { <p class="tree-status error">"Không thể tải cây gia phả."</p> }.into_any()
				}
				TreeState::Ready(root) => view! { <FamilyTree root=root on_view=on_view /> }.into_any(),
			}}
			<DetailOverlay state=detail image_url=image_url />
		</section>
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn nodes(value: serde_json::Value) -> Vec<PersonNode> {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn single_child_scenario() {
		let input = nodes(json!([{ "id": "r", "name": "Root", "children": [{ "id": "c1", "name": "Child1" }] }]));
		let TreeState::Ready(root) = tree_state(Ok(input), &AppConfig::default()) else {
			panic!("expected a tree");
		};
		assert_eq!(root.person.id, "r");
		assert_eq!(root.child_list().class(), Some("children single-child"));
	}

	#[test]
	fn empty_list_is_empty_state() {
		assert_eq!(tree_state(Ok(Vec::new()), &AppConfig::default()), TreeState::Empty);
	}

	#[test]
	fn fetch_failure_is_failed_state() {
		let state = tree_state(Err(ApiError::Status { status: 500 }), &AppConfig::default());
		assert_eq!(state, TreeState::Failed);
	}

	#[test]
	fn configured_depth_is_applied() {
		let input = nodes(json!([{ "id": "a", "children": [{ "id": "b", "children": [{ "id": "c" }] }] }]));
		let config = AppConfig {
			max_depth: 1,
			..AppConfig::default()
		};
		let TreeState::Ready(root) = tree_state(Ok(input), &config) else {
			panic!("expected a tree");
		};
		assert_eq!(root.generations(), 2);
	}
}
