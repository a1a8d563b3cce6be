use leptos::prelude::*;

use super::layout::{CoupleGroup, PersonCard, Truncation};

fn render_card(card: &PersonCard, spouse: bool, on_view: Callback<String>) -> AnyView {
	let id = card.id.clone();
	let class = if spouse { "person spouse" } else { "person" };
	view! {
		<div class=class>
			<span class="person-name">{card.name.clone()}</span>
			{(!card.role.is_empty()).then(|| view! { <span class="person-role">{card.role}</span> })}
			<button class="person-view" on:click=move |_| on_view.run(id.clone())>"Xem"</button>
		</div>
	}
	.into_any()
}

fn truncation_notice(truncated: Option<Truncation>) -> Option<&'static str> {
	truncated.map(|t| match t {
		Truncation::Cycle => "Dữ liệu lặp, đã bỏ qua một nhánh",
		Truncation::Depth => "Cây quá sâu, đã dừng hiển thị",
	})
}

fn render_group(group: &CoupleGroup, on_view: Callback<String>) -> AnyView {
	let couple = std::iter::once(render_card(&group.person, false, on_view))
		.chain(group.spouses.iter().map(|s| render_card(s, true, on_view)))
		.collect_view();
	let children = group.child_list().class().map(|class| {
		let items = group
			.children
			.iter()
			.map(|child| view! { <li>{render_group(child, on_view)}</li> })
			.collect_view();
		view! { <ul class=class>{items}</ul> }
	});
	let notice = truncation_notice(group.truncated).map(|msg| view! { <p class="tree-notice">{msg}</p> });

	view! {
		<div class="couple">{couple}</div>
		{notice}
		{children}
	}
	.into_any()
}

/// Nested couple groups from `root` down. Pressing "Xem" on a person calls
/// `on_view` with their id.
#[component]
pub fn FamilyTree(root: CoupleGroup, #[prop(into)] on_view: Callback<String>) -> impl IntoView {
	view! {
		<div class="family-tree">
			<ul class="children">
				<li>{render_group(&root, on_view)}</li>
			</ul>
		</div>
	}
}
