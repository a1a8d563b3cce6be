use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"Không tìm thấy trang"</h1>
			<A href="/">"Về trang chủ"</A>
		</section>
	}
}
