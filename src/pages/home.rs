use leptos::prelude::*;
use leptos_router::components::A;

/// Public landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<section class="home">
			<div class="home-hero">
				<h1>"Gia phả dòng họ"</h1>
				<p class="subtitle">
					"Lưu giữ cội nguồn, kết nối các thế hệ. Xem cây gia phả và thông tin từng thành viên."
				</p>
				<A href="/gia-pha" attr:class="button">"Xem cây gia phả"</A>
			</div>
		</section>
	}
}
