//! Leptos client-side app for browsing a family lineage (gia phả).

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
pub mod config;
mod error;
mod pages;
mod session;
mod tree;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::family_tree::FamilyTreePage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::session::SessionContext;

/// Initialize logging at `level` and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the landing page, the family tree, and handles 404's
#[component]
pub fn App(
	/// Backend endpoints and layout limits shared with every page.
	config: AppConfig,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	provide_context(config);
	provide_context(SessionContext::from_local_storage());

	view! {
		<Html attr:lang="vi" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Gia phả dòng họ" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Đã xảy ra lỗi"</h1>
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
			<Router>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/gia-pha") view=FamilyTreePage />
				</Routes>
			</Router>
		</ErrorBoundary>
	}
}
