use gia_pha::config::AppConfig;
use gia_pha::{App, init_logging};
use leptos::prelude::*;

fn main() {
	let config = AppConfig::from_build_env();
	init_logging(config.log_level);
	leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
