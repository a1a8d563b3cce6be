use std::sync::Arc;

use log::debug;

const TOKEN_KEY: &str = "accessToken";

/// Credentials shared by every backend call. Read-only here; signing in and
/// out happens elsewhere and reloads the page.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
	token: Option<Arc<str>>,
}

impl SessionContext {
	pub fn with_token(token: impl Into<String>) -> Self {
		let token = token.into();
		Self {
			token: (!token.trim().is_empty()).then(|| Arc::from(token.trim())),
		}
	}

	pub fn from_local_storage() -> Self {
		let token = web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());
		debug!("session token {}", if token.is_some() { "found" } else { "absent" });
		token.map(Self::with_token).unwrap_or_default()
	}

	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}
}
