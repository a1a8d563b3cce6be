//! HTTP client for the lineage backend.

use log::{debug, info};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use super::normalize;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::tree::{DetailRecord, PersonNode};

#[derive(Clone)]
pub struct ApiClient {
	config: AppConfig,
	session: SessionContext,
	http: reqwest::Client,
}

impl ApiClient {
	pub fn new(config: AppConfig, session: SessionContext) -> Self {
		Self {
			config,
			session,
			http: reqwest::Client::new(),
		}
	}

	fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
		Url::parse(&self.config.url(path)).map_err(|e| ApiError::InvalidUrl(e.to_string()))
	}

	/// Member detail URL with `id` as a single escaped path segment.
	fn member_url(&self, id: &str) -> Result<Url, ApiError> {
		// `.` and `..` would be dropped or climb out of the member path.
		if matches!(id, "" | "." | "..") {
			return Err(ApiError::InvalidId(id.to_string()));
		}
		let mut url = self.endpoint(&self.config.member_path)?;
		url.path_segments_mut()
			.map_err(|()| ApiError::InvalidUrl(self.config.member_path.clone()))?
			.pop_if_empty()
			.push(id);
		Ok(url)
	}

	fn request(&self, url: Url) -> RequestBuilder {
		let request = self.http.get(url);
		match self.session.token() {
			Some(token) => request.bearer_auth(token),
			None => request,
		}
	}

	async fn get_json(&self, url: Url) -> Result<Value, ApiError> {
		debug!("GET {}", url);
		let response = self.request(url).send().await?;
		if !response.status().is_success() {
			return Err(ApiError::Status {
				status: response.status().as_u16(),
			});
		}
		Ok(response.json::<Value>().await?)
	}

	/// Fetch the family tree as the backend lays it out: top-level people with
	/// nested spouses and children.
	pub async fn family_tree(&self) -> Result<Vec<PersonNode>, ApiError> {
		let url = self.endpoint(&self.config.tree_path)?;
		let nodes = normalize::tree_list(self.get_json(url).await?)?;
		info!("loaded {} top-level people", nodes.len());
		Ok(nodes)
	}

	pub async fn member(&self, id: &str) -> Result<DetailRecord, ApiError> {
		let url = self.member_url(id)?;
		normalize::member_detail(self.get_json(url).await?)
	}
}

#[cfg(test)]
mod tests {
	use reqwest::header::AUTHORIZATION;

	use super::*;

	#[test]
	fn bearer_attached_when_token_present() {
		let client = ApiClient::new(AppConfig::default(), SessionContext::with_token("t0k"));
		let req = client.request(client.member_url("1").unwrap()).build().unwrap();
		assert_eq!(req.url().as_str(), "http://localhost:8000/api/members/1");
		assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer t0k");
	}

	#[test]
	fn no_header_without_token() {
		let client = ApiClient::new(AppConfig::default(), SessionContext::default());
		let req = client.request(client.endpoint("/api/family-tree").unwrap()).build().unwrap();
		assert!(req.headers().get(AUTHORIZATION).is_none());
	}

	#[test]
	fn member_id_stays_one_path_segment() {
		let client = ApiClient::new(AppConfig::default(), SessionContext::default());
		let url = |id: &str| client.member_url(id).unwrap().to_string();
		assert_eq!(url("x/../../admin"), "http://localhost:8000/api/members/x%2F..%2F..%2Fadmin");
		assert_eq!(url("a#b"), "http://localhost:8000/api/members/a%23b");
		assert_eq!(url("a?b=1"), "http://localhost:8000/api/members/a%3Fb=1");
		assert_eq!(url("Nguyễn 1"), "http://localhost:8000/api/members/Nguy%E1%BB%85n%201");
	}

	#[test]
	fn trailing_slash_on_member_path() {
		let config = AppConfig {
			member_path: "/api/members/".into(),
			..AppConfig::default()
		};
		let client = ApiClient::new(config, SessionContext::default());
		assert_eq!(client.member_url("7").unwrap().as_str(), "http://localhost:8000/api/members/7");
	}

	#[test]
	fn dot_ids_are_rejected() {
		let client = ApiClient::new(AppConfig::default(), SessionContext::default());
		for id in ["", ".", ".."] {
			assert!(matches!(client.member_url(id), Err(ApiError::InvalidId(_))));
		}
	}
}
