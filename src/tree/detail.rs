use chrono::{DateTime, NaiveDate};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::warn;

use super::types::DetailRecord;
use crate::error::ApiError;

const MISSING: &str = "—";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
	#[default]
	Closed,
	Loading,
	Loaded(DetailRecord),
	Failed(String),
}

impl DetailState {
	pub fn from_result(result: Result<DetailRecord, ApiError>) -> Self {
		match result {
			Ok(record) => DetailState::Loaded(record),
			Err(e) => {
				warn!("member detail failed: {}", e);
				if e.is_not_found() {
					DetailState::Failed("Không tìm thấy thành viên.".into())
				} else {
					DetailState::Failed("Không thể tải thông tin thành viên.".into())
				}
			}
		}
	}

	pub fn is_open(&self) -> bool {
		!matches!(self, DetailState::Closed)
	}

	/// State to show once a member request finishes, or `None` when the
	/// overlay was closed while it was in flight. Among overlapping requests
	/// the last one to finish wins.
	pub fn resolve(&self, result: Result<DetailRecord, ApiError>) -> Option<Self> {
		self.is_open().then(|| DetailState::from_result(result))
	}
}

pub fn life_status(record: &DetailRecord) -> &'static str {
	match record.death_day.as_deref().map(str::trim) {
		Some(day) if !day.is_empty() => "Đã mất",
		_ => "Còn sống",
	}
}

/// `dd/mm/yyyy` for ISO dates and timestamps, anything else as sent.
fn format_date(raw: &str) -> String {
	let raw = raw.trim();
	let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
		.ok()
		.or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
		.or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()));
	match date {
		Some(d) => d.format("%d/%m/%Y").to_string(),
		None => raw.to_string(),
	}
}

fn text(value: Option<&str>) -> String {
	match value.map(str::trim) {
		Some(v) if !v.is_empty() => v.to_string(),
		_ => MISSING.to_string(),
	}
}

fn date(value: Option<&str>) -> String {
	match value.map(str::trim) {
		Some(v) if !v.is_empty() => format_date(v),
		_ => MISSING.to_string(),
	}
}

impl DetailRecord {
	/// Labelled rows shown in the overlay, in display order.
	pub fn fields(&self) -> Vec<(&'static str, String)> {
		vec![
			("Giới tính", text(self.gender.as_deref())),
			("Email", text(self.email.as_deref())),
			("Số điện thoại", text(self.phone_number.as_deref())),
			("Địa chỉ", text(self.address.as_deref())),
			("Ngày sinh", date(self.birthday.as_deref())),
			("Ngày mất", date(self.death_day.as_deref())),
			("Tình trạng", life_status(self).to_string()),
			("Ngày tạo", date(self.created_at.as_deref())),
			("Cập nhật", date(self.updated_at.as_deref())),
		]
	}

	pub fn avatar(&self) -> Option<&str> {
		self.profile_image.as_deref().map(str::trim).filter(|s| !s.is_empty())
	}
}

/// Dismissible panel showing the member currently in `state`.
#[component]
pub fn DetailOverlay(
	state: RwSignal<DetailState>,
	#[prop(into)] image_url: Callback<String, String>,
) -> impl IntoView {
	let close = move |_: MouseEvent| state.set(DetailState::Closed);

	view! {
		<Show when=move || state.with(DetailState::is_open)>
			<div class="detail-backdrop" on:click=close>
				<div class="detail-overlay" on:click=|ev| ev.stop_propagation()>
					<button class="detail-close" on:click=close>"×"</button>
					{move || match state.get() {
						DetailState::Closed => ().into_any(),
						DetailState::Loading => view! { <p class="detail-status">"Đang tải..."</p> }.into_any(),
						DetailState::Failed(msg) => view! { <p class="detail-status error">{msg}</p> }.into_any(),
						DetailState::Loaded(record) => {
							let avatar = match record.avatar() {
								Some(path) => {
									let src = image_url.run(path.to_string());
									view! { <img class="detail-avatar" src=src alt=record.name.clone() /> }.into_any()
								}
								None => view! { <div class="detail-avatar placeholder">"Chưa có ảnh"</div> }.into_any(),
							};
							let rows = record
								.fields()
								.into_iter()
								.map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
								.collect_view();
							view! {
								{avatar}
								<h2>{record.name.clone()}</h2>
								<dl class="detail-fields">{rows}</dl>
							}
							.into_any()
						}
					}}
				</div>
			</div>
		</Show>
	}
}
