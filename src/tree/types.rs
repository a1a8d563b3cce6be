use serde::{Deserialize, Deserializer};

/// A person as it appears in the family-tree payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PersonNode {
	#[serde(deserialize_with = "id_from_string_or_number")]
	pub id: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default)]
	pub relation: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub spouses: Vec<PersonNode>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub children: Vec<PersonNode>,
}

/// Full profile of a member, fetched when a node is opened.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetailRecord {
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default)]
	pub gender: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default, alias = "phoneNumber", alias = "phone")]
	pub phone_number: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub birthday: Option<String>,
	#[serde(default, alias = "deathDay", alias = "deathday")]
	pub death_day: Option<String>,
	#[serde(default, alias = "profileImage", alias = "image")]
	pub profile_image: Option<String>,
	#[serde(default, alias = "createdAt")]
	pub created_at: Option<String>,
	#[serde(default, alias = "updatedAt")]
	pub updated_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Int(i64),
	Float(f64),
}

impl From<RawId> for String {
	fn from(raw: RawId) -> Self {
		match raw {
			RawId::Text(s) => s,
			RawId::Int(n) => n.to_string(),
			RawId::Float(n) => n.to_string(),
		}
	}
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	RawId::deserialize(deserializer).map(String::from)
}

// The backend sends `null` for empty lists as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
