use log::warn;

use super::types::PersonNode;

const FEMALE_KEYWORDS: &[&str] = &["vợ", "wife"];
const MALE_KEYWORDS: &[&str] = &["chồng", "husband"];
const CHILD_KEYWORDS: &[&str] = &["con", "child"];

/// Bounds applied while turning a payload into couple groups.
#[derive(Clone, Copy, Debug)]
pub struct LayoutLimits {
	pub max_depth: usize,
}

impl Default for LayoutLimits {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

/// Why a group's children were not laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Truncation {
	/// A child repeats an id already on the path from the root.
	Cycle,
	/// The group sits at the depth limit.
	Depth,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersonCard {
	pub id: String,
	pub name: String,
	pub role: &'static str,
}

/// A person drawn together with their spouses, followed by their children.
#[derive(Clone, Debug, PartialEq)]
pub struct CoupleGroup {
	pub person: PersonCard,
	pub spouses: Vec<PersonCard>,
	pub children: Vec<CoupleGroup>,
	pub truncated: Option<Truncation>,
}

/// How the nested child list under a couple is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildList {
	None,
	Single,
	Many,
}

impl ChildList {
	pub fn class(self) -> Option<&'static str> {
		match self {
			ChildList::None => None,
			ChildList::Single => Some("children single-child"),
			ChildList::Many => Some("children"),
		}
	}
}

impl CoupleGroup {
	pub fn child_list(&self) -> ChildList {
		match self.children.len() {
			0 => ChildList::None,
			1 => ChildList::Single,
			_ => ChildList::Many,
		}
	}

	/// Cards drawn for this group and everything below it.
	pub fn person_count(&self) -> usize {
		1 + self.spouses.len() + self.children.iter().map(CoupleGroup::person_count).sum::<usize>()
	}

	/// Levels in the rendered tree, counting this one.
	pub fn generations(&self) -> usize {
		1 + self.children.iter().map(CoupleGroup::generations).max().unwrap_or(0)
	}
}

fn has_keyword(tag: &str, keywords: &[&str]) -> bool {
	let tag = tag.to_lowercase();
	keywords.iter().any(|k| tag.contains(k))
}

/// Label shown under a person's name.
///
/// Spouse tags are checked first: a wife makes this person "Chồng", a husband
/// makes them "Vợ". The node's own tag is the fallback, since the backend
/// tags relations from either side.
pub fn role_label(node: &PersonNode) -> &'static str {
	let spouse_tags = || node.spouses.iter().filter_map(|s| s.relation.as_deref());
	if spouse_tags().any(|t| has_keyword(t, FEMALE_KEYWORDS)) {
		return "Chồng";
	}
	if spouse_tags().any(|t| has_keyword(t, MALE_KEYWORDS)) {
		return "Vợ";
	}
	match node.relation.as_deref() {
		Some(t) if has_keyword(t, FEMALE_KEYWORDS) => "Vợ",
		Some(t) if has_keyword(t, MALE_KEYWORDS) => "Chồng",
		Some(t) if has_keyword(t, CHILD_KEYWORDS) => "Con",
		_ => "",
	}
}

fn card(node: &PersonNode) -> PersonCard {
	PersonCard {
		id: node.id.clone(),
		name: node.name.clone(),
		role: role_label(node),
	}
}

pub fn build_layout(root: &PersonNode, limits: &LayoutLimits) -> CoupleGroup {
	let mut path = Vec::new();
	build_group(root, 0, limits, &mut path)
}

fn build_group<'a>(
	node: &'a PersonNode,
	depth: usize,
	limits: &LayoutLimits,
	path: &mut Vec<&'a str>,
) -> CoupleGroup {
	let mut group = CoupleGroup {
		person: card(node),
		spouses: node.spouses.iter().map(card).collect(),
		children: Vec::new(),
		truncated: None,
	};
	if node.children.is_empty() {
		return group;
	}
	if depth >= limits.max_depth {
		warn!("tree deeper than {} levels, cut below {}", limits.max_depth, node.id);
		group.truncated = Some(Truncation::Depth);
		return group;
	}

	path.push(node.id.as_str());
	for child in &node.children {
		if path.contains(&child.id.as_str()) {
			warn!("{} lists ancestor {} as a child, skipping", node.id, child.id);
			group.truncated = Some(Truncation::Cycle);
			continue;
		}
		group.children.push(build_group(child, depth + 1, limits, path));
	}
	path.pop();
	group
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn node(value: serde_json::Value) -> PersonNode {
		serde_json::from_value(value).unwrap()
	}

	fn ids(group: &CoupleGroup, out: &mut Vec<String>) {
		out.push(group.person.id.clone());
		out.extend(group.spouses.iter().map(|s| s.id.clone()));
		for child in &group.children {
			ids(child, out);
		}
	}

	#[test]
	fn no_children_means_no_list() {
		let g = build_layout(&node(json!({ "id": "a", "name": "A" })), &LayoutLimits::default());
		assert!(g.children.is_empty());
		assert_eq!(g.child_list(), ChildList::None);
		assert_eq!(g.child_list().class(), None);
		assert_eq!(g.truncated, None);
	}

	#[test]
	fn one_child_gets_single_marker() {
		let root = node(json!({ "id": "r", "name": "Root", "children": [{ "id": "c1", "name": "Child1" }] }));
		let g = build_layout(&root, &LayoutLimits::default());
		assert_eq!(g.child_list(), ChildList::Single);
		assert!(g.child_list().class().unwrap().contains("single-child"));
	}

	#[test]
	fn several_children_are_siblings() {
		let root = node(json!({
			"id": "r",
			"name": "Root",
			"children": [{ "id": "a", "name": "A" }, { "id": "b", "name": "B" }]
		}));
		let g = build_layout(&root, &LayoutLimits::default());
		assert_eq!(g.child_list(), ChildList::Many);
		assert_eq!(g.child_list().class(), Some("children"));
		assert_eq!(g.children.len(), 2);
	}

	#[test]
	fn every_occurrence_rendered_once() {
		let root = node(json!({
			"id": "g1",
			"name": "Ông",
			"spouses": [{ "id": "g1w1", "relation": "vợ" }, { "id": "g1w2", "relation": "vợ" }],
			"children": [
				{
					"id": "g2a",
					"spouses": [{ "id": "g2aw", "relation": "wife" }, { "id": "g2aw2", "relation": "wife" }],
					"children": [
						{ "id": "g3a", "spouses": [{ "id": "g3ah", "relation": "chồng" }] },
						{ "id": "g3b" }
					]
				},
				{ "id": "g2b", "children": [{ "id": "g3a" }] }
			]
		}));
		let g = build_layout(&root, &LayoutLimits::default());
		let mut seen = Vec::new();
		ids(&g, &mut seen);
		assert_eq!(
			seen,
			vec!["g1", "g1w1", "g1w2", "g2a", "g2aw", "g2aw2", "g3a", "g3ah", "g3b", "g2b", "g3a"]
		);
		assert_eq!(g.person_count(), 11);
		assert_eq!(g.generations(), 3);
	}

	#[test]
	fn spouse_tagged_wife_makes_husband() {
		let n = node(json!({ "id": "a", "spouses": [{ "id": "b", "relation": "VỢ" }] }));
		assert_eq!(role_label(&n), "Chồng");
		let n = node(json!({ "id": "a", "spouses": [{ "id": "b", "relation": "vợ" }] }));
		assert_eq!(role_label(&n), "Chồng");
	}

	#[test]
	fn spouse_tagged_husband_makes_wife() {
		let n = node(json!({ "id": "a", "spouses": [{ "id": "b", "relation": "Husband" }] }));
		assert_eq!(role_label(&n), "Vợ");
	}

	#[test]
	fn own_tag_is_fallback() {
		assert_eq!(role_label(&node(json!({ "id": "a", "relation": "Wife" }))), "Vợ");
		assert_eq!(role_label(&node(json!({ "id": "a", "relation": "chồng" }))), "Chồng");
		assert_eq!(role_label(&node(json!({ "id": "a", "relation": "Con trưởng" }))), "Con");
		assert_eq!(role_label(&node(json!({ "id": "a", "relation": "cousin" }))), "");
		assert_eq!(role_label(&node(json!({ "id": "a" }))), "");
	}

	#[test]
	fn spouse_cards_label_themselves() {
		let root = node(json!({ "id": "a", "spouses": [{ "id": "b", "relation": "vợ" }] }));
		let g = build_layout(&root, &LayoutLimits::default());
		assert_eq!(g.person.role, "Chồng");
		assert_eq!(g.spouses[0].role, "Vợ");
	}

	#[test]
	fn ancestor_repeat_is_cut() {
		let root = node(json!({
			"id": "a",
			"children": [{ "id": "b", "children": [{ "id": "a", "children": [{ "id": "b" }] }, { "id": "c" }] }]
		}));
		let g = build_layout(&root, &LayoutLimits::default());
		let b = &g.children[0];
		assert_eq!(b.truncated, Some(Truncation::Cycle));
		assert_eq!(b.children.len(), 1);
		assert_eq!(b.children[0].person.id, "c");
	}

	#[test]
	fn depth_limit_is_cut() {
		let root = node(json!({
			"id": "1",
			"children": [{ "id": "2", "children": [{ "id": "3", "children": [{ "id": "4" }] }] }]
		}));
		let g = build_layout(&root, &LayoutLimits { max_depth: 1 });
		assert_eq!(g.generations(), 2);
		assert_eq!(g.children[0].truncated, Some(Truncation::Depth));
		assert!(g.children[0].children.is_empty());
	}
}
