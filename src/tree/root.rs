use std::collections::HashSet;

use log::debug;

use super::types::PersonNode;

/// Number of distinct ids reachable from `node` through spouses and children,
/// including the node itself. Ids already counted are not expanded twice, so
/// the walk terminates even when the payload repeats an ancestor.
pub fn reachable_count(node: &PersonNode) -> usize {
	let mut visited: HashSet<&str> = HashSet::new();
	let mut stack = vec![node];
	while let Some(current) = stack.pop() {
		if !visited.insert(current.id.as_str()) {
			continue;
		}
		stack.extend(current.spouses.iter());
		stack.extend(current.children.iter());
	}
	visited.len()
}

/// Picks the node the tree is drawn from.
///
/// Candidates are the top-level nodes that nobody in `nodes` lists as a child
/// (all of them when that leaves nothing). The candidate reaching the most
/// people wins. On a tie, a candidate named exactly `preferred_name` wins,
/// otherwise the earliest one in `nodes` does.
pub fn select_root<'a>(nodes: &'a [PersonNode], preferred_name: Option<&str>) -> Option<&'a PersonNode> {
	let child_ids: HashSet<&str> = nodes
		.iter()
		.flat_map(|n| n.children.iter().map(|c| c.id.as_str()))
		.collect();

	let mut candidates: Vec<&PersonNode> = nodes
		.iter()
		.filter(|n| !child_ids.contains(n.id.as_str()))
		.collect();
	if candidates.is_empty() {
		candidates = nodes.iter().collect();
	}

	let mut best: Option<(&PersonNode, usize)> = None;
	for candidate in candidates {
		let count = reachable_count(candidate);
		let replace = match best {
			None => true,
			Some((current, best_count)) => {
				count > best_count
					|| (count == best_count
						&& preferred_name.is_some_and(|p| candidate.name == p && current.name != p))
			}
		};
		if replace {
			best = Some((candidate, count));
		}
	}

	if let Some((root, count)) = best {
		debug!("selected root {} ({}) reaching {} people", root.id, root.name, count);
	}
	best.map(|(root, _)| root)
}
