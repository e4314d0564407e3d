/// Represents a node in the bigram transition graph.
///
/// A `Node` corresponds to a single token and stores every transition
/// observed from this token to an immediately following token.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during training
/// - Report the conditional probability of a given successor
/// - Enumerate all (successor, count) pairs in first-observation order
///
/// ## Invariants
/// - At most one pair per distinct successor token
/// - Each pair occurrence count is strictly positive
/// - Pairs keep the order in which successors were first observed
#[derive(Clone, Debug)]
pub struct Node {
	/// The token this node stands for.
	token: String,
	/// Outgoing transitions as (successor, occurrence count) pairs.
	/// Lookup is a linear scan; the fanout of a single token is small.
	/// Example: [("cat", 1), ("mat", 1)]
	successors: Vec<(String, usize)>,
}

impl Node {
	/// Creates a new node with no recorded successors.
	pub fn new(token: &str) -> Self {
		Self {
			token: token.to_owned(),
			successors: Vec::new(),
		}
	}

	/// Returns the token this node stands for.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Records an occurrence of a transition toward `successor`.
	///
	/// - If the successor was seen before, its occurrence count is increased.
	/// - Otherwise, a new pair is appended with an initial count of 1.
	pub fn observe(&mut self, successor: &str) {
		if let Some((_, count)) = self.successors.iter_mut().find(|(s, _)| s == successor) {
			*count += 1;
		} else {
			self.successors.push((successor.to_owned(), 1));
		}
	}

	/// Returns true if `token` was observed at least once after this node's token.
	pub fn is_successor(&self, token: &str) -> bool {
		self.successors.iter().any(|(s, _)| s == token)
	}

	/// Total number of times this node's token was followed by any successor.
	pub fn total_outgoing(&self) -> usize {
		self.successors.iter().map(|(_, count)| count).sum()
	}

	/// Conditional probability of `successor` following this node's token.
	///
	/// Computed as the pair's occurrence count divided by the total outgoing
	/// weight of the node.
	///
	/// Returns `None` when `successor` was never observed after this token;
	/// callers substitute a zero joint probability in that case.
	pub fn probability_of(&self, successor: &str) -> Option<f64> {
		let total = self.total_outgoing();
		if total == 0 {
			return None;
		}
		self.successors
			.iter()
			.find(|(s, _)| s == successor)
			.map(|(_, count)| *count as f64 / total as f64)
	}

	/// Iterates over (successor, count) pairs in first-observation order.
	pub fn successors(&self) -> impl Iterator<Item = (&str, usize)> {
		self.successors.iter().map(|(s, count)| (s.as_str(), *count))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_successor_increments_instead_of_appending() {
		let mut node = Node::new("the");
		node.observe("cat");
		node.observe("mat");
		node.observe("cat");

		let pairs: Vec<_> = node.successors().collect();
		assert_eq!(pairs, vec![("cat", 2), ("mat", 1)]);
		assert_eq!(node.total_outgoing(), 3);
	}

	#[test]
	fn probability_is_count_over_total_outgoing() {
		let mut node = Node::new("the");
		node.observe("cat");
		node.observe("mat");

		assert_eq!(node.probability_of("cat"), Some(0.5));
		assert_eq!(node.probability_of("mat"), Some(0.5));
		assert!(node.is_successor("cat"));
	}

	#[test]
	fn unknown_successor_has_no_probability() {
		let mut node = Node::new("the");
		node.observe("cat");

		assert!(!node.is_successor("dog"));
		assert_eq!(node.probability_of("dog"), None);
	}

	#[test]
	fn empty_node_has_no_outgoing_weight() {
		let node = Node::new("<END>");
		assert_eq!(node.total_outgoing(), 0);
		assert_eq!(node.probability_of("anything"), None);
	}

	#[test]
	fn successor_probabilities_sum_to_one() {
		let mut node = Node::new("a");
		for successor in ["b", "c", "b", "d", "b", "c"] {
			node.observe(successor);
		}

		let sum: f64 = node
			.successors()
			.map(|(s, _)| node.probability_of(s).unwrap())
			.sum();
		assert!((sum - 1.0).abs() < 1e-12);
	}
}
