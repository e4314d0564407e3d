use std::collections::HashMap;

use super::evaluator::SequenceModel;
use super::node::Node;
use super::record::ProbabilityRecord;

/// Synthetic token marking the beginning of the training sequence.
pub const START_TOKEN: &str = "<START>";
/// Synthetic token marking the end of the training sequence.
pub const END_TOKEN: &str = "<END>";

/// Represents a bigram model as a graph of token transitions.
///
/// The `BigramModel` keeps one [`Node`] per distinct token (plus the
/// `<START>` sentinel) and records, for every token observed immediately
/// after it, how many times that succession occurred.
///
/// # Responsibilities
/// - Build the transition graph from a single pass over the training text
/// - Estimate conditional transition probabilities
/// - Produce printable probability records for every observed transition
///
/// # Invariants
/// - The `<START>` node always exists
/// - Every training document contributes exactly one `<END>` transition,
///   appended after its last token
/// - Nodes keep the order in which their tokens were first inserted, so
///   record enumeration has a deterministic base ordering
#[derive(Clone, Debug)]
pub struct BigramModel {
	/// Mapping from token to its transition node.
	nodes: HashMap<String, Node>,
	/// Node keys in insertion order.
	order: Vec<String>,
}

impl BigramModel {
	/// Creates an empty model holding only the `<START>` node.
	pub fn new() -> Self {
		let mut model = Self {
			nodes: HashMap::new(),
			order: Vec::new(),
		};
		model.insert_node(START_TOKEN);
		model
	}

	/// Builds a model from a normalized (lowercased, whitespace-collapsed)
	/// training text.
	///
	/// Starting from the `<START>` node, each token is observed as the
	/// successor of the previous one; after the last token a single
	/// `<END>` transition is recorded.
	pub fn train(text: &str) -> Self {
		let mut model = Self::new();
		let mut current = START_TOKEN.to_owned();
		for token in text.split_whitespace() {
			model.observe(&current, token);
			current = token.to_owned();
		}
		model.observe(&current, END_TOKEN);
		model
	}

	fn insert_node(&mut self, token: &str) -> &mut Node {
		if !self.nodes.contains_key(token) {
			self.nodes.insert(token.to_owned(), Node::new(token));
			self.order.push(token.to_owned());
		}
		// Just inserted above if missing
		self.nodes.get_mut(token).unwrap()
	}

	/// Records one observation of `to` immediately following `from`.
	///
	/// Both nodes are created on first sight; `to` gets a node of its own
	/// even if nothing was ever observed after it (the `<END>` node stays
	/// that way).
	pub fn observe(&mut self, from: &str, to: &str) {
		self.insert_node(to);
		self.insert_node(from).observe(to);
	}

	/// Returns the node for `token`, if the token was ever seen.
	pub fn node(&self, token: &str) -> Option<&Node> {
		self.nodes.get(token)
	}

	/// Number of nodes in the graph, sentinels included.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Produces one probability record per observed transition.
	///
	/// Nodes are enumerated in insertion order and pairs within a node in
	/// first-observation order. The ordering is deterministic but not
	/// sorted; downstream consumers may reorder (e.g. random sampling).
	pub fn probability_records(&self) -> Vec<ProbabilityRecord> {
		let mut records = Vec::new();
		for key in &self.order {
			// Order keys always name existing nodes
			let node = &self.nodes[key];
			let total = node.total_outgoing();
			if total == 0 {
				continue;
			}
			for (successor, count) in node.successors() {
				let probability = count as f64 / total as f64;
				records.push(ProbabilityRecord::bigram(key, successor, probability));
			}
		}
		records
	}
}

impl Default for BigramModel {
	fn default() -> Self {
		Self::new()
	}
}

impl SequenceModel for BigramModel {
	/// Joint probability of a line: the product of transition probabilities
	/// along the path `<START>` -> first token -> ... -> last token.
	///
	/// Evaluation stops with 0.0 as soon as the current node does not have
	/// the next token among its successors. The `<END>` transition is not
	/// consulted and line length is counted without sentinels.
	fn line_probability(&self, line: &str) -> f64 {
		let mut joint = 1.0;
		let mut current = START_TOKEN;
		for token in line.split_whitespace() {
			let probability = self
				.node(current)
				.and_then(|node| node.probability_of(token));
			match probability {
				Some(p) => joint *= p,
				None => return 0.0,
			}
			current = token;
		}
		joint
	}
}
