use std::fmt;

use super::frequency::FrequencyTable;
use super::priority_queue::{PriorityQueue, Weighted};
use super::{Symbol, SymbolFrequency, INNER_NODE_PLACEHOLDER};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub(super) frequency: usize,
    pub(super) index: usize,
    pub(super) kind: NodeKind,
}

impl Weighted for Node {
    fn weight(&self) -> usize {
        self.frequency
    }
}

impl Node {
    fn symbol(&self) -> Symbol {
        match self.kind {
            NodeKind::Leaf { symbol } => symbol,
            NodeKind::Inner { .. } => INNER_NODE_PLACEHOLDER,
        }
    }
}

/// A huffman tree stored as an arena: every inner node refers to its two
/// children by index and every node except the root has exactly one parent.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    pub(super) fn root(&self) -> Node {
        self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Sum of the frequencies of all leaves.
    pub fn frequency(&self) -> usize {
        self.root().frequency
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node_index_stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
                NodeKind::Leaf { .. } => height = height.max(depth),
            }
        }
        height
    }

    /// Symbols of all nodes in depth-first pre-order, left before right.
    /// Inner nodes contribute [`INNER_NODE_PLACEHOLDER`].
    pub fn preorder_symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(self.nodes.len());
        let mut node_index_stack = vec![self.root_index];
        while let Some(index) = node_index_stack.pop() {
            let node = self.nodes[index];
            symbols.push(node.symbol());
            if let NodeKind::Inner { left, right } = node.kind {
                node_index_stack.push(right);
                node_index_stack.push(left);
            }
        }
        symbols
    }
}

pub struct HuffmanTreeBuilder {
    nodes: Vec<Node>,
    queue: PriorityQueue<Node>,
}

impl HuffmanTreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            queue: PriorityQueue::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if the frequency is zero, such symbols never take part in the tree.
    pub fn add_symbol(&mut self, symbol_frequency: SymbolFrequency) {
        let SymbolFrequency { symbol, frequency } = symbol_frequency;
        if frequency == 0 {
            panic!(
                "symbol {} with frequency zero must not be added to the huffman tree",
                symbol
            );
        }
        let node = Node {
            frequency,
            index: self.nodes.len(),
            kind: NodeKind::Leaf { symbol },
        };
        self.nodes.push(node);
        self.queue.insert(node);
    }

    pub fn build(mut self) -> Result<HuffmanTree> {
        if self.queue.is_empty() {
            return Err(Error::NoSymbolsToBuildTreeFrom);
        }
        let leaf_count = self.nodes.len();
        while self.queue.has_at_least_two_entries() {
            self.merge_two_least_frequent();
        }
        let root_index = self.queue.extract_min().index;
        let tree = HuffmanTree {
            nodes: self.nodes,
            root_index,
            leaf_count,
        };
        log::info!(
            "Built huffman tree with {} leaves and height {}",
            tree.leaf_count(),
            tree.height()
        );
        Ok(tree)
    }

    fn merge_two_least_frequent(&mut self) {
        let left = self.queue.extract_min();
        let right = self.queue.extract_min();
        let node = Node {
            frequency: left.frequency + right.frequency,
            index: self.nodes.len(),
            kind: NodeKind::Inner {
                left: left.index,
                right: right.index,
            },
        };
        log::debug!(
            "Merging node {} (f:{}) and node {} (f:{}) into node {} (f:{})",
            left.index,
            left.frequency,
            right.index,
            right.frequency,
            node.index,
            node.frequency
        );
        self.nodes.push(node);
        self.queue.insert(node);
    }
}

impl Default for HuffmanTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<SymbolFrequency> for HuffmanTreeBuilder {
    fn from_iter<T: IntoIterator<Item = SymbolFrequency>>(symbol_frequencies: T) -> Self {
        let mut builder = Self::new();
        for symbol_frequency in symbol_frequencies {
            builder.add_symbol(symbol_frequency);
        }
        builder
    }
}

impl From<&FrequencyTable> for HuffmanTreeBuilder {
    fn from(frequencies: &FrequencyTable) -> Self {
        Self::from_iter(frequencies.to_symbol_frequencies())
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

struct Drawing {
    lines: Vec<String>,
    // column the connector to the parent attaches to
    anchor: usize,
}

impl Drawing {
    fn width(&self) -> usize {
        self.lines[0].chars().count()
    }
}

// Tree visualization
impl HuffmanTree {
    fn draw(&self, node: Node) -> Drawing {
        match node.kind {
            NodeKind::Leaf { symbol } => {
                let label = format!("(s:{},f:{})", symbol, node.frequency);
                let anchor = label.chars().count() / 2;
                Drawing {
                    lines: vec![label],
                    anchor,
                }
            }
            NodeKind::Inner { left, right } => {
                let left_drawing = self.draw(self.nodes[left]);
                let right_drawing = self.draw(self.nodes[right]);
                let left_width = left_drawing.width();
                let right_width = right_drawing.width();

                let mut lines = vec![
                    format!("{}•{}", SPACE.repeat(left_width), SPACE.repeat(right_width)),
                    format!("{}║{}", SPACE.repeat(left_width), SPACE.repeat(right_width)),
                    format!(
                        "{}╔{}╩{}╗{}",
                        SPACE.repeat(left_drawing.anchor),
                        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_drawing.anchor - 1),
                        BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_drawing.anchor),
                        SPACE.repeat(right_width - right_drawing.anchor - 1)
                    ),
                ];

                let depth = left_drawing.lines.len().max(right_drawing.lines.len());
                for i in 0..depth {
                    let left_line = left_drawing
                        .lines
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_line = right_drawing
                        .lines
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    lines.push(format!("{} {}", left_line, right_line));
                }
                Drawing {
                    lines,
                    anchor: left_width,
                }
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.draw(self.root()).lines.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
