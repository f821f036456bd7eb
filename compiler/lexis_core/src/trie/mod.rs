//! Index-based prefix trie for operators and reserved words.
//!
//! Nodes live in a single `Vec` arena and refer to each other by [`NodeId`]
//! only, never by reference, so a trie can be cloned, serialized (with the
//! `serde` feature) or built once and shared read-only between scans.
//!
//! # Matching
//!
//! [`Trie::match_longest`] walks from the root one input byte at a time and
//! remembers the deepest terminal node it passed. When an edge is missing
//! (or the input ends) it returns that terminal: with `>`, `>>` and `>>=`
//! present, `>>=x` matches `>>=`, `>>x` matches `>>`.

use smallvec::SmallVec;

use crate::Cursor;

/// Index of a node in the trie arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// The root node. Always present.
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no such edge".
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

/// One trie node: outgoing edges sorted by byte, plus the payload of a
/// terminal node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrieNode<P> {
    /// Sorted by byte for binary search. Operator tries rarely fan out past 4.
    edges: SmallVec<[(u8, NodeId); 4]>,
    payload: Option<P>,
}

impl<P> TrieNode<P> {
    fn new() -> Self {
        TrieNode {
            edges: SmallVec::new(),
            payload: None,
        }
    }

    /// Returns `true` if a key ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// Payload of a terminal node.
    #[inline]
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Outgoing edges, sorted by byte.
    pub fn edges(&self) -> &[(u8, NodeId)] {
        &self.edges
    }

    #[inline]
    fn child(&self, byte: u8) -> NodeId {
        match self.edges.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(i) => self.edges[i].1,
            Err(_) => NodeId::INVALID,
        }
    }
}

/// Result of a longest-match lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct TrieMatch<'t, P> {
    /// Number of bytes matched.
    pub len: u32,
    /// Payload of the matched terminal node.
    pub payload: &'t P,
}

impl<P> Clone for TrieMatch<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TrieMatch<'_, P> {}

/// Prefix trie over byte strings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trie<P> {
    nodes: Vec<TrieNode<P>>,
    /// Number of terminal nodes.
    keys: usize,
}

impl<P> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Trie<P> {
    /// An empty trie (root only).
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new()],
            keys: 0,
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.keys
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node at `id`, or `None` for [`NodeId::INVALID`] and out-of-range ids.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<P>> {
        self.nodes.get(id.index())
    }

    /// Child of `node` along `byte`, or [`NodeId::INVALID`].
    #[inline]
    pub fn child(&self, node: NodeId, byte: u8) -> NodeId {
        self.node(node).map_or(NodeId::INVALID, |n| n.child(byte))
    }

    /// Insert `key`, returning the payload it replaced.
    ///
    /// The empty key is ignored (returns `None`): the root is never terminal,
    /// so a match always consumes at least one byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node count is far below u32::MAX for any operator set"
    )]
    pub fn insert(&mut self, key: &[u8], payload: P) -> Option<P> {
        if key.is_empty() {
            return None;
        }
        let mut node = NodeId::ROOT;
        for &byte in key {
            let found = self.nodes[node.index()]
                .edges
                .binary_search_by_key(&byte, |&(b, _)| b);
            node = match found {
                Ok(i) => self.nodes[node.index()].edges[i].1,
                Err(i) => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::new());
                    self.nodes[node.index()].edges.insert(i, (byte, child));
                    child
                }
            };
        }
        let previous = self.nodes[node.index()].payload.replace(payload);
        if previous.is_none() {
            self.keys += 1;
        }
        previous
    }

    /// Exact lookup.
    pub fn get(&self, key: &[u8]) -> Option<&P> {
        let mut node = NodeId::ROOT;
        for &byte in key {
            node = self.child(node, byte);
            if !node.is_valid() {
                return None;
            }
        }
        self.node(node)?.payload()
    }

    /// Longest key that is a prefix of `input`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "match length is bounded by the longest key"
    )]
    pub fn match_longest_bytes(&self, input: &[u8]) -> Option<TrieMatch<'_, P>> {
        let mut node = NodeId::ROOT;
        let mut best = None;
        for (i, &byte) in input.iter().enumerate() {
            node = self.child(node, byte);
            let Some(current) = self.node(node) else {
                break;
            };
            if let Some(payload) = current.payload() {
                best = Some(TrieMatch {
                    len: i as u32 + 1,
                    payload,
                });
            }
        }
        best
    }

    /// Longest key starting at the cursor. The cursor is not moved.
    ///
    /// End-of-input is checked before every step, so a match never extends
    /// past the source into the sentinel or padding.
    pub fn match_longest(&self, cursor: &Cursor<'_>) -> Option<TrieMatch<'_, P>> {
        let start = cursor.pos();
        let mut probe = *cursor;
        let mut node = NodeId::ROOT;
        let mut best = None;
        while !probe.is_eof() {
            node = self.child(node, probe.current());
            let Some(current) = self.node(node) else {
                break;
            };
            probe.advance();
            if let Some(payload) = current.payload() {
                best = Some(TrieMatch {
                    len: probe.pos() - start,
                    payload,
                });
            }
        }
        best
    }

    /// Iterate over `(key, payload)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<u8>, &P)> + '_ {
        let mut out = Vec::with_capacity(self.keys);
        let mut stack: Vec<(NodeId, Vec<u8>)> = vec![(NodeId::ROOT, Vec::new())];
        while let Some((id, key)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if let Some(payload) = node.payload() {
                out.push((key.clone(), payload));
            }
            for &(byte, child) in node.edges.iter().rev() {
                let mut next = key.clone();
                next.push(byte);
                stack.push((child, next));
            }
        }
        out.into_iter()
    }
}

#[cfg(test)]
mod tests;
