use super::*;
use crate::SourceBuffer;

fn trie_of<P, const N: usize>(entries: [(&str, P); N]) -> Trie<P> {
    let mut trie = Trie::new();
    for (key, payload) in entries {
        trie.insert(key.as_bytes(), payload);
    }
    trie
}

fn shift_ops() -> Trie<&'static str> {
    trie_of([(">", "gt"), (">>", "shr"), (">>=", "shr_eq"), (">=", "ge")])
}

// === Construction ===

#[test]
fn new_trie_has_root_only() {
    let trie: Trie<u8> = Trie::new();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert!(trie.node(NodeId::ROOT).is_some());
    assert!(trie.node(NodeId::INVALID).is_none());
}

#[test]
fn insert_shares_prefixes() {
    let trie = shift_ops();
    assert_eq!(trie.len(), 4);
    // root, '>', '>>', '>>=', '>='
    assert_eq!(trie.node_count(), 5);
}

#[test]
fn insert_replaces_payload() {
    let mut trie = Trie::new();
    assert_eq!(trie.insert(b"+", 1), None);
    assert_eq!(trie.insert(b"+", 2), Some(1));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get(b"+"), Some(&2));
}

#[test]
fn empty_key_is_ignored() {
    let mut trie = Trie::new();
    assert_eq!(trie.insert(b"", 1), None);
    assert!(trie.is_empty());
    assert_eq!(trie.get(b""), None);
}

#[test]
fn edges_stay_sorted() {
    let trie: Trie<u8> = trie_of([("c", 0), ("a", 1), ("b", 2)]);
    let root = trie.node(NodeId::ROOT).map(TrieNode::edges).unwrap_or_default();
    let bytes: Vec<u8> = root.iter().map(|&(b, _)| b).collect();
    assert_eq!(bytes, b"abc");
}

#[test]
fn child_of_missing_edge_is_invalid() {
    let trie = shift_ops();
    assert_eq!(trie.child(NodeId::ROOT, b'<'), NodeId::INVALID);
    assert_eq!(trie.child(NodeId::INVALID, b'>'), NodeId::INVALID);
    assert!(trie.child(NodeId::ROOT, b'>').is_valid());
}

// === Exact Lookup ===

#[test]
fn get_requires_terminal() {
    let trie: Trie<u8> = trie_of([("abc", 1)]);
    assert_eq!(trie.get(b"abc"), Some(&1));
    assert_eq!(trie.get(b"ab"), None);
    assert_eq!(trie.get(b"abcd"), None);
}

// === Longest Match ===

#[test]
fn longest_match_prefers_longest() {
    let trie = shift_ops();
    let hit = |s: &str| {
        trie.match_longest_bytes(s.as_bytes())
            .map(|m| (m.len, *m.payload))
    };
    assert_eq!(hit(">>=x"), Some((3, "shr_eq")));
    assert_eq!(hit(">>x"), Some((2, "shr")));
    assert_eq!(hit(">x"), Some((1, "gt")));
    assert_eq!(hit(">="), Some((2, "ge")));
    assert_eq!(hit("x"), None);
    assert_eq!(hit(""), None);
}

#[test]
fn longest_match_falls_back_to_deepest_terminal() {
    // "abcd" present, "abc" absent: "abcX" must fall back to "ab".
    let trie: Trie<u8> = trie_of([("a", 1), ("ab", 2), ("abcd", 4)]);
    let m = trie.match_longest_bytes(b"abcX");
    assert_eq!(m.map(|m| (m.len, *m.payload)), Some((2, 2)));
}

#[test]
fn no_terminal_reached_is_no_match() {
    let trie: Trie<u8> = trie_of([("abc", 1)]);
    assert_eq!(trie.match_longest_bytes(b"abX"), None);
}

#[test]
fn cursor_match_stops_at_eof() {
    let trie = shift_ops();
    let buf = SourceBuffer::new(">>");
    let cursor = buf.cursor();
    let m = trie.match_longest(&cursor);
    assert_eq!(m.map(|m| (m.len, *m.payload)), Some((2, "shr")));
    // The cursor itself does not move.
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn cursor_match_does_not_treat_sentinel_as_input() {
    // A key containing NUL must not match the sentinel at end-of-input.
    let trie: Trie<u8> = trie_of([("a", 1), ("a\0", 2)]);
    let buf = SourceBuffer::new("a");
    let m = trie.match_longest(&buf.cursor());
    assert_eq!(m.map(|m| (m.len, *m.payload)), Some((1, 1)));

    let buf = SourceBuffer::new("a\0");
    let m = trie.match_longest(&buf.cursor());
    assert_eq!(m.map(|m| (m.len, *m.payload)), Some((2, 2)));
}

#[test]
fn cursor_match_mid_input() {
    let trie = shift_ops();
    let buf = SourceBuffer::new("a >>= b");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    let m = trie.match_longest(&cursor);
    assert_eq!(m.map(|m| m.len), Some(3));
}

// === Iteration ===

#[test]
fn iter_yields_keys_in_byte_order() {
    let trie = shift_ops();
    let keys: Vec<Vec<u8>> = trie.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![b">".to_vec(), b">=".to_vec(), b">>".to_vec(), b">>=".to_vec()]
    );
}

// === Serialization ===

#[cfg(feature = "serde")]
#[test]
fn trie_survives_bincode() {
    let trie = shift_ops().iter().map(|(k, v)| (k, v.to_string())).fold(
        Trie::new(),
        |mut t, (k, v)| {
            t.insert(&k, v);
            t
        },
    );
    let bytes = bincode::serialize(&trie).unwrap_or_default();
    let back: Result<Trie<String>, _> = bincode::deserialize(&bytes);
    assert_eq!(back.ok(), Some(trie));
}

// === Properties ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_longest_match {
    use super::super::Trie;
    use proptest::prelude::*;

    /// Brute-force reference: longest key that prefixes `input`.
    fn reference(keys: &[Vec<u8>], input: &[u8]) -> Option<usize> {
        keys.iter()
            .filter(|k| !k.is_empty() && input.starts_with(k))
            .map(Vec::len)
            .max()
    }

    fn op_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'<'), Just(b'>'), Just(b'='), Just(b'!')],
            0..6,
        )
    }

    proptest! {
        #[test]
        fn matches_brute_force(
            keys in proptest::collection::vec(op_bytes(), 0..12),
            input in op_bytes(),
        ) {
            let mut trie = Trie::new();
            for key in &keys {
                trie.insert(key, key.clone());
            }
            let got = trie.match_longest_bytes(&input);
            prop_assert_eq!(got.map(|m| m.len as usize), reference(&keys, &input));
            if let Some(m) = got {
                prop_assert_eq!(&m.payload[..], &input[..m.len as usize]);
            }
        }
    }
}
