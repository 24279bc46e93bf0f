// Copyright (c) 2025 Tstree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the ternary search tree.


use super::*;

const TWO_LETTER_WORDS: [&str; 12] = [
    "is", "in", "it", "be", "by", "he", "as", "at", "on", "of", "or", "to",
];

fn keys_of<T>(matches: &[(String, &Node<T>)]) -> Vec<String> {
    matches.iter().map(|(key, _)| key.clone()).collect()
}

#[test]
fn test_tree_basic_operations() {
    let mut tree = TernarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);

    assert_eq!(tree.insert("hello", "world"), None);
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());

    assert_eq!(tree.get("hello"), Some(&"world"));
    assert!(tree.contains("hello"));
    assert!(!tree.contains("nonexistent"));
    assert!(tree.get("nonexistent").is_none());

    // Overwrite keeps the count
    assert_eq!(tree.insert("hello", "planet"), Some("world"));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get("hello"), Some(&"planet"));
}

#[test]
fn test_empty_key_is_ignored() {
    let mut tree = TernarySearchTree::new();
    for _ in 0..3 {
        assert_eq!(tree.insert("", 1), None);
    }
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(!tree.contains(""));
    assert!(tree.search("").is_none());

    tree.insert("a", 2);
    tree.insert("", 3);
    assert_eq!(tree.len(), 1);
    assert!(tree.search("").is_none());
}

#[test]
fn test_prefix_node_is_not_terminal() {
    let mut tree = TernarySearchTree::new();
    tree.insert("ab", ());

    let node = tree.search("a").expect("prefix path should exist");
    assert_eq!(node.value(), 'a');
    assert!(!node.is_terminal());
    assert!(node.payload().is_none());
    assert!(!tree.contains("a"));
    assert!(tree.get("a").is_none());

    let node = tree.search("ab").expect("stored key should exist");
    assert!(node.is_terminal());
    assert!(tree.search("abc").is_none());
}

#[test]
fn test_incremental_two_letter_words() {
    let mut tree = TernarySearchTree::new();
    for word in TWO_LETTER_WORDS {
        tree.insert(word, ());
    }

    assert_eq!(tree.len(), 12);
    assert!(tree.contains("as"));
    assert!(!tree.contains("al"));

    let mut visited = 0;
    tree.traverse(|_, _| visited += 1);
    assert_eq!(visited, tree.len());
}

#[test]
fn test_bulk_two_letter_words() {
    let mut tree = TernarySearchTree::new();
    let mut words = TWO_LETTER_WORDS;
    words.reverse();
    tree.insert_all(words, ());

    assert_eq!(tree.len(), 12);
    assert!(tree.contains("as"));
    assert!(!tree.contains("al"));

    let mut expected = TWO_LETTER_WORDS.to_vec();
    expected.sort_unstable();
    assert_eq!(tree.keys().collect::<Vec<_>>(), expected);
}

#[test]
fn test_bulk_insert_uses_median_order() {
    let mut tree = TernarySearchTree::new();
    tree.insert_all(["c", "a", "e", "b", "d"], ());

    // Sorted batch is a..e, so the lower median "c" becomes the root.
    let root = tree.root.as_deref().expect("root should exist");
    assert_eq!(root.value(), 'c');
    assert_eq!(root.left.as_deref().map(Node::value), Some('a'));
    assert_eq!(root.right.as_deref().map(Node::value), Some('d'));
    assert_eq!(tree.height(), 3);
}

#[test]
fn test_bulk_insert_is_balanced() {
    let letters: Vec<String> = ('a'..='z').map(String::from).collect();

    let mut incremental = TernarySearchTree::new();
    for letter in &letters {
        incremental.insert(letter, ());
    }
    // Sorted single inserts degrade into a right-leaning chain.
    assert_eq!(incremental.height(), 26);

    let mut balanced = TernarySearchTree::new();
    balanced.insert_all(&letters, ());
    assert_eq!(balanced.len(), 26);
    assert_eq!(balanced.height(), 5);
}

#[test]
fn test_bulk_insert_with_payloads() {
    let tree: TernarySearchTree<usize> = [("pear", 1), ("apple", 2), ("fig", 3), ("apple", 4)]
        .into_iter()
        .collect();

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get("pear"), Some(&1));
    assert_eq!(tree.get("apple"), Some(&4));
    assert_eq!(tree.get("fig"), Some(&3));
}

#[test]
fn test_bulk_insert_empty_batch() {
    let mut tree: TernarySearchTree<()> = TernarySearchTree::new();
    tree.insert_all(Vec::<String>::new(), ());
    assert!(tree.is_empty());

    tree.insert_all(["", ""], ());
    assert!(tree.is_empty());
}

#[test]
fn test_get_mut_updates_payload() {
    let mut tree = TernarySearchTree::new();
    tree.insert("counter", 1);

    if let Some(count) = tree.get_mut("counter") {
        *count += 41;
    }
    assert_eq!(tree.get("counter"), Some(&42));
    assert!(tree.get_mut("count").is_none());
    assert!(tree.get_mut("").is_none());
}

#[test]
fn test_traversal_descends_below_terminal_nodes() {
    let mut tree = TernarySearchTree::new();
    tree.extend([("abc", 3), ("a", 1), ("ab", 2), ("b", 4)]);

    let mut seen = Vec::new();
    tree.traverse(|key, node| seen.push((key.to_string(), node.payload().copied())));
    assert_eq!(
        seen,
        vec![
            ("a".to_string(), Some(1)),
            ("ab".to_string(), Some(2)),
            ("abc".to_string(), Some(3)),
            ("b".to_string(), Some(4)),
        ]
    );
}

#[test]
fn test_partial_match() {
    let mut tree = TernarySearchTree::new();
    tree.insert("banana", 1);
    tree.insert("bananas", 2);
    tree.insert("band", 3);
    tree.insert("apple", 4);

    let matches = tree.partial_match("banan");
    assert_eq!(keys_of(&matches), vec!["banana", "bananas"]);
    assert_eq!(matches[0].1.payload(), Some(&1));
    assert_eq!(matches[1].1.payload(), Some(&2));

    // The prefix itself is reported when stored
    assert_eq!(keys_of(&tree.partial_match("banana")), vec!["banana", "bananas"]);
    assert_eq!(
        keys_of(&tree.partial_match("ban")),
        vec!["banana", "bananas", "band"]
    );

    assert!(tree.partial_match("cherry").is_empty());
    assert!(tree.partial_match("bananass").is_empty());
    assert!(tree.partial_match("").is_empty());
}

#[test]
fn test_clear() {
    let mut tree = TernarySearchTree::new();
    tree.insert_all(TWO_LETTER_WORDS, 0u8);
    assert_eq!(tree.len(), 12);

    tree.clear();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    for word in TWO_LETTER_WORDS {
        assert!(!tree.contains(word));
    }
    assert_eq!(tree.iter().count(), 0);

    // Still usable after clearing
    tree.insert("to", 1);
    assert_eq!(tree.len(), 1);
    assert!(tree.contains("to"));
}

#[test]
fn test_iter_reports_exact_size() {
    let mut tree = TernarySearchTree::new();
    tree.insert_all(["x", "xy", "xyz"], 'p');

    let mut iter = tree.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(("x".to_string(), &'p')));
    assert_eq!(iter.len(), 2);

    let entries: Vec<_> = (&tree).into_iter().collect();
    assert_eq!(entries.len(), 3);
}

#[test]
fn test_non_ascii_keys_follow_string_order() {
    let words = ["zebra", "éclair", "ñandú", "ábaco", "apple", "日本"];
    let mut tree = TernarySearchTree::new();
    tree.insert_all(words, ());

    let mut expected: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(tree.keys().collect::<Vec<_>>(), expected);
    assert!(tree.contains("日本"));
    assert!(!tree.contains("日"));
    assert_eq!(keys_of(&tree.partial_match("ñ")), vec!["ñandú"]);
}

#[test]
fn test_very_long_key_does_not_overflow_stack() {
    let key = "a".repeat(200_000);
    let mut tree = TernarySearchTree::new();
    tree.insert(&key, 1usize);
    tree.insert(&key[..100_000], 2);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.height(), 200_000);
    assert_eq!(tree.get(&key), Some(&1));
    assert_eq!(tree.iter().count(), 2);
    drop(tree);
}

#[test]
fn test_clone_is_independent() {
    let mut tree = TernarySearchTree::new();
    tree.insert("one", 1);

    let mut copy = tree.clone();
    copy.insert("two", 2);
    copy.insert("one", 10);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get("one"), Some(&1));
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.get("one"), Some(&10));
}

#[test]
fn test_clone_of_very_long_key() {
    let key = "a".repeat(200_000);
    let mut tree = TernarySearchTree::new();
    tree.insert(&key, 1usize);
    tree.insert(&key[..10], 2);

    let copy = tree.clone();
    drop(tree);

    assert_eq!(copy.len(), 2);
    assert_eq!(copy.height(), 200_000);
    assert_eq!(copy.get(&key), Some(&1));
    assert_eq!(copy.get(&key[..10]), Some(&2));

    let node = format!("{:?}", copy.search("a").unwrap());
    assert!(node.contains("has_mid: true"));
}

#[test]
fn test_clone_preserves_shape() {
    let mut tree = TernarySearchTree::new();
    tree.insert_all(["d", "b", "f", "a", "c", "e", "g", "bat", "bad"], 0);
    tree.insert("ca", 1);

    let copy = tree.clone();
    assert_eq!(copy.height(), tree.height());
    assert_eq!(
        copy.iter().collect::<Vec<_>>(),
        tree.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_debug_lists_entries_in_order() {
    let mut tree = TernarySearchTree::new();
    tree.insert("b", 2);
    tree.insert("a", 1);

    assert_eq!(format!("{tree:?}"), r#"{"a": 1, "b": 2}"#);
}
