// Copyright (c) 2025 Tstree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ternary Search Tree Implementation
//!
//! An ordered, character-indexed map from strings to payloads. Each node
//! holds a single character and three children: keys whose next character
//! sorts before it, keys that continue past it, and keys whose next
//! character sorts after it.
//!
//! # Features
//!
//! - Exact lookup and existence testing
//! - Balanced bulk construction from an unsorted batch of keys
//! - In-order traversal of every stored key
//! - Prefix enumeration for autocomplete-style retrieval
//!
//! # Example
//!
//! ```
//! use tstree_lib::data_structures::TernarySearchTree;
//!
//! let mut tree = TernarySearchTree::new();
//! tree.insert_all(["banana", "bananas", "band"], 0u32);
//! tree.insert("bandana", 1);
//!
//! assert!(tree.contains("band"));
//! assert!(!tree.contains("ban"));
//!
//! let keys: Vec<String> = tree
//!     .partial_match("banan")
//!     .into_iter()
//!     .map(|(key, _)| key)
//!     .collect();
//! assert_eq!(keys, vec!["banana", "bananas"]);
//! ```
//!
//! # Balance
//!
//! Single inserts never rebalance, so feeding sorted keys one by one degrades
//! each left/right fan-out into a chain. [`TernarySearchTree::insert_all`]
//! sorts its batch and inserts medians first, which keeps every fan-out
//! logarithmic in the number of keys sharing that prefix.

mod iter;
mod node;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

pub use iter::{Iter, Keys};
use iter::Walk;
pub use node::Node;
use node::Link;

/// A ternary search tree mapping string keys to payloads of type `T`.
///
/// The tree is a plain owned structure with no internal synchronization;
/// share it across threads behind a lock.
pub struct TernarySearchTree<T> {
    /// The root node, created by the first non-empty insert
    root: Link<T>,

    /// Number of terminal nodes (distinct stored keys)
    len: usize,
}

impl<T> TernarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` with `payload`.
    ///
    /// Inserting the empty string is a no-op. Inserting a key that is already
    /// stored replaces its payload without changing [`len`](Self::len).
    ///
    /// # Returns
    ///
    /// The payload previously stored under `key`, if any.
    pub fn insert<K>(&mut self, key: K, payload: T) -> Option<T>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut chars = key.chars();
        let Some(mut c) = chars.next() else {
            trace!("ignoring insert of empty key");
            return None;
        };

        let mut link = &mut self.root;
        loop {
            let node = link.get_or_insert_with(|| Box::new(Node::new(c)));
            match c.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        link = &mut node.mid;
                    }
                    None => {
                        let previous = node.payload.replace(payload);
                        if previous.is_none() {
                            self.len += 1;
                        }
                        return previous;
                    }
                },
            }
        }
    }

    /// Inserts every key in `keys`, all associated with the same `payload`.
    ///
    /// The batch is sorted and inserted median first, recursing into the
    /// lower and upper halves, so the resulting tree is balanced regardless
    /// of the input order.
    pub fn insert_all<I, K>(&mut self, keys: I, payload: T)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
        T: Clone,
    {
        self.insert_all_with(keys.into_iter().map(|key| (key, payload.clone())));
    }

    /// Inserts a batch of `(key, payload)` pairs in balanced order.
    ///
    /// Same algorithm as [`insert_all`](Self::insert_all) with a payload per
    /// key. When a key appears more than once, its last occurrence in the
    /// input wins.
    pub fn insert_all_with<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
    {
        let mut sorted: Vec<(K, T)> = entries.into_iter().collect();
        if sorted.is_empty() {
            return;
        }
        sorted.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));
        // Median order would not respect input order among duplicates, so
        // collapse each run onto its last entry first.
        sorted.dedup_by(|later, earlier| {
            let duplicate = later.0.as_ref() == earlier.0.as_ref();
            if duplicate {
                std::mem::swap(later, earlier);
            }
            duplicate
        });
        debug!(keys = sorted.len(), "bulk inserting keys in median order");

        let mut pending: Vec<Option<(K, T)>> = sorted.into_iter().map(Some).collect();

        // Half-open ranges; the lower half is always popped before the upper.
        let mut ranges = vec![(0, pending.len())];
        while let Some((begin, end)) = ranges.pop() {
            if begin == end {
                continue;
            }
            let mid = begin + (end - begin - 1) / 2;
            if let Some((key, payload)) = pending[mid].take() {
                self.insert(key, payload);
            }
            ranges.push((mid + 1, end));
            ranges.push((begin, mid));
        }
    }

    /// Finds the node at which `key` ends.
    ///
    /// The node is returned whether or not it is terminal: a non-terminal
    /// node means `key` is only a prefix of longer stored keys. Use
    /// [`Node::is_terminal`] or [`contains`](Self::contains) to tell them
    /// apart. The empty key never matches.
    pub fn search<K>(&self, key: K) -> Option<&Node<T>>
    where
        K: AsRef<str>,
    {
        let mut chars = key.as_ref().chars();
        let mut c = chars.next()?;
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            match c.cmp(&node.value) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        link = node.mid.as_deref();
                    }
                    None => return Some(node),
                },
            }
        }
        None
    }

    fn search_mut(&mut self, key: &str) -> Option<&mut Node<T>> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut link = self.root.as_deref_mut();

        while let Some(node) = link {
            match c.cmp(&node.value) {
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Greater => link = node.right.as_deref_mut(),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        link = node.mid.as_deref_mut();
                    }
                    None => return Some(node),
                },
            }
        }
        None
    }

    /// Returns `true` if `key` is stored in the tree.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(key).is_some_and(Node::is_terminal)
    }

    /// Returns the payload stored under `key`.
    pub fn get<K>(&self, key: K) -> Option<&T>
    where
        K: AsRef<str>,
    {
        self.search(key).and_then(Node::payload)
    }

    /// Returns a mutable reference to the payload stored under `key`.
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut T>
    where
        K: AsRef<str>,
    {
        self.search_mut(key.as_ref()).and_then(Node::payload_mut)
    }

    /// Calls `visit` once for every stored key, in ascending order, with the
    /// full key and its terminal node.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Node<T>),
    {
        for (key, node) in Walk::new(self.root.as_deref(), String::new()) {
            visit(&key, node);
        }
    }

    /// Returns every stored key that starts with `prefix`, in ascending
    /// order, paired with its terminal node.
    ///
    /// `prefix` itself is included when it is a stored key. An empty or
    /// unmatched prefix yields an empty result.
    pub fn partial_match<P>(&self, prefix: P) -> Vec<(String, &Node<T>)>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let Some(node) = self.search(prefix) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        if node.is_terminal() {
            matches.push((prefix.to_owned(), node));
        }
        matches.extend(Walk::new(node.mid.as_deref(), prefix.to_owned()));
        matches
    }

    /// Iterates over `(key, payload)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(Walk::new(self.root.as_deref(), String::new()), self.len)
    }

    /// Iterates over the stored keys in ascending order.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys::new(self.iter())
    }

    /// Number of nodes on the longest path from the root, following left,
    /// mid and right links alike. Zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [&node.left, &node.mid, &node.right].into_iter().flatten() {
                stack.push((&**child, depth + 1));
            }
        }
        height
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        debug!(entries = self.len, "clearing tree");
        release(self.root.take());
        self.len = 0;
    }
}

/// Frees a subtree without recursing, so arbitrarily deep chains are safe.
fn release<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.take_children().into_iter().flatten());
    }
}

enum Frame<'a, T> {
    /// Copy a subtree, pushing its copy (or `None`) onto the output stack.
    Copy(Option<&'a Node<T>>),
    /// Pop the copies of the node's three children and join them.
    Assemble(&'a Node<T>),
}

/// Deep-copies a subtree without recursing.
fn duplicate<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    let mut work = vec![Frame::Copy(root)];
    let mut built: Vec<Link<T>> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Copy(None) => built.push(None),
            Frame::Copy(Some(node)) => {
                // Left is popped first, so copies land as left, mid, right
                work.push(Frame::Assemble(node));
                work.push(Frame::Copy(node.right.as_deref()));
                work.push(Frame::Copy(node.mid.as_deref()));
                work.push(Frame::Copy(node.left.as_deref()));
            }
            Frame::Assemble(node) => {
                let right = built.pop().flatten();
                let mid = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    value: node.value,
                    payload: node.payload.clone(),
                    left,
                    mid,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

impl<T: Clone> Clone for TernarySearchTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: duplicate(self.root.as_deref()),
            len: self.len,
        }
    }
}

/// Formats as a map of stored keys to payloads, in key order.
impl<T: fmt::Debug> fmt::Debug for TernarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Drop for TernarySearchTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> Default for TernarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a TernarySearchTree<T> {
    type Item = (String, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a balanced tree through [`TernarySearchTree::insert_all_with`].
impl<K: AsRef<str>, T> FromIterator<(K, T)> for TernarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all_with(iter);
        tree
    }
}

/// Inserts one entry at a time; no balance guarantee.
impl<K: AsRef<str>, T> Extend<(K, T)> for TernarySearchTree<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}
