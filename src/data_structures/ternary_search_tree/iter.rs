// Copyright (c) 2025 Tstree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-order walks over a ternary search tree.
//!
//! The walk keeps an explicit stack instead of recursing, so degenerate trees
//! built from unsorted incremental inserts cannot exhaust the call stack.
//! Every node's `mid` subtree is explored whether or not the node itself is
//! terminal; terminal status only decides whether the node is reported.

use std::iter::FusedIterator;

use super::node::Node;

enum Step<'a, T> {
    /// Expand a subtree whose key prefix is `key[..depth]`.
    Descend(&'a Node<T>, usize),
    /// Report the node if terminal; its key is `key[..depth]` plus its value.
    Visit(&'a Node<T>, usize),
}

/// Walks every terminal node below a starting node in ascending key order,
/// yielding the full key of each one.
pub(crate) struct Walk<'a, T> {
    stack: Vec<Step<'a, T>>,
    key: String,
}

impl<'a, T> Walk<'a, T> {
    /// Starts a walk over the subtree rooted at `root`, where every key in
    /// that subtree begins with `prefix`.
    pub(crate) fn new(root: Option<&'a Node<T>>, prefix: String) -> Self {
        let depth = prefix.len();
        Self {
            stack: root.map(|node| Step::Descend(node, depth)).into_iter().collect(),
            key: prefix,
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (String, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Descend(node, depth) => {
                    // Pushed in reverse: left, self, mid, then right.
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Step::Descend(right, depth));
                    }
                    if let Some(mid) = node.mid.as_deref() {
                        self.stack
                            .push(Step::Descend(mid, depth + node.value.len_utf8()));
                    }
                    self.stack.push(Step::Visit(node, depth));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Step::Descend(left, depth));
                    }
                }
                Step::Visit(node, depth) => {
                    self.key.truncate(depth);
                    self.key.push(node.value);
                    if node.is_terminal() {
                        return Some((self.key.clone(), node));
                    }
                }
            }
        }
        None
    }
}

impl<T> FusedIterator for Walk<'_, T> {}

/// An iterator over the entries of a [`TernarySearchTree`] in ascending key order.
///
/// This struct is created by [`TernarySearchTree::iter`].
///
/// [`TernarySearchTree`]: super::TernarySearchTree
/// [`TernarySearchTree::iter`]: super::TernarySearchTree::iter
pub struct Iter<'a, T> {
    walk: Walk<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(walk: Walk<'a, T>, len: usize) -> Self {
        Self {
            walk,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self
            .walk
            .find_map(|(key, node)| node.payload().map(|payload| (key, payload)));
        if entry.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the keys of a [`TernarySearchTree`] in ascending order.
///
/// This struct is created by [`TernarySearchTree::keys`].
///
/// [`TernarySearchTree`]: super::TernarySearchTree
/// [`TernarySearchTree::keys`]: super::TernarySearchTree::keys
pub struct Keys<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Keys<'a, T> {
    pub(crate) fn new(inner: Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {}

impl<T> FusedIterator for Keys<'_, T> {}
