// Copyright (c) 2025 Tstree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the ternary search tree.
//!
//! Each node holds one character of one or more stored keys and exclusively
//! owns its three children.

use std::fmt;

/// Owning link to a child node.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in the ternary search tree.
///
/// The `left` subtree holds keys whose character at this position sorts
/// before `value`, the `right` subtree those that sort after it, and `mid`
/// continues the keys that match `value` one character deeper.
pub struct Node<T> {
    /// Comparison key at this position
    pub(crate) value: char,

    /// Payload of the key ending here; present iff the node is terminal
    pub(crate) payload: Option<T>,

    pub(crate) left: Link<T>,
    pub(crate) mid: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a non-terminal node holding `value`.
    pub(crate) fn new(value: char) -> Self {
        Self {
            value,
            payload: None,
            left: None,
            mid: None,
            right: None,
        }
    }

    /// The character this node compares against.
    pub fn value(&self) -> char {
        self.value
    }

    /// Whether some stored key ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// The payload attached to the key ending here, if any.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Mutable access to the payload attached to the key ending here.
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    /// Detaches all three children, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> [Link<T>; 3] {
        [self.left.take(), self.mid.take(), self.right.take()]
    }
}

/// Shows only this node; children are summarized so deep chains format in
/// constant stack space.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("payload", &self.payload)
            .field("has_left", &self.left.is_some())
            .field("has_mid", &self.mid.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}
