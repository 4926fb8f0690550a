// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// RustAD: A Rust library for automatic differentiation.
// Copyright (C) 2024 https://github.com/rust-ad
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! This module contains the implementation of the computation `Graph`.
//! The graph is also known as a Wengert List.
//!
//! The graph is an arena of [`Vertex`] records; every overloaded
//! operation pushes a fresh vertex referencing only already-constructed
//! vertices, so the structure is a DAG by construction and is never
//! mutated after a vertex is pushed. One graph belongs to one evaluation:
//! it is built forwards, consumed by the reverse pass, and dropped.

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// IMPORTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

use crate::{variable::Variable, vertex::Arity, vertex::Vertex};
use std::cell::RefCell;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// GRAPH STRUCT AND IMPLEMENTATION
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Struct to contain the graph (Wengert list), as a vector of `Vertex`s.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vector containing the vertices in the Wengert List.
    pub vertices: RefCell<Vec<Vertex>>,
}

/// Implementation for the `Graph` struct.
impl Graph {
    /// Instantiate a new graph.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            vertices: RefCell::new(Vec::new()),
        }
    }

    /// Instantiate a new graph with a capacity.
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Add a new variable (a leaf vertex) to the graph.
    /// Returns a new `Variable` instance (the contents of a vertex).
    #[inline]
    pub fn var(&self, value: f64) -> Variable<'_> {
        Variable {
            graph: self,
            value,
            index: self.push(Arity::Nullary, &[], &[]),
        }
    }

    /// Add multiple variables (a slice) to the graph.
    /// Useful for larger functions with many inputs.
    #[inline]
    pub fn vars<'v>(&'v self, values: &[f64]) -> Vec<Variable<'v>> {
        values.iter().map(|&value| self.var(value)).collect()
    }

    /// Returns the length of the graph so new vertices can index to the correct position.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.borrow().len()
    }

    /// Returns true/false depending on whether the graph is empty or not.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.borrow().len() == 0
    }

    /// Clears the entire graph.
    #[inline]
    pub fn clear(&self) {
        self.vertices.borrow_mut().clear();
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Functions to push values to the graph (Wengert List):
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Pushes a vertex to the graph and returns its index.
    ///
    /// Unused operand slots are filled with the new vertex's own index and
    /// a zero partial, so the reverse pass can sweep every slot without
    /// branching on arity.
    #[inline]
    pub fn push(&self, arity: Arity, parents: &[usize], partials: &[f64]) -> usize {
        let mut vertices = self.vertices.borrow_mut();
        let len = vertices.len();

        let vertex = match arity {
            // Leaf pushback: no partials, both slots self-referential.
            Arity::Nullary => {
                assert!(parents.is_empty());

                Vertex {
                    partials: [0.0, 0.0],
                    parents: [len, len],
                }
            }
            // Unary operator pushback, e.g. `x.sin()`: one partial, one
            // parent.
            Arity::Unary => {
                assert!(parents.len() == 1);

                Vertex {
                    partials: [partials[0], 0.0],
                    parents: [parents[0], len],
                }
            }
            // Binary operator pushback, e.g. `x + y`: two partials, two
            // parents.
            Arity::Binary => {
                assert!(parents.len() == 2);

                Vertex {
                    partials: [partials[0], partials[1]],
                    parents: [parents[0], parents[1]],
                }
            }
        };

        vertices.push(vertex);

        len
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// UNIT TESTS
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

#[cfg(test)]
mod tests_graph {
    use super::*;

    #[test]
    fn test_graph_lifecycle() {
        let g = Graph::new();
        assert!(g.is_empty());

        let x = g.var(1.0);
        let y = g.var(2.0);
        assert_eq!(g.len(), 2);

        let _z = x + y;
        assert_eq!(g.len(), 3);

        g.clear();
        assert!(g.is_empty());
    }

    #[test]
    fn test_vars() {
        let g = Graph::with_capacity(3);
        let variables = g.vars(&[1.0, 2.0, 3.0]);

        assert_eq!(variables.len(), 3);
        assert_eq!(g.len(), 3);
        assert_eq!(variables[2].value, 3.0);
    }

    #[test]
    fn test_dag_by_construction() {
        // No vertex can reach itself through its parents: every real
        // parent index is strictly below the vertex's own index.
        let g = Graph::new();
        let x = g.var(1.0);
        let y = g.var(2.0);

        let shared = x * y;
        let _out = shared.sin() + shared * x;

        for (index, vertex) in g.vertices.borrow().iter().enumerate() {
            for (slot, &parent) in vertex.parents.iter().enumerate() {
                assert!(
                    parent < index || (parent == index && vertex.partials[slot] == 0.0),
                    "vertex {index} has a forward reference"
                );
            }
        }
    }
}
