//! A small dependency graph for numeric values.
//!
//! Nodes are either sources, written from outside, or derived, recomputed
//! from their inputs. Writing a source marks its transitive dependents
//! dirty and recomputes them in creation order, so a node whose inputs
//! both changed is evaluated exactly once per write. Recomputation stops
//! propagating wherever a derived node's output is unchanged.

use std::fmt;

/// Handle to a node in a [`ValueGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

enum Rule {
    Source,
    Derived {
        inputs: Vec<NodeId>,
        compute: Box<dyn Fn(&[f32]) -> f32>,
    },
}

struct Node {
    value: f32,
    rule: Rule,
    dependents: Vec<NodeId>,
}

/// Dependency graph of `f32` values.
///
/// Creation order doubles as evaluation order: a derived node may only
/// depend on nodes created before it, which makes a single ascending
/// sweep sufficient to settle the graph after a write.
#[derive(Default)]
pub struct ValueGraph {
    nodes: Vec<Node>,
}

impl ValueGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source node holding `initial`.
    pub fn source(&mut self, initial: f32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value: initial,
            rule: Rule::Source,
            dependents: Vec::new(),
        });
        id
    }

    /// Add a derived node computed from `inputs`.
    ///
    /// The initial value is computed immediately from the inputs'
    /// current values.
    ///
    /// # Panics
    /// Panics if an input refers to a node created after this one.
    pub fn derived<F>(&mut self, inputs: &[NodeId], compute: F) -> NodeId
    where
        F: Fn(&[f32]) -> f32 + 'static,
    {
        let id = NodeId(self.nodes.len());
        for input in inputs {
            assert!(
                input.0 < id.0,
                "derived node may only depend on existing nodes"
            );
        }
        let args: Vec<f32> = inputs.iter().map(|input| self.nodes[input.0].value).collect();
        let value = compute(&args);
        for input in inputs {
            self.nodes[input.0].dependents.push(id);
        }
        self.nodes.push(Node {
            value,
            rule: Rule::Derived {
                inputs: inputs.to_vec(),
                compute: Box::new(compute),
            },
            dependents: Vec::new(),
        });
        id
    }

    /// Write a source node and settle the graph.
    pub fn set(&mut self, id: NodeId, value: f32) {
        self.set_many(&[(id, value)]);
    }

    /// Write several source nodes, then settle the graph once.
    ///
    /// Derived nodes downstream of more than one write see all the new
    /// values in a single recomputation.
    pub fn set_many(&mut self, writes: &[(NodeId, f32)]) {
        let mut dirty = vec![false; self.nodes.len()];
        let mut any = false;
        for &(id, value) in writes {
            debug_assert!(
                matches!(self.nodes[id.0].rule, Rule::Source),
                "only source nodes can be written"
            );
            if self.nodes[id.0].value == value {
                continue;
            }
            self.nodes[id.0].value = value;
            for dep in &self.nodes[id.0].dependents {
                dirty[dep.0] = true;
            }
            any = true;
        }
        if any {
            self.sweep(&mut dirty);
        }
    }

    /// Recompute dirty nodes in ascending id order.
    fn sweep(&mut self, dirty: &mut [bool]) {
        for id in 0..self.nodes.len() {
            if !dirty[id] {
                continue;
            }
            let value = match &self.nodes[id].rule {
                Rule::Source => continue,
                Rule::Derived { inputs, compute } => {
                    let args: Vec<f32> =
                        inputs.iter().map(|input| self.nodes[input.0].value).collect();
                    compute(&args)
                }
            };
            if self.nodes[id].value != value {
                self.nodes[id].value = value;
                for dep in &self.nodes[id].dependents {
                    dirty[dep.0] = true;
                }
            }
        }
    }

    /// Current value of a node.
    pub fn get(&self, id: NodeId) -> f32 {
        self.nodes[id.0].value
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for ValueGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueGraph")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
