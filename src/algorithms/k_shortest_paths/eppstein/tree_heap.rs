use crate::algorithms::k_shortest_paths::eppstein::reverse_sssp::ReverseShortestPaths;
use crate::algorithms::k_shortest_paths::eppstein::sidetrack::{self, HOut, Sidetrack};
use crate::graph::GraphContract;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// A node of the persistent `H_T` tree (spec §4.4, §9). Nodes are immutable
/// after creation and shared by reference (`Rc`) across the `H_T(v)` of
/// distinct vertices; inserting along the spine during construction
/// path-copies only the nodes it modifies.
pub struct TreeHeapNode<T, A> {
    pub sidetrack: Sidetrack<T, A>,
    pub left: Link<T, A>,
    pub right: Link<T, A>,
    /// The non-best-of-`H_out` subtree for the vertex this node was built
    /// from; `None` when that vertex had no extra sidetracks beyond its
    /// `H_out` root.
    pub rest: Link<T, A>,
    /// Count of nodes in `{self} ∪ left ∪ right`, used only to choose an
    /// insertion side (spec §4.4's `goLeft` rule); `rest` does not
    /// contribute, since it never participates in rebalancing.
    size: usize,
}

pub type Link<T, A> = Option<Rc<TreeHeapNode<T, A>>>;

fn size_of<T, A>(link: &Link<T, A>) -> usize {
    link.as_ref().map(|n| n.size).unwrap_or(0)
}

/// Builds the balanced binary tree for an `H_out` "rest" array: root =
/// `items[from]`, left subtree = `items[from+1..mid]`, right subtree =
/// `items[mid+1..to]`, `mid = (from + to) / 2` (spec §4.4 — "middle as root
/// of second half"). This exact, deterministic shape is what makes
/// enumeration order reproducible under weight ties.
fn build_balanced<T: Clone, A: Clone>(
    items: &[Sidetrack<T, A>],
    from: usize,
    to: usize,
) -> Link<T, A> {
    if from >= to {
        return None;
    }
    let mid = (from + to) / 2;
    let left = build_balanced(items, from + 1, mid);
    let right = build_balanced(items, mid + 1, to);
    let size = 1 + size_of(&left) + size_of(&right);
    Some(Rc::new(TreeHeapNode {
        sidetrack: items[from].clone(),
        left,
        right,
        rest: None,
        size,
    }))
}

fn node_from_h_out<T: Clone, A: Clone>(h_out: HOut<T, A>) -> Rc<TreeHeapNode<T, A>> {
    let rest = build_balanced(&h_out.rest, 0, h_out.rest.len());
    Rc::new(TreeHeapNode {
        sidetrack: h_out.root,
        left: None,
        right: None,
        rest,
        size: 1,
    })
}

/// Inserts `new_node` (an `H_out` root, i.e. `outroot(v)`) into `target`
/// (`H_T(u)`), returning the resulting `H_T(v)` (spec §4.4's `Insert`
/// recurrence).
fn insert<T: Clone, A: Clone>(
    target: Link<T, A>,
    new_node: Rc<TreeHeapNode<T, A>>,
) -> Rc<TreeHeapNode<T, A>> {
    let existing = match target {
        None => return new_node,
        Some(existing) => existing,
    };

    let go_left = existing.left.is_none() || size_of(&existing.right) > size_of(&existing.left);

    if new_node.sidetrack.delta < existing.sidetrack.delta {
        // `new_node` takes over as root, inheriting `existing`'s children and
        // size; the displaced `existing` (stripped of its old children, but
        // keeping its own `rest`) is recursively reinserted on the chosen side.
        let demoted = Rc::new(TreeHeapNode {
            sidetrack: existing.sidetrack.clone(),
            left: None,
            right: None,
            rest: existing.rest.clone(),
            size: 1,
        });
        let mut left = existing.left.clone();
        let mut right = existing.right.clone();
        if go_left {
            left = Some(insert(left, demoted));
        } else {
            right = Some(insert(right, demoted));
        }
        let size = 1 + size_of(&left) + size_of(&right);
        Rc::new(TreeHeapNode {
            sidetrack: new_node.sidetrack.clone(),
            left,
            right,
            rest: new_node.rest.clone(),
            size,
        })
    } else {
        let mut left = existing.left.clone();
        let mut right = existing.right.clone();
        if go_left {
            left = Some(insert(left, new_node));
        } else {
            right = Some(insert(right, new_node));
        }
        let size = 1 + size_of(&left) + size_of(&right);
        Rc::new(TreeHeapNode {
            sidetrack: existing.sidetrack.clone(),
            left,
            right,
            rest: existing.rest.clone(),
            size,
        })
    }
}

/// The full set of per-vertex `H_T` roots, built once during engine
/// construction and shared (via `Rc`) for the lifetime of the engine.
pub struct TreeHeap<T, A> {
    roots: HashMap<T, Link<T, A>>,
}

impl<T: Clone + Eq + Hash, A: Clone> TreeHeap<T, A> {
    /// `H_T(v)`, or `None` if `v` has no sidetrack reachable on the way to
    /// the sink (spec §4.4's `isEmpty`).
    pub fn get(&self, v: &T) -> Link<T, A> {
        self.roots.get(v).cloned().flatten()
    }

    pub fn build<G>(graph: &G, reverse: &ReverseShortestPaths<T, A>) -> TreeHeap<T, A>
    where
        G: GraphContract<Vertex = T, Attribute = A>,
    {
        let mut roots: HashMap<T, Link<T, A>> = HashMap::new();

        for v in &reverse.order {
            let h_out = sidetrack::build_h_out(graph, reverse, v);

            let h_t_v = match reverse.parent_edge.get(v) {
                // `v == t`: H_T(t) is built solely from H_out(t).
                None => h_out.map(node_from_h_out),
                Some(parent_edge) => {
                    let u = &parent_edge.v;
                    // `u` always precedes `v` in `reverse.order` (it is
                    // strictly closer to the sink), so its H_T is already
                    // memoised.
                    let h_t_u = roots.get(u).cloned().flatten();
                    match h_out {
                        None => h_t_u,
                        Some(h_out) => Some(insert(h_t_u, node_from_h_out(h_out))),
                    }
                }
            };

            roots.insert(v.clone(), h_t_v);
        }

        TreeHeap { roots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::k_shortest_paths::eppstein::reverse_sssp;
    use crate::graph::Graph;

    #[test]
    fn root_of_h_t_is_always_the_minimum_delta_sidetrack_reachable() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 0, 2.0);
        graph.add_edge(0, 0, 3.0);

        let reverse = reverse_sssp::build(&graph, 1).unwrap();
        let tree = TreeHeap::build(&graph, &reverse);

        let h_t_0 = tree.get(&0).unwrap();
        // both self-loops are sidetracks out of 0; the cheaper one (w=2)
        // must be the root of H_T(0), with the other in its `rest` subtree.
        assert_eq!(h_t_0.sidetrack.delta, 2.0);
        assert!(h_t_0.rest.is_some());
        assert_eq!(h_t_0.rest.as_ref().unwrap().sidetrack.delta, 3.0);
    }

    #[test]
    fn vertex_with_no_sidetracks_has_no_h_t() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);

        let reverse = reverse_sssp::build(&graph, 1).unwrap();
        let tree = TreeHeap::build(&graph, &reverse);
        assert!(tree.get(&1).is_none());
    }
}
