use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/**
A directed edge `u -> v` with a real-valued `weight`, carrying an optional
user attribute of type `A`.

Self-loops (`u == v`) and parallel edges (more than one edge between the
same `(u, v)`) are both permitted; neither `Graph` nor any algorithm in this
crate rejects them (spec §3).
*/
#[derive(Clone)]
pub struct Edge<T, A> {
    pub u: T,
    pub v: T,
    pub weight: f64,
    pub attribute: Option<A>,
}

impl<T, A> Edge<T, A> {
    pub fn new(u: T, v: T, weight: f64) -> Edge<T, A> {
        Edge {
            u,
            v,
            weight,
            attribute: None,
        }
    }

    pub fn with_attribute(u: T, v: T, weight: f64, attribute: A) -> Edge<T, A> {
        Edge {
            u,
            v,
            weight,
            attribute: Some(attribute),
        }
    }

    /// `(v, u)` with the same weight and attribute; used to build the
    /// edge-reversed view consumed by Eppstein's preprocessing (spec §4.1,
    /// §4.2).
    pub fn reversed(self) -> Edge<T, A> {
        Edge {
            u: self.v,
            v: self.u,
            weight: self.weight,
            attribute: self.attribute,
        }
    }
}

impl<T: PartialEq, A> PartialEq for Edge<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v && self.weight == other.weight
    }
}

impl<T: Debug, A> fmt::Debug for Edge<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("u", &self.u)
            .field("v", &self.v)
            .field("weight", &self.weight)
            .finish()
    }
}

impl<T: Display, A> fmt::Display for Edge<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {}, w={})", self.u, self.v, self.weight)
    }
}

impl<T: Hash, A> Hash for Edge<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u.hash(state);
        self.v.hash(state);
        state.write_u64(self.weight.to_bits());
    }
}
