use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/**
A vertex of a [`Graph`](crate::graph::Graph), identified by `name` and
carrying an optional user attribute of type `A`.
*/
#[derive(Clone)]
pub struct Node<T, A> {
    pub name: T,
    pub attribute: Option<A>,
}

impl<T, A> Node<T, A> {
    pub fn from_name(name: T) -> Node<T, A> {
        Node {
            name,
            attribute: None,
        }
    }

    pub fn with_attribute(name: T, attribute: A) -> Node<T, A> {
        Node {
            name,
            attribute: Some(attribute),
        }
    }
}

impl<T: Eq + Ord, A> Ord for Node<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<T: Eq + Ord, A> PartialOrd for Node<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialEq, A> PartialEq for Node<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: Eq, A> Eq for Node<T, A> {}

impl<T: Debug, A> fmt::Debug for Node<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name).finish()
    }
}

impl<T: Display, A> fmt::Display for Node<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<T: Hash, A> Hash for Node<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
