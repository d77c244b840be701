use std::collections::HashSet;
use std::hash::Hash;

/// Extends `HashSet` with the `without` method.
pub trait HashSetExt<T> {
    fn without(&self, value: &T) -> HashSet<T>;
}

impl<T> HashSetExt<T> for HashSet<T>
where
    T: Clone + Eq + Hash,
{
    /**
    Returns a copy of the `HashSet` that doesn't contain the specified
    `value`. Used to turn a root-path prefix into the set of vertices Yen's
    deviation loop must mask, minus the spur node itself (spec §4.7:
    `maskedVertices := rootPath \ {spurNode}`).
    */
    fn without(&self, value: &T) -> HashSet<T> {
        self.iter().filter(|v| *v != value).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_removes_only_the_given_value() {
        let hs1: HashSet<i32> = vec![1, 2, 3].into_iter().collect();
        let hs2 = hs1.without(&2);
        assert_eq!(hs2.len(), 2);
        let mut v: Vec<i32> = hs2.into_iter().collect();
        v.sort();
        assert_eq!(v, vec![1, 3]);
    }
}
