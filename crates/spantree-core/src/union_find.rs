//! Union-Find (disjoint set) data structure for component tracking.
//!
//! [`UnionFind`] works over dense ordinals `0..n`; [`VertexSets`] is a thin
//! id-keyed wrapper for callers that only hold vertex labels.
//!
//! Path compression is full and iterative: [`UnionFind::find`] walks to the
//! root once, then walks the same path a second time re-pointing every visited
//! node directly at the root. Union-by-rank keeps trees shallow; when ranks are
//! equal the **lower ordinal** becomes the root and its rank increments, so the
//! representative of a set depends only on the merge history, not on argument
//! order.
use std::collections::HashMap;

use crate::newtypes::VertexId;

/// A union-find (disjoint set) structure with full path compression and
/// union-by-rank.
///
/// Elements are the dense ordinals `0..n` fixed at construction; for graph
/// vertices these are the file positions.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// `n` singleton sets over ordinals `0..n`; `n` may be zero.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            sets: n,
        }
    }

    /// Root of the set holding `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed at the root
    /// before returning.
    ///
    /// `x` must be less than [`UnionFind::len`]; an out-of-range ordinal is a
    /// logic error in the caller and triggers the `Vec` bounds panic. Use
    /// [`UnionFind::try_find`] for untrusted input.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Checked form of [`UnionFind::find`]: returns `None` when `x` is out of
    /// range.
    pub fn try_find(&mut self, x: usize) -> Option<usize> {
        (x < self.len()).then(|| self.find(x))
    }

    /// Joins the sets holding `a` and `b`.
    ///
    /// Returns `false` if `a` and `b` were already in the same set (the merge
    /// would have closed a cycle) and `true` if two sets were joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => {
                self.parent[ra] = rb;
            }
            std::cmp::Ordering::Greater => {
                self.parent[rb] = ra;
            }
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] = self.rank[root].saturating_add(1);
            }
        }
        self.sets -= 1;
        log::trace!("union-find: merged {a} and {b} ({} sets left)", self.sets);
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of ordinals.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` for `UnionFind::new(0)`.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

// ---------------------------------------------------------------------------
// VertexSets
// ---------------------------------------------------------------------------

/// A vertex id that is not a member of a [`VertexSets`] partition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vertex {0:?}")]
pub struct UnknownVertex(pub String);

/// Union-find keyed by vertex id.
///
/// Used to replay an arbitrary edge list (for example a player's selection)
/// and detect the first edge that closes a cycle.
#[derive(Debug, Clone)]
pub struct VertexSets {
    ordinals: HashMap<VertexId, usize>,
    inner: UnionFind,
}

impl VertexSets {
    /// Creates one singleton set per vertex. Repeated ids share an ordinal.
    pub fn initialize<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        let mut ordinals = HashMap::new();
        for v in vertices {
            let next = ordinals.len();
            ordinals.entry(v.clone()).or_insert(next);
        }
        let inner = UnionFind::new(ordinals.len());
        Self { ordinals, inner }
    }

    fn ordinal(&self, v: &str) -> Result<usize, UnknownVertex> {
        self.ordinals
            .get(v)
            .copied()
            .ok_or_else(|| UnknownVertex(v.to_owned()))
    }

    /// Returns the ordinal of the representative of `v`'s set.
    ///
    /// # Errors
    ///
    /// [`UnknownVertex`] if `v` was not supplied to [`VertexSets::initialize`].
    pub fn find(&mut self, v: &str) -> Result<usize, UnknownVertex> {
        let x = self.ordinal(v)?;
        Ok(self.inner.find(x))
    }

    /// Merges the sets containing `a` and `b`; `Ok(false)` means they were
    /// already connected.
    ///
    /// # Errors
    ///
    /// [`UnknownVertex`] if either id is not a member.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool, UnknownVertex> {
        let x = self.ordinal(a)?;
        let y = self.ordinal(b)?;
        Ok(self.inner.union(x, y))
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.inner.set_count()
    }

    /// Returns the number of member vertices.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no member vertices.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::vid;

    #[test]
    fn starts_as_singletons() {
        let mut uf = UnionFind::new(5);
        assert!((0..5).all(|i| uf.find(i) == i));
        assert_eq!(uf.set_count(), 5);
    }

    #[test]
    fn empty_and_singleton_are_valid() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.set_count(), 0);

        let mut uf = UnionFind::new(1);
        assert_eq!(uf.find(0), 0);
        assert!(!uf.union(0, 0), "self-union never merges anything");
    }

    #[test]
    fn union_reports_merge_and_cycle() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2), "0 and 2 are already connected");
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn unrelated_sets_stay_apart() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert!(uf.connected(1, 0));
        assert!(!uf.connected(1, 2));
        assert!(!uf.connected(2, 3));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn equal_rank_tie_goes_to_lower_ordinal() {
        let mut uf = UnionFind::new(5);
        uf.union(3, 1);
        assert_eq!((uf.find(1), uf.find(3)), (1, 1));
    }

    #[test]
    fn deeper_tree_absorbs_singleton() {
        let mut uf = UnionFind::new(4);
        uf.union(2, 3);
        // {2,3} has rank 1 rooted at 2; singleton 0 has rank 0.
        uf.union(0, 3);
        assert_eq!(uf.find(0), 2, "singleton goes under the higher-rank root");
    }

    #[test]
    fn find_compresses_whole_path() {
        let mut uf = UnionFind::new(4);
        // Build a chain 3 -> 2 -> 1 -> 0 by hand so that compression is
        // observable.
        uf.parent = vec![0, 0, 1, 2];
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn try_find_rejects_out_of_range() {
        let mut uf = UnionFind::new(2);
        assert_eq!(uf.try_find(1), Some(1));
        assert_eq!(uf.try_find(2), None);
    }

    #[test]
    fn chain_of_unions_ends_in_one_set() {
        let mut uf = UnionFind::new(64);
        for i in 1..64 {
            assert!(uf.union(i - 1, i));
        }
        let root = uf.find(63);
        assert!((0..64).all(|i| uf.find(i) == root));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn vertex_sets_union_and_find_by_id() {
        let ids = [vid("A"), vid("B"), vid("C")];
        let mut sets = VertexSets::initialize(&ids);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.union("A", "B"), Ok(true));
        assert_eq!(sets.union("B", "A"), Ok(false));
        assert_eq!(
            sets.find("A").expect("known"),
            sets.find("B").expect("known")
        );
        assert_eq!(sets.set_count(), 2);
    }

    #[test]
    fn vertex_sets_reject_unknown_vertex() {
        let ids = [vid("A")];
        let mut sets = VertexSets::initialize(&ids);
        assert_eq!(sets.find("Z"), Err(UnknownVertex("Z".to_owned())));
        assert!(sets.union("A", "Z").is_err());
    }

    #[test]
    fn vertex_sets_accept_empty_input() {
        let sets = VertexSets::initialize(std::iter::empty());
        assert!(sets.is_empty());
        assert_eq!(sets.set_count(), 0);
    }
}
