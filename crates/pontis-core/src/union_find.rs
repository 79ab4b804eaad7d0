//! Union-Find (disjoint set) tracking island connectivity during forest
//! assembly.
//!
//! [`UnionFind::find`] uses iterative path splitting: while the walk
//! advances one parent at a time, each visited node is re-pointed at its
//! grandparent, so every call tightens the path it traversed. Combined
//! with union-by-rank this gives the usual inverse-Ackermann amortized
//! bound without recursion.
//!
//! [`UnionFind::union_roots`] merges at the representative level and does
//! **not** resolve its arguments. The forest builder has already paid for
//! both `find` calls to test the cycle condition; re-resolving inside the
//! union would repeat that work on every accepted bridge.

/// A union-find structure with path splitting and union-by-rank.
///
/// Each element is identified by a `usize` index in `[0, n)` where `n` is
/// the number of elements supplied at construction time.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets.
    ///
    /// Each element `i` is initially its own representative
    /// (`parent[i] == i`, `rank[i] == 0`).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
        }
    }

    /// Returns the representative of the set containing `u`.
    ///
    /// Performs path splitting: each node on the walked path is linked to
    /// its grandparent as the traversal moves one step up.
    ///
    /// # Panics
    ///
    /// Does not panic for `u < n`. An out-of-range index is a logic error
    /// in the caller and surfaces as the `Vec` bounds panic.
    pub fn find(&mut self, mut u: usize) -> usize {
        while self.parent[u] != u {
            let parent = self.parent[u];
            self.parent[u] = self.parent[parent];
            u = parent;
        }
        u
    }

    /// Merges the sets whose representatives are `ru` and `rv`.
    ///
    /// Both arguments **must** be representatives (`find` results that no
    /// later union has invalidated) and must differ; the structure is
    /// corrupted otherwise. The lower-rank tree attaches under the
    /// higher-rank one; at equal rank `rv` attaches under `ru` and `ru`'s
    /// rank increments. Which side wins an equal-rank merge is observable
    /// downstream (it decides future representatives), so the direction
    /// is fixed rather than left to chance.
    pub fn union_roots(&mut self, ru: usize, rv: usize) {
        if self.rank[ru] < self.rank[rv] {
            self.parent[ru] = rv;
        } else {
            self.parent[rv] = ru;
            if self.rank[ru] == self.rank[rv] {
                self.rank[ru] += 1;
            }
        }
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
