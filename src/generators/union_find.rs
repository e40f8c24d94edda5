/// Disjoint sets over `0..size` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Number of disjoint sets remaining.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `x`, compressing the path to it.
    ///
    /// # Panics
    /// If `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns `false` if they were already the same set.
    ///
    /// On equal rank the root of `x` becomes the parent.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.components -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_are_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.components(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_reports_merges() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(0), uf.find(4));
        assert_eq!(uf.components(), 2);
    }

    #[test]
    fn test_tie_makes_first_root_parent() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(2, 0));
        assert_eq!(uf.find(0), 2);
        // Rank 1 root absorbs the rank 0 singleton regardless of argument order
        assert!(uf.union(1, 0));
        assert_eq!(uf.find(1), 2);
    }

    #[test]
    fn test_find_compresses_paths() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1); // 1 -> 0, rank(0) = 1
        uf.union(2, 3); // 3 -> 2, rank(2) = 1
        uf.union(0, 2); // 2 -> 0, rank(0) = 2
        assert_eq!(uf.parent[3], 2);
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent[3], 0);
    }

    #[test]
    fn test_chain_of_unions_leaves_one_component() {
        let mut uf = UnionFind::new(100);
        let merges = (1..100).filter(|&i| uf.union(i - 1, i)).count();
        assert_eq!(merges, 99);
        assert_eq!(uf.components(), 1);
    }
}
