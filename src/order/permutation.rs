//! Line permutations.

/// An ordering of axis-lines: entry `i` is the original index of the line
/// that moves to position `i`.
///
/// Every index in `0..len` appears exactly once. Values are only produced by
/// the orderings in this crate, which guarantee that by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The permutation that keeps `n` lines in place.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Wrap an order computed by an [`AxisOrdering`](super::AxisOrdering).
    ///
    /// Panics if `order` is not a bijection over `0..order.len()`: a strategy
    /// that places a line twice or skips one is broken, not the data.
    pub fn from_order(order: Vec<usize>) -> Self {
        let mut seen = vec![false; order.len()];
        for &i in &order {
            assert!(
                i < seen.len() && !seen[i],
                "line {i} placed twice or out of range"
            );
            seen[i] = true;
        }
        Self(order)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a permutation of zero lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Original index of the line at `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    /// The order as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterate over original indices in new order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Consume into the underlying order.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// True if no line moves.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(pos, &i)| pos == i)
    }

    /// The permutation that undoes this one: `inverse[perm[i]] == i`.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.0.len()];
        for (pos, &i) in self.0.iter().enumerate() {
            inv[i] = pos;
        }
        Self(inv)
    }

    /// Reorder `items` the same way: `out[i] = items[perm[i]]`.
    ///
    /// Panics if `items` is shorter than the permutation.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.0.iter().map(|&i| items[i].clone()).collect()
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
        assert!(p.is_identity());
        assert!(Permutation::identity(0).is_empty());
    }

    #[test]
    fn test_apply_moves_items() {
        let p = Permutation::from_order(vec![2, 0, 1]);
        assert_eq!(p.apply(&["R0", "R1", "R2"]), vec!["R2", "R0", "R1"]);
        assert!(!p.is_identity());
    }

    #[test]
    fn test_inverse_round_trip() {
        let p = Permutation::from_order(vec![3, 0, 2, 1]);
        let inv = p.inverse();
        let items = vec!['a', 'b', 'c', 'd'];
        assert_eq!(inv.apply(&p.apply(&items)), items);
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn test_duplicate_line_panics() {
        let _ = Permutation::from_order(vec![0, 0, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let _ = Permutation::from_order(vec![0, 3]);
    }
}
