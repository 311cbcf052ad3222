//! Offsets of rank-pair blocks within one result rank.

/// Per-call memo over rank pairs `(m, n)`.
///
/// Cells of one result rank are emitted block by block, `m` ascending, and
/// within a block `i` (operand P) outer, `j` (operand Q) inner. The offset of
/// block `(m, n)` obeys
/// `offset(m, n) = offset(m - 1, n + 1) + |P_{m-1}|·|Q_{n+1}|`,
/// with `offset = 0` on the first block of every diagonal (`m` minimal or `n`
/// maximal).
#[derive(Clone, Debug)]
pub(crate) struct RankPairTable {
    p_lo: isize,
    q_lo: isize,
    p_counts: Vec<usize>,
    q_counts: Vec<usize>,
    offsets: Vec<usize>,
}

impl RankPairTable {
    /// `p_counts[k]` is the number of P's elements of rank `p_lo + k`, and
    /// likewise for Q.
    pub(crate) fn new(p_lo: isize, p_counts: Vec<usize>, q_lo: isize, q_counts: Vec<usize>) -> Self {
        let (pl, ql) = (p_counts.len(), q_counts.len());
        let mut offsets = vec![0usize; pl * ql];
        // Row a only reads row a - 1, so one ascending pass fills the table.
        for a in 1..pl {
            for b in 0..ql.saturating_sub(1) {
                offsets[a * ql + b] = offsets[(a - 1) * ql + b + 1] + p_counts[a - 1] * q_counts[b + 1];
            }
        }
        Self {
            p_lo,
            q_lo,
            p_counts,
            q_counts,
            offsets,
        }
    }

    fn slot(&self, m: isize, n: isize) -> (usize, usize) {
        debug_assert!(m >= self.p_lo && n >= self.q_lo);
        ((m - self.p_lo) as usize, (n - self.q_lo) as usize)
    }

    /// Elements of P at rank `m`.
    #[inline]
    pub(crate) fn p_count(&self, m: isize) -> usize {
        self.p_counts[self.slot(m, self.q_lo).0]
    }

    /// Elements of Q at rank `n`.
    #[inline]
    pub(crate) fn q_count(&self, n: isize) -> usize {
        self.q_counts[self.slot(self.p_lo, n).1]
    }

    /// Highest rank of each operand covered by the table.
    pub(crate) fn p_hi(&self) -> isize {
        self.p_lo + self.p_counts.len() as isize - 1
    }

    pub(crate) fn q_hi(&self) -> isize {
        self.q_lo + self.q_counts.len() as isize - 1
    }

    /// Index of cell `(m, i, n, j)` within its result rank.
    #[inline]
    pub(crate) fn index(&self, m: isize, i: usize, n: isize, j: usize) -> usize {
        let (a, b) = self.slot(m, n);
        self.offsets[a * self.q_counts.len() + b] + i * self.q_counts[b] + j
    }

    /// Number of cells on the diagonal `m + n = s`.
    pub(crate) fn diagonal_len(&self, s: isize) -> usize {
        self.diagonal(s)
            .map(|m| self.p_count(m) * self.q_count(s - m))
            .sum()
    }

    /// Valid `m` on the diagonal `m + n = s`, ascending.
    pub(crate) fn diagonal(&self, s: isize) -> std::ops::RangeInclusive<isize> {
        let lo = self.p_lo.max(s - self.q_hi());
        let hi = self.p_hi().min(s - self.q_lo);
        lo..=hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_emission_order() {
        // Dyad counts by rank 0..=1 on both sides (prism window).
        let t = RankPairTable::new(0, vec![2, 1], 0, vec![2, 1]);
        // Rank 1 of the square: block (0, 1) then block (1, 0).
        assert_eq!(t.index(0, 0, 1, 0), 0);
        assert_eq!(t.index(0, 1, 1, 0), 1);
        assert_eq!(t.index(1, 0, 0, 0), 2);
        assert_eq!(t.index(1, 0, 0, 1), 3);
        assert_eq!(t.diagonal_len(1), 4);
        assert_eq!(t.diagonal(1), 0..=1);
        assert_eq!(t.diagonal(0), 0..=0);
    }

    #[test]
    fn every_diagonal_is_densely_indexed() {
        let t = RankPairTable::new(-1, vec![1, 5, 7, 3], -1, vec![1, 4, 4]);
        for s in -2..=(t.p_hi() + t.q_hi()) {
            let mut seen = Vec::new();
            for m in t.diagonal(s) {
                let n = s - m;
                for i in 0..t.p_count(m) {
                    for j in 0..t.q_count(n) {
                        seen.push(t.index(m, i, n, j));
                    }
                }
            }
            let expected: Vec<usize> = (0..t.diagonal_len(s)).collect();
            assert_eq!(seen, expected, "diagonal {s}");
        }
    }
}
