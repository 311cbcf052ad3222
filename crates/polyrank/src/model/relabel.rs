//! Random relabeling: an isomorphic copy with every rank permuted.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{ElementList, Polytope};

impl Polytope {
    /// Returns an isomorphic copy whose elements are permuted within every rank
    /// and whose facet lists are reordered. Useful to check that a property
    /// holds "up to relabeling".
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Polytope {
        // order[k][new] = old index; place[k][old] = new index.
        let order: Vec<Vec<usize>> = self
            .el_counts()
            .into_iter()
            .map(|c| {
                let mut p: Vec<usize> = (0..c).collect();
                p.shuffle(rng);
                p
            })
            .collect();
        let place: Vec<Vec<usize>> = order
            .iter()
            .map(|p| {
                let mut inv = vec![0; p.len()];
                for (new, &old) in p.iter().enumerate() {
                    inv[old] = new;
                }
                inv
            })
            .collect();

        let vertices = match order.first() {
            Some(p) => p.iter().map(|&old| self.vertices[old].clone()).collect(),
            None => Vec::new(),
        };
        let ranks: Vec<ElementList> = self
            .ranks
            .iter()
            .enumerate()
            .map(|(i, list)| {
                let below = &place[i];
                order[i + 1]
                    .iter()
                    .map(|&old| {
                        let mut subs: Vec<usize> = list[old].iter().map(|&s| below[s]).collect();
                        subs.shuffle(rng);
                        subs
                    })
                    .collect()
            })
            .collect();
        Polytope {
            rank: self.rank,
            dim: self.dim,
            vertices,
            ranks,
            construction: self.construction.clone(),
        }
    }
}
