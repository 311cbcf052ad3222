//! Connectivity Detector: groups facets into connected components.
//!
//! Purpose
//! - Recover the top rank of a polytope when it is not known explicitly
//!   (polygon builders splitting `{n/d}` compounds, file import).
//!
//! Algorithm
//! - One node per facet; two facets are adjacent iff their subelement sets
//!   intersect. Intersection uses a presence map filled from the first set and
//!   probed by the second, so each test is linear in the two set sizes.
//! - Components come from an iterative traversal started at every unvisited
//!   node; each node is visited exactly once.

use crate::error::{PolyError, Result};
use crate::model::{Element, ElementList};

/// True iff `a` and `b` share an index. `present` must be all-false on entry
/// and is all-false again on return.
fn intersects(a: &[usize], b: &[usize], present: &mut [bool]) -> bool {
    for &x in a {
        present[x] = true;
    }
    let hit = b.iter().any(|&y| present[y]);
    for &x in a {
        present[x] = false;
    }
    hit
}

/// Adjacency lists of the facet graph.
fn facet_graph(
    facets: &[Element],
    facet_rank: usize,
    sub_count: usize,
) -> Result<Vec<Vec<usize>>> {
    for (element, subs) in facets.iter().enumerate() {
        if let Some(&sub) = subs.iter().find(|&&s| s >= sub_count) {
            return Err(PolyError::DanglingSubelement {
                rank: facet_rank,
                element,
                sub,
                len: sub_count,
            });
        }
    }
    let mut present = vec![false; sub_count];
    let mut adj = vec![Vec::new(); facets.len()];
    for i in 0..facets.len() {
        for j in i + 1..facets.len() {
            if intersects(&facets[i], &facets[j], &mut present) {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
    }
    Ok(adj)
}

/// Splits `facets` (rank `facet_rank`, index sets into a rank of `sub_count`
/// elements) into connected components. Each component lists its facet
/// indices ascending; components are ordered by their smallest facet.
pub fn facet_components(
    facets: &[Element],
    facet_rank: usize,
    sub_count: usize,
) -> Result<ElementList> {
    let adj = facet_graph(facets, facet_rank, sub_count)?;
    let mut visited = vec![false; facets.len()];
    let mut comps = ElementList::new();
    let mut stack = Vec::new();
    for root in 0..facets.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(root);
        let mut comp = Vec::new();
        while let Some(node) = stack.pop() {
            comp.push(node);
            for &next in &adj[node] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        comp.sort_unstable();
        comps.push(comp);
    }
    tracing::trace!(facets = facets.len(), components = comps.len(), "facet components");
    Ok(comps)
}
