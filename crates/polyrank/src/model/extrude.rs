//! In-place extrusion: grow a polytope into the pyramid over itself.

use super::{Element, Polytope};
use crate::construction::Construction;
use crate::point::Point;

impl Polytope {
    /// Turns the polytope into the pyramid over itself.
    ///
    /// Existing vertices gain a trailing zero coordinate and the apex sits at
    /// `height` on that new axis. Every element `e` keeps its index and a new
    /// element `apex ∨ e` is appended one rank higher; the new top rank holds
    /// one pyramid per old component. The nullitope becomes a point.
    pub fn extrude_apex(&mut self, height: f64) {
        let base = std::mem::replace(&mut self.construction, Construction::Nullitope);
        self.construction = Construction::Apex(Box::new(base));
        if self.rank < 0 {
            self.rank = 0;
            self.vertices = vec![Point::origin(self.dim)];
            return;
        }
        let d = self.rank as usize;
        let counts: Vec<usize> = (0..=d).map(|r| self.el_count(r as isize)).collect();
        let apex = counts[0];

        self.vertices = self.vertices.iter().map(|v| v.add_coordinate(0.0)).collect();
        self.vertices.push(Point::origin(self.dim).add_coordinate(height));
        self.dim += 1;

        // Edges from every old vertex to the apex.
        let spokes: Vec<Element> = (0..counts[0]).map(|v| vec![v, apex]).collect();
        if d == 0 {
            self.ranks.push(spokes);
        } else {
            self.ranks[0].extend(spokes);
        }

        // Rank k gains `apex ∨ e` for each old rank k-1 element e, whose facets
        // are e itself and `apex ∨ s` for each facet s of e.
        for k in 2..=d + 1 {
            let offset = counts[k - 1];
            let lifted: Vec<Element> = self.ranks[k - 2][..counts[k - 1]]
                .iter()
                .enumerate()
                .map(|(i, subs)| {
                    let mut out = Vec::with_capacity(subs.len() + 1);
                    out.push(i);
                    out.extend(subs.iter().map(|&s| offset + s));
                    out
                })
                .collect();
            if k == d + 1 {
                self.ranks.push(lifted);
            } else {
                self.ranks[k - 1].extend(lifted);
            }
        }
        self.rank += 1;
        tracing::trace!(rank = self.rank, "extruded apex");
    }
}
