use super::*;
use crate::cfg::BuildCfg;
use proptest::prelude::*;

fn binom(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Every rank-1 element joins two points at distance `len`.
fn assert_edge_lengths(p: &Polytope, len: f64) {
    let edges = p.elements(1).expect("rank >= 1");
    for (i, e) in edges.iter().enumerate() {
        let d = p.vertices()[e[0]].distance(&p.vertices()[e[1]]);
        assert!((d - len).abs() < 1e-9, "edge {i}: length {d}");
    }
}

/// How often each edge occurs among the faces.
fn edge_face_incidence(p: &Polytope) -> Vec<usize> {
    let mut hits = vec![0; p.el_count(1)];
    for face in p.elements(2).expect("rank >= 2") {
        for &e in face {
            hits[e] += 1;
        }
    }
    hits
}

fn euler(p: &Polytope) -> isize {
    p.el_count(0) as isize - p.el_count(1) as isize + p.el_count(2) as isize
}

#[test]
fn hypercube_counts_match_binomials() {
    for d in 0..=5 {
        let cube = hypercube(d).unwrap();
        let expected: Vec<usize> = (0..=d).map(|k| binom(d, k) << (d - k)).collect();
        assert_eq!(cube.el_counts(), expected, "d = {d}");
        assert_eq!(cube.dim(), d);
    }
    assert_eq!(hypercube(3).unwrap().el_counts(), vec![8, 12, 6, 1]);
}

#[test]
fn small_hypercubes_are_point_dyad_square() {
    let p = hypercube(0).unwrap();
    assert_eq!(p.rank(), 0);
    assert_eq!(p.vertices().len(), 1);
    let s = hypercube(1).unwrap();
    assert_eq!(s.components(), &[vec![0, 1]]);
    let sq = hypercube(2).unwrap();
    assert_eq!(sq.face_vertex_cycle(0).unwrap().len(), 4);
    assert_edge_lengths(&sq, 1.0);
}

#[test]
fn builder_components_match_the_detector() {
    let built = [
        hypercube(2).unwrap(),
        hypercube(4).unwrap(),
        simplex(3).unwrap(),
        cross(3).unwrap(),
        polygon(6, 2).unwrap(),
        antiprism(5, 2).unwrap(),
    ];
    for p in built {
        let mut recomputed = p.clone();
        recomputed.recompute_components().unwrap();
        assert_eq!(recomputed.components(), p.components(), "{}", p.construction());
    }
}

#[test]
fn simplex_counts_and_unit_edges() {
    for d in 0..=6 {
        let s = simplex(d).unwrap();
        let expected: Vec<usize> = (0..=d).map(|k| binom(d + 1, k + 1)).collect();
        assert_eq!(s.el_counts(), expected, "d = {d}");
        if d >= 1 {
            assert_edge_lengths(&s, 1.0);
        }
    }
}

#[test]
fn simplex_is_centred() {
    let s = simplex(4).unwrap();
    for axis in 0..4 {
        let sum: f64 = s.vertices().iter().map(|v| v[axis]).sum();
        assert!(sum.abs() < 1e-9, "axis {axis}: {sum}");
    }
}

#[test]
fn cross_counts_and_unit_edges() {
    assert_eq!(cross(0).unwrap().rank(), 0);
    for d in 1..=5 {
        let c = cross(d).unwrap();
        let mut expected: Vec<usize> = (0..d).map(|k| binom(d, k + 1) << (k + 1)).collect();
        expected.push(1);
        assert_eq!(c.el_counts(), expected, "d = {d}");
        assert_eq!(c.vertices().len(), 2 * d);
        if d >= 2 {
            assert_edge_lengths(&c, 1.0);
        }
    }
    assert_eq!(cross(3).unwrap().el_counts(), vec![6, 12, 8, 1]);
}

#[test]
fn bit_builders_reject_huge_ranks() {
    let big = crate::cfg::MAX_BIT_RANK + 1;
    assert!(matches!(hypercube(big), Err(PolyError::Unsupported(_))));
    assert!(matches!(simplex(big), Err(PolyError::Unsupported(_))));
    assert!(matches!(cross(big), Err(PolyError::Unsupported(_))));
}

#[test]
fn pentagram_is_one_cycle() {
    let p = polygon(5, 2).unwrap();
    assert_eq!(p.el_counts(), vec![5, 5, 1]);
    assert_edge_lengths(&p, 1.0);
    let cycle = p.face_vertex_cycle(0).unwrap();
    assert_eq!(cycle, vec![0, 2, 4, 1, 3]);
}

#[test]
fn hexagram_splits_into_two_triangles() {
    let p = polygon(6, 2).unwrap();
    assert!(p.is_compound());
    assert_eq!(p.components(), &[vec![0, 2, 4], vec![1, 3, 5]]);
}

#[test]
fn polygon_edge_length_is_configurable() {
    let p = polygon_with(7, 3, BuildCfg { edge_len: 2.5 }).unwrap();
    assert_edge_lengths(&p, 2.5);
}

#[test]
fn polygon_rejects_bad_parameters() {
    for (n, d) in [(0, 1), (2, 1), (5, 0), (5, 5), (5, 7), (4, 2)] {
        assert!(
            matches!(polygon(n, d), Err(PolyError::InvalidParameters(_))),
            "{{{n}/{d}}}"
        );
    }
}

#[test]
fn triangular_antiprism_is_the_octahedron() {
    let a = antiprism(3, 1).unwrap();
    assert_eq!(a.el_counts(), vec![6, 12, 8, 1]);
    assert_edge_lengths(&a, 1.0);
    // Every vertex of the octahedron has one antipode at distance sqrt 2.
    for v in a.vertices() {
        let far = a
            .vertices()
            .iter()
            .filter(|w| (v.distance(w) - 2f64.sqrt()).abs() < 1e-9)
            .count();
        assert_eq!(far, 1);
    }
}

#[test]
fn star_family_rejects_non_coprime_pairs() {
    assert!(matches!(antiprism(6, 2), Err(PolyError::Unsupported(_))));
    assert!(matches!(cupola(9, 3), Err(PolyError::Unsupported(_))));
    assert!(matches!(antiprism(0, 1), Err(PolyError::InvalidParameters(_))));
}

#[test]
fn retrograde_antiprism_has_no_real_height() {
    // d/n >= 2/3: the lateral triangles cannot close.
    assert!(matches!(antiprism(3, 2), Err(PolyError::Unsupported(_))));
}

#[test]
fn cupola_and_cuploid_split_on_parity() {
    let c = cupola(3, 1).unwrap();
    assert_eq!(c.el_counts(), vec![9, 15, 8, 1]);
    assert!(matches!(cupola(5, 2), Err(PolyError::Unsupported(_))));
    assert!(matches!(cuploid(5, 1), Err(PolyError::Unsupported(_))));
    let k = cuploid(5, 2).unwrap();
    assert_eq!(k.el_counts(), vec![10, 20, 11, 1]);
    assert_eq!(euler(&k), 1);
}

#[test]
fn cupolaic_blend_counts() {
    let b = cupolaic_blend(5, 3).unwrap();
    assert_eq!(b.el_counts(), vec![20, 40, 22, 1]);
    assert_eq!(euler(&b), 2);
}

#[test]
fn builders_record_their_construction() {
    assert_eq!(
        *antiprism(5, 2).unwrap().construction(),
        Construction::Antiprism { n: 5, d: 2 }
    );
    assert_eq!(*hypercube(3).unwrap().construction(), Construction::Hypercube(3));
    assert_eq!(*cross(0).unwrap().construction(), Construction::Orthoplex(0));
}

/// Coprime `(n, d)` with `n >= 3` and `0 < d < n`.
fn coprime_pair() -> impl Strategy<Value = (usize, usize)> {
    (3usize..14)
        .prop_flat_map(|n| (Just(n), 1..n))
        .prop_filter("coprime", |&(n, d)| gcd(n, d) == 1 && 2 * d != n)
}

/// Checks the polyhedral closure conditions shared by the whole family.
fn check_closed(p: &Polytope, chi: isize) -> Result<(), TestCaseError> {
    prop_assert!(edge_face_incidence(p).iter().all(|&h| h == 2));
    prop_assert_eq!(euler(p), chi);
    prop_assert_eq!(p.components().len(), 1);
    for f in 0..p.el_count(2) {
        prop_assert!(p.face_vertex_cycle(f).is_ok(), "face {} is not a cycle", f);
    }
    assert_edge_lengths(p, 1.0);
    Ok(())
}

proptest! {
    #[test]
    fn antiprisms_are_closed((n, d) in coprime_pair()) {
        match antiprism(n, d) {
            Ok(p) => check_closed(&p, 2)?,
            Err(PolyError::Unsupported(_)) => prop_assume!(false),
            Err(e) => return Err(TestCaseError::fail(e.to_string())),
        }
    }

    #[test]
    fn cupolae_and_blends_are_closed((n, d) in coprime_pair()) {
        let (poly, blend, chi) = if d % 2 == 1 {
            (cupola(n, d), cupolaic_blend(n, d), 2)
        } else {
            (cuploid(n, d), cuploid(n, d), 1)
        };
        for built in [poly, blend] {
            match built {
                Ok(p) => check_closed(&p, chi)?,
                Err(PolyError::Unsupported(_)) => {}
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
    }

    #[test]
    fn polygon_components_partition_edges(n in 3usize..20, d in 1usize..20) {
        prop_assume!(d < n && 2 * d != n);
        let p = polygon(n, d).unwrap();
        prop_assert_eq!(p.components().len(), gcd(n, d));
        let total: usize = p.components().iter().map(Vec::len).sum();
        prop_assert_eq!(total, n);
    }
}
