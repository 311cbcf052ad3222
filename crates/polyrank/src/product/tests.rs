use super::*;
use crate::builders::{antiprism, cross, hypercube, polygon, simplex};
use crate::cfg::ProductCfg;
use crate::construction::Construction;
use crate::error::PolyError;
use crate::model::Polytope;
use crate::point::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `Σ (-1)^k f_k` over the proper ranks; `1 - (-1)^d` for convex polytopes.
fn euler(p: &Polytope) -> isize {
    (0..p.rank())
        .map(|k| {
            let f = p.el_count(k) as isize;
            if k % 2 == 0 {
                f
            } else {
                -f
            }
        })
        .sum()
}

fn convex_euler(rank: isize) -> isize {
    if rank % 2 == 0 {
        0
    } else {
        2
    }
}

fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len() && a.iter().all(|v| b.iter().any(|w| v.approx_eq(w)))
}

#[test]
fn prism_of_dyads_is_the_square() {
    let sq = prism(Polytope::dyad(), Polytope::dyad()).unwrap();
    sq.validate().unwrap();
    let cube = hypercube(2).unwrap();
    assert_eq!(sq.el_counts(), cube.el_counts());
    assert!(same_vertex_set(sq.vertices(), cube.vertices()));
    // p outer, q inner.
    assert!(sq.vertices()[1].approx_eq(&Point::new(vec![-0.5, 0.5])));
    assert_eq!(sq.face_vertex_cycle(0).unwrap().len(), 4);
    assert_eq!(
        *sq.construction(),
        Construction::Prism(vec![Construction::Dyad, Construction::Dyad])
    );
}

#[test]
fn tegum_of_dyads_is_the_square_orthoplex() {
    let t = tegum(Polytope::dyad(), Polytope::dyad()).unwrap();
    t.validate().unwrap();
    assert_eq!(t.el_counts(), cross(2).unwrap().el_counts());
    assert_eq!(t.el_counts(), vec![4, 4, 1]);
    assert_eq!(t.face_vertex_cycle(0).unwrap().len(), 4);
    // Q's vertices first, padded on the left.
    assert!(t.vertices()[0].approx_eq(&Point::new(vec![0.0, -0.5])));
    assert!(t.vertices()[2].approx_eq(&Point::new(vec![-0.5, 0.0])));
}

#[test]
fn pyramid_of_dyads_is_a_tetrahedron() {
    let cfg = ProductCfg {
        pyramid_height: std::f64::consts::FRAC_1_SQRT_2,
    };
    let t = pyramid_with(Polytope::dyad(), Polytope::dyad(), cfg).unwrap();
    t.validate().unwrap();
    assert_eq!(t.el_counts(), simplex(3).unwrap().el_counts());
    assert_eq!(t.dim(), 3);
    for e in t.elements(1).unwrap() {
        let d = t.vertices()[e[0]].distance(&t.vertices()[e[1]]);
        assert!((d - 1.0).abs() < 1e-9, "edge length {d}");
    }
}

#[test]
fn pyramid_of_points_places_q_above() {
    let d = pyramid(Polytope::point(), Polytope::point()).unwrap();
    assert_eq!(d.el_counts(), vec![2, 1]);
    assert!(d.vertices()[0].approx_eq(&Point::new(vec![0.5])));
    assert!(d.vertices()[1].approx_eq(&Point::new(vec![-0.5])));
}

#[test]
fn identity_laws() {
    let x = || antiprism(5, 2).unwrap();

    let p = prism(Polytope::point(), x()).unwrap();
    assert_eq!(p.el_counts(), x().el_counts());
    assert_eq!(*p.construction(), *x().construction());
    assert_eq!(prism(x(), Polytope::nullitope()).unwrap().rank(), -1);

    let t = tegum(Polytope::nullitope(), x()).unwrap();
    assert_eq!(t.el_counts(), x().el_counts());
    let t = tegum(x(), Polytope::point_at(Point::new(vec![0.0, 0.0]))).unwrap();
    assert_eq!(t.el_counts(), x().el_counts());
    assert_eq!(t.dim(), 5);
    t.validate().unwrap();

    let y = pyramid(x(), Polytope::nullitope()).unwrap();
    assert_eq!(y.el_counts(), x().el_counts());
    let y = pyramid(Polytope::nullitope(), x()).unwrap();
    assert_eq!(y.el_counts(), x().el_counts());
    assert_eq!(*y.construction(), *x().construction());
}

#[test]
fn point_prism_prepends_its_coordinates() {
    let p = prism(Polytope::point_at(Point::new(vec![3.0])), Polytope::dyad()).unwrap();
    assert_eq!(p.dim(), 2);
    assert!(p.vertices()[0].approx_eq(&Point::new(vec![3.0, -0.5])));
}

#[test]
fn pyramid_with_point_matches_extrusion() {
    for base in [polygon(5, 2).unwrap(), hypercube(3).unwrap(), cross(3).unwrap()] {
        let mut ext = base.clone();
        ext.extrude_apex(1.0);
        let pyr = pyramid(base, Polytope::point()).unwrap();
        pyr.validate().unwrap();
        assert_eq!(pyr.el_counts(), ext.el_counts());
    }
}

#[test]
fn products_of_convex_operands_satisfy_euler() {
    let ops = || [hypercube(2).unwrap(), simplex(2).unwrap(), polygon(7, 1).unwrap(), cross(3).unwrap()];
    for a in ops() {
        for b in ops() {
            for r in [
                prism(a.clone(), b.clone()).unwrap(),
                tegum(a.clone(), b.clone()).unwrap(),
                pyramid(a.clone(), b.clone()).unwrap(),
            ] {
                r.validate().unwrap();
                assert_eq!(euler(&r), convex_euler(r.rank()), "{}", r.construction());
            }
        }
    }
}

#[test]
fn compound_operands_multiply_components() {
    let hexagram = || polygon(6, 2).unwrap();
    let p = prism(hexagram(), Polytope::dyad()).unwrap();
    assert_eq!(p.components().len(), 2);
    p.validate().unwrap();

    let t = tegum(hexagram(), hexagram()).unwrap();
    assert_eq!(t.components().len(), 4);
    t.validate().unwrap();

    let y = pyramid(hexagram(), Polytope::dyad()).unwrap();
    assert_eq!(y.components().len(), 2);
    y.validate().unwrap();
}

#[test]
fn malformed_operand_is_rejected() {
    let bad = Polytope {
        rank: 2,
        dim: 2,
        vertices: vec![
            Point::new(vec![0.0, 0.0]),
            Point::new(vec![1.0, 0.0]),
            Point::new(vec![0.0, 1.0]),
        ],
        ranks: vec![vec![vec![0, 1], vec![1, 2], vec![2, 9]], vec![vec![0, 1, 2]]],
        construction: Construction::Named("bad".into()),
    };
    for result in [
        prism(bad.clone(), Polytope::dyad()),
        tegum(Polytope::dyad(), bad.clone()),
        pyramid(bad.clone(), Polytope::point()),
        prism_all(vec![Polytope::dyad(), bad]),
    ] {
        assert!(matches!(
            result,
            Err(PolyError::DanglingSubelement {
                rank: 1,
                element: 2,
                sub: 9,
                len: 3
            })
        ));
    }
}

#[test]
fn n_ary_products_flatten_and_reduce() {
    let dyads = || vec![Polytope::dyad(), Polytope::dyad(), Polytope::dyad()];
    let cube = prism_all(dyads()).unwrap();
    assert_eq!(cube.el_counts(), vec![8, 12, 6, 1]);
    assert_eq!(
        *cube.construction(),
        Construction::Prism(vec![Construction::Dyad; 3])
    );

    let oct = tegum_all(dyads()).unwrap();
    assert_eq!(oct.el_counts(), vec![6, 12, 8, 1]);
    oct.validate().unwrap();

    let tet = pyramid_all(vec![Polytope::point(); 4], ProductCfg::default()).unwrap();
    assert_eq!(tet.el_counts(), vec![4, 6, 4, 1]);

    assert_eq!(prism_all(vec![]).unwrap().rank(), 0);
    assert_eq!(tegum_all(vec![]).unwrap().rank(), -1);
}

#[test]
fn products_ignore_operand_labelling() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = antiprism(4, 1).unwrap();
    let b = polygon(5, 2).unwrap();
    let plain = prism(a.clone(), b.clone()).unwrap();
    let shuffled = prism(a.shuffled(&mut rng), b.shuffled(&mut rng)).unwrap();
    shuffled.validate().unwrap();
    assert_eq!(plain.el_counts(), shuffled.el_counts());
}
