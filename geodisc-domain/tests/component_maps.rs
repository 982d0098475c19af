//! Behavior of the three component maps and the branch-cut square root.

use geodisc_domain::{
    BoundaryMapFamily, Image, InvariantViolationError, MapError, Roots, branch_sqrt, sign,
};
use geodisc_types::{BranchSign, Point, Provenance};
use num_complex::Complex64;
use pretty_assertions::assert_eq;

const REL_TOL: f64 = 1e-9;

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs()) || (a - b).abs() <= 1e-12
}

fn assert_close(actual: Complex64, expected: Complex64) {
    assert!(
        is_close(actual.re, expected.re) && is_close(actual.im, expected.im),
        "{actual} != {expected}"
    );
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn generic(re: f64, im: f64) -> Point {
    Point::new(c(re, im), Provenance::default())
}

fn family(re: f64, im: f64) -> BoundaryMapFamily {
    BoundaryMapFamily::new(c(re, im)).expect("valid base point")
}

#[test]
fn f1_branch_sign_positive() {
    let f = family(1.0, 1.0);
    let result = f.f1(&Point::inferred(c(0.1, 0.1)));
    assert_eq!(result.branch_sign(), BranchSign::Positive);
}

#[test]
fn f1_branch_sign_negative() {
    let f = family(1.0, 1.0);
    let result = f.f1(&Point::inferred(c(-0.1, 0.1)));
    assert_eq!(result.branch_sign(), BranchSign::Negative);
}

#[test]
fn f1_matches_closed_form() {
    let f = family(3.0, 4.0);
    let b = 25.0 / 3.0;
    for z in [c(0.5, 0.5), c(-0.5, -0.5), c(0.0, 3.0), c(3.0, 0.0)] {
        let expected = z / (1.0 - z / b);
        assert_close(f.f1(&generic(z.re, z.im)).z(), expected);
    }
}

#[test]
fn f1_preserves_provenance_and_name() {
    let f = family(3.0, 4.0);
    let p = Point::new(c(2.0, 0.0), Provenance::of_input(c(2.0, 0.0))).named("x");
    let out = f.f1(&p);
    assert_eq!(out.provenance(), p.provenance());
    assert_eq!(out.name(), "x");
}

#[test]
fn f1_special_points() {
    let f = family(3.0, 4.0);

    // a -> ic
    let image_of_a = f.f1(&Point::inferred(c(3.0, 4.0)).named("a"));
    assert!(image_of_a.z().re.abs() < 1e-12);
    assert!(is_close(image_of_a.z().im, 25.0 / 4.0));

    // 0 -> 0
    let origin = Point::inferred(c(0.0, 0.0)).named("o");
    let image_of_origin = f.f1(&origin);
    assert_eq!(image_of_origin.z(), c(0.0, 0.0));
    assert!(image_of_origin.is_origin());

    // b -> infinity
    let pole = Point::inferred(c(25.0 / 3.0, 0.0)).named("b");
    let image_of_pole = f.f1(&pole);
    assert!(image_of_pole.is_infinite());
    assert_eq!(image_of_pole.z().norm(), f64::INFINITY);
}

#[test]
fn f1_imaginary_axis_output_counts_as_positive() {
    let f = family(3.0, 4.0);
    let out = f.f1(&generic(3.0, 4.0));
    assert!(out.z().re.abs() < 1e-12);
    assert_eq!(out.branch_sign(), sign(out.z()));
}

#[test]
fn f2_matches_closed_form() {
    let f = family(3.0, 4.0);
    let cc = 25.0 / 4.0;
    for z in [c(0.0, 0.0), c(1.0, 2.0), c(-3.5, 0.25), c(0.0, -1.0)] {
        let out = f.f2(&generic(z.re, z.im));
        assert_close(out.z(), z * z + cc * cc);
    }
}

#[test]
fn f2_keeps_flags_when_a_non_origin_point_lands_on_zero() {
    let f = family(3.0, 4.0);
    // (i c)^2 + c^2 == 0 exactly for c = 6.25.
    let p = Point::new(c(0.0, 6.25), Provenance::default())
        .named("ic")
        .with_branch_sign(BranchSign::Positive);

    let out = f.f2(&p);
    assert_eq!(out.z(), c(0.0, 0.0));
    assert!(!out.is_origin());
    assert!(!out.on_axis());
    assert!(!out.on_arc());
    assert_eq!(out.branch_sign(), BranchSign::Positive);
    assert_eq!(out.name(), "ic");

    // f3 must surface the coincidence rather than pick a branch.
    let err = f.f3(&out).expect_err("zero without origin provenance");
    assert_eq!(
        err,
        InvariantViolationError::ZeroWithoutOrigin {
            name: "ic".to_string()
        }
    );
}

#[test]
fn f2_keeps_every_flag_combination() {
    let f = family(-2.0, 0.5);
    for is_origin in [false, true] {
        for on_axis in [false, true] {
            for on_arc in [false, true] {
                let provenance = Provenance {
                    is_origin,
                    on_axis,
                    on_arc,
                };
                let p = Point::new(c(0.3, -0.7), provenance)
                    .named("p")
                    .with_branch_sign(BranchSign::Negative);
                let out = f.f2(&p);
                assert_eq!(out.provenance(), provenance);
                assert_eq!(out.branch_sign(), BranchSign::Negative);
                assert_eq!(out.name(), "p");
            }
        }
    }
}

#[test]
fn f3_arc_point_returns_both_principal_roots() {
    let f = family(3.0, 4.0);
    let p = Point::new(c(3.0, 4.0), Provenance::on_arc()).named("arc");
    let roots = f.f3(&p).expect("arc point");

    assert_eq!(roots.len(), 2);
    let [plus, minus] = match &roots {
        Roots::Two(pair) => pair,
        Roots::One(_) => panic!("expected two roots"),
    };
    assert_close(plus.z(), c(2.0, 1.0));
    assert_eq!(minus.z(), -plus.z());
    assert_close(plus.z() * plus.z(), c(3.0, 4.0));
    assert_eq!(plus.branch_sign(), BranchSign::Positive);
    assert_eq!(minus.branch_sign(), BranchSign::Negative);
    for r in &roots {
        assert!(!r.is_origin());
        assert!(r.on_arc());
        assert_eq!(r.name(), "arc");
    }
}

#[test]
fn f3_origin_returns_two_zero_roots_without_origin_flag() {
    let f = family(3.0, 4.0);
    let origin = Point::inferred(c(0.0, 0.0)).named("o");
    let roots = f.f3(&origin).expect("origin is allowed at zero");

    assert_eq!(roots.len(), 2);
    let signs: Vec<BranchSign> = roots.iter().map(Point::branch_sign).collect();
    assert_eq!(signs, vec![BranchSign::Positive, BranchSign::Negative]);
    for r in &roots {
        assert_eq!(r.z().norm(), 0.0);
        assert!(!r.is_origin());
    }
}

#[test]
fn f3_axis_point_follows_inherited_sign() {
    let f = family(3.0, 4.0);
    let z = c(9.0, 0.0);
    for s in [BranchSign::Positive, BranchSign::Negative] {
        let p = Point::new(z, Provenance::of_input(z)).with_branch_sign(s);
        let roots = f.f3(&p).expect("axis point");
        assert_eq!(roots.len(), 1);
        let r = roots.first();
        assert_eq!(r.z(), s.apply(branch_sqrt(z)));
        assert_eq!(r.branch_sign(), s);
        assert!(r.on_axis());
        assert!(!r.is_origin());
    }

    // The cut sends the positive real axis to -3, so +1 picks -3 and -1 picks +3.
    let plus = Point::new(z, Provenance::of_input(z)).with_branch_sign(BranchSign::Positive);
    assert_close(f.f3(&plus).expect("axis point").first().z(), c(-3.0, 0.0));
}

#[test]
fn f3_axis_point_without_sign_yields_zero() {
    let f = family(3.0, 4.0);
    let p = Point::new(c(4.0, 0.0), Provenance::of_input(c(4.0, 0.0))).named("unsigned");
    let roots = f.f3(&p).expect("unset sign is accepted");
    assert_eq!(roots.len(), 1);
    let r = roots.first();
    assert_eq!(r.z(), c(0.0, 0.0));
    assert_eq!(r.branch_sign(), BranchSign::Unset);
    assert_eq!(r.name(), "unsigned");
    assert!(r.on_axis());
    assert!(!r.is_origin());
}

#[test]
fn f3_generic_point_signs_from_its_own_root() {
    let f = family(3.0, 4.0);

    // Upper half-plane input: positive real part going in, negative coming out.
    // Signing from the input would claim +1 and disagree with the emitted root.
    let upper = generic(1.0, 1.0).with_branch_sign(BranchSign::Positive);
    let roots = f.f3(&upper).expect("generic point");
    assert_eq!(roots.len(), 1);
    let r = roots.first();
    assert_eq!(r.z(), branch_sqrt(c(1.0, 1.0)));
    assert!(r.z().re < 0.0);
    assert_eq!(sign(upper.z()), BranchSign::Positive);
    assert_eq!(r.branch_sign(), BranchSign::Negative);
    assert!(!r.on_axis());

    // Lower half-plane input: both readings agree.
    let lower = generic(1.0, -1.0);
    let r = f.f3(&lower).expect("generic point").first().clone();
    assert!(r.z().re > 0.0);
    assert_eq!(r.branch_sign(), BranchSign::Positive);
    assert_eq!(sign(lower.z()), r.branch_sign());
}

#[test]
fn f3_zero_without_origin_is_an_invariant_violation() {
    let f = family(1.0, 1.0);
    let p = Point::new(c(0.0, 0.0), Provenance::default()).named("z0");
    let err = f.f3(&p).expect_err("zero without origin");
    assert!(matches!(err, InvariantViolationError::ZeroWithoutOrigin { .. }));
}

#[test]
fn scenario_three_four() {
    let f = family(3.0, 4.0);
    assert_eq!(f.b(), 25.0 / 3.0);
    assert_eq!(f.c(), 25.0 / 4.0);

    let at_a = f.f1(&generic(3.0, 4.0)).z();
    assert!(at_a.re.abs() < 1e-12);
    assert!(is_close(at_a.im, 6.25));

    assert_eq!(f.f1(&Point::inferred(c(0.0, 0.0))).z(), c(0.0, 0.0));
    assert!(f.f1(&generic(25.0 / 3.0, 0.0)).is_infinite());
}

#[test]
fn geodisc_stops_at_pole() {
    let f = family(3.0, 4.0);
    let image = f.geodisc(&generic(25.0 / 3.0, 0.0)).expect("pole is not an error");
    assert!(image.is_at_infinity());
    assert!(image.roots().is_none());
    assert_eq!(image.points().len(), 1);

    let trace = f.trace(&generic(25.0 / 3.0, 0.0)).expect("pole trace");
    assert!(trace.f2.is_none());
}

#[test]
fn geodisc_opens_arc_points_into_two_roots() {
    let f = family(3.0, 4.0);
    // Pull 3i back through f1 to land on the arc from 0 to a.
    let w = c(0.0, 3.0);
    let on_arc = w / (1.0 + w / f.b());
    let p = Point::new(on_arc, Provenance::on_arc()).named("arc-mid");

    let trace = f.trace(&p).expect("arc trace");
    assert_close(trace.f1.z(), w);
    let f2 = trace.f2.as_ref().expect("finite f2");
    assert!(is_close(f2.z().re, 6.25 * 6.25 - 9.0));

    let Image::Finite(roots) = &trace.image else {
        panic!("arc point should stay finite");
    };
    assert!(roots.is_multivalued());
    for r in roots {
        assert_close(r.z() * r.z(), f2.z());
    }
}

#[test]
fn geodisc_generic_point_yields_one_root() {
    let f = family(3.0, 4.0);
    let p = generic(0.5, 0.5);
    let trace = f.trace(&p).expect("generic trace");
    let f2 = trace.f2.clone().expect("finite f2");
    let roots = trace.image.roots().expect("finite image");
    assert_eq!(roots.len(), 1);
    assert_close(roots.first().z() * roots.first().z(), f2.z());
    assert_eq!(roots.first().branch_sign(), sign(roots.first().z()));
}

#[test]
fn geodisc_all_reports_each_point_independently() {
    // For a = 1+i every stage is exact: f1(a) = 2i = ic, so f2(f1(a)) is exactly zero.
    let f = family(1.0, 1.0);
    let points = vec![
        generic(0.5, 0.25),
        generic(1.0, 1.0).named("a"),
        generic(2.0, 0.0),
    ];
    let results = f.geodisc_all(&points);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(MapError::InvariantViolation(
            InvariantViolationError::ZeroWithoutOrigin {
                name: "a".to_string()
            }
        ))
    );
    assert!(matches!(results[2], Ok(Image::AtInfinity(_))));
}
