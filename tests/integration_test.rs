use approx;
use nalgebra::Point3;

use rysq_shell::auxiliary::geometry::Centre;
use rysq_shell::basis::ao::{Primitive, Shell};
use rysq_shell::integrals::centres::Centres;
use rysq_shell::integrals::primitives::{bra_ket_primitive, primitive_pairs};
use rysq_shell::integrals::quartet::ShellQuartet;
use rysq_shell::integrals::shell_tuple::ShellTuple;

/// Hydrogen 1s, STO-3G.
fn h_sto3g_1s() -> Shell {
    Shell::new(
        0,
        &[
            Primitive::new(3.4252509140, 0.1543289673),
            Primitive::new(0.6239137298, 0.5353281423),
            Primitive::new(0.1688554040, 0.4446345422),
        ],
    )
    .unwrap()
}

#[test]
fn test_h2_ssss_preparation() {
    let h = h_sto3g_1s();
    let r0 = Point3::new(0.0, 0.0, 0.0);
    let r1 = Point3::new(0.0, 0.0, 1.4);
    let bra = ShellTuple::pair(h.clone(), h.clone());
    let ket = ShellTuple::pair(h.clone(), h);

    let quartet = ShellQuartet::from_points(&bra, &ket, &[&r0, &r1, &r0, &r1]).unwrap();
    assert_eq!(quartet.nbf(), 1);
    assert_eq!(quartet.nprims(), 81);

    let bra_pairs = quartet.bra_pairs();
    assert_eq!(bra_pairs.len(), 9);
    for pair in &bra_pairs {
        // Every combined centre lies on the bond between the two nuclei.
        assert_eq!(pair.ra.x, 0.0);
        assert_eq!(pair.ra.y, 0.0);
        assert!(pair.ra.z > 0.0 && pair.ra.z < 1.4);
    }

    // The diagonal pair of the tightest primitive sits exactly half-way.
    approx::assert_relative_eq!(bra_pairs[0].ra.z, 0.7);
    approx::assert_relative_eq!(bra_pairs[0].a, 2.0 * 3.4252509140);

    let prims = quartet.primitives();
    assert_eq!(prims.len(), 81);
    assert!(prims.iter().all(|bk| bk.c.is_finite() && bk.c > 0.0));
}

#[test]
fn test_one_centre_preparation() {
    let p = Shell::new(1, &[Primitive::new(0.8, 1.0), Primitive::new(0.2, 0.5)]).unwrap();
    let s = Shell::single(0, 1.0, 1.0).unwrap();
    let rp = Point3::new(0.5, 0.5, 0.5);
    let rs = Point3::new(-0.5, 0.0, 0.0);

    let bra = ShellTuple::single(p);
    let ket = ShellTuple::single(s);
    let centres = Centres::bra1_ket1(&rp, &rs);
    let quartet = ShellQuartet::new(&bra, &ket, centres).unwrap();
    assert_eq!(quartet.nbf(), 3);
    assert_eq!(quartet.l(), 1);

    let bra_pairs = primitive_pairs(&bra, centres.ri(), centres.rj());
    assert_eq!(bra_pairs.len(), 2);
    assert_eq!(bra_pairs[0].e, 1.0);
    assert_eq!(bra_pairs[1].e, 0.5);
    assert!(bra_pairs.iter().all(|pair| pair.ra == rp));

    let ket_pairs = primitive_pairs(&ket, Centre::Real(&rs), centres.rl());
    assert_eq!(ket_pairs[0].ra, rs);

    let bk = bra_ket_primitive(&bra_pairs[1], &ket_pairs[0]);
    approx::assert_relative_eq!(bk.c, 0.5 / (0.2 * 1.0 * 1.2f64.sqrt()));
}
