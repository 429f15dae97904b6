use approx;
use nalgebra::Point3;

use crate::basis::ao::{Primitive, Shell};
use crate::integrals::centres::Centres;
use crate::integrals::primitives::{bra_ket_primitive, primitive_pairs};
use crate::integrals::quartet::ShellQuartet;
use crate::integrals::shell_tuple::ShellTuple;

#[test]
fn test_integrals_quartet_counts() {
    let p = Shell::new(1, &[Primitive::new(0.4, 0.6), Primitive::new(1.1, 0.5)]).unwrap();
    let d = Shell::new(
        2,
        &[
            Primitive::new(0.2, 0.1),
            Primitive::new(0.9, 0.7),
            Primitive::new(3.0, 0.2),
        ],
    )
    .unwrap();
    let bra = ShellTuple::pair(d.clone(), p.clone());
    let ket = ShellTuple::single(p);

    let ri = Point3::new(0.0, 0.0, 0.0);
    let rj = Point3::new(0.0, 0.0, 1.4);
    let rk = Point3::new(1.0, 0.5, 0.0);
    let quartet = ShellQuartet::from_points(&bra, &ket, &[&ri, &rj, &rk]).unwrap();
    assert_eq!(quartet.to_string(), "(21|1)");
    assert_eq!(quartet.l(), 4);
    assert_eq!(quartet.nbf(), 6 * 3 * 3);
    assert_eq!(quartet.nprims(), 6 * 2);
    assert_eq!(quartet.centres(), &Centres::bra2_ket1(&ri, &rj, &rk));

    let bra_pairs = quartet.bra_pairs();
    let ket_pairs = quartet.ket_pairs();
    assert_eq!(bra_pairs.len(), 6);
    assert_eq!(ket_pairs.len(), 2);
    assert_eq!(
        bra_pairs,
        primitive_pairs(&bra, quartet.centres().ri(), quartet.centres().rj())
    );

    let prims = quartet.primitives();
    assert_eq!(prims.len(), quartet.nprims());
    for (k, ket_pair) in ket_pairs.iter().enumerate() {
        for (b, bra_pair) in bra_pairs.iter().enumerate() {
            let expected = bra_ket_primitive(bra_pair, ket_pair);
            let actual = prims[k * bra_pairs.len() + b];
            approx::assert_relative_eq!(actual.c, expected.c);
            assert_eq!(actual.a, expected.a);
            assert_eq!(actual.rb, rk);
        }
    }
}

#[test]
fn test_integrals_quartet_mismatched_centres() {
    let s = Shell::single(0, 1.0, 1.0).unwrap();
    let bra = ShellTuple::pair(s.clone(), s.clone());
    let ket = ShellTuple::single(s);
    let r = Point3::origin();

    assert!(ShellQuartet::new(&bra, &ket, Centres::bra1_ket1(&r, &r)).is_err());
    assert!(ShellQuartet::new(&bra, &ket, Centres::bra2_ket1(&r, &r, &r)).is_ok());

    let err = ShellQuartet::from_points(&ket, &bra, &[&r, &r, &r]).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Unable to select centres for the (0|00) quartet."));
    assert!(format!("{err:#}").contains("not supported"));
}
