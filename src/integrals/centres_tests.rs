use nalgebra::Point3;

use crate::auxiliary::geometry::{Centre, Zero};
use crate::basis::ao::Shell;
use crate::integrals::centres::Centres;
use crate::integrals::shell_tuple::{Arity, ShellTuple};

#[test]
fn test_integrals_centres_bra1_ket1() {
    let ri = Point3::new(1.0, 2.0, 3.0);
    let rk = Point3::new(-1.0, 0.0, 0.5);
    let centres = Centres::bra1_ket1(&ri, &rk);
    assert_eq!(centres.arities(), (Arity::One, Arity::One));
    assert_eq!(centres.ri(), Centre::Real(&ri));
    assert_eq!(centres.rj(), Centre::Zero(Zero));
    assert_eq!(centres.rk(), Centre::Real(&rk));
    assert_eq!(centres.rl(), Centre::Zero(Zero));
    assert_eq!(centres.rj().to_point(), Point3::origin());
    assert_eq!(centres.rl().to_point(), Point3::origin());
}

#[test]
fn test_integrals_centres_bra2_ket1() {
    let ri = Point3::new(1.0, 0.0, 0.0);
    let rj = Point3::new(0.0, 1.0, 0.0);
    let rk = Point3::new(0.0, 0.0, 1.0);
    let centres = Centres::bra2_ket1(&ri, &rj, &rk);
    assert_eq!(centres.arities(), (Arity::Two, Arity::One));
    assert_eq!(
        centres.all(),
        [
            Centre::Real(&ri),
            Centre::Real(&rj),
            Centre::Real(&rk),
            Centre::Zero(Zero)
        ]
    );
}

#[test]
fn test_integrals_centres_bra2_ket2() {
    let ri = Point3::new(1.0, 0.0, 0.0);
    let rj = Point3::new(0.0, 1.0, 0.0);
    let rk = Point3::new(0.0, 0.0, 1.0);
    let rl = Point3::new(1.0, 1.0, 1.0);
    let centres = Centres::bra2_ket2(&ri, &rj, &rk, &rl);
    assert_eq!(centres.arities(), (Arity::Two, Arity::Two));
    assert!(centres.all().iter().all(|r| !r.is_zero()));
    assert_eq!(centres.rl().real(), Some(&rl));
    assert_eq!(
        centres.to_string(),
        "Centres (2, 2):\n\
         \x20 ri = (+1.0000000, +0.0000000, +0.0000000)\n\
         \x20 rj = (+0.0000000, +1.0000000, +0.0000000)\n\
         \x20 rk = (+0.0000000, +0.0000000, +1.0000000)\n\
         \x20 rl = (+1.0000000, +1.0000000, +1.0000000)\n"
    );
}

#[test]
fn test_integrals_centres_for_tuples() {
    let s = Shell::single(0, 1.0, 1.0).unwrap();
    let p = Shell::single(1, 0.5, 1.0).unwrap();
    let t1 = ShellTuple::single(p.clone());
    let t2 = ShellTuple::pair(p, s);

    let ra = Point3::new(1.0, 0.0, 0.0);
    let rb = Point3::new(0.0, 1.0, 0.0);
    let rc = Point3::new(0.0, 0.0, 1.0);
    let rd = Point3::new(1.0, 1.0, 1.0);

    assert_eq!(
        Centres::for_tuples(&t2, &t2, &[&ra, &rb, &rc, &rd]).unwrap(),
        Centres::bra2_ket2(&ra, &rb, &rc, &rd)
    );
    assert_eq!(
        Centres::for_tuples(&t2, &t1, &[&ra, &rb, &rc]).unwrap(),
        Centres::bra2_ket1(&ra, &rb, &rc)
    );
    assert_eq!(
        Centres::for_tuples(&t1, &t1, &[&ra, &rc]).unwrap(),
        Centres::bra1_ket1(&ra, &rc)
    );

    // Unsupported combination.
    assert!(Centres::for_tuples(&t1, &t2, &[&ra, &rc, &rd]).is_err());

    // Wrong number of centres.
    let err = Centres::for_tuples(&t2, &t2, &[&ra, &rb, &rc]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: A (2, 2) bra/ket combination requires 4 centres, but 3 were given."
    );
    assert!(Centres::for_tuples(&t1, &t1, &[&ra, &rb, &rc]).is_err());
}
