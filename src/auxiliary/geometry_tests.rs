use approx;
use nalgebra::Point3;

use crate::auxiliary::geometry::{centre_of_charge, squared_distance, Centre, Exponent, Zero};

#[test]
fn test_geometry_exponent_arithmetic() {
    let a = Exponent::Finite(0.5);
    let z = Exponent::Zero(Zero);
    assert_eq!(a + z, Exponent::Finite(0.5));
    assert_eq!(z + a, Exponent::Finite(0.5));
    assert_eq!(z + z, Exponent::Zero(Zero));
    assert_eq!((a + Exponent::Finite(1.5)).value(), 2.0);
    assert_eq!(z.value(), 0.0);
    assert!(z.is_zero());
    assert!(!a.is_zero());
    assert_eq!(Exponent::from(Zero), z);
    assert_eq!(z.to_string(), "0");
}

#[test]
fn test_geometry_squared_distance() {
    let ri = Point3::new(1.0, 2.0, 3.0);
    let rj = Point3::new(1.0, 0.0, 0.0);
    approx::assert_relative_eq!(squared_distance(Centre::Real(&ri), Centre::Real(&rj)), 13.0);
    approx::assert_relative_eq!(squared_distance(Centre::Real(&ri), Centre::Real(&ri)), 0.0);

    // A coordinate-free centre coincides with its partner.
    assert_eq!(squared_distance(Centre::Real(&ri), Centre::Zero(Zero)), 0.0);
    assert_eq!(squared_distance(Centre::Zero(Zero), Centre::Real(&rj)), 0.0);
}

#[test]
fn test_geometry_centre_of_charge() {
    let ri = Point3::new(0.0, 0.0, 0.0);
    let rj = Point3::new(3.0, 0.0, 6.0);
    approx::assert_relative_eq!(
        centre_of_charge(
            Exponent::Finite(2.0),
            Centre::Real(&ri),
            Exponent::Finite(1.0),
            Centre::Real(&rj)
        ),
        Point3::new(1.0, 0.0, 2.0)
    );

    // Zero weights contribute nothing, exactly.
    let rk = Point3::new(0.1, 0.2, 0.3);
    assert_eq!(
        centre_of_charge(
            Exponent::Finite(0.7),
            Centre::Real(&rk),
            Exponent::Zero(Zero),
            Centre::Real(&rj)
        ),
        rk
    );
    assert_eq!(
        centre_of_charge(
            Exponent::Finite(0.7),
            Centre::Real(&rk),
            Exponent::Zero(Zero),
            Centre::Zero(Zero)
        ),
        rk
    );
    assert_eq!(
        centre_of_charge(
            Exponent::Zero(Zero),
            Centre::Zero(Zero),
            Exponent::Finite(1.3),
            Centre::Real(&rk)
        ),
        rk
    );
}

#[test]
fn test_geometry_centre_accessors() {
    let r = Point3::new(1.0, -1.0, 0.5);
    let real = Centre::from(&r);
    let zero = Centre::from(Zero);
    assert!(!real.is_zero());
    assert!(zero.is_zero());
    assert_eq!(real.real(), Some(&r));
    assert_eq!(zero.real(), None);
    assert_eq!(real.to_point(), r);
    assert_eq!(zero.to_point(), Point3::origin());
}
