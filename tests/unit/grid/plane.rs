use super::*;

#[test]
fn at_replaces_only_the_offset() {
    let p = Plane::Y.forward().at(6);
    assert_eq!(p.axis(), Axis::Y);
    assert_eq!(p.offset(), 6);
    assert_eq!(p.direction(), Direction::Forward);
}

#[test]
fn reversal_is_idempotent() {
    for d in [Direction::Forward, Direction::Backward] {
        assert_eq!(d.reversed().reversed(), d);
    }
    assert_eq!(Direction::Still.reversed(), Direction::Still);
}

#[test]
fn advanced_follows_the_direction() {
    assert_eq!(Plane::X.forward().at(4).advanced().offset(), 5);
    assert_eq!(Plane::X.backward().at(4).advanced().offset(), 3);
    // A still plane never moves.
    assert_eq!(Plane::Z.at(1).advanced().offset(), 1);
}

#[test]
fn advancing_backward_walks_below_zero() {
    let p = Plane::X.backward().at(0).advanced();
    assert_eq!(p.offset(), -1);
}

#[test]
fn operations_are_value_returning() {
    let p = Plane::Z.at(3);
    let _ = p.forward().advanced().reversed();
    assert_eq!(p, Plane::Z.at(3));
}

#[test]
fn parse_accepts_signed_axis_letters() {
    let p: Plane = "-z".parse().unwrap();
    assert_eq!(p.axis(), Axis::Z);
    assert_eq!(p.direction(), Direction::Backward);
    assert_eq!(p.offset(), 0);

    let p: Plane = "+y".parse().unwrap();
    assert_eq!(p.direction(), Direction::Forward);

    let p: Plane = "x".parse().unwrap();
    assert_eq!(p.direction(), Direction::Still);

    assert!("w".parse::<Plane>().is_err());
    assert!("+-x".parse::<Plane>().is_err());
}

#[test]
fn display_and_parse_roundtrip() {
    for s in ["x", "+y", "-z"] {
        let p: Plane = s.parse().unwrap();
        assert_eq!(p.to_string(), s);
    }
}

#[test]
fn serde_uses_the_string_form() {
    let p: Plane = serde_json::from_str("\"-y\"").unwrap();
    assert_eq!(p.axis(), Axis::Y);
    assert_eq!(p.direction(), Direction::Backward);
    assert_eq!(serde_json::to_string(&p).unwrap(), "\"-y\"");
}
