use super::*;

#[test]
fn in_range_ratings_snap_to_half_stars() {
    assert_eq!(normalize(4.3), 4.5);
    assert_eq!(normalize(4.2), 4.0);
    assert_eq!(normalize(3.75), 4.0);
}

#[test]
fn exact_values_pass_through() {
    assert_eq!(normalize(5.0), 5.0);
    assert_eq!(normalize(2.5), 2.5);
}

#[test]
fn out_of_range_ratings_clamp() {
    assert_eq!(normalize(9.7), 5.0);
    assert_eq!(normalize(-1.0), 0.0);
}

#[test]
fn non_finite_ratings_normalize_to_zero() {
    assert_eq!(normalize(f64::NAN), 0.0);
    assert_eq!(normalize(f64::INFINITY), 0.0);
}

#[test]
fn star_painting_breakdown() {
    assert_eq!(full_stars(4.5), 4);
    assert!(has_half_star(4.5));
    assert_eq!(full_stars(3.0), 3);
    assert!(!has_half_star(3.0));
}
