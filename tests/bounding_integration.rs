use approx::assert_abs_diff_eq;
use geopoint_rs::{AngleFormat, ArgumentViolation, DistanceUnit, GeoPoint};
use std::f64::consts::PI;

use test_utils::shared::*;

#[test]
fn test_bounding_coordinates_without_radius() {
    let (southwest, northeast) = aiken()
        .bounding_coordinates(5.0, None, DistanceUnit::Kilometers)
        .unwrap();

    assert_point_close(&southwest, 33.456833990283265, -82.01902458488057, 1e-9);
    assert_point_close(&northeast, 33.54676600971674, -81.91117541511944, 1e-9);
}

#[test]
fn test_bounding_coordinates_with_radius() {
    let (southwest, northeast) = aiken()
        .bounding_coordinates(5.0, Some(6370.0), DistanceUnit::Kilometers)
        .unwrap();

    assert_point_close(&southwest, 33.456826860664776, -82.01903313493325, 1e-9);
    assert_point_close(&northeast, 33.54677313933523, -81.91116686506675, 1e-9);
}

#[test]
fn test_bounding_coordinates_km_shorthand() {
    let point = aiken();
    assert_eq!(
        point.bounding_coordinates_km(5.0).unwrap(),
        point
            .bounding_coordinates(5.0, None, DistanceUnit::Kilometers)
            .unwrap()
    );
}

#[test]
fn test_invalid_radius_falls_back_to_earth_radius() {
    let point = aiken();
    let expected = point
        .bounding_coordinates(5.0, None, DistanceUnit::Miles)
        .unwrap();

    for radius in [Some(-1.0), Some(f64::NAN)] {
        let actual = point
            .bounding_coordinates(5.0, radius, DistanceUnit::Miles)
            .unwrap();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_miles_box_matches_equivalent_kilometer_box() {
    let point = aiken();
    let (sw_mi, ne_mi) = point
        .bounding_coordinates(5.0, None, DistanceUnit::Miles)
        .unwrap();
    let km = 5.0 / 3958.762079 * 6371.01;
    let (sw_km, ne_km) = point
        .bounding_coordinates(km, None, DistanceUnit::Kilometers)
        .unwrap();

    assert_point_close(&sw_mi, sw_km.latitude_degrees(), sw_km.longitude_degrees(), 1e-9);
    assert_point_close(&ne_mi, ne_km.latitude_degrees(), ne_km.longitude_degrees(), 1e-9);
}

#[test]
fn test_non_numeric_distance_is_rejected() {
    let err = aiken()
        .bounding_coordinates(f64::NAN, None, DistanceUnit::Kilometers)
        .unwrap_err();
    assert_eq!(err.violation(), Some(ArgumentViolation::DistanceNotNumeric));
}

#[test]
fn test_corners_default_to_degree_output() {
    let (southwest, northeast) = aiken().bounding_coordinates_km(5.0).unwrap();
    assert_eq!(southwest.output_format(), AngleFormat::Degrees);
    assert_eq!(northeast.output_format(), AngleFormat::Degrees);
}

#[test]
fn test_corners_contain_the_search_circle() {
    let center = aiken();
    let (southwest, northeast) = center.bounding_coordinates_km(25.0).unwrap();

    assert!(southwest.latitude_degrees() < center.latitude_degrees());
    assert!(northeast.latitude_degrees() > center.latitude_degrees());
    assert!(southwest.longitude_degrees() < center.longitude_degrees());
    assert!(northeast.longitude_degrees() > center.longitude_degrees());

    // Due north and due south edges lie exactly the search distance away.
    let north = GeoPoint::new(
        northeast.latitude_degrees(),
        center.longitude_degrees(),
        AngleFormat::Degrees,
    )
    .unwrap();
    assert_abs_diff_eq!(center.distance_to(&north, DistanceUnit::Kilometers), 25.0, epsilon = 1e-6);
}

#[test]
fn test_pole_crossing_box_spans_all_longitudes() {
    let near_pole = GeoPoint::new(89.9, 10.0, AngleFormat::Degrees).unwrap();
    let (southwest, northeast) = near_pole.bounding_coordinates_km(50.0).unwrap();

    assert_eq!(northeast.latitude_radians(), PI / 2.0);
    assert_abs_diff_eq!(southwest.latitude_degrees(), 89.45033990283268, epsilon = 1e-9);
    assert_eq!(southwest.longitude_radians(), -PI);
    assert_eq!(northeast.longitude_radians(), PI);
}

#[test]
fn test_south_pole_crossing_box_is_clamped() {
    let near_pole = GeoPoint::new(-89.9, -45.0, AngleFormat::Degrees).unwrap();
    let (southwest, northeast) = near_pole.bounding_coordinates_km(50.0).unwrap();

    assert_eq!(southwest.latitude_radians(), -PI / 2.0);
    assert!(northeast.latitude_radians() < PI / 2.0);
    assert_eq!(southwest.longitude_radians(), -PI);
    assert_eq!(northeast.longitude_radians(), PI);
}

#[test]
fn test_box_wraps_across_the_antimeridian() {
    let point = GeoPoint::new(10.0, 179.9, AngleFormat::Degrees).unwrap();
    let (southwest, northeast) = point.bounding_coordinates_km(50.0).unwrap();

    assert_abs_diff_eq!(southwest.longitude_degrees(), 179.44340302530162, epsilon = 1e-9);
    assert_abs_diff_eq!(northeast.longitude_degrees(), -179.6434030253015, epsilon = 1e-9);
    assert!(northeast.longitude_radians() >= -PI && northeast.longitude_radians() <= PI);
}

#[test]
fn test_box_wraps_across_the_antimeridian_westward() {
    let point = GeoPoint::new(10.0, -179.9, AngleFormat::Degrees).unwrap();
    let (southwest, northeast) = point.bounding_coordinates_km(50.0).unwrap();

    assert_abs_diff_eq!(southwest.longitude_degrees(), 179.6434030253015, epsilon = 1e-9);
    assert_abs_diff_eq!(northeast.longitude_degrees(), -179.44340302530162, epsilon = 1e-9);
    assert!(southwest.longitude_radians() >= -PI && southwest.longitude_radians() <= PI);
}

#[test]
fn test_negative_distance_swaps_corners() {
    let (first, second) = aiken().bounding_coordinates_km(-5.0).unwrap();

    assert_point_close(&first, 33.54676600971674, -81.91117541511944, 1e-9);
    assert_point_close(&second, 33.456833990283265, -82.01902458488057, 1e-9);
}

#[test]
fn test_negative_infinite_distance_fails_corner_validation() {
    let err = aiken()
        .bounding_coordinates_km(f64::NEG_INFINITY)
        .unwrap_err();
    assert_eq!(err.violation(), Some(ArgumentViolation::LongitudeNotNumeric));

    // Positive infinity reaches both poles and spans the whole globe.
    let (southwest, northeast) = aiken().bounding_coordinates_km(f64::INFINITY).unwrap();
    assert_eq!(southwest.latitude_radians(), -PI / 2.0);
    assert_eq!(northeast.latitude_radians(), PI / 2.0);
}
