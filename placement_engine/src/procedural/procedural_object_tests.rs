/// Tests for ProceduralObject

use super::*;
use std::f32::consts::FRAC_PI_2;
use crate::moveable::rotation_about_up;

fn object(name: &str) -> ProceduralObject {
    ProceduralObject::from_index(4, name, Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY)
}

#[test]
fn test_id_is_index_plus_one() {
    let obj = object("Cube");
    assert_eq!(obj.id, 5);
    assert_eq!(obj.index(), 4);
    assert!(!obj.selected);
}

#[test]
fn test_display_name_short() {
    assert_eq!(object("Cube").display_name(), "[PO]Cube");
}

#[test]
fn test_display_name_truncated_to_35_chars() {
    let long = "A".repeat(30) + "BCDEFGHIJK";
    let name = object(&long).display_name();
    assert_eq!(name, format!("[PO]{}BCDEF", "A".repeat(30)));
    assert_eq!(name.chars().count(), 4 + 35);
}

#[test]
fn test_display_name_counts_characters_not_bytes() {
    let long = "é".repeat(40);
    assert_eq!(object(&long).display_name(), format!("[PO]{}", "é".repeat(35)));
}

#[test]
fn test_angle_matches_world_rotation_sense() {
    let mut obj = object("Cube");
    obj.rotation = rotation_about_up(16384);
    assert!((obj.angle() - FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn test_angle_is_normalized() {
    let mut obj = object("Cube");
    obj.rotation = Quat::from_rotation_y(1.0);
    let angle = obj.angle();
    assert!((angle - (TAU - 1.0)).abs() < 1e-5);
}

#[test]
fn test_set_angle_round_trips_and_keeps_tilt() {
    let mut obj = object("Cube");
    obj.rotation = Quat::from_euler(EulerRot::YXZ, 0.3, 0.2, 0.1);

    obj.set_angle(2.0);

    assert!((obj.angle() - 2.0).abs() < 1e-4);
    let (_, pitch, roll) = obj.rotation.to_euler(EulerRot::YXZ);
    assert!((pitch - 0.2).abs() < 1e-4);
    assert!((roll - 0.1).abs() < 1e-4);
}

#[test]
fn test_set_position_y_and_distance() {
    let mut obj = object("Cube");
    obj.set_position_y(10.0);
    assert_eq!(obj.position, Vec3::new(1.0, 10.0, 3.0));
    assert!((obj.distance_to(Vec3::new(4.0, 10.0, 7.0)) - 5.0).abs() < 1e-6);
}
