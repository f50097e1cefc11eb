use approx::{assert_abs_diff_eq, assert_relative_eq};
use projectile_motion::{Projectile, ProjectileError};

fn reference() -> Projectile {
    Projectile::new(50.0, 45.0)
}

#[test]
fn position_at_launch_and_two_seconds() {
    let p = reference();
    assert_eq!(p.position(0.0), (0.0, 0.0));

    let (x, y) = p.position(2.0);
    assert_relative_eq!(x, 70.71, max_relative = 0.1);
    assert_relative_eq!(y, 51.11, max_relative = 0.1);
}

#[test]
fn velocity_at_launch_and_two_seconds() {
    let p = reference();
    let (vx, vy) = p.velocity(0.0);
    assert_relative_eq!(vx, 35.36, max_relative = 0.1);
    assert_relative_eq!(vy, 35.36, max_relative = 0.1);

    let (vx, vy) = p.velocity(2.0);
    assert_relative_eq!(vx, 35.36, max_relative = 0.1);
    assert_relative_eq!(vy, 15.36, max_relative = 0.1);
}

#[test]
fn derived_scalars() {
    let p = reference();
    assert_relative_eq!(p.horizontal_range(), 255.1, max_relative = 0.1);
    assert_relative_eq!(p.time_of_flight(), 7.21, max_relative = 0.1);
    assert_relative_eq!(p.maximum_height(), 63.77, max_relative = 0.1);
}

#[test]
fn outputs_are_rounded_to_hundredths() {
    let p = reference();
    assert_eq!(p.horizontal_range(), 255.1);
    assert_eq!(p.time_of_flight(), 7.22);
    assert_eq!(p.maximum_height(), 63.78);
    assert_eq!(p.velocity(2.0), (35.36, 15.76));
}

#[test]
fn maximum_height_squares_speed() {
    let slow = Projectile::new(10.0, 90.0).maximum_height();
    let fast = Projectile::new(20.0, 90.0).maximum_height();
    assert_abs_diff_eq!(fast, 4.0 * slow, epsilon = 0.02);
}

#[test]
fn time_instant_check_at_and_around_bounds() {
    let p = reference();
    let tof = p.time_of_flight();

    assert!(p.check_valid_time_instant(0.0).is_ok());
    assert!(p.check_valid_time_instant(3.0).is_ok());
    assert!(p.check_valid_time_instant(tof).is_ok());

    assert!(p.check_valid_time_instant(-0.01).is_err());
    assert!(p.check_valid_time_instant(-1.0).is_err());
    assert!(p.check_valid_time_instant(tof + 0.01).is_err());
    assert!(p.check_valid_time_instant(8.0).is_err());
}

#[test]
fn time_instant_error_names_interval() {
    let err = reference()
        .check_valid_time_instant(8.0)
        .expect_err("instant is past landing");
    assert!(matches!(err, ProjectileError::InvalidTimeInstant { .. }));
    assert_eq!(err.to_string(), "Time must be within [0, 7.22] seconds.");
}

#[test]
fn complementary_angles_share_range() {
    for angle in [10.0, 15.0, 30.0, 37.5, 44.0] {
        let low = Projectile::new(50.0, angle).horizontal_range();
        let high = Projectile::new(50.0, 90.0 - angle).horizontal_range();
        assert_abs_diff_eq!(low, high, epsilon = 0.011);
    }
}

#[test]
fn queries_are_idempotent() {
    let p = Projectile::new(42.0, 63.0).with_gravity(3.71);
    assert_eq!(p.position(1.7), p.position(1.7));
    assert_eq!(p.velocity(1.7), p.velocity(1.7));
    assert_eq!(p.horizontal_range(), p.horizontal_range());
    assert_eq!(p.time_of_flight(), p.time_of_flight());
    assert_eq!(p.maximum_height(), p.maximum_height());
    assert_eq!(p.check_valid_time_instant(1.7), p.check_valid_time_instant(1.7));
    assert_eq!(p.sample(0.1), p.sample(0.1));
}

#[test]
fn vertical_velocity_changes_sign_at_apex() {
    let p = reference();
    let apex = p.time_to_apex();
    assert_abs_diff_eq!(apex, p.time_of_flight() / 2.0, epsilon = 0.01);

    for t in [0.0, 1.0, 2.5, apex - 0.1] {
        assert!(p.velocity(t).1 > 0.0, "vy should be positive at t={t}");
    }
    for t in [apex + 0.1, 5.0, p.time_of_flight()] {
        assert!(p.velocity(t).1 < 0.0, "vy should be negative at t={t}");
    }
    assert_abs_diff_eq!(p.velocity(apex).1, 0.0, epsilon = 0.05);
}

#[test]
fn flat_launch_never_leaves_the_ground() {
    let p = Projectile::new(30.0, 0.0);
    assert_eq!(p.maximum_height(), 0.0);
    assert_eq!(p.time_of_flight(), 0.0);
    assert_eq!(p.horizontal_range(), 0.0);

    assert!(p.check_valid_time_instant(0.0).is_ok());
    assert_eq!(p.position(0.0).1, 0.0);
    for sample in p.sample(0.01).expect("sampling should succeed") {
        assert_eq!(sample.position.1, 0.0);
    }
}

#[test]
fn vertical_launch_has_no_range() {
    let p = Projectile::new(30.0, 90.0);
    assert_eq!(p.horizontal_range(), 0.0);
    assert!(p.maximum_height() > 0.0);
}

#[test]
fn samples_match_point_queries() {
    let p = reference();
    for sample in p.sample(0.25).expect("sampling should succeed") {
        assert_eq!(sample.position, p.position(sample.time_s));
        assert_eq!(sample.velocity, p.velocity(sample.time_s));
        assert!(p.check_valid_time_instant(sample.time_s).is_ok());
    }
}
