//! The three steering rules.
//!
//! Every rule scans the whole flock for neighbors strictly inside the
//! perception radius, averages what it accumulated, turns it into a desired
//! velocity of magnitude `max_speed` and returns `desired - velocity` clamped
//! to `max_force`. With no neighbor in range each rule returns zero.
//!
//! A boid is excluded from its own neighborhood by identity, so `others` may
//! (and normally does) contain `boid` itself.

use crate::{Boid, FlockConfig, Vector2D};

fn neighbors<'a, I>(
    boid: &'a Boid,
    others: I,
    radius: f32,
) -> impl Iterator<Item = (&'a Boid, f32)> + 'a
where
    I: Iterator<Item = &'a Boid> + 'a,
{
    others.filter_map(move |other| {
        if core::ptr::eq(boid, other) {
            return None;
        }
        let distance = boid.position.distance(&other.position);
        (distance < radius).then_some((other, distance))
    })
}

/// Reynolds steering: head along `desired` at full speed.
pub fn steer(boid: &Boid, desired: Vector2D, config: &FlockConfig) -> Vector2D {
    let steering = desired.set_magnitude(config.max_speed) - boid.velocity;
    steering.limit(config.max_force)
}

pub fn alignment<'a, I>(boid: &'a Boid, others: I, config: &FlockConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid> + 'a,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, _) in neighbors(boid, others, config.perception_radius) {
        sum += other.velocity;
        count += 1;
    }

    if count > 0 {
        steer(boid, sum / count as f32, config)
    } else {
        Vector2D::zero()
    }
}

pub fn cohesion<'a, I>(boid: &'a Boid, others: I, config: &FlockConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid> + 'a,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, _) in neighbors(boid, others, config.perception_radius) {
        sum += other.position;
        count += 1;
    }

    if count > 0 {
        let centroid = sum / count as f32;
        steer(boid, centroid - boid.position, config)
    } else {
        Vector2D::zero()
    }
}

/// Average repulsion from neighbors, before it is turned into a steering
/// force. Each neighbor pushes along `boid - neighbor` with strength
/// `1 / distance`. `None` when no neighbor counted.
pub fn repulsion<'a, I>(boid: &'a Boid, others: I, config: &FlockConfig) -> Option<Vector2D>
where
    I: Iterator<Item = &'a Boid> + 'a,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, distance) in neighbors(boid, others, config.perception_radius) {
        if distance < config.min_separation_distance {
            continue;
        }
        let away = (boid.position - other.position).normalize();
        sum += away / distance;
        count += 1;
    }

    (count > 0).then(|| sum / count as f32)
}

/// Pushes away from close neighbors. Pushes that cancel out still brake the
/// boid, since the desired velocity is then zero.
pub fn separation<'a, I>(boid: &'a Boid, others: I, config: &FlockConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid> + 'a,
{
    match repulsion(boid, others, config) {
        Some(desired) => steer(boid, desired, config),
        None => Vector2D::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid_at(x: f32, y: f32) -> Boid {
        Boid::new(Vector2D::new(x, y), Vector2D::zero())
    }

    fn approx(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn test_rules_ignore_self_and_far_boids() {
        let config = FlockConfig::default();
        let boids = [
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
            Boid::new(Vector2D::new(150.0, 100.0), Vector2D::new(0.0, 1.0)),
            Boid::new(Vector2D::new(300.0, 300.0), Vector2D::new(-1.0, 0.0)),
        ];
        let me = &boids[0];

        assert_eq!(alignment(me, boids.iter(), &config), Vector2D::zero());
        assert_eq!(cohesion(me, boids.iter(), &config), Vector2D::zero());
        assert_eq!(separation(me, boids.iter(), &config), Vector2D::zero());
    }

    #[test]
    fn test_self_is_excluded_by_identity_not_distance() {
        let config = FlockConfig::default();
        let boids = [
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(0.0, 2.0)),
        ];

        // A coincident twin still counts for alignment.
        let steering = alignment(&boids[0], boids.iter(), &config);
        let expected = (Vector2D::new(0.0, 4.0) - Vector2D::new(1.0, 0.0)).limit(0.2);
        assert!(approx(steering, expected));

        // ...but is skipped by separation instead of dividing by zero.
        assert_eq!(separation(&boids[0], boids.iter(), &config), Vector2D::zero());
    }

    #[test]
    fn test_alignment_steers_towards_average_heading() {
        let config = FlockConfig::default();
        let boids = [
            Boid::new(Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 0.0)),
            Boid::new(Vector2D::new(10.0, 0.0), Vector2D::new(0.0, 3.0)),
            Boid::new(Vector2D::new(0.0, 10.0), Vector2D::new(0.0, 1.0)),
        ];

        let steering = alignment(&boids[0], boids.iter(), &config);
        // Average neighbor velocity (0, 2) rescaled to (0, 4).
        let expected = (Vector2D::new(0.0, 4.0) - Vector2D::new(1.0, 0.0)).limit(0.2);
        assert!(approx(steering, expected));
        assert!(steering.magnitude() <= 0.2 + 1e-6);
    }

    #[test]
    fn test_cohesion_steers_towards_centroid() {
        let config = FlockConfig::default();
        let boids = [boid_at(100.0, 100.0), boid_at(120.0, 100.0), boid_at(100.0, 120.0)];

        let steering = cohesion(&boids[0], boids.iter(), &config);
        let expected = Vector2D::new(1.0, 1.0).normalize() * 0.2;
        assert!(approx(steering, expected));
    }

    #[test]
    fn test_separation_pushes_away() {
        let config = FlockConfig::default();
        let boids = [boid_at(100.0, 100.0), boid_at(110.0, 100.0)];

        let steering = separation(&boids[0], boids.iter(), &config);
        assert!(approx(steering, Vector2D::new(-0.2, 0.0)));

        let steering = separation(&boids[1], boids.iter(), &config);
        assert!(approx(steering, Vector2D::new(0.2, 0.0)));
    }

    #[test]
    fn test_repulsion_grows_as_neighbors_get_closer() {
        let config = FlockConfig::default();
        let near = [boid_at(100.0, 100.0), boid_at(110.0, 100.0)];
        let far = [boid_at(100.0, 100.0), boid_at(140.0, 100.0)];

        let near_push = repulsion(&near[0], near.iter(), &config).unwrap().magnitude();
        let far_push = repulsion(&far[0], far.iter(), &config).unwrap().magnitude();

        assert!((near_push - 0.1).abs() < 1e-6);
        assert!((far_push - 0.025).abs() < 1e-6);
        assert!(near_push > far_push);
    }

    #[test]
    fn test_balanced_neighbors_brake_the_boid() {
        let config = FlockConfig::default();
        let boids = [
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
            boid_at(90.0, 100.0),
            boid_at(110.0, 100.0),
        ];

        assert_eq!(repulsion(&boids[0], boids.iter(), &config), Some(Vector2D::zero()));
        let steering = separation(&boids[0], boids.iter(), &config);
        assert!(approx(steering, Vector2D::new(-0.2, 0.0)), "{steering:?}");
    }

    #[test]
    fn test_only_coincident_neighbors_give_no_push() {
        let config = FlockConfig::default();
        let boids = [
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
            boid_at(100.0, 100.0),
        ];

        assert_eq!(repulsion(&boids[0], boids.iter(), &config), None);
        assert_eq!(separation(&boids[0], boids.iter(), &config), Vector2D::zero());
    }

    #[test]
    fn test_perception_radius_is_exclusive() {
        let config = FlockConfig::default();
        let boids = [boid_at(0.0, 0.0), boid_at(50.0, 0.0)];
        assert_eq!(cohesion(&boids[0], boids.iter(), &config), Vector2D::zero());
    }
}
