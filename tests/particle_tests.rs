// Host-side tests for particle motion and lifecycle.

use backdrop_core::particles::{Circle, Dot, NetworkPoint, Particle, Pool};
use backdrop_core::{CircleConfig, DotConfig, NetworkConfig, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn dots_stay_inside_while_bouncing() {
    let vp = Viewport::new(320.0, 200.0);
    let mut pool: Pool<Dot> = Pool::new(DotConfig::default(), 50, vp, rng(1));
    for tick in 0..2_000 {
        pool.update(vp);
        for d in pool.iter() {
            assert!(vp.contains(d.position), "tick {tick}: {:?}", d.position);
        }
    }
    assert_eq!(pool.len(), 50);
}

#[test]
fn dot_reverses_only_the_crossing_axis() {
    let vp = Viewport::new(100.0, 100.0);
    let config = DotConfig::default();
    let mut r = rng(2);
    let mut dot = Dot::spawn(&config, vp, &mut r);
    dot.position = Vec2::new(99.8, 50.0);
    dot.velocity = Vec2::new(0.4, 0.3);
    dot.update(&config, vp, &mut r);
    assert!(dot.velocity.x < 0.0);
    assert!(dot.velocity.y > 0.0);
    assert!(vp.contains(dot.position));
}

#[test]
fn network_points_wrap_to_opposite_edge() {
    let vp = Viewport::new(200.0, 100.0);
    let config = NetworkConfig::default();
    let mut r = rng(3);
    let mut p = NetworkPoint::new(Vec2::new(199.9, 0.1), Vec2::new(0.25, -0.25), 2.0);
    p.update(&config, vp, &mut r);
    assert!(p.position.x < 1.0, "x = {}", p.position.x);
    assert!(p.position.y > 99.0, "y = {}", p.position.y);
    assert!(vp.contains(p.position));
}

#[test]
fn network_points_stay_inside_over_time() {
    let vp = Viewport::new(640.0, 480.0);
    let mut pool: Pool<NetworkPoint> = Pool::new(NetworkConfig::default(), 43, vp, rng(4));
    for _ in 0..3_000 {
        pool.update(vp);
        assert!(pool.iter().all(|p| vp.contains(p.position)));
    }
}

#[test]
fn spawned_attributes_respect_configured_ranges() {
    let vp = Viewport::new(800.0, 600.0);
    let mut r = rng(5);
    let circles = CircleConfig::default();
    let network = NetworkConfig::default();
    for _ in 0..200 {
        let c = Circle::spawn(&circles, vp, &mut r);
        assert!(c.radius >= 2.0 && c.radius <= 12.0);
        assert!(c.lifespan >= 100.0 && c.lifespan <= 300.0);
        assert!(c.color.alpha() >= 0.1 && c.color.alpha() <= 0.6);
        assert_eq!(c.age, 0);

        let n = NetworkPoint::spawn(&network, vp, &mut r);
        assert!(n.velocity.x.abs() <= 0.25 && n.velocity.y.abs() <= 0.25);
        assert!(n.radius >= 1.0 && n.radius <= 3.0);
    }
}

#[test]
fn circle_age_never_exceeds_lifespan() {
    let vp = Viewport::new(800.0, 600.0);
    let config = CircleConfig::default();
    let mut r = rng(6);
    let mut c = Circle::spawn(&config, vp, &mut r);
    let mut resets = 0;
    for _ in 0..1_000 {
        let before = c.age;
        c.update(&config, vp, &mut r);
        assert!(c.age as f32 <= c.lifespan);
        assert!(c.lifespan > 0.0);
        if c.age == 0 {
            resets += 1;
        } else {
            assert_eq!(c.age, before + 1);
        }
    }
    // Lifespans are at most 300 ticks
    assert!(resets >= 3);
}

#[test]
fn circle_grows_until_reset() {
    let vp = Viewport::new(800.0, 600.0);
    let config = CircleConfig::default();
    let mut r = rng(7);
    let mut c = Circle::spawn(&config, vp, &mut r);
    let start = c.radius;
    c.update(&config, vp, &mut r);
    assert!((c.radius - (start + 0.05)).abs() < 1e-5);
}

#[test]
fn confine_pulls_positions_into_a_smaller_viewport() {
    let big = Viewport::new(1600.0, 1200.0);
    let small = Viewport::new(400.0, 300.0);
    let mut pool: Pool<Circle> = Pool::new(CircleConfig::default(), 30, big, rng(8));
    pool.confine(small);
    assert!(pool.iter().all(|c| small.contains(c.position)));

    let mut dots: Pool<Dot> = Pool::new(DotConfig::default(), 50, big, rng(9));
    dots.confine(small);
    assert!(dots.iter().all(|d| small.contains(d.position)));
}
