// Host-side end-to-end tests driving a whole scene against a recording surface.

use backdrop_core::particles::{NetworkPoint, Pool};
use backdrop_core::{
    AnimationKind, Backdrop, BackdropConfig, CircleBackdrop, DrawCall, NetworkBackdrop, NetworkConfig,
    RecordingSurface, Scene, Viewport,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene(kind: AnimationKind, w: f32, h: f32, seed: u64) -> Scene {
    Scene::new(
        kind,
        Viewport::new(w, h),
        &BackdropConfig::default(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn circle_scene_draws_thirty_circles_per_frame() {
    let mut s = scene(AnimationKind::Circles, 800.0, 600.0, 42);
    let mut surface = RecordingSurface::new();
    for _ in 0..10 {
        surface.reset();
        s.frame(&mut surface);
        assert_eq!(surface.calls[0], DrawCall::Clear(Viewport::new(800.0, 600.0)));
        assert_eq!(surface.circles().count(), 30);
        assert_eq!(surface.lines().count(), 0);
    }
}

#[test]
fn circle_radius_is_monotonic_until_its_single_reset() {
    let vp = Viewport::new(800.0, 600.0);
    let config = BackdropConfig::default();
    let pool = Pool::new(config.circles.clone(), 30, vp, StdRng::seed_from_u64(7));
    let mut backdrop = CircleBackdrop::new(pool);

    let mut prev: Vec<(f32, u32)> = backdrop.pool().iter().map(|c| (c.radius, c.age)).collect();
    let mut resets = vec![0u32; 30];
    // Shorter than the minimum lifespan doubled, so each circle resets at most once
    for _ in 0..199 {
        backdrop.step(vp);
        for (i, c) in backdrop.pool().iter().enumerate() {
            let (r0, age0) = prev[i];
            if c.age == 0 {
                resets[i] += 1;
            } else {
                assert_eq!(c.age, age0 + 1);
                assert!(c.radius >= r0, "circle {i} shrank without a reset");
            }
            prev[i] = (c.radius, c.age);
        }
    }
    assert!(resets.iter().all(|&n| n <= 1));
    assert_eq!(backdrop.len(), 30);
}

#[test]
fn two_network_points_100_apart_draw_one_link() {
    let vp = Viewport::new(800.0, 600.0);
    let config = NetworkConfig::default();
    let points = vec![
        NetworkPoint::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 2.0),
        NetworkPoint::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 2.0),
    ];
    let pool = Pool::from_particles(config, points, StdRng::seed_from_u64(1));
    let mut s = Scene::with_backdrop(vp, Box::new(NetworkBackdrop::new(pool)));

    let mut surface = RecordingSurface::new();
    s.frame(&mut surface);

    assert_eq!(surface.circles().count(), 2);
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 1, "pointer is off-screen, only the pair links");
    let (_, _, stroke) = lines[0];
    assert!((stroke.width - (1.0 - 100.0 / 150.0)).abs() < 1e-5);
    assert!((stroke.width - 0.33).abs() < 0.01);
}

#[test]
fn network_links_to_the_pointer_after_it_moves() {
    let vp = Viewport::new(800.0, 600.0);
    let points = vec![NetworkPoint::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 2.0)];
    let pool = Pool::from_particles(NetworkConfig::default(), points, StdRng::seed_from_u64(1));
    let mut s = Scene::with_backdrop(vp, Box::new(NetworkBackdrop::new(pool)));

    let mut surface = RecordingSurface::new();
    s.frame(&mut surface);
    assert_eq!(surface.lines().count(), 0);

    s.set_pointer(Vec2::new(100.0, 150.0));
    surface.reset();
    s.frame(&mut surface);
    let (_, to, stroke) = surface.lines().next().unwrap();
    assert_eq!(to, Vec2::new(100.0, 150.0));
    // 50 px inside a 200 px pointer radius
    assert!((stroke.width - 0.75).abs() < 1e-5);
    assert_eq!(stroke.color.css(), "rgba(255, 255, 255, 0.2)");
}

#[test]
fn network_is_rebuilt_on_resize() {
    let mut s = scene(AnimationKind::Network, 800.0, 600.0, 3);
    assert_eq!(s.backdrop().len(), 54);
    s.resize(Viewport::new(300.0, 600.0));
    assert_eq!(s.backdrop().len(), 20);
    s.resize(Viewport::new(4000.0, 2000.0));
    assert_eq!(s.backdrop().len(), 100);
}

#[test]
fn circles_and_dots_keep_their_pools_on_resize() {
    for kind in [AnimationKind::Circles, AnimationKind::Dots] {
        let mut s = scene(kind, 1024.0, 768.0, 4);
        let n = s.backdrop().len();
        s.resize(Viewport::new(200.0, 100.0));
        assert_eq!(s.backdrop().len(), n);
        assert_eq!(s.backdrop().kind(), kind);
    }
}

#[test]
fn every_drawn_particle_is_inside_the_viewport() {
    for kind in [AnimationKind::Dots, AnimationKind::Network] {
        let mut s = scene(kind, 500.0, 400.0, 5);
        let vp = s.viewport();
        let mut surface = RecordingSurface::new();
        for _ in 0..500 {
            surface.reset();
            s.frame(&mut surface);
            assert!(surface.circles().all(|(c, _, _)| vp.contains(c)));
        }
    }
}

#[test]
fn dot_links_fade_with_distance() {
    let mut s = scene(AnimationKind::Dots, 300.0, 300.0, 6);
    let mut surface = RecordingSurface::new();
    s.frame(&mut surface);
    let lines: Vec<_> = surface.lines().collect();
    // 50 dots in 300x300 are bound to have close neighbours
    assert!(!lines.is_empty());
    for (a, b, stroke) in lines {
        assert_eq!(stroke.width, 1.0);
        let expected = 1.0 - a.distance(b) / 150.0;
        assert!((stroke.color.alpha() - expected).abs() < 1e-5);
    }
}

#[test]
fn pointer_starts_off_screen() {
    let s = scene(AnimationKind::Network, 800.0, 600.0, 8);
    assert_eq!(s.pointer(), Vec2::new(-9999.0, -9999.0));
}

#[test]
fn degenerate_viewport_is_clamped_to_one_pixel() {
    for kind in [AnimationKind::Circles, AnimationKind::Dots, AnimationKind::Network] {
        let mut s = scene(kind, 0.0, 600.0, 9);
        let vp = s.viewport();
        assert_eq!(vp.width(), 1.0);
        let mut surface = RecordingSurface::new();
        for _ in 0..20 {
            surface.reset();
            s.frame(&mut surface);
            assert!(surface.circles().all(|(c, _, _)| vp.contains(c)));
        }
    }
}
