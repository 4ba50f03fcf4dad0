mod common;

use cgmath::{Vector2, Vector3};
use common::SpyDevice;
use strata_ngin::device::{Material, VertexTex2};
use strata_ngin::engine::decals::Decals;
use strata_ngin::engine::{Engine, state};
use strata_ngin::event::Event;
use strata_ngin::particle::{ParticleManager, ParticleType};

fn triangles(count: usize) -> Vec<VertexTex2> {
    let normal = Vector3::new(0.0, 1.0, 0.0);
    let uv = Vector2::new(0.0, 0.0);
    (0..count * 3)
        .map(|i| VertexTex2::new(Vector3::new(i as f32, 0.0, 0.0), normal, uv))
        .collect()
}

#[test]
fn should_count_triangles_and_surfaces() {
    let mut engine = Engine::new(SpyDevice::new());
    let rank = engine.create_object();
    let mat = Material::default();

    assert!(engine.add_triangles(
        rank,
        &triangles(2),
        &mat,
        state::NORMAL,
        "rock.png",
        "",
        0.0,
        1_000_000.0,
        false,
    ));
    // A 5-vertex strip is 3 more triangles.
    assert!(engine.add_surface(
        rank,
        &triangles(2)[..5],
        &mat,
        state::NORMAL,
        "rock.png",
        "",
        0.0,
        1_000_000.0,
        false,
    ));

    assert_eq!(engine.get_total_triangles(rank), Some(5));
    assert_eq!(engine.get_total_triangles(rank + 1), None);

    engine.delete_object(rank);
    assert_eq!(engine.get_total_triangles(rank), None);
}

#[test]
fn should_reject_geometry_for_unknown_ranks() {
    let mut engine = Engine::new(SpyDevice::new());
    let mat = Material::default();
    assert!(!engine.add_triangles(
        7,
        &triangles(1),
        &mat,
        state::NORMAL,
        "rock.png",
        "",
        0.0,
        1_000_000.0,
        false,
    ));
}

#[test]
fn should_reuse_ranks_after_delete() {
    let mut engine = Engine::new(SpyDevice::new());
    let first = engine.create_object();
    let second = engine.create_object();
    assert_ne!(first, second);

    assert!(engine.delete_object(first));
    assert!(!engine.delete_object(first));
    assert_eq!(engine.create_object(), first);
}

#[test]
fn should_release_shadow_spot_with_its_object() {
    let mut engine = Engine::new(SpyDevice::new());
    let rank = engine.create_object();
    assert!(engine.create_shadow_spot(rank).is_some());
    assert!(engine.decals.shadow_spot_of(rank).is_some());

    engine.delete_object(rank);

    assert!(engine.decals.shadow_spot_of(rank).is_none());
}

#[test]
fn should_hand_out_zeroed_decal_slots_on_reuse() {
    let mut decals = Decals::new();
    let rank = decals.create_shadow_spot(4);
    let spot = decals.shadow_spot_of_mut(4).unwrap();
    spot.radius = 8.0;
    spot.pos = Vector3::new(3.0, 0.0, 3.0);
    decals.delete_shadow_spot_of(4);

    let reused = decals.create_shadow_spot(9);
    assert_eq!(reused, rank);
    let spot = decals.shadow_spot_of(9).unwrap();
    assert_eq!(spot.radius, 0.0);
    assert_eq!(spot.pos, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(spot.normal, Vector3::new(0.0, 1.0, 0.0));
}

#[test]
fn should_draw_only_visible_objects() {
    let mut engine = Engine::new(SpyDevice::new());
    let mat = Material::default();
    let shown = engine.create_object();
    let hidden = engine.create_object();
    for rank in [shown, hidden] {
        engine.add_triangles(
            rank,
            &triangles(1),
            &mat,
            state::NORMAL,
            "rock.png",
            "",
            0.0,
            1_000_000.0,
            false,
        );
    }
    engine.set_object_visible(hidden, false);

    engine.render();

    assert_eq!(engine.device().count("draw_primitive_tex2"), 1);
    assert_eq!(engine.statistic_triangle(), 1);
}

#[test]
fn should_filter_draws_by_lod_band() {
    let mut engine = Engine::new(SpyDevice::new());
    let mat = Material::default();
    let rank = engine.create_object();
    engine.add_triangles(
        rank,
        &triangles(1),
        &mat,
        state::NORMAL,
        "rock.png",
        "",
        100.0,
        200.0,
        false,
    );

    // Camera on top of the object: outside the band, nothing drawn.
    engine.render();
    assert_eq!(engine.device().count("draw_primitive_tex2"), 0);

    engine.set_view_params(
        Vector3::new(150.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    engine.frame_update(0.0);
    engine.render();
    assert_eq!(engine.device().count("draw_primitive_tex2"), 1);
}

#[test]
fn should_deduplicate_state_between_buckets() {
    let mut engine = Engine::new(SpyDevice::new());
    let mat = Material::default();
    let rank = engine.create_object();
    for _ in 0..2 {
        engine.add_surface(
            rank,
            &triangles(1),
            &mat,
            state::NORMAL,
            "rock.png",
            "",
            0.0,
            1_000_000.0,
            false,
        );
    }

    engine.render();

    // Two strip buckets, two draws, but the shared material applies once.
    assert_eq!(engine.device().count("draw_primitive_tex2"), 2);
    assert_eq!(engine.device().count("set_material"), 1);
}

#[test]
fn should_advance_time_on_frame_events_unless_paused() {
    let mut engine = Engine::new(SpyDevice::new());
    assert!(engine.process_event(&Event::Frame { r_time: 0.5 }));
    assert_eq!(engine.time(), 0.5);

    engine.set_pause(true);
    engine.process_event(&Event::Frame { r_time: 0.5 });
    assert_eq!(engine.time(), 0.5);

    // Non-frame events pass through without side effects.
    engine.set_pause(false);
    assert!(engine.process_event(&Event::KeyDown { code: 32 }));
    assert_eq!(engine.time(), 0.5);
}

#[test]
fn should_adapt_particle_intervals_to_density() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_particle_density(2.0);
    assert_eq!(engine.particle_adapt(0.1), 0.05);

    engine.set_particle_density(0.0);
    assert_eq!(engine.particle_adapt(0.1), 1_000_000.0);
}

#[test]
fn should_reuse_expired_particle_channels() {
    let mut particles = ParticleManager::new();
    let channel = particles.create_particle(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        1.0,
        ParticleType::Smoke3,
        2.0,
        0.0,
        0.0,
    );
    assert_eq!(channel, 0);

    particles.frame_update(3.0);
    assert_eq!(particles.count(), 0);

    let reused = particles.create_particle(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        1.0,
        ParticleType::Gun2,
        2.0,
        0.0,
        0.0,
    );
    assert_eq!(reused, 0);
}

#[test]
fn should_kill_particles_with_their_father() {
    let mut particles = ParticleManager::new();
    let channel = particles.create_particle(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        1.0,
        ParticleType::Gun2,
        10.0,
        0.0,
        0.0,
    );
    particles.set_object_father(channel, 3);

    particles.delete_father(3);

    assert_eq!(particles.count(), 0);
}
