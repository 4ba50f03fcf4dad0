use cgmath::Vector3;
use strata_ngin::automation::mush::{MushAutomation, MushPhase};
use strata_ngin::automation::{AutoContext, Automation, SoundEvent, SoundType};
use strata_ngin::event::Event;
use strata_ngin::level::ParserLine;
use strata_ngin::object::{ObjectArena, ObjectId, ObjectType};
use strata_ngin::particle::{ParticleManager, ParticleType};

struct World {
    arena: ObjectArena,
    particles: ParticleManager,
    sounds: Vec<SoundEvent>,
    mush: ObjectId,
}

impl World {
    fn new() -> Self {
        let mut arena = ObjectArena::new();
        let mush = arena.create(ObjectType::Mushroom, Vector3::new(0.0, 0.0, 0.0));
        Self {
            arena,
            particles: ParticleManager::new(),
            sounds: Vec::new(),
            mush,
        }
    }

    fn step(&mut self, auto: &mut MushAutomation, r_time: f32) {
        self.step_with_pause(auto, r_time, false);
    }

    fn step_with_pause(&mut self, auto: &mut MushAutomation, r_time: f32, paused: bool) {
        let mut ctx = AutoContext {
            paused,
            particle_density: 1.0,
            particles: &mut self.particles,
            objects: &mut self.arena,
            sounds: &mut self.sounds,
        };
        auto.event_process(&mut ctx, &Event::Frame { r_time });
    }

    fn particle_kinds(&self) -> Vec<ParticleType> {
        (0..512)
            .filter_map(|ch| self.particles.particle(ch))
            .map(|p| p.kind)
            .collect()
    }
}

#[test]
fn should_stay_waiting_without_target() {
    let mut world = World::new();
    let mut auto = MushAutomation::new(world.mush);

    for _ in 0..40 {
        world.step(&mut auto, 0.5);
    }

    assert_eq!(auto.phase(), MushPhase::Wait);
    // After the first rollover the wait speed is redrawn in [1/4, 1/2].
    assert!(auto.speed() >= 0.25 && auto.speed() <= 0.5);
    assert!(world.particles.count() == 0);
}

#[test]
fn should_open_on_nearby_target_the_frame_the_wait_expires() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    world.step(&mut auto, 4.0);

    assert_eq!(auto.phase(), MushPhase::Snif);
}

#[test]
fn should_take_a_single_transition_per_frame_on_overshoot() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    world.step(&mut auto, 100.0);

    assert_eq!(auto.phase(), MushPhase::Snif);
}

#[test]
fn should_ignore_far_targets() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(60.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    world.step(&mut auto, 4.0);

    assert_eq!(auto.phase(), MushPhase::Wait);
}

#[test]
fn should_ignore_locked_targets() {
    let mut world = World::new();
    let target = world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    world.arena.get_mut(target).unwrap().locked = true;
    let mut auto = MushAutomation::new(world.mush);

    world.step(&mut auto, 4.0);

    assert_eq!(auto.phase(), MushPhase::Wait);
}

#[test]
fn should_ignore_non_target_types() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::TitaniumOre, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    world.step(&mut auto, 4.0);

    assert_eq!(auto.phase(), MushPhase::Wait);
}

#[test]
fn should_run_the_full_attack_cycle() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    // Wait 4s, Snif 1.5s, Zoom 1s, Fire 1s, Smoke 2s: 9.5s in 0.05 steps.
    let mut seen = Vec::new();
    for _ in 0..195 {
        world.step(&mut auto, 0.05);
        if seen.last() != Some(&auto.phase()) {
            seen.push(auto.phase());
        }
    }

    assert!(seen.contains(&MushPhase::Snif));
    assert!(seen.contains(&MushPhase::Zoom));
    assert!(seen.contains(&MushPhase::Fire));
    assert!(seen.contains(&MushPhase::Smoke));
    assert_eq!(auto.phase(), MushPhase::Wait);

    let kinds = world.particle_kinds();
    assert!(kinds.contains(&ParticleType::Gun2));
    assert!(kinds.contains(&ParticleType::Smoke3));
    assert!(
        world
            .sounds
            .iter()
            .any(|s| s.sound == SoundType::Mushroom)
    );
}

#[test]
fn should_commit_attack_even_when_target_escapes_mid_sniff() {
    let mut world = World::new();
    let target = world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);
    world.step(&mut auto, 4.0);
    assert_eq!(auto.phase(), MushPhase::Snif);

    // Target leaves attack range while the mushroom is still sniffing.
    world.arena.get_mut(target).unwrap().position = Vector3::new(500.0, 0.0, 0.0);
    world.step(&mut auto, 1.5);

    assert_eq!(auto.phase(), MushPhase::Zoom);
}

#[test]
fn should_attach_projectiles_to_their_mushroom() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);
    world.step(&mut auto, 4.0);
    world.step(&mut auto, 1.5);
    world.step(&mut auto, 1.0);
    assert_eq!(auto.phase(), MushPhase::Fire);
    assert_eq!(world.particles.count(), 10);

    world.particles.delete_father(world.mush.0 as usize);

    assert_eq!(world.particles.count(), 0);
}

#[test]
fn should_not_progress_while_paused() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);

    world.step_with_pause(&mut auto, 10.0, true);

    assert_eq!(auto.phase(), MushPhase::Wait);
    assert_eq!(auto.progress(), 0.0);
}

#[test]
fn should_decline_save_in_resting_phase() {
    let world = World::new();
    let auto = MushAutomation::new(world.mush);

    let mut line = ParserLine::new("ExistsMush");
    assert!(!auto.write(&mut line));
    assert!(line.params().is_empty());
}

#[test]
fn should_round_trip_saved_state() {
    let mut world = World::new();
    world
        .arena
        .create(ObjectType::Human, Vector3::new(10.0, 0.0, 0.0));
    let mut auto = MushAutomation::new(world.mush);
    world.step(&mut auto, 4.0);
    world.step(&mut auto, 0.3);
    assert_eq!(auto.phase(), MushPhase::Snif);

    let mut line = ParserLine::new("ExistsMush");
    assert!(auto.write(&mut line));
    assert!(line.param("aExist").is_some());

    // Through the wire format and back.
    let parsed = ParserLine::parse(&line.render()).unwrap();

    let mut restored = MushAutomation::new(world.mush);
    assert!(restored.read(&parsed));
    assert_eq!(restored.phase(), MushPhase::Snif);
    assert!((restored.progress() - auto.progress()).abs() < 1e-4);
    assert!((restored.speed() - auto.speed()).abs() < 1e-4);
}

#[test]
fn should_ignore_restore_without_exist_flag() {
    let world = World::new();
    let mut auto = MushAutomation::new(world.mush);

    let line = ParserLine::parse("ExistsMush aPhase=4 aProgress=0.5").unwrap();
    assert!(!auto.read(&line));
    assert_eq!(auto.phase(), MushPhase::Wait);
}

#[test]
fn should_render_and_parse_parser_lines() {
    let mut line = ParserLine::new("CreateObject");
    line.add_param("type", "Mushroom");
    line.add_param("power", 0.5);

    let text = line.render();
    assert_eq!(text, "CreateObject type=Mushroom power=0.5");

    let parsed = ParserLine::parse(&text).unwrap();
    assert_eq!(parsed, line);
    assert_eq!(parsed.param("power").unwrap().as_float(0.0), 0.5);
}

#[test]
fn should_coerce_parameter_values_with_defaults() {
    let line = ParserLine::parse("Cmd flag=1 n=notanumber").unwrap();
    assert!(line.param("flag").unwrap().as_bool(false));
    assert_eq!(line.param("n").unwrap().as_int(7), 7);
    assert!(line.param("missing").is_none());
}

#[test]
fn should_reject_malformed_lines() {
    assert!(ParserLine::parse("").is_err());
    assert!(ParserLine::parse("Cmd loose").is_err());
}
