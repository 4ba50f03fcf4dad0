mod common;

use common::SpyDevice;
use strata_ngin::device::{BlendFunc, Color, Material, RenderState, TexImage};
use strata_ngin::engine::{AlphaMode, Engine, state};

#[test]
fn should_skip_device_calls_on_repeated_state() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::NORMAL, Color::WHITE);
    let after_first = engine.device().calls.len();

    engine.set_state(state::NORMAL, Color::WHITE);
    assert_eq!(engine.device().calls.len(), after_first);

    // A different color is a different state.
    engine.set_state(state::NORMAL, Color::BLACK);
    assert!(engine.device().calls.len() > after_first);
}

#[test]
fn should_apply_black_texture_transparency_blend() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::TTEXTURE_BLACK, Color::WHITE);

    let device = engine.device();
    assert_eq!(
        device.last_blend,
        Some((BlendFunc::One, BlendFunc::InvSrcColor))
    );
    assert!(device.render_states.contains(&(RenderState::Blending, true)));
    assert!(device.render_states.contains(&(RenderState::DepthWrite, false)));
}

#[test]
fn should_apply_white_texture_transparency_blend() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::TTEXTURE_WHITE, Color::WHITE);

    assert_eq!(
        engine.device().last_blend,
        Some((BlendFunc::DstColor, BlendFunc::Zero))
    );
}

#[test]
fn should_disable_culling_for_double_sided_state() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::TWO_FACE, Color::WHITE);
    assert!(
        engine
            .device()
            .render_states
            .contains(&(RenderState::Culling, false))
    );

    engine.set_state(state::NORMAL, Color::WHITE);
    assert!(
        engine
            .device()
            .render_states
            .contains(&(RenderState::Culling, true))
    );
}

#[test]
fn should_brighten_ambient_for_light_state() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::LIGHT, Color::WHITE);
    assert_eq!(engine.device().last_global_ambient, Some(Color::WHITE));

    engine.set_state(state::NORMAL, Color::WHITE);
    assert_ne!(engine.device().last_global_ambient, Some(Color::WHITE));
}

#[test]
fn should_strip_alpha_when_configuration_disallows_it() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_alpha_mode(AlphaMode::Strip);
    engine.set_state(state::ALPHA, Color::WHITE);

    let device = engine.device();
    assert!(device.render_states.contains(&(RenderState::AlphaTest, false)));
    assert!(!device.render_states.contains(&(RenderState::AlphaTest, true)));
}

#[test]
fn should_replace_alpha_with_black_transparency_when_configured() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_alpha_mode(AlphaMode::BlackTransparency);
    engine.set_state(state::ALPHA, Color::WHITE);

    assert_eq!(
        engine.device().last_blend,
        Some((BlendFunc::One, BlendFunc::InvSrcColor))
    );
}

#[test]
fn should_honor_alpha_when_allowed() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::ALPHA, Color::WHITE);

    assert!(
        engine
            .device()
            .render_states
            .contains(&(RenderState::AlphaTest, true))
    );
}

#[test]
fn should_cache_material_applications() {
    let mut engine = Engine::new(SpyDevice::new());
    let mat = Material::default();
    engine.set_material(&mat);
    engine.set_material(&mat);
    assert_eq!(engine.device().count("set_material"), 1);

    let mut other = Material::default();
    other.diffuse = Color::BLACK;
    engine.set_material(&other);
    assert_eq!(engine.device().count("set_material"), 2);
}

#[test]
fn should_enable_second_stage_only_for_visible_ground_spots() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::DUAL_BLACK | state::SECOND, Color::WHITE);
    assert!(engine.device().texture_stages.contains(&(1, true)));

    // Without the second-stage bit the dual texture stays off.
    engine.device_mut().clear_calls();
    engine.set_state(state::DUAL_BLACK, Color::WHITE);
    assert!(engine.device().texture_stages.contains(&(1, false)));

    engine.device_mut().clear_calls();
    engine.set_ground_spot_visible(false);
    engine.set_state(state::DUAL_BLACK | state::SECOND, Color::BLACK);
    assert!(engine.device().texture_stages.contains(&(1, false)));
}

#[test]
fn should_bind_texture_once_it_is_loaded() {
    let mut engine = Engine::new(SpyDevice::new());

    // Binding an unloaded name issues nothing and leaves the bind pending.
    engine.set_texture("rock.png", 0);
    assert_eq!(engine.device().count("set_texture"), 0);

    engine.load_texture_from_image("rock.png", &TexImage::solid([255, 255, 255, 255]));
    engine.set_texture("rock.png", 0);
    assert_eq!(engine.device().count("set_texture"), 1);

    // A rebind of the held name stays cached.
    engine.set_texture("rock.png", 0);
    assert_eq!(engine.device().count("set_texture"), 1);
}

#[test]
fn should_reset_caches_at_frame_start() {
    let mut engine = Engine::new(SpyDevice::new());
    engine.set_state(state::TWO_FACE, Color::WHITE);
    engine.render();
    engine.device_mut().clear_calls();

    // The render walked back to NORMAL, so the same state applies again.
    engine.set_state(state::TWO_FACE, Color::WHITE);
    assert!(engine.device().count("set_render_state") > 0);
}
