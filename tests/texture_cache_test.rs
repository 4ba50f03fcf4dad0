mod common;

use common::SpyDevice;
use strata_ngin::engine::texture_cache::TextureCache;
use strata_ngin::device::{TexImage, TextureHandle};

#[test]
fn should_upload_each_name_once() {
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();
    let image = TexImage::solid([255, 0, 0, 255]);

    let first = cache.load_from_image(&mut device, "red.png", &image);
    let second = cache.load_from_image(&mut device, "red.png", &image);

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(device.count("create_texture"), 1);
}

#[test]
fn should_resolve_cached_names_without_device_traffic() {
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();
    let image = TexImage::solid([0, 255, 0, 255]);
    let handle = cache
        .load_from_image(&mut device, "green.png", &image)
        .unwrap();
    device.clear_calls();

    assert_eq!(cache.get("green.png"), Some(handle));
    assert_eq!(cache.name_of(&handle), Some("green.png"));
    assert!(device.calls.is_empty());
}

#[test]
fn should_blacklist_unreadable_files() {
    common::init_logs();
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();

    assert!(cache.load(&mut device, "no_such_texture_anywhere.png").is_none());
    assert!(cache.is_blacklisted("no_such_texture_anywhere.png"));
    assert_eq!(device.count("create_texture"), 0);

    // Second attempt short-circuits on the blacklist.
    assert!(cache.load(&mut device, "no_such_texture_anywhere.png").is_none());
    assert_eq!(device.count("create_texture"), 0);
}

#[test]
fn should_blacklist_failed_uploads() {
    let mut device = SpyDevice::new();
    device.fail_create = true;
    let mut cache = TextureCache::new();
    let image = TexImage::solid([0, 0, 255, 255]);

    assert!(cache.load_from_image(&mut device, "blue.png", &image).is_none());
    assert!(cache.is_blacklisted("blue.png"));
    assert_eq!(device.count("create_texture"), 1);

    assert!(cache.load_from_image(&mut device, "blue.png", &image).is_none());
    assert_eq!(device.count("create_texture"), 1);
}

#[test]
fn should_ignore_empty_names() {
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();

    assert!(cache.load(&mut device, "").is_none());
    assert!(!cache.is_blacklisted(""));
    assert!(device.calls.is_empty());
}

#[test]
fn should_destroy_silently_for_unknown_names() {
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();

    cache.destroy(&mut device, "never_loaded.png");
    assert_eq!(device.count("destroy_texture"), 0);
}

#[test]
fn should_free_device_texture_on_destroy() {
    let mut device = SpyDevice::new();
    let mut cache = TextureCache::new();
    let image = TexImage::solid([1, 2, 3, 255]);
    cache.load_from_image(&mut device, "spot.png", &image);

    cache.destroy(&mut device, "spot.png");

    assert_eq!(device.count("destroy_texture"), 1);
    assert!(cache.get("spot.png").is_none());

    // The name is reloadable afterwards.
    assert!(cache.load_from_image(&mut device, "spot.png", &image).is_some());
}

#[test]
fn should_forget_failures_on_flush() {
    let mut device = SpyDevice::new();
    device.fail_create = true;
    let mut cache = TextureCache::new();
    let image = TexImage::solid([9, 9, 9, 255]);
    cache.load_from_image(&mut device, "retry.png", &image);
    assert!(cache.is_blacklisted("retry.png"));

    cache.flush();
    device.fail_create = false;

    assert!(!cache.is_blacklisted("retry.png"));
    assert!(cache.load_from_image(&mut device, "retry.png", &image).is_some());
}

#[test]
fn should_give_invalid_handles_no_backend_slot() {
    assert_eq!(TextureHandle::default().slot(), None);

    let handle = TextureHandle {
        valid: true,
        id: 3,
        ..Default::default()
    };
    assert_eq!(handle.slot(), Some(2));
}
