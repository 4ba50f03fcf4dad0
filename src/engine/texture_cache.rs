//! Name-to-handle texture cache with a failure blacklist.
//!
//! The engine addresses textures by file name; the cache decodes and
//! uploads each name at most once. Names that failed to decode or upload
//! go on a blacklist so later lookups short-circuit without touching the
//! disk or the device again. A missing texture is never fatal: the caller
//! renders untextured and the failure shows up once in the log.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use anyhow::Context as _;

use crate::device::{Device, TexImage, TextureCreateParams, TextureHandle};

#[derive(Debug, Default)]
pub struct TextureCache {
    tex_name_map: HashMap<String, TextureHandle>,
    rev_tex_name_map: BTreeMap<TextureHandle, String>,
    blacklist: HashSet<String>,
    default_params: TextureCreateParams,
}

fn decode_file(name: &str) -> anyhow::Result<TexImage> {
    let img = image::open(Path::new(name)).with_context(|| format!("reading '{name}'"))?;
    Ok(TexImage::from_dynamic(&img))
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_params(&mut self, params: TextureCreateParams) {
        self.default_params = params;
    }

    /// Handle for an already-loaded name, no device traffic.
    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.tex_name_map.get(name).copied()
    }

    /// Reverse lookup: the name a handle was loaded under.
    pub fn name_of(&self, handle: &TextureHandle) -> Option<&str> {
        self.rev_tex_name_map.get(handle).map(String::as_str)
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.contains(name)
    }

    /// Load `name` from disk, uploading on first use.
    ///
    /// Returns `None` for blacklisted or undecodable names; the failure is
    /// logged and the name blacklisted so the next call is free.
    pub fn load<D: Device>(&mut self, device: &mut D, name: &str) -> Option<TextureHandle> {
        if name.is_empty() || self.blacklist.contains(name) {
            return None;
        }
        if let Some(handle) = self.tex_name_map.get(name) {
            return Some(*handle);
        }

        let image = match decode_file(name) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("couldn't load texture '{name}': {err:#}, blacklisting");
                self.blacklist.insert(name.to_owned());
                return None;
            }
        };

        self.upload(device, name, &image)
    }

    /// Load from pixels the caller already owns (procedural textures,
    /// tests). Same bookkeeping as [`TextureCache::load`].
    pub fn load_from_image<D: Device>(
        &mut self,
        device: &mut D,
        name: &str,
        image: &TexImage,
    ) -> Option<TextureHandle> {
        if name.is_empty() || self.blacklist.contains(name) {
            return None;
        }
        if let Some(handle) = self.tex_name_map.get(name) {
            return Some(*handle);
        }
        self.upload(device, name, image)
    }

    fn upload<D: Device>(
        &mut self,
        device: &mut D,
        name: &str,
        image: &TexImage,
    ) -> Option<TextureHandle> {
        let params = self.default_params;
        let handle = device.create_texture(image, &params);
        if !handle.valid {
            log::warn!("couldn't upload texture '{name}', blacklisting");
            self.blacklist.insert(name.to_owned());
            return None;
        }
        self.tex_name_map.insert(name.to_owned(), handle);
        self.rev_tex_name_map.insert(handle, name.to_owned());
        Some(handle)
    }

    /// Free a loaded texture. No-op for names that were never loaded.
    pub fn destroy<D: Device>(&mut self, device: &mut D, name: &str) {
        let Some(handle) = self.tex_name_map.remove(name) else {
            return;
        };
        self.rev_tex_name_map.remove(&handle);
        device.destroy_texture(&handle);
    }

    /// Drop all cache entries and forget past failures. Called on device
    /// reconfiguration, when every handle goes stale at once.
    pub fn flush(&mut self) {
        self.tex_name_map.clear();
        self.rev_tex_name_map.clear();
        self.blacklist.clear();
    }
}
