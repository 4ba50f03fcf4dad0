//! The 5-tier batching index.
//!
//! Triangles are routed into buckets keyed, from the outside in, by
//! texture pair, object rank, LOD distance band, a reserved batch-sizing
//! tier and finally (material, render state, primitive kind). Everything
//! sharing the full key lands in the same bucket, which is what keeps the
//! per-frame draw-call count low: the renderer walks the tree outside-in
//! and only has to change the state that actually differs between buckets.

use crate::device::{Material, VertexTex2};

use super::state;

/// How a bucket's vertex run is interpreted when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleType {
    /// Independent triangles, three vertices each.
    Triangles,
    /// A triangle strip ("surface"): n vertices yield n - 2 triangles.
    Surface,
}

/// Tier 5: the actual geometry with its material and render state.
#[derive(Debug)]
pub struct DataTier {
    pub triangle_type: TriangleType,
    pub material: Material,
    pub state: u32,
    pub vertices: Vec<VertexTex2>,
}

impl DataTier {
    pub fn triangle_count(&self) -> usize {
        match self.triangle_type {
            TriangleType::Triangles => self.vertices.len() / 3,
            TriangleType::Surface => self.vertices.len().saturating_sub(2),
        }
    }
}

/// Tier 4: reserved batch-sizing tier, keyed by an opaque tag.
#[derive(Debug)]
pub struct BatchTier {
    pub reserved: u32,
    pub data: Vec<DataTier>,
}

/// Tier 3: LOD distance band (min, max).
#[derive(Debug)]
pub struct LodTier {
    pub min: f32,
    pub max: f32,
    pub batches: Vec<BatchTier>,
}

impl LodTier {
    /// Whether an object at `distance` falls inside this band.
    pub fn contains(&self, distance: f32) -> bool {
        distance >= self.min && distance < self.max
    }
}

/// Tier 2: object rank.
#[derive(Debug)]
pub struct RankTier {
    pub obj_rank: usize,
    pub lods: Vec<LodTier>,
}

/// Tier 1: texture pair.
#[derive(Debug)]
pub struct TexTier {
    pub tex1: String,
    pub tex2: String,
    pub ranks: Vec<RankTier>,
}

fn band_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

/// The whole index. Owned by the engine; callers address geometry through
/// the engine API, never through tier references they keep around.
#[derive(Debug, Default)]
pub struct ObjectTree {
    tiers: Vec<TexTier>,
}

impl ObjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiers(&self) -> &[TexTier] {
        &self.tiers
    }

    fn tex_index(&mut self, tex1: &str, tex2: &str) -> usize {
        if let Some(i) = self
            .tiers
            .iter()
            .position(|t| t.tex1 == tex1 && t.tex2 == tex2)
        {
            return i;
        }
        self.tiers.push(TexTier {
            tex1: tex1.to_owned(),
            tex2: tex2.to_owned(),
            ranks: Vec::new(),
        });
        self.tiers.len() - 1
    }

    fn rank_index(tier: &mut TexTier, obj_rank: usize) -> usize {
        if let Some(i) = tier.ranks.iter().position(|r| r.obj_rank == obj_rank) {
            return i;
        }
        tier.ranks.push(RankTier {
            obj_rank,
            lods: Vec::new(),
        });
        tier.ranks.len() - 1
    }

    fn lod_index(rank: &mut RankTier, min: f32, max: f32) -> usize {
        if let Some(i) = rank
            .lods
            .iter()
            .position(|l| band_eq(l.min, min) && band_eq(l.max, max))
        {
            return i;
        }
        rank.lods.push(LodTier {
            min,
            max,
            batches: Vec::new(),
        });
        rank.lods.len() - 1
    }

    fn batch_index(lod: &mut LodTier, reserved: u32) -> usize {
        if let Some(i) = lod.batches.iter().position(|b| b.reserved == reserved) {
            return i;
        }
        lod.batches.push(BatchTier {
            reserved,
            data: Vec::new(),
        });
        lod.batches.len() - 1
    }

    /// Find or create the bucket for the given keys and append `vertices`.
    ///
    /// Independent triangle runs coalesce into an existing bucket with the
    /// same material and state; strips always get a bucket of their own
    /// since two strips cannot share a vertex run.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        triangle_type: TriangleType,
        tex1: &str,
        tex2: &str,
        obj_rank: usize,
        min: f32,
        max: f32,
        material: &Material,
        state: u32,
        vertices: &[VertexTex2],
    ) {
        let t = self.tex_index(tex1, tex2);
        let r = Self::rank_index(&mut self.tiers[t], obj_rank);
        let l = Self::lod_index(&mut self.tiers[t].ranks[r], min, max);
        let b = Self::batch_index(&mut self.tiers[t].ranks[r].lods[l], 0);
        let batch = &mut self.tiers[t].ranks[r].lods[l].batches[b];

        if triangle_type == TriangleType::Triangles {
            if let Some(data) = batch.data.iter_mut().find(|d| {
                d.triangle_type == triangle_type && d.material == *material && d.state == state
            }) {
                data.vertices.extend_from_slice(vertices);
                return;
            }
        }

        batch.data.push(DataTier {
            triangle_type,
            material: *material,
            state,
            vertices: vertices.to_vec(),
        });
    }

    /// Exact-match lookup of an existing bucket, `None` if absent.
    ///
    /// Only the primary texture discriminates at tier 1, and the dual-pass
    /// bits are masked out of the bucket's state before comparing; both
    /// quirks let callers retarget the secondary texture of a bucket
    /// without losing track of it.
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        tex1: &str,
        obj_rank: usize,
        min: f32,
        max: f32,
        material: &Material,
        state: u32,
    ) -> Option<&mut DataTier> {
        let dual = state::DUAL_BLACK | state::DUAL_WHITE;
        for tier in &mut self.tiers {
            if tier.tex1 != tex1 {
                continue;
            }
            for rank in &mut tier.ranks {
                if rank.obj_rank != obj_rank {
                    continue;
                }
                for lod in &mut rank.lods {
                    if !band_eq(lod.min, min) || !band_eq(lod.max, max) {
                        continue;
                    }
                    for batch in &mut lod.batches {
                        for data in &mut batch.data {
                            if (data.state & !dual) == state && data.material == *material {
                                return Some(data);
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Re-derive LOD band membership after the global detail level changed.
    ///
    /// Bands sitting exactly on the previous limits move to the new limits;
    /// vertex data is untouched.
    pub fn change_lod(
        &mut self,
        old_limit: [f32; 2],
        new_limit: [f32; 2],
        old_terrain: f32,
        new_terrain: f32,
    ) {
        for tier in &mut self.tiers {
            for rank in &mut tier.ranks {
                for lod in &mut rank.lods {
                    if band_eq(lod.min, 0.0) && band_eq(lod.max, old_limit[0]) {
                        lod.max = new_limit[0];
                    } else if band_eq(lod.min, old_limit[0]) && band_eq(lod.max, old_limit[1]) {
                        lod.min = new_limit[0];
                        lod.max = new_limit[1];
                    } else if band_eq(lod.min, old_limit[1]) && band_eq(lod.max, 1_000_000.0) {
                        lod.min = new_limit[1];
                    } else if band_eq(lod.min, 0.0) && band_eq(lod.max, old_terrain) {
                        lod.max = new_terrain;
                    }
                }
            }
        }
    }

    /// Drop every bucket belonging to `obj_rank`, pruning emptied tiers.
    pub fn delete_object(&mut self, obj_rank: usize) {
        for tier in &mut self.tiers {
            tier.ranks.retain(|r| r.obj_rank != obj_rank);
        }
        self.tiers.retain(|t| !t.ranks.is_empty());
    }

    /// Wholesale teardown.
    pub fn flush(&mut self) {
        self.tiers.clear();
    }

    /// All vertices of one object, across every texture pair and band.
    pub fn vertices_of(&self, obj_rank: usize) -> impl Iterator<Item = &VertexTex2> {
        self.tiers
            .iter()
            .flat_map(move |t| t.ranks.iter().filter(move |r| r.obj_rank == obj_rank))
            .flat_map(|r| r.lods.iter())
            .flat_map(|l| l.batches.iter())
            .flat_map(|b| b.data.iter())
            .flat_map(|d| d.vertices.iter())
    }
}
