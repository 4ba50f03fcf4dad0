//! Game objects and the arena that owns them.
//!
//! Automations never hold references to other objects; they keep an
//! [`ObjectId`] and re-resolve it through the arena every frame, so a
//! deleted target simply stops resolving instead of dangling.

use cgmath::Vector3;

/// What an object is, for target filtering and model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Human,
    Mushroom,

    MobileWheeledLogistic,
    MobileTrackedLogistic,
    MobileWingedLogistic,
    MobileLeggedLogistic,
    MobileWheeledShooter,
    MobileTrackedShooter,
    MobileWingedShooter,
    MobileLeggedShooter,
    MobileWheeledOrganicShooter,
    MobileTrackedOrganicShooter,
    MobileWingedOrganicShooter,
    MobileLeggedOrganicShooter,
    MobileWheeledSniffer,
    MobileTrackedSniffer,
    MobileWingedSniffer,
    MobileLeggedSniffer,
    MobileThumper,
    MobileShielder,
    MobileRecycler,
    MobileSubmarine,

    Factory,
    Derrick,
    Station,
    Converter,
    RepairCenter,
    TowerDefense,
    ResearchCenter,
    RadarStation,
    ExchangePost,
    NuclearPlant,
    PowerPlant,
    Vault,

    TitaniumOre,
    UraniumOre,
    PowerCell,
    NuclearCell,
}

/// Stable handle into the arena. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// One simulated object.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub id: ObjectId,
    pub object_type: ObjectType,
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Locked objects are busy and invalid as automation targets.
    pub locked: bool,
    /// Engine rank carrying this object's geometry, if created.
    pub engine_rank: Option<usize>,
}

impl GameObject {
    pub fn set_rotation_x(&mut self, angle: f32) {
        self.rotation.x = angle;
    }

    pub fn set_rotation_y(&mut self, angle: f32) {
        self.rotation.y = angle;
    }

    pub fn set_rotation_z(&mut self, angle: f32) {
        self.rotation.z = angle;
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    pub fn set_scale_x(&mut self, scale: f32) {
        self.scale.x = scale;
    }

    pub fn set_scale_y(&mut self, scale: f32) {
        self.scale.y = scale;
    }

    pub fn set_scale_z(&mut self, scale: f32) {
        self.scale.z = scale;
    }
}

/// Owns every game object. Ids are monotonically assigned and a lookup on
/// a deleted id returns `None`.
#[derive(Debug, Default)]
pub struct ObjectArena {
    objects: Vec<GameObject>,
    next_id: u32,
}

impl ObjectArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, object_type: ObjectType, position: Vector3<f32>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(GameObject {
            id,
            object_type,
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            locked: false,
            engine_rank: None,
        });
        id
    }

    pub fn delete(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        self.objects.len() != before
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
