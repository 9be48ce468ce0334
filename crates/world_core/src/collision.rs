//! Physics-collaborator traits: ray-surface queries and the swept
//! character-movement primitive.
//!
//! `FlatWorld` is the in-repo implementation used by tests and the local
//! demo: an infinite ground plane plus axis-aligned blockers. A real
//! collision backend plugs in behind the same traits.

use glam::Vec3;

/// Bitmask over collision layers/categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const GROUND: LayerMask = LayerMask(1);
    pub const STATIC: LayerMask = LayerMask(1 << 1);
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    #[must_use]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

/// Nearest surface intersection for a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// Identity of the hit object, when the backend tracks one.
    pub entity: Option<u64>,
}

/// Ray-surface intersection query. A miss is an expected outcome, not an
/// error.
pub trait SurfaceRaycast {
    fn raycast(&self, origin: Vec3, dir: Vec3, max_dist: f32, mask: LayerMask) -> Option<RayHit>;
}

/// Outcome of a swept character move: the displacement actually achieved
/// after collision resolution, plus whether the character ended grounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    pub achieved: Vec3,
    pub grounded: bool,
}

/// Swept character-movement primitive.
pub trait CharacterSweep {
    fn move_character(&self, pos: Vec3, desired: Vec3) -> SweepResult;
}

const GROUND_EPS: f32 = 1e-4;

/// Axis-aligned box blocker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Slab-test ray intersection; returns entry distance and entry normal.
    fn ray_enter(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<(f32, Vec3)> {
        let mut t_enter = 0.0f32;
        let mut t_exit = max_dist;
        let mut normal = Vec3::ZERO;
        for axis in 0..3 {
            let (o, d, lo, hi) = match axis {
                0 => (origin.x, dir.x, self.min.x, self.max.x),
                1 => (origin.y, dir.y, self.min.y, self.max.y),
                _ => (origin.z, dir.z, self.min.z, self.max.z),
            };
            if d.abs() < 1e-8 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            let mut axis_n = -inv.signum();
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
                axis_n = -axis_n;
            }
            if t0 > t_enter {
                t_enter = t0;
                normal = match axis {
                    0 => Vec3::new(axis_n, 0.0, 0.0),
                    1 => Vec3::new(0.0, axis_n, 0.0),
                    _ => Vec3::new(0.0, 0.0, axis_n),
                };
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
        if t_enter <= 0.0 || t_enter > max_dist {
            return None;
        }
        Some((t_enter, normal))
    }
}

/// A blocker with an identity and layer membership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blocker {
    pub id: u64,
    pub aabb: Aabb,
    pub layers: LayerMask,
}

/// Ground plane + blockers. Deterministic given a fixed scene.
#[derive(Debug, Clone)]
pub struct FlatWorld {
    pub ground_y: f32,
    pub ground_layers: LayerMask,
    pub blockers: Vec<Blocker>,
}

impl Default for FlatWorld {
    fn default() -> Self {
        Self {
            ground_y: 0.0,
            ground_layers: LayerMask::GROUND,
            blockers: Vec::new(),
        }
    }
}

impl FlatWorld {
    #[must_use]
    pub fn new(ground_y: f32) -> Self {
        Self {
            ground_y,
            ..Self::default()
        }
    }

    pub fn add_blocker(&mut self, id: u64, min: Vec3, max: Vec3) {
        self.blockers.push(Blocker {
            id,
            aabb: Aabb { min, max },
            layers: LayerMask::STATIC,
        });
    }
}

impl SurfaceRaycast for FlatWorld {
    fn raycast(&self, origin: Vec3, dir: Vec3, max_dist: f32, mask: LayerMask) -> Option<RayHit> {
        let mut best: Option<(f32, RayHit)> = None;
        if mask.intersects(self.ground_layers) && dir.y.abs() > 1e-8 {
            let t = (self.ground_y - origin.y) / dir.y;
            if t > 0.0 && t <= max_dist {
                best = Some((
                    t,
                    RayHit {
                        point: origin + dir * t,
                        normal: Vec3::Y,
                        entity: None,
                    },
                ));
            }
        }
        for b in &self.blockers {
            if !mask.intersects(b.layers) {
                continue;
            }
            if let Some((t, normal)) = b.aabb.ray_enter(origin, dir, max_dist)
                && best.is_none_or(|(bt, _)| t < bt)
            {
                best = Some((
                    t,
                    RayHit {
                        point: origin + dir * t,
                        normal,
                        entity: Some(b.id),
                    },
                ));
            }
        }
        best.map(|(_, hit)| hit)
    }
}

impl CharacterSweep for FlatWorld {
    fn move_character(&self, pos: Vec3, desired: Vec3) -> SweepResult {
        let mut next = pos + desired;
        // Horizontal resolution: cancel the horizontal component if it lands
        // inside a blocker (point character, good enough for the flat demo).
        for b in &self.blockers {
            if b.aabb.contains(next) {
                next.x = pos.x;
                next.z = pos.z;
                if b.aabb.contains(next) {
                    next.y = pos.y;
                }
                break;
            }
        }
        // Ground plane clamp.
        if next.y < self.ground_y {
            next.y = self.ground_y;
        }
        let grounded = next.y <= self.ground_y + GROUND_EPS;
        SweepResult {
            achieved: next - pos,
            grounded,
        }
    }
}
