use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box anchored at its top-left corner (+y points down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    /// Width (≥ 0; zero is a legal, degenerate box).
    pub w: f64,
    /// Height (≥ 0).
    pub h: f64,
}

impl Aabb {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.w, self.h)
    }

    pub fn half_extents(&self) -> DVec2 {
        self.size() / 2.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Same box moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Grow this box by half of `source`'s extents on every side, so that sweeping
    /// `source` against `self` reduces to sweeping `source`'s center point.
    pub fn minkowski_expand(&self, source: &Aabb) -> Self {
        Self {
            x: self.x - source.w / 2.0,
            y: self.y - source.h / 2.0,
            w: self.w + source.w,
            h: self.h + source.h,
        }
    }
}

/// Circle given by center and radius (r ≥ 0).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: DVec2::new(cx, cy),
            radius,
        }
    }
}

/// Directed segment from `start` to `end`. Also used as a ray (direction `end - start`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: DVec2::new(x1, y1),
            end: DVec2::new(x2, y2),
        }
    }

    /// Direction vector `(x2 - x1, y2 - y1)`.
    pub fn as_vector(&self) -> DVec2 {
        self.end - self.start
    }

    /// Point at parametric time `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> DVec2 {
        self.start + self.as_vector() * t
    }
}

/// Ray/segment/sweep hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepHit {
    /// Parametric time of first contact. In [0,1) for sweeps and segments; may be
    /// negative for an infinite ray whose origin lies inside the box.
    pub toi: f64,
    /// Cardinal unit vector pointing back at the source, or zero on a corner tie.
    pub normal: DVec2,
    /// Contact point: on the ray for ray/segment tests, on the source's surface for sweeps.
    pub contact: DVec2,
}

/// Contact side as seen from the moving source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalDirection {
    /// Source landed on top of the target (normal `(0,-1)`).
    Up,
    /// Source hit the target's underside (normal `(0,1)`).
    Down,
    /// Source hit the target's left face (normal `(-1,0)`).
    Left,
    /// Source hit the target's right face (normal `(1,0)`).
    Right,
    #[default]
    Undefined,
}

impl NormalDirection {
    /// Map an exact cardinal normal to its direction; anything else is `Undefined`.
    pub fn from_normal(normal: DVec2) -> Self {
        match (normal.x, normal.y) {
            (x, y) if x == 0.0 && y == -1.0 => NormalDirection::Up,
            (x, y) if x == 0.0 && y == 1.0 => NormalDirection::Down,
            (x, y) if x == -1.0 && y == 0.0 => NormalDirection::Left,
            (x, y) if x == 1.0 && y == 0.0 => NormalDirection::Right,
            _ => NormalDirection::Undefined,
        }
    }

    pub fn to_normal(self) -> DVec2 {
        match self {
            NormalDirection::Up => DVec2::NEG_Y,
            NormalDirection::Down => DVec2::Y,
            NormalDirection::Left => DVec2::NEG_X,
            NormalDirection::Right => DVec2::X,
            NormalDirection::Undefined => DVec2::ZERO,
        }
    }
}

/// Correction for one detected swept collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Vector to add to the source's motion. Displacement space when produced by
    /// [`SweepApi`](crate::api::SweepApi), velocity space when produced by the
    /// [`CollisionResolver`](crate::resolver::CollisionResolver).
    pub vector: DVec2,
    pub normal: NormalDirection,
    pub toi: f64,
}

/// Kinematic state of one collidable entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    /// Top-left corner of the entity's rect.
    pub position: DVec2,
    /// Hitbox relative to `position`.
    pub hitbox: Aabb,
    /// World units per second.
    pub velocity: DVec2,
    /// Downward acceleration in units per second squared.
    pub gravity: f64,
    /// Per-axis fraction of velocity removed each frame.
    pub friction: DVec2,
}

impl Body {
    /// Body whose hitbox covers its whole `size`, with no gravity or friction.
    pub fn new(position: DVec2, size: DVec2) -> Self {
        Self {
            position,
            hitbox: Aabb::new(0.0, 0.0, size.x, size.y),
            velocity: DVec2::ZERO,
            gravity: 0.0,
            friction: DVec2::ZERO,
        }
    }

    pub fn with_hitbox(mut self, hitbox: Aabb) -> Self {
        self.hitbox = hitbox;
        self
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: DVec2) -> Self {
        self.friction = friction;
        self
    }

    /// Absolute (world-space) hitbox.
    pub fn aabb(&self) -> Aabb {
        self.hitbox.translated(self.position)
    }
}

/// Static terrain categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    /// One-way platform: solid only for bodies arriving from above.
    Ground,
    /// Solid from every side.
    Obstacle,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainBlock {
    pub aabb: Aabb,
    pub kind: TerrainKind,
}

impl TerrainBlock {
    pub fn ground(aabb: Aabb) -> Self {
        Self {
            aabb,
            kind: TerrainKind::Ground,
        }
    }

    pub fn obstacle(aabb: Aabb) -> Self {
        Self {
            aabb,
            kind: TerrainKind::Obstacle,
        }
    }
}

/// Semantic contact event delivered to a [`Collidable`](crate::api::Collidable).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    /// This body was stopped by terrain.
    Terrain { kind: TerrainKind, normal: NormalDirection },
    /// This body ran into a moving entity.
    Mover { normal: NormalDirection },
    /// A body ran into this entity; `normal` is from the body's perspective.
    Struck { normal: NormalDirection },
    /// This entity was carried along by a body that got stopped by terrain.
    Squeezed { normal: NormalDirection },
    /// Detection-only touch (pickups, projectiles).
    Sensor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_derived_edges() {
        let b = Aabb::new(1.0, 2.0, 10.0, 4.0);
        assert_eq!(b.right(), 11.0);
        assert_eq!(b.bottom(), 6.0);
        assert_eq!(b.center(), DVec2::new(6.0, 4.0));
        assert_eq!(b.half_extents(), DVec2::new(5.0, 2.0));
    }

    #[test]
    fn test_minkowski_expand() {
        let target = Aabb::new(15.0, 0.0, 10.0, 10.0);
        let source = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let e = target.minkowski_expand(&source);
        assert_eq!(e, Aabb::new(10.0, -5.0, 20.0, 20.0));
    }

    #[test]
    fn test_normal_direction_mapping() {
        for dir in [
            NormalDirection::Up,
            NormalDirection::Down,
            NormalDirection::Left,
            NormalDirection::Right,
            NormalDirection::Undefined,
        ] {
            assert_eq!(NormalDirection::from_normal(dir.to_normal()), dir);
        }
        assert_eq!(
            NormalDirection::from_normal(DVec2::new(0.5, 0.5)),
            NormalDirection::Undefined
        );
        assert_eq!(
            NormalDirection::from_normal(DVec2::new(f64::NAN, 0.0)),
            NormalDirection::Undefined
        );
    }

    #[test]
    fn test_body_aabb_uses_hitbox_offset() {
        let body = Body::new(DVec2::new(100.0, 50.0), DVec2::new(32.0, 32.0))
            .with_hitbox(Aabb::new(8.0, 4.0, 16.0, 28.0));
        assert_eq!(body.aabb(), Aabb::new(108.0, 54.0, 16.0, 28.0));
    }
}
