use glam::DVec2;

use crate::resolver::Candidate;
use crate::types::*;

/// Static (non-swept) primitive tests.
pub trait NarrowphaseApi {
    // Overlaps --------------------------------------------------------------

    /// Strict interior test; a point on the boundary is outside.
    fn point_vs_box(p: DVec2, aabb: &Aabb) -> bool;
    /// `distance² < r²`, boundary excluded.
    fn point_vs_circle(p: DVec2, circle: &Circle) -> bool;
    /// Touching edges (zero overlap) do not collide.
    fn box_vs_box(a: &Aabb, b: &Aabb) -> bool;
    fn circle_vs_circle(a: &Circle, b: &Circle) -> bool;
    fn box_vs_circle(aabb: &Aabb, circle: &Circle) -> bool;

    // Rays / segments -------------------------------------------------------

    /// Slab test along the infinite ray `ray.start + t * ray.as_vector()`.
    /// A hit may carry a negative `toi` when the ray origin lies inside the box.
    fn ray_vs_box(ray: &Segment, aabb: &Aabb) -> Option<SweepHit>;
    /// [`ray_vs_box`](Self::ray_vs_box) restricted to `toi < 1`.
    fn segment_vs_box(segment: &Segment, aabb: &Aabb) -> Option<SweepHit>;
    fn segment_vs_circle(segment: &Segment, circle: &Circle) -> bool;
}

/// Continuous detection over one frame of displacement, plus displacement-space resolution.
pub trait SweepApi {
    fn sweep_box_vs_static_box(source: &Aabb, displacement: DVec2, target: &Aabb) -> Option<SweepHit>;

    /// Sweep with relative displacement `source_disp - target_disp`.
    fn sweep_box_vs_moving_box(
        source: &Aabb,
        source_disp: DVec2,
        target: &Aabb,
        target_disp: DVec2,
    ) -> Option<SweepHit>;

    fn resolve_box_vs_static_box(source: &Aabb, displacement: DVec2, target: &Aabb) -> Option<Resolution>;

    fn resolve_box_vs_moving_box(
        source: &Aabb,
        source_disp: DVec2,
        target: &Aabb,
        target_disp: DVec2,
    ) -> Option<Resolution>;
}

/// Capability of an entity taking part in frame-level collision handling.
///
/// Implemented once per entity type; the handler never inspects concrete types.
pub trait Collidable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Game-rule reaction to a resolved contact. Default: ignore.
    fn on_contact(&mut self, _contact: Contact) {}
}

impl Collidable for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}

/// Frame-level detection and resolution in velocity space.
pub trait ResolverApi {
    /// Static targets the source will hit this frame, earliest first.
    fn detect_sorted_vs_static(&self, source: &Body, targets: &[Aabb]) -> Vec<Candidate>;

    /// Moving targets the source will hit this frame (relative motion), earliest first.
    fn detect_sorted_vs_moving(&self, source: &Body, targets: &[Body]) -> Vec<Candidate>;

    /// Velocity correction for `source` against a static box.
    fn resolve_vs_static(&self, source: &Body, target: &Aabb) -> Option<Resolution>;

    /// Velocity correction for `source` against a moving body.
    fn resolve_vs_moving(&self, source: &Body, target: &Body) -> Option<Resolution>;
}
