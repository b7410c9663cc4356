use glam::DVec2;

use crate::api::{NarrowphaseApi, SweepApi};
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// Multiplier applied to resolution vectors so that floating-point rounding never
/// leaves a resolved box in a residual, undetected overlap on the next frame.
///
/// The margin it leaves is `|displacement| * (1 - toi) * 1e-7`, i.e. the resolved box
/// stops a hair short of the contact surface.
pub const RESOLUTION_SAFETY_FACTOR: f64 = 1.000_000_1;

impl SweepApi for Narrowphase {
    fn sweep_box_vs_static_box(source: &Aabb, displacement: DVec2, target: &Aabb) -> Option<SweepHit> {
        // A motion test: nothing moves, nothing is hit (use `box_vs_box` for overlap).
        if displacement == DVec2::ZERO {
            return None;
        }

        let expanded = target.minkowski_expand(source);
        let center = source.center();
        let path = Segment {
            start: center,
            end: center + displacement,
        };
        let hit = Self::segment_vs_box(&path, &expanded)?;
        // Already overlapping before moving: not this frame's contact
        if hit.toi < 0.0 {
            return None;
        }

        let center_at_hit = center + displacement * hit.toi;
        Some(SweepHit {
            toi: hit.toi,
            normal: hit.normal,
            contact: center_at_hit - hit.normal * source.half_extents(),
        })
    }

    fn sweep_box_vs_moving_box(
        source: &Aabb,
        source_disp: DVec2,
        target: &Aabb,
        target_disp: DVec2,
    ) -> Option<SweepHit> {
        Self::sweep_box_vs_static_box(source, source_disp - target_disp, target)
    }

    fn resolve_box_vs_static_box(source: &Aabb, displacement: DVec2, target: &Aabb) -> Option<Resolution> {
        let hit = Self::sweep_box_vs_static_box(source, displacement, target)?;
        Some(Self::resolve_hit(&hit, displacement, RESOLUTION_SAFETY_FACTOR))
    }

    fn resolve_box_vs_moving_box(
        source: &Aabb,
        source_disp: DVec2,
        target: &Aabb,
        target_disp: DVec2,
    ) -> Option<Resolution> {
        let relative = source_disp - target_disp;
        let hit = Self::sweep_box_vs_static_box(source, relative, target)?;
        Some(Self::resolve_hit(&hit, relative, RESOLUTION_SAFETY_FACTOR))
    }
}

impl Narrowphase {
    /// Turn a sweep hit into the displacement correction that cancels the part of
    /// `displacement` past the time of impact, along the hit normal only.
    pub fn resolve_hit(hit: &SweepHit, displacement: DVec2, safety_factor: f64) -> Resolution {
        let unresolved = (1.0 - hit.toi).clamp(0.0, 1.0);
        let vector = hit.normal * displacement.abs() * unresolved * safety_factor;
        Resolution {
            vector,
            normal: NormalDirection::from_normal(hit.normal),
            toi: hit.toi,
        }
    }
}
