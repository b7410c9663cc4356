use glam::DVec2;

use crate::api::NarrowphaseApi;
use crate::types::*;
use crate::vector::VectorExt;

/// Stateless primitive tests. Also implements [`SweepApi`](crate::api::SweepApi) (see `sweep.rs`).
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn point_vs_box(p: DVec2, aabb: &Aabb) -> bool {
        p.x > aabb.x && p.x < aabb.right() && p.y > aabb.y && p.y < aabb.bottom()
    }

    fn point_vs_circle(p: DVec2, circle: &Circle) -> bool {
        (p - circle.center).length_squared() < circle.radius * circle.radius
    }

    fn box_vs_box(a: &Aabb, b: &Aabb) -> bool {
        a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
    }

    fn circle_vs_circle(a: &Circle, b: &Circle) -> bool {
        let rsum = a.radius + b.radius;
        (a.center - b.center).length_squared() < rsum * rsum
    }

    fn box_vs_circle(aabb: &Aabb, circle: &Circle) -> bool {
        // Nearest point of the box to the circle's center
        let nearest = DVec2::new(
            circle.center.x.min(aabb.right()).max(aabb.x),
            circle.center.y.min(aabb.bottom()).max(aabb.y),
        );
        Self::point_vs_circle(nearest, circle)
    }

    fn ray_vs_box(ray: &Segment, aabb: &Aabb) -> Option<SweepHit> {
        // Slab method. A zero direction component divides by zero on purpose: the
        // resulting ±inf never binds unless the origin is outside that slab.
        let origin = ray.start;
        let dir = ray.as_vector();

        let mut near_x = (aabb.x - origin.x) / dir.x;
        let mut far_x = (aabb.right() - origin.x) / dir.x;
        let mut near_y = (aabb.y - origin.y) / dir.y;
        let mut far_y = (aabb.bottom() - origin.y) / dir.y;

        // 0/0: origin sits exactly on a slab boundary while not moving on that axis.
        // That is a grazing contact, treated as no hit.
        if near_x.is_nan() || far_x.is_nan() || near_y.is_nan() || far_y.is_nan() {
            return None;
        }

        if near_x > far_x {
            core::mem::swap(&mut near_x, &mut far_x);
        }
        if near_y > far_y {
            core::mem::swap(&mut near_y, &mut far_y);
        }

        if near_x > far_y || near_y > far_x {
            return None;
        }

        let toi = near_x.max(near_y);
        let far = far_x.min(far_y);
        // Box entirely behind the ray origin
        if far < 0.0 {
            return None;
        }

        // Equal near times (exact corner approach) leave the normal at zero.
        let normal = if near_x > near_y {
            if dir.x < 0.0 { DVec2::X } else { DVec2::NEG_X }
        } else if near_y > near_x {
            if dir.y < 0.0 { DVec2::Y } else { DVec2::NEG_Y }
        } else {
            DVec2::ZERO
        };

        let contact = if toi.is_finite() { origin + dir * toi } else { origin };
        Some(SweepHit {
            toi,
            normal,
            contact,
        })
    }

    fn segment_vs_box(segment: &Segment, aabb: &Aabb) -> Option<SweepHit> {
        Self::ray_vs_box(segment, aabb).filter(|hit| hit.toi < 1.0)
    }

    fn segment_vs_circle(segment: &Segment, circle: &Circle) -> bool {
        let d = segment.as_vector();
        let to_center = circle.center - segment.start;
        // f64::max drops the NaN of a zero-length segment, so it degrades to a point test.
        let t = to_center.projection_scalar(d).max(0.0).min(1.0);
        let nearest = segment.start + d * t;
        (circle.center - nearest).length_squared() < circle.radius * circle.radius
    }
}
