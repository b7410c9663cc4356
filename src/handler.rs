//! Frame-level collision handling.
//!
//! Candidates are always processed earliest-first. Each one is re-resolved on the
//! velocity left by the contacts before it; a candidate that no longer collides is
//! skipped.

use log::trace;

use crate::api::{Collidable, ResolverApi};
use crate::resolver::{Candidate, CollisionResolver};
use crate::types::*;

/// One contact that changed a body's velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedContact {
    /// Index into the target slice.
    pub index: usize,
    pub toi: f64,
    pub normal: NormalDirection,
}

#[derive(Clone, Debug)]
pub struct CollisionHandler {
    resolver: CollisionResolver,
}

impl CollisionHandler {
    pub fn new(resolver: CollisionResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    /// Resolve every body against the terrain. The outer list follows `bodies`.
    pub fn bodies_vs_terrain<C: Collidable>(
        &self,
        bodies: &mut [C],
        terrain: &[TerrainBlock],
    ) -> Vec<Vec<ResolvedContact>> {
        bodies
            .iter_mut()
            .map(|body| self.body_vs_terrain(body, terrain))
            .collect()
    }

    /// Resolve one body against the terrain, earliest contact first.
    ///
    /// Ground blocks only stop bodies arriving from above; from any other side the
    /// body passes through.
    pub fn body_vs_terrain<C: Collidable + ?Sized>(
        &self,
        body: &mut C,
        terrain: &[TerrainBlock],
    ) -> Vec<ResolvedContact> {
        let mut resolved = Vec::new();
        for (block, res) in self.terrain_contacts(body, terrain) {
            let kind = terrain[block].kind;
            body.on_contact(Contact::Terrain {
                kind,
                normal: res.normal,
            });
            resolved.push(ResolvedContact {
                index: block,
                toi: res.toi,
                normal: res.normal,
            });
        }
        resolved
    }

    /// Resolve `body` against moving entities.
    ///
    /// After each contact the body is re-resolved against the terrain; any terrain
    /// correction is applied to the mover as well, since it is pushing the body.
    pub fn body_vs_movers<C, M>(&self, body: &mut C, movers: &mut [M], terrain: &[TerrainBlock]) -> Vec<ResolvedContact>
    where
        C: Collidable + ?Sized,
        M: Collidable,
    {
        let snapshot: Vec<Body> = movers.iter().map(|m| *m.body()).collect();
        let candidates = self.resolver.detect_sorted_vs_moving(body.body(), &snapshot);

        let mut resolved = Vec::new();
        for Candidate { index, .. } in candidates {
            let mover = &mut movers[index];
            let Some(res) = self.resolver.resolve_vs_moving(body.body(), mover.body()) else {
                trace!("mover #{index} no longer in the way");
                continue;
            };
            body.body_mut().velocity += res.vector;

            for (_, squeeze) in self.terrain_contacts(body, terrain) {
                mover.body_mut().velocity += squeeze.vector;
                mover.on_contact(Contact::Squeezed {
                    normal: squeeze.normal,
                });
            }

            body.on_contact(Contact::Mover { normal: res.normal });
            mover.on_contact(Contact::Struck { normal: res.normal });
            resolved.push(ResolvedContact {
                index,
                toi: res.toi,
                normal: res.normal,
            });
        }
        resolved
    }

    /// Detection only: notify `body` and every sensor it touches this frame, earliest
    /// first. No velocity is changed.
    pub fn body_vs_sensors<C, S>(
        &self,
        body: &mut C,
        sensors: &mut [S],
        sensors_move: bool,
    ) -> Vec<ResolvedContact>
    where
        C: Collidable + ?Sized,
        S: Collidable,
    {
        let snapshot: Vec<Body> = sensors.iter().map(|s| *s.body()).collect();
        let candidates = if sensors_move {
            self.resolver.detect_sorted_vs_moving(body.body(), &snapshot)
        } else {
            let boxes: Vec<Aabb> = snapshot.iter().map(Body::aabb).collect();
            self.resolver.detect_sorted_vs_static(body.body(), &boxes)
        };
        candidates
            .into_iter()
            .map(|Candidate { index, toi, normal }| {
                body.on_contact(Contact::Sensor);
                sensors[index].on_contact(Contact::Sensor);
                ResolvedContact { index, toi, normal }
            })
            .collect()
    }

    /// Sorted terrain contacts, applying each resolution to `body` as it goes.
    fn terrain_contacts<C: Collidable + ?Sized>(
        &self,
        body: &mut C,
        terrain: &[TerrainBlock],
    ) -> Vec<(usize, Resolution)> {
        let boxes: Vec<Aabb> = terrain.iter().map(|b| b.aabb).collect();
        let candidates = self.resolver.detect_sorted_vs_static(body.body(), &boxes);

        let mut out = Vec::with_capacity(candidates.len());
        for Candidate { index, .. } in candidates {
            let block = &terrain[index];
            if block.kind == TerrainKind::Ground && body.body().aabb().bottom() > block.aabb.y {
                trace!("ground #{index}: passing through from below or the side");
                continue;
            }
            let Some(res) = self.resolver.resolve_vs_static(body.body(), &block.aabb) else {
                continue;
            };
            body.body_mut().velocity += res.vector;
            out.push((index, res));
        }
        out
    }
}
