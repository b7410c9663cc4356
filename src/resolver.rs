use glam::DVec2;
use log::{debug, trace};

use crate::api::{ResolverApi, SweepApi};
use crate::config::ResolverConfig;
use crate::error::ConfigError;
use crate::narrowphase::Narrowphase;
use crate::types::*;

/// A target the source will touch during this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Index into the target slice passed to the detector.
    pub index: usize,
    /// Time of impact in [0,1).
    pub toi: f64,
    /// Side of the target that is hit first.
    pub normal: NormalDirection,
}

impl Candidate {
    fn new(index: usize, hit: &SweepHit) -> Self {
        Self {
            index,
            toi: hit.toi,
            normal: NormalDirection::from_normal(hit.normal),
        }
    }
}

/// Per-frame collision resolver working on velocities (units per second).
///
/// Velocities are scaled by `delta_time` into this frame's displacement before
/// sweeping, and resolution vectors are scaled back into velocity space so callers
/// can add them straight onto a body's velocity before integrating movement.
#[derive(Clone, Debug)]
pub struct CollisionResolver {
    cfg: ResolverConfig,
}

impl CollisionResolver {
    pub fn new(cfg: ResolverConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        debug!(
            "collision resolver: delta_time={} safety_factor={}",
            cfg.delta_time, cfg.safety_factor
        );
        Ok(Self { cfg })
    }

    /// Shorthand for a default config with the given frame time.
    pub fn with_delta_time(delta_time: f64) -> Result<Self, ConfigError> {
        Self::new(ResolverConfig::with_delta_time(delta_time))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.cfg
    }

    pub fn delta_time(&self) -> f64 {
        self.cfg.delta_time
    }

    fn displacement(&self, velocity: DVec2) -> DVec2 {
        velocity * self.cfg.delta_time
    }

    fn to_velocity_space(&self, mut res: Resolution) -> Resolution {
        res.vector /= self.cfg.delta_time;
        res
    }

    fn sorted(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        // Stable: equal times keep their input order
        candidates.sort_by(|a, b| a.toi.total_cmp(&b.toi));
        candidates
    }
}

impl ResolverApi for CollisionResolver {
    fn detect_sorted_vs_static(&self, source: &Body, targets: &[Aabb]) -> Vec<Candidate> {
        let aabb = source.aabb();
        let disp = self.displacement(source.velocity);
        let candidates = targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                let hit = Narrowphase::sweep_box_vs_static_box(&aabb, disp, target)?;
                trace!("candidate static #{index}: toi={:.6} normal={}", hit.toi, hit.normal);
                Some(Candidate::new(index, &hit))
            })
            .collect();
        Self::sorted(candidates)
    }

    fn detect_sorted_vs_moving(&self, source: &Body, targets: &[Body]) -> Vec<Candidate> {
        let aabb = source.aabb();
        let disp = self.displacement(source.velocity);
        let candidates = targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                let hit = Narrowphase::sweep_box_vs_moving_box(
                    &aabb,
                    disp,
                    &target.aabb(),
                    self.displacement(target.velocity),
                )?;
                trace!("candidate moving #{index}: toi={:.6} normal={}", hit.toi, hit.normal);
                Some(Candidate::new(index, &hit))
            })
            .collect();
        Self::sorted(candidates)
    }

    fn resolve_vs_static(&self, source: &Body, target: &Aabb) -> Option<Resolution> {
        let disp = self.displacement(source.velocity);
        let hit = Narrowphase::sweep_box_vs_static_box(&source.aabb(), disp, target)?;
        let res = self.to_velocity_space(Narrowphase::resolve_hit(&hit, disp, self.cfg.safety_factor));
        trace!("resolved static: {:?} vector={}", res.normal, res.vector);
        Some(res)
    }

    fn resolve_vs_moving(&self, source: &Body, target: &Body) -> Option<Resolution> {
        let relative = self.displacement(source.velocity - target.velocity);
        let hit = Narrowphase::sweep_box_vs_static_box(&source.aabb(), relative, &target.aabb())?;
        let res = self.to_velocity_space(Narrowphase::resolve_hit(&hit, relative, self.cfg.safety_factor));
        trace!("resolved moving: {:?} vector={}", res.normal, res.vector);
        Some(res)
    }
}
