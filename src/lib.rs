//! swept2d: continuous (swept) AABB collision detection and resolution for 2D games

pub mod types;
pub mod api;
pub mod vector;
pub mod narrowphase;
pub mod sweep;
pub mod resolver;
pub mod handler;
pub mod physics;
pub mod config;
pub mod error;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::vector::VectorExt;
pub use crate::narrowphase::Narrowphase;
pub use crate::sweep::RESOLUTION_SAFETY_FACTOR;
pub use crate::resolver::{Candidate, CollisionResolver};
pub use crate::handler::{CollisionHandler, ResolvedContact};
pub use crate::config::{Level, ResolverConfig};
pub use crate::error::ConfigError;
