use crate::types::Aabb;

/// Errors raised while building or loading a [`ResolverConfig`](crate::config::ResolverConfig)
/// or a [`Level`](crate::config::Level).
///
/// Collision queries themselves never fail; they report "no collision" instead.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Delta time must be finite and strictly positive.
    #[error("invalid delta time {0}: expected a finite value > 0")]
    InvalidDeltaTime(f64),

    /// Safety factor must be finite and at least 1.
    #[error("invalid safety factor {0}: expected a finite value >= 1")]
    InvalidSafetyFactor(f64),

    /// Terrain blocks need finite coordinates and non-negative sizes.
    #[error("invalid terrain block #{index}: {aabb:?}")]
    InvalidBlock { index: usize, aabb: Aabb },
}
