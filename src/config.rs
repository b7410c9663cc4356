use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sweep::RESOLUTION_SAFETY_FACTOR;
use crate::types::TerrainBlock;

/// Frame-level settings for the [`CollisionResolver`](crate::resolver::CollisionResolver).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Seconds elapsed this frame; velocities are scaled by it before sweeping.
    pub delta_time: f64,
    /// Multiplier applied to every resolution vector (see [`RESOLUTION_SAFETY_FACTOR`]).
    pub safety_factor: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            delta_time: 1.0 / 60.0,
            safety_factor: RESOLUTION_SAFETY_FACTOR,
        }
    }
}

impl ResolverConfig {
    pub fn with_delta_time(delta_time: f64) -> Self {
        Self {
            delta_time,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.delta_time.is_finite() && self.delta_time > 0.0) {
            return Err(ConfigError::InvalidDeltaTime(self.delta_time));
        }
        if !(self.safety_factor.is_finite() && self.safety_factor >= 1.0) {
            return Err(ConfigError::InvalidSafetyFactor(self.safety_factor));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Static scene description: resolver settings plus the terrain to collide with.
///
/// ```toml
/// [resolver]
/// delta_time = 0.016666666666666666
///
/// [[terrain]]
/// kind = "ground"
/// aabb = { x = 0.0, y = 200.0, w = 640.0, h = 20.0 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub resolver: ResolverConfig,
    pub terrain: Vec<TerrainBlock>,
}

impl Level {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()?;
        for (index, block) in self.terrain.iter().enumerate() {
            let a = block.aabb;
            let finite = a.x.is_finite() && a.y.is_finite() && a.w.is_finite() && a.h.is_finite();
            if !finite || a.w < 0.0 || a.h < 0.0 {
                return Err(ConfigError::InvalidBlock { index, aabb: a });
            }
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let level: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        level.validate()?;
        Ok(level)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Aabb, TerrainKind};

    #[test]
    fn test_default_is_valid() {
        let cfg = ResolverConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.safety_factor, RESOLUTION_SAFETY_FACTOR);
    }

    #[test]
    fn test_from_toml_partial() {
        let cfg = ResolverConfig::from_toml_str("delta_time = 0.02\n").unwrap();
        assert_eq!(cfg.delta_time, 0.02);
        assert_eq!(cfg.safety_factor, RESOLUTION_SAFETY_FACTOR);
    }

    #[test]
    fn test_rejects_bad_delta_time() {
        let err = ResolverConfig::from_toml_str("delta_time = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDeltaTime(_)));
        assert!(ResolverConfig::with_delta_time(f64::NAN).validate().is_err());
        assert!(ResolverConfig::with_delta_time(-1.0).validate().is_err());
    }

    #[test]
    fn test_rejects_shrinking_safety_factor() {
        let err = ResolverConfig::from_toml_str("safety_factor = 0.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSafetyFactor(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = ResolverConfig::from_toml_str("delta_time = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ResolverConfig::load_from_file("/nonexistent/swept2d/resolver.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    const LEVEL: &str = r#"
[resolver]
delta_time = 0.02

[[terrain]]
kind = "ground"
aabb = { x = 0.0, y = 200.0, w = 640.0, h = 20.0 }

[[terrain]]
kind = "obstacle"
aabb = { x = -20.0, y = 0.0, w = 20.0, h = 220.0 }
"#;

    #[test]
    fn test_level_from_toml() {
        let level = Level::from_toml_str(LEVEL).unwrap();
        assert_eq!(level.resolver.delta_time, 0.02);
        assert_eq!(level.resolver.safety_factor, RESOLUTION_SAFETY_FACTOR);
        assert_eq!(
            level.terrain,
            vec![
                TerrainBlock::ground(Aabb::new(0.0, 200.0, 640.0, 20.0)),
                TerrainBlock::obstacle(Aabb::new(-20.0, 0.0, 20.0, 220.0)),
            ]
        );
        assert_eq!(level.terrain[1].kind, TerrainKind::Obstacle);
    }

    #[test]
    fn test_level_survives_toml_round_trip() {
        let level = Level::from_toml_str(LEVEL).unwrap();
        let text = level.to_toml_string().unwrap();
        assert_eq!(Level::from_toml_str(&text).unwrap(), level);
    }

    #[test]
    fn test_level_save_then_load() {
        let level = Level::from_toml_str(LEVEL).unwrap();
        let path = std::env::temp_dir().join(format!("swept2d-level-{}.toml", std::process::id()));
        level.save_to_file(&path).unwrap();
        let loaded = Level::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), level);
    }

    #[test]
    fn test_empty_level_uses_defaults() {
        let level = Level::from_toml_str("").unwrap();
        assert_eq!(level, Level::default());
        assert!(level.terrain.is_empty());
    }

    #[test]
    fn test_level_rejects_bad_blocks() {
        let err = Level::from_toml_str(
            "[[terrain]]\nkind = \"ground\"\naabb = { x = 0.0, y = 0.0, w = -5.0, h = 1.0 }\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBlock { index: 0, .. }));

        let err = Level::from_toml_str("[[terrain]]\nkind = \"lava\"\naabb = { x = 0.0, y = 0.0, w = 1.0, h = 1.0 }\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Level::from_toml_str("[resolver]\ndelta_time = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDeltaTime(_)));
    }
}
