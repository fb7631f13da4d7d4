//! Engine configuration.
//!
//! Hosts configure the engine once at startup:
//! - `GeometryConfig`: parameters of the area shapes (cone angle, line width)
//! - `SpellConfig`: geometry plus an optional RNG seed
//!
//! Configuration can be built in code with the `with_*` methods or loaded
//! from JSON with [`SpellConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// Largest `max_effective_distance` a configuration may ask for.
///
/// Block scans grow with the cube of the reach, so this also bounds the
/// work a single burst can do.
pub const MAX_EFFECTIVE_DISTANCE_LIMIT: f64 = 64.0;

/// Parameters of the area-of-effect shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Half of the cone's opening angle, in degrees. Must be in `(0, 180]`.
    pub cone_half_angle_degrees: f64,

    /// How far from its axis a line still reaches. Must be positive and no
    /// larger than `max_effective_distance`.
    pub line_half_width: f64,

    /// Upper bound on any effective distance. Must be in
    /// `(0, MAX_EFFECTIVE_DISTANCE_LIMIT]`.
    pub max_effective_distance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cone_half_angle_degrees: 45.0,
            line_half_width: 0.75,
            max_effective_distance: 32.0,
        }
    }
}

impl GeometryConfig {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        let half_angle = self.cone_half_angle_degrees;
        if !(half_angle > 0.0 && half_angle <= 180.0) {
            return Err(SpellError::InvalidConfig {
                field: "cone_half_angle_degrees",
                reason: format!("{half_angle} is outside (0, 180]"),
            });
        }
        if !(self.line_half_width > 0.0 && self.line_half_width.is_finite()) {
            return Err(SpellError::InvalidConfig {
                field: "line_half_width",
                reason: format!("{} is not a positive width", self.line_half_width),
            });
        }
        let max_distance = self.max_effective_distance;
        if !(max_distance > 0.0 && max_distance <= MAX_EFFECTIVE_DISTANCE_LIMIT) {
            return Err(SpellError::InvalidConfig {
                field: "max_effective_distance",
                reason: format!("{max_distance} is outside (0, {MAX_EFFECTIVE_DISTANCE_LIMIT}]"),
            });
        }
        if self.line_half_width > max_distance {
            return Err(SpellError::InvalidConfig {
                field: "line_half_width",
                reason: format!(
                    "{} is wider than the maximum distance {max_distance}",
                    self.line_half_width
                ),
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Seed for phrase resolution. `None` seeds from OS entropy per context.
    pub seed: Option<u64>,

    /// Area shape parameters.
    pub geometry: GeometryConfig,
}

impl SpellConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SpellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }

    /// Use a fixed seed so casts are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cone half-angle in degrees.
    #[must_use]
    pub fn with_cone_half_angle(mut self, degrees: f64) -> Self {
        self.geometry.cone_half_angle_degrees = degrees;
        self
    }

    /// Set the line half-width.
    #[must_use]
    pub fn with_line_half_width(mut self, width: f64) -> Self {
        self.geometry.line_half_width = width;
        self
    }

    /// Set the maximum effective distance.
    #[must_use]
    pub fn with_max_effective_distance(mut self, distance: f64) -> Self {
        self.geometry.max_effective_distance = distance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpellConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.geometry.cone_half_angle_degrees, 45.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SpellConfig::default()
            .with_seed(123)
            .with_cone_half_angle(30.0)
            .with_line_half_width(1.0)
            .with_max_effective_distance(10.0);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.geometry.cone_half_angle_degrees, 30.0);
        assert_eq!(config.geometry.line_half_width, 1.0);
        assert_eq!(config.geometry.max_effective_distance, 10.0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SpellConfig::from_json(r#"{ "seed": 7, "geometry": { "line_half_width": 2.0 } }"#)
            .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.geometry.line_half_width, 2.0);
        assert_eq!(config.geometry.cone_half_angle_degrees, 45.0);
    }

    #[test]
    fn test_from_json_rejects_bad_angle() {
        let err = SpellConfig::from_json(r#"{ "geometry": { "cone_half_angle_degrees": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SpellError::InvalidConfig { field: "cone_half_angle_degrees", .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SpellConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, SpellError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_width_and_distance() {
        assert!(SpellConfig::default().with_line_half_width(0.0).validate().is_err());
        assert!(SpellConfig::default().with_max_effective_distance(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_upper_bounds() {
        let at_limit =
            SpellConfig::default().with_max_effective_distance(MAX_EFFECTIVE_DISTANCE_LIMIT);
        assert!(at_limit.validate().is_ok());

        let huge = SpellConfig::default()
            .with_line_half_width(1e7)
            .with_max_effective_distance(1e7);
        assert!(matches!(
            huge.validate(),
            Err(SpellError::InvalidConfig { field: "max_effective_distance", .. })
        ));

        let wide = SpellConfig::default()
            .with_line_half_width(10.0)
            .with_max_effective_distance(8.0);
        assert!(matches!(
            wide.validate(),
            Err(SpellError::InvalidConfig { field: "line_half_width", .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_oversized_geometry() {
        let err = SpellConfig::from_json(
            r#"{ "geometry": { "line_half_width": 1e7, "max_effective_distance": 1e7 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SpellError::InvalidConfig { .. }));
    }
}
