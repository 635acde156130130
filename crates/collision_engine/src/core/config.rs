//! # Collision Configuration
//!
//! Startup configuration for the collision core: the attribute table used to
//! seed the [`AttributeRegistry`](crate::physics::AttributeRegistry), the
//! SAT bias, and logging behaviour of the detection pass.
//!
//! Every field has a default, so a partial file only overrides what it names:
//!
//! ```toml
//! sat_epsilon = 1e-6
//!
//! [[attributes]]
//! name = "Pickup"
//! attribute = 8
//! mask = 1
//! ```

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// One named collision category: what it is and what it reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    /// Human-readable category name ("Player", "Enemy", ...)
    pub name: String,
    /// Attribute bits: what a collider of this category *is*
    pub attribute: u32,
    /// Mask bits: which attributes a collider of this category reacts to
    pub mask: u32,
}

impl AttributeEntry {
    /// Create a new attribute entry
    pub fn new(name: impl Into<String>, attribute: u32, mask: u32) -> Self {
        Self {
            name: name.into(),
            attribute,
            mask,
        }
    }
}

/// # Collision Configuration
///
/// Read once at startup; the detection pass never reloads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Bias added to every `|R[i][j]|` term of the OBB separating-axis test
    pub sat_epsilon: f32,

    /// Emit a trace log line for every Enter/Exit transition
    pub log_transitions: bool,

    /// Category table used to seed the attribute registry (first entry wins
    /// on duplicate names). Must stay the last field: TOML emits table
    /// arrays after plain keys.
    pub attributes: Vec<AttributeEntry>,
}

impl CollisionConfig {
    /// Bias used when no configuration overrides it: the smallest normal
    /// `f32`, just enough to keep projection radii of degenerate cross axes
    /// from collapsing to zero.
    pub const DEFAULT_SAT_EPSILON: f32 = f32::MIN_POSITIVE;

    /// The built-in category table
    ///
    /// | name   | attribute | mask   |
    /// |--------|-----------|--------|
    /// | Player | 0b0001    | 0b1010 |
    /// | Enemy  | 0b0010    | 0b1101 |
    /// | Weapon | 0b0100    | 0b0010 |
    pub fn default_attributes() -> Vec<AttributeEntry> {
        vec![
            AttributeEntry::new("Player", 0b0001, 0b1010),
            AttributeEntry::new("Enemy", 0b0010, 0b1101),
            AttributeEntry::new("Weapon", 0b0100, 0b0010),
        ]
    }

    /// Builder pattern: append an attribute entry
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: u32, mask: u32) -> Self {
        self.attributes.push(AttributeEntry::new(name, attribute, mask));
        self
    }

    /// Builder pattern: override the SAT bias
    pub fn with_sat_epsilon(mut self, epsilon: f32) -> Self {
        self.sat_epsilon = epsilon;
        self
    }

    /// SAT bias, falling back to the default unless finite and positive
    pub fn effective_sat_epsilon(&self) -> f32 {
        if self.sat_epsilon.is_finite() && self.sat_epsilon > 0.0 {
            self.sat_epsilon
        } else {
            log::warn!(
                "Ignoring invalid sat_epsilon {}; using {}",
                self.sat_epsilon,
                Self::DEFAULT_SAT_EPSILON
            );
            Self::DEFAULT_SAT_EPSILON
        }
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            sat_epsilon: Self::DEFAULT_SAT_EPSILON,
            log_transitions: true,
            attributes: Self::default_attributes(),
        }
    }
}

impl Config for CollisionConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let config = CollisionConfig::default();
        let names: Vec<_> = config.attributes.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Player", "Enemy", "Weapon"]);
        assert_eq!(config.attributes[1], AttributeEntry::new("Enemy", 0b0010, 0b1101));
        assert_eq!(config.sat_epsilon, f32::MIN_POSITIVE);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CollisionConfig::from_toml_str("log_transitions = false\n").unwrap();
        assert!(!config.log_transitions);
        assert_eq!(config.attributes, CollisionConfig::default_attributes());
    }

    #[test]
    fn test_toml_attribute_table() {
        let document = r#"
            sat_epsilon = 0.000001

            [[attributes]]
            name = "Pickup"
            attribute = 8
            mask = 1
        "#;
        let config = CollisionConfig::from_toml_str(document).unwrap();
        assert_eq!(config.attributes, vec![AttributeEntry::new("Pickup", 8, 1)]);
        assert!((config.sat_epsilon - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn test_ron_document() {
        let document = r#"(
            attributes: [(name: "Wall", attribute: 16, mask: 4294967295)],
            log_transitions: false,
        )"#;
        let config = CollisionConfig::from_ron_str(document).unwrap();
        assert_eq!(config.attributes[0].mask, u32::MAX);
        assert_eq!(config.sat_epsilon, CollisionConfig::DEFAULT_SAT_EPSILON);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join("collision_engine_config_test.toml");
        let config = CollisionConfig::default().with_attribute("Wall", 0b1000, 0b0111);

        config.save_to_file(&path).unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.attributes, config.attributes);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = CollisionConfig::load_from_file("collision.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_)) | Err(ConfigError::UnsupportedFormat(_))));

        let result = CollisionConfig::default().save_to_file("collision.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_epsilon_falls_back() {
        for epsilon in [f32::NAN, f32::INFINITY, -1e-6, 0.0] {
            let config = CollisionConfig::default().with_sat_epsilon(epsilon);
            assert_eq!(config.effective_sat_epsilon(), CollisionConfig::DEFAULT_SAT_EPSILON);
        }
        assert_eq!(CollisionConfig::default().with_sat_epsilon(1e-6).effective_sat_epsilon(), 1e-6);
    }
}
