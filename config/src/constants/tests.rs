//! Tests for the runtime wall configuration.

use super::*;

/// Ensures default dimensions are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = WallConfig::default();
    assert!(cfg.wall_thickness > 0.0);
    assert!(cfg.wall_height > 0.0);
    assert_eq!(cfg.magnification, DEFAULT_MAGNIFICATION);
    assert_eq!(WallConfig::new(cfg.wall_thickness, cfg.wall_height, cfg.magnification), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        WallConfig::new(-1.0, 3.0, 1.0).unwrap_err(),
        ConfigError::InvalidThickness(-1.0)
    );
    assert_eq!(
        WallConfig::new(0.2, 0.0, 1.0).unwrap_err(),
        ConfigError::InvalidHeight(0.0)
    );
    assert_eq!(
        WallConfig::new(0.2, 3.0, 0.0).unwrap_err(),
        ConfigError::InvalidMagnification(0.0)
    );
    assert!(WallConfig::new(f64::NAN, 3.0, 1.0).is_err());
    assert!(WallConfig::new(0.2, f64::INFINITY, 1.0).is_err());
}

#[test]
fn half_thickness_splits_wall() {
    let cfg = WallConfig::new(2.0, 3.0, 1.0).unwrap();
    assert_eq!(cfg.half_thickness(), 1.0);
}

#[test]
fn error_display_names_field() {
    let message = ConfigError::InvalidHeight(-2.0).to_string();
    assert!(message.contains("wall_height"));
    assert!(message.contains("-2"));
}
