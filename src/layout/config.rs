//! Layout configuration
//!
//! Spacing and offsets used to map lanes and depths to pixel coordinates.
//! Defaults match the dashboard's graph configuration.

use thiserror::Error;

use crate::model::Point;

/// Padding around the graph content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 48.0,
            bottom: 80.0,
            left: 40.0,
            right: 40.0,
        }
    }
}

/// Errors reported by [`LayoutConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error(
        "context offset {offset} overlaps the commit node (needs at least {minimum} for radius {radius})"
    )]
    ContextOverlap {
        offset: f64,
        minimum: f64,
        radius: f64,
    },
}

/// Layout constants injected into the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between lanes
    pub lane_spacing: f64,
    /// Vertical distance between depths
    pub depth_spacing: f64,
    /// Position of lane 0, depth 0
    pub origin: Point,
    /// Offset of a context node relative to its commit node
    pub context_offset: Point,
    /// Node radius, used for overlap checks and bounds
    pub node_radius: f64,
    pub padding: Padding,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_spacing: 64.0,
            depth_spacing: 160.0,
            origin: Point::new(200.0, 100.0),
            context_offset: Point::new(128.0, 20.0),
            node_radius: 20.0,
            padding: Padding::default(),
        }
    }
}

impl LayoutConfig {
    /// Check that the configuration yields a usable layout
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        positive("lane_spacing", self.lane_spacing)?;
        positive("depth_spacing", self.depth_spacing)?;
        positive("node_radius", self.node_radius)?;

        for (name, value) in [
            ("origin.x", self.origin.x),
            ("origin.y", self.origin.y),
            ("context_offset.y", self.context_offset.y),
            ("padding.top", self.padding.top),
            ("padding.bottom", self.padding.bottom),
            ("padding.left", self.padding.left),
            ("padding.right", self.padding.right),
        ] {
            if !value.is_finite() {
                return Err(LayoutConfigError::NotFinite { name, value });
            }
        }

        let minimum = self.node_radius * 2.0;
        if !self.context_offset.x.is_finite() || self.context_offset.x < minimum {
            return Err(LayoutConfigError::ContextOverlap {
                offset: self.context_offset.x,
                minimum,
                radius: self.node_radius,
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), LayoutConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutConfigError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let config = LayoutConfig {
            lane_spacing: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutConfigError::NonPositive {
                name: "lane_spacing",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_origin_rejected() {
        let config = LayoutConfig {
            origin: Point::new(f64::NAN, 0.0),
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutConfigError::NotFinite {
                name: "origin.x",
                ..
            })
        ));
    }

    #[test]
    fn test_overlapping_context_offset_rejected() {
        let config = LayoutConfig {
            context_offset: Point::new(30.0, 0.0),
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "context offset 30 overlaps the commit node (needs at least 40 for radius 20)"
        );
    }
}
