//! # Drawing Import
//!
//! Glue between an external drawing loader and the path manager.
//!
//! The loader hands over raw polyline fragments in drawing units. This module
//! converts them to model units, stitches them with [`PathMerger`], and
//! computes the offset that centres the model on its geometric median.
//! Nothing here touches manager state, so a failed import leaves the current
//! wall network as it was.


use crate::error::{NetworkError, NetworkResult};
use crate::merge::PathMerger;
use config::constants::{MEDIAN_MAX_ITERATIONS, MEDIAN_TOLERANCE};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Length unit declared in a drawing header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingUnits {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Unitless,
    Other,
}

impl DrawingUnits {
    /// Multiplier from drawing units to model units.
    ///
    /// `Other` maps to zero and is rejected by [`prepare_import`].
    pub fn scale(self) -> f64 {
        match self {
            Self::Millimeters | Self::Unitless => 0.0254,
            Self::Centimeters => 0.01,
            Self::Meters => 1.0,
            Self::Kilometers => 10.0,
            Self::Other => 0.0,
        }
    }
}

impl FromStr for DrawingUnits {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" | "millimeters" => Ok(Self::Millimeters),
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meters" => Ok(Self::Meters),
            "km" | "kilometers" => Ok(Self::Kilometers),
            "" | "unitless" => Ok(Self::Unitless),
            "other" => Ok(Self::Other),
            other => Err(NetworkError::import(format!("unknown drawing units '{other}'"))),
        }
    }
}

/// Geometric median of a point set by Weiszfeld iteration.
///
/// Starts from the centroid and stops after [`MEDIAN_MAX_ITERATIONS`] steps
/// or once a step moves less than [`MEDIAN_TOLERANCE`]. Points closer than
/// the tolerance to the current guess are left out of that step.
///
/// Returns `None` for an empty set.
pub fn geometric_median(points: &[DVec2]) -> Option<DVec2> {
    if points.is_empty() {
        return None;
    }
    let mut guess = points.iter().copied().sum::<DVec2>() / points.len() as f64;

    for _ in 0..MEDIAN_MAX_ITERATIONS {
        let mut numerator = DVec2::ZERO;
        let mut denominator = 0.0;
        for p in points {
            let distance = guess.distance(*p);
            if distance > MEDIAN_TOLERANCE {
                numerator += *p / distance;
                denominator += 1.0 / distance;
            }
        }
        if denominator == 0.0 {
            break;
        }
        let next = numerator / denominator;
        if next.distance(guess) < MEDIAN_TOLERANCE {
            break;
        }
        guess = next;
    }
    Some(guess)
}

/// Raw fragments as produced by a drawing loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImport {
    /// Polylines in drawing units
    pub fragments: Vec<Vec<DVec2>>,
    /// Unit declared by the drawing
    pub units: DrawingUnits,
}

/// Merged paths ready for the path manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedImport {
    /// Merged paths in model units
    pub paths: Vec<Vec<DVec2>>,
    /// Geometric median of all merged points, in model units
    pub median: DVec2,
    /// Translation the host applies to centre the magnified model
    pub offset: DVec2,
}

/// Converts a raw drawing into merged model-unit paths.
///
/// # Errors
///
/// Fails when the units have no scale or no fragment survives merging.
pub fn prepare_import(raw: RawImport, magnification: f64) -> NetworkResult<PreparedImport> {
    let scale = raw.units.scale();
    if scale <= 0.0 {
        return Err(NetworkError::import(format!(
            "drawing units {:?} have no model scale",
            raw.units
        )));
    }

    let paths = merge_scaled(raw.fragments, scale);
    let points: Vec<DVec2> = paths.iter().flatten().copied().collect();
    let median = geometric_median(&points).ok_or_else(|| NetworkError::import("drawing has no polylines"))?;

    log::info!(
        "prepared import: {} paths, {} points, median {}",
        paths.len(),
        points.len(),
        median
    );

    Ok(PreparedImport {
        paths,
        median,
        offset: -median * magnification,
    })
}

/// Scales fragments into model units and merges them.
pub(crate) fn merge_scaled(fragments: Vec<Vec<DVec2>>, scale: f64) -> Vec<Vec<DVec2>> {
    let scaled = fragments
        .into_iter()
        .map(|f| f.into_iter().map(|p| p * scale).collect())
        .collect();
    PathMerger::new().merge(scaled)
}
