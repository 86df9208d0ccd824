//! WASM-facing entry points for the wall network.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported method has a `*_internal` twin that keeps
//! Rust error types, so native tests never need a JS host.
//!
//! ```
//! let mut network = wall_wasm::WallNetwork::new_internal(0.2, 3.0, 1.0).unwrap();
//! let path = network
//!     .create_path_internal(&[0.0, 0.0, 4.0, 0.0, 4.0, 3.0])
//!     .unwrap();
//! assert_eq!(network.path_meshes_internal(path).len(), 2);
//! ```

use config::constants::WallConfig;
use glam::DVec2;
use serde::Serialize;
use wall_network::{prepare_import, DrawingUnits, GridKey, PathId, RawImport, WallPathManager};
use wasm_bindgen::prelude::*;

mod error;
mod mesh_handle;

pub use error::{BoundaryError, BoundaryResult};
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "wall-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: BoundaryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Reads `[x0, y0, x1, y1, ...]` into points.
pub fn points_from_flat(coords: &[f64]) -> BoundaryResult<Vec<DVec2>> {
    if coords.len() % 2 != 0 {
        return Err(BoundaryError::OddCoordinates(coords.len()));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|pair| DVec2::new(pair[0], pair[1]))
        .collect())
}

/// Outcome of a drawing import, serialized for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    /// Paths created from the merged fragments
    pub paths: Vec<PathId>,
    /// Geometric median of the imported points
    pub median: DVec2,
    /// Translation that centres the magnified model
    pub offset: DVec2,
}

/// A wall network owned by the JS host.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const network = new WallNetwork(0.2, 3.0, 1.0);
/// // const id = network.create_path(new Float64Array([0, 0, 4, 0, 4, 3]));
/// // for (const mesh of network.path_meshes(id)) upload(mesh);
/// ```
#[wasm_bindgen]
pub struct WallNetwork {
    manager: WallPathManager,
}

#[wasm_bindgen]
impl WallNetwork {
    /// Creates an empty network.
    ///
    /// # Errors
    /// Rejects non-positive thickness, height or magnification.
    #[wasm_bindgen(constructor)]
    pub fn new(thickness: f64, height: f64, magnification: f64) -> Result<WallNetwork, JsValue> {
        Self::new_internal(thickness, height, magnification).map_err(to_js)
    }

    /// Registers a polyline given as flat coordinates and returns its id.
    pub fn create_path(&mut self, coords: &[f64]) -> Result<u32, JsValue> {
        self.create_path_internal(coords).map(PathId::raw).map_err(to_js)
    }

    /// Moves the points of an existing path. Returns false if the update was
    /// refused and nothing changed.
    pub fn update_path(&mut self, path_id: u32, coords: &[f64]) -> Result<bool, JsValue> {
        self.update_path_internal(PathId(path_id), coords).map_err(to_js)
    }

    pub fn disable_path(&mut self, path_id: u32) -> bool {
        self.manager.disable_path(PathId(path_id))
    }

    pub fn enable_path(&mut self, path_id: u32) -> bool {
        self.manager.enable_path(PathId(path_id))
    }

    /// Hides every segment ending at the point. Returns how many were hidden.
    pub fn disable_point(&mut self, x: f64, y: f64) -> u32 {
        let key = self.point_key(DVec2::new(x, y));
        self.manager.disable_point(key) as u32
    }

    /// Shows every segment ending at the point.
    pub fn enable_point(&mut self, x: f64, y: f64) -> u32 {
        let key = self.point_key(DVec2::new(x, y));
        self.manager.enable_point(key) as u32
    }

    /// Imports drawing fragments given as JSON `[[[x, y], ...], ...]`.
    ///
    /// Returns a JSON [`ImportSummary`]. A failed import leaves the network
    /// untouched.
    pub fn import_fragments(&mut self, json: &str, units: &str) -> Result<String, JsValue> {
        self.import_fragments_internal(json, units)
            .and_then(|summary| serde_json::to_string(&summary).map_err(BoundaryError::from))
            .map_err(to_js)
    }

    /// Render buffers for every segment of a path.
    pub fn path_meshes(&self, path_id: u32) -> Vec<MeshHandle> {
        self.path_meshes_internal(PathId(path_id))
    }

    pub fn path_ids(&self) -> Vec<u32> {
        self.manager.path_ids().into_iter().map(PathId::raw).collect()
    }

    /// Pending change events as a JSON array, oldest first.
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        self.drain_events_json_internal().map_err(to_js)
    }

    /// Drops every path and segment.
    pub fn clear(&mut self) {
        self.manager.clear();
    }
}

impl WallNetwork {
    /// Host-only constructor.
    pub fn new_internal(thickness: f64, height: f64, magnification: f64) -> BoundaryResult<Self> {
        let config = WallConfig::new(thickness, height, magnification)?;
        Ok(Self {
            manager: WallPathManager::new(config),
        })
    }

    pub fn create_path_internal(&mut self, coords: &[f64]) -> BoundaryResult<PathId> {
        let points = points_from_flat(coords)?;
        self.manager
            .create_path(&points)
            .ok_or(BoundaryError::Rejected("too few, non-finite or coincident points"))
    }

    pub fn update_path_internal(&mut self, path: PathId, coords: &[f64]) -> BoundaryResult<bool> {
        let points = points_from_flat(coords)?;
        Ok(self.manager.update_path(&points, path))
    }

    pub fn import_fragments_internal(&mut self, json: &str, units: &str) -> BoundaryResult<ImportSummary> {
        let fragments: Vec<Vec<DVec2>> = serde_json::from_str(json)?;
        let units: DrawingUnits = units.parse()?;
        let prepared = prepare_import(RawImport { fragments, units }, self.manager.config().magnification)?;
        let paths = self.manager.create_paths(&prepared.paths);
        Ok(ImportSummary {
            paths,
            median: prepared.median,
            offset: prepared.offset,
        })
    }

    pub fn path_meshes_internal(&self, path: PathId) -> Vec<MeshHandle> {
        self.manager
            .segments_for_path(path)
            .into_iter()
            .map(|(id, segment)| {
                let owner = self.manager.segment_owner(id).unwrap_or(path);
                MeshHandle::from_segment(id, owner, segment)
            })
            .collect()
    }

    pub fn drain_events_json_internal(&mut self) -> BoundaryResult<String> {
        Ok(serde_json::to_string(&self.manager.drain_events())?)
    }

    /// Read access for hosts embedding the crate natively.
    pub fn manager(&self) -> &WallPathManager {
        &self.manager
    }

    // Segment endpoints live in magnified space.
    fn point_key(&self, point: DVec2) -> GridKey {
        GridKey::from_point(point * self.manager.config().magnification)
    }
}

#[cfg(test)]
mod tests;
