//! Window Geometry Repository
//!
//! Loads and saves the window placement (position.json). Loaded once at
//! startup, written on close and (debounced) on move/resize.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::scaling::ScalingProvider;
use super::store::{read_json, write_json, JsonFileStore};
use crate::domain::{DomainResult, ScreenSize, WindowGeometry};

/// Window measurements as reported by the platform, everything in
/// physical pixels
#[derive(Debug, Clone, Copy)]
pub struct RawGeometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

// On-disk shape. Per-field fallback keeps a partially valid file useful
// instead of discarding it outright.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredGeometry {
    width: Option<i32>,
    height: Option<i32>,
    x: Option<i32>,
    y: Option<i32>,
}

pub struct GeometryRepository {
    path: PathBuf,
    current: Mutex<Option<WindowGeometry>>,
}

impl GeometryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: Mutex::new(None),
        }
    }

    /// Read the stored geometry.
    ///
    /// A missing or corrupt file yields the centered default for `screen`,
    /// and a first run seeds the file with it. Stored values are passed
    /// through as-is: the minimum window size is enforced at interactive
    /// resize, not here.
    pub async fn load(&self, screen: ScreenSize) -> WindowGeometry {
        let fallback = WindowGeometry::centered_on(screen);
        let geometry = match read_json::<StoredGeometry>(&self.path) {
            Some(stored) => WindowGeometry {
                width: stored.width.unwrap_or(fallback.width),
                height: stored.height.unwrap_or(fallback.height),
                x: stored.x.unwrap_or(fallback.x),
                y: stored.y.unwrap_or(fallback.y),
            },
            None => {
                if let Err(e) = write_json(&self.path, &fallback) {
                    log::warn!("failed to seed {}: {}", self.path.display(), e);
                }
                fallback
            }
        };
        *self.current.lock().await = Some(geometry);
        geometry
    }

    /// Last geometry seen by `load` or `save_raw`, if any
    pub async fn current(&self) -> Option<WindowGeometry> {
        *self.current.lock().await
    }

    /// Convert physical measurements to stored units and write them out.
    ///
    /// Size becomes logical pixels (`physical / scale_factor`); position
    /// stays physical.
    pub async fn save_raw(
        &self,
        raw: RawGeometry,
        scaling: &dyn ScalingProvider,
    ) -> DomainResult<()> {
        let scale = scaling.scale_factor();
        let geometry = WindowGeometry {
            width: (raw.width as f64 / scale).round() as i32,
            height: (raw.height as f64 / scale).round() as i32,
            x: raw.x,
            y: raw.y,
        };
        *self.current.lock().await = Some(geometry);
        write_json(&self.path, &geometry)
    }
}

#[async_trait]
impl JsonFileStore for GeometryRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> DomainResult<()> {
        let current = self.current.lock().await;
        match *current {
            Some(geometry) => write_json(&self.path, &geometry),
            // Nothing loaded yet, nothing to write.
            None => Ok(()),
        }
    }
}
