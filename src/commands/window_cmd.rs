//! Window Commands
//!
//! Geometry persistence, pinning, and window controls for the borderless
//! widget window.

use tauri::{AppHandle, Manager, State};

use crate::domain::WindowGeometry;
use crate::repository::{JsonFileStore, RawGeometry};
use crate::{AppState, WindowScaling, MAIN_WINDOW};

/// Geometry as loaded at startup (or last saved since)
#[tauri::command]
pub async fn load_window_geometry(
    state: State<'_, AppState>,
) -> Result<Option<WindowGeometry>, String> {
    Ok(state.geometry.current().await)
}

/// Record a move/resize reported by the frontend, in physical pixels.
///
/// The write is debounced: a drag produces a burst of these and only the
/// last one hits the disk.
#[tauri::command]
pub async fn save_window_geometry(
    app: AppHandle,
    state: State<'_, AppState>,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
) -> Result<(), String> {
    let scaling = WindowScaling::of(&app);
    let raw = RawGeometry {
        width,
        height,
        x,
        y,
    };
    state.geometry_saver.schedule(async move {
        let state = app.state::<AppState>();
        if let Err(e) = state.geometry.save_raw(raw, &scaling).await {
            log::warn!("failed to save window geometry: {}", e);
        }
    });
    Ok(())
}

/// Set window always-on-top state
#[tauri::command]
pub async fn set_pinned(app: AppHandle, pinned: bool) -> Result<(), String> {
    let window = app
        .get_webview_window(MAIN_WINDOW)
        .ok_or("Window not found")?;
    window.set_always_on_top(pinned).map_err(|e| e.to_string())
}

/// Minimize window
#[tauri::command]
pub async fn minimize_window(app: AppHandle) -> Result<(), String> {
    let window = app
        .get_webview_window(MAIN_WINDOW)
        .ok_or("Window not found")?;
    window.minimize().map_err(|e| e.to_string())
}

/// Persist the last known geometry and close the window
#[tauri::command]
pub async fn close_window(app: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    state.geometry_saver.cancel();
    if let Err(e) = state.geometry.persist().await {
        log::warn!("failed to persist window geometry on close: {}", e);
    }

    let window = app
        .get_webview_window(MAIN_WINDOW)
        .ok_or("Window not found")?;
    window.close().map_err(|e| e.to_string())
}
