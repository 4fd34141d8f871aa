//! Sticky Todo Backend
//!
//! Layered architecture:
//! - domain: Core entities and domain errors
//! - repository: JSON-file-backed stores (task list, window geometry)
//! - commands: Tauri command handlers (feature `app`)

use std::path::PathBuf;
use std::time::Duration;

pub mod debounce;
pub mod domain;
pub mod repository;

#[cfg(feature = "app")]
mod commands;

use debounce::Debouncer;
use repository::{GeometryRepository, TaskRepository};

/// Backing file for the checklist
pub const TASKS_FILE: &str = "tasks.json";
/// Backing file for the window placement
pub const GEOMETRY_FILE: &str = "position.json";

/// Delay before a burst of move/resize events is flushed to disk
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Application state shared across commands
pub struct AppState {
    pub tasks: TaskRepository,
    pub geometry: GeometryRepository,
    pub geometry_saver: Debouncer,
}

impl AppState {
    /// Stores rooted in `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            tasks: TaskRepository::new(data_dir.join(TASKS_FILE)),
            geometry: GeometryRepository::new(data_dir.join(GEOMETRY_FILE)),
            geometry_saver: Debouncer::new(SAVE_DEBOUNCE),
        }
    }
}

#[cfg(feature = "app")]
pub(crate) const MAIN_WINDOW: &str = "main";

#[cfg(feature = "app")]
pub(crate) use app::WindowScaling;

#[cfg(feature = "app")]
pub use app::run;

#[cfg(feature = "app")]
mod app {
    use tauri::{Manager, WindowEvent};

    use crate::commands;
    use crate::domain::{ScreenSize, MIN_HEIGHT, MIN_WIDTH};
    use crate::repository::{RawGeometry, ScalingProvider};
    use crate::{AppState, MAIN_WINDOW};

    /// Scale factor captured from the live window at event time, so the
    /// conversion itself stays display-free.
    pub(crate) struct WindowScaling {
        scale: Option<f64>,
    }

    impl WindowScaling {
        pub(crate) fn of(app: &tauri::AppHandle) -> Self {
            let scale = app
                .get_webview_window(MAIN_WINDOW)
                .and_then(|w| w.scale_factor().ok());
            Self { scale }
        }

        fn from_window(window: &tauri::Window) -> Self {
            Self {
                scale: window.scale_factor().ok(),
            }
        }
    }

    impl ScalingProvider for WindowScaling {
        fn query(&self) -> Option<f64> {
            self.scale
        }
    }

    fn raw_geometry(window: &tauri::Window) -> Option<RawGeometry> {
        let position = window.outer_position().ok()?;
        let size = window.outer_size().ok()?;
        Some(RawGeometry {
            width: size.width,
            height: size.height,
            x: position.x,
            y: position.y,
        })
    }

    // Moved/Resized arrive in bursts while the user drags; only the last
    // one in a burst is written out.
    fn schedule_save(window: &tauri::Window) {
        let Some(raw) = raw_geometry(window) else {
            return;
        };
        let scaling = WindowScaling::from_window(window);
        let app = window.app_handle().clone();
        tauri::async_runtime::spawn(async move {
            let state = app.state::<AppState>();
            let app = app.clone();
            state.geometry_saver.schedule(async move {
                let state = app.state::<AppState>();
                if let Err(e) = state.geometry.save_raw(raw, &scaling).await {
                    log::warn!("failed to save window geometry: {}", e);
                }
            });
        });
    }

    fn flush_save(window: &tauri::Window) {
        let Some(raw) = raw_geometry(window) else {
            return;
        };
        let scaling = WindowScaling::from_window(window);
        let app = window.app_handle().clone();
        tauri::async_runtime::block_on(async move {
            let state = app.state::<AppState>();
            state.geometry_saver.cancel();
            if let Err(e) = state.geometry.save_raw(raw, &scaling).await {
                log::warn!("failed to save window geometry on close: {}", e);
            }
        });
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        tauri::Builder::default()
            .plugin(tauri_plugin_log::Builder::new().build())
            .setup(|app| {
                // Single instance check - must be first! Both backing files
                // are owned by one running process.
                #[cfg(desktop)]
                app.handle()
                    .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                        if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
                            let _ = window.set_focus();
                        }
                    }))?;

                let data_dir = app.path().app_data_dir()?;
                std::fs::create_dir_all(&data_dir)?;
                app.manage(AppState::new(&data_dir));

                let state = app.state::<AppState>();
                let window = app
                    .get_webview_window(MAIN_WINDOW)
                    .ok_or("main window missing")?;

                let screen = match window.current_monitor()? {
                    Some(monitor) => ScreenSize {
                        width: monitor.size().width as i32,
                        height: monitor.size().height as i32,
                    },
                    // No monitor info: centering the default on a
                    // default-sized "screen" pins it to the origin.
                    None => ScreenSize {
                        width: crate::domain::DEFAULT_WIDTH,
                        height: crate::domain::DEFAULT_HEIGHT,
                    },
                };

                // Restore the last placement: logical size, physical
                // position. Stored sub-minimum sizes are applied as-is;
                // the min-size constraint below only binds interactive
                // resizes.
                let geometry = tauri::async_runtime::block_on(state.geometry.load(screen));
                window.set_size(tauri::LogicalSize::new(
                    geometry.width as f64,
                    geometry.height as f64,
                ))?;
                window.set_position(tauri::PhysicalPosition::new(geometry.x, geometry.y))?;
                window.set_min_size(Some(tauri::LogicalSize::new(
                    MIN_WIDTH as f64,
                    MIN_HEIGHT as f64,
                )))?;
                window.set_always_on_top(true)?;

                tauri::async_runtime::block_on(state.tasks.load());

                Ok(())
            })
            .on_window_event(|window, event| match event {
                WindowEvent::Moved(_) | WindowEvent::Resized(_) => schedule_save(window),
                WindowEvent::CloseRequested { .. } => flush_save(window),
                _ => {}
            })
            .invoke_handler(tauri::generate_handler![
                // Checklist
                commands::list_tasks,
                commands::add_task,
                commands::toggle_task,
                commands::delete_task,
                // Window
                commands::load_window_geometry,
                commands::save_window_geometry,
                commands::set_pinned,
                commands::minimize_window,
                commands::close_window,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
