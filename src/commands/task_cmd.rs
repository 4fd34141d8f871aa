//! Tauri Commands for the Checklist
//!
//! Exposes task operations to the frontend via Tauri IPC. Every command
//! returns the updated list so the frontend can re-render from it.

use tauri::State;

use crate::domain::Task;
use crate::AppState;

/// List all tasks
#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    Ok(state.tasks.tasks().await)
}

/// Add a task; blank text is a no-op
#[tauri::command]
pub async fn add_task(state: State<'_, AppState>, text: String) -> Result<Vec<Task>, String> {
    state.tasks.append(&text).await;
    Ok(state.tasks.tasks().await)
}

/// Toggle completion of the task at `index`
#[tauri::command]
pub async fn toggle_task(state: State<'_, AppState>, index: usize) -> Result<Vec<Task>, String> {
    state
        .tasks
        .toggle_completed(index)
        .await
        .map_err(|e| e.to_string())?;
    Ok(state.tasks.tasks().await)
}

/// Delete the task at `index`
#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, index: usize) -> Result<Vec<Task>, String> {
    state.tasks.delete(index).await.map_err(|e| e.to_string())?;
    Ok(state.tasks.tasks().await)
}
