// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "app")]
fn main() {
    sticky_todo_lib::run()
}

#[cfg(not(feature = "app"))]
fn main() {
    eprintln!("sticky-todo was built without the `app` feature; nothing to run");
}
