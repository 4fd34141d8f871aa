fn main() {
    // Tauri scaffolding only applies when the app surface is compiled in.
    if std::env::var_os("CARGO_FEATURE_APP").is_some() {
        tauri_build::build();
    }
}
