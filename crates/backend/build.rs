use std::env;
use std::fs;
use std::path::Path;

/// Place config.toml and migrations/ next to the built binary, where the
/// server looks for them first.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../migrations");

    // OUT_DIR is target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    let source_migrations = workspace_root.join("migrations");
    let dest_migrations = target_dir.join("migrations");
    fs::create_dir_all(&dest_migrations)
        .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest_migrations, e));
    for entry in fs::read_dir(&source_migrations)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", source_migrations, e))
    {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            let dest = dest_migrations.join(path.file_name().unwrap());
            fs::copy(&path, &dest).unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
        }
    }
}
