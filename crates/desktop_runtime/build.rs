use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;
const KNOWN_KINDS: [&str; 5] = [
    "generic",
    "game-console",
    "browser",
    "note-editor",
    "mail-compose",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconManifest {
    schema_version: u32,
    icon_id: String,
    display_name: String,
    glyph: String,
    kind: String,
    order: u32,
    window_defaults: WindowDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManagerSection {
    cascade_origin_x: i32,
    cascade_origin_y: i32,
    cascade_step: i32,
    margin_x: i32,
    margin_y: i32,
    taskbar_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IconLayoutSection {
    x: i32,
    y: i32,
    spacing: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StartMenuItem {
    label: String,
    glyph: String,
    #[serde(default)]
    separator_before: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfigFile {
    schema_version: u32,
    window_manager: WindowManagerSection,
    icon_layout: IconLayoutSection,
    start_menu: Vec<StartMenuItem>,
}

#[derive(Debug, Serialize)]
struct GeneratedCatalog {
    window_manager: WindowManagerSection,
    icon_layout: IconLayoutSection,
    start_menu: Vec<StartMenuItem>,
    icons: Vec<IconManifest>,
}

fn manifest_paths(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to list {}: {err}", dir.display()));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".app.toml"))
        })
        .collect();
    paths.sort();
    paths
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != SCHEMA_VERSION {
        panic!(
            "schema mismatch in {}: expected {SCHEMA_VERSION} found {found}",
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let manifest_dir = crate_root.join("manifests");
    println!("cargo:rerun-if-changed={}", manifest_dir.display());

    let config_path = crate_root.join("desktop.toml");
    let config: DesktopConfigFile = read_toml(&config_path);
    check_schema(&config_path, config.schema_version);

    let mut icons = Vec::<IconManifest>::new();
    let mut seen_ids = BTreeSet::new();
    for path in manifest_paths(&manifest_dir) {
        let manifest: IconManifest = read_toml(&path);
        check_schema(&path, manifest.schema_version);
        if !KNOWN_KINDS.contains(&manifest.kind.as_str()) {
            panic!(
                "unknown window kind `{}` in {}",
                manifest.kind,
                path.display()
            );
        }
        if !seen_ids.insert(manifest.icon_id.clone()) {
            panic!(
                "duplicate icon id `{}` in {}",
                manifest.icon_id,
                path.display()
            );
        }
        icons.push(manifest);
    }

    icons.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.icon_id.cmp(&b.icon_id)));
    let catalog = GeneratedCatalog {
        window_manager: config.window_manager,
        icon_layout: config.icon_layout,
        start_menu: config.start_menu,
        icons,
    };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
