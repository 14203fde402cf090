//! Desktop icon catalog and window-manager constants generated from `manifests/` and
//! `desktop.toml` at build time.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{PointerPosition, WindowKind, WindowManagerConfig, WindowSize};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

#[derive(Debug, Error)]
/// Failures while decoding the generated catalog.
pub enum CatalogError {
    /// The JSON payload does not match the catalog schema.
    #[error("desktop catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Two icons share an id.
    #[error("desktop catalog lists icon `{0}` more than once")]
    DuplicateIcon(String),
}

#[derive(Debug, Clone, Deserialize)]
struct RawWindowManager {
    cascade_origin_x: i32,
    cascade_origin_y: i32,
    cascade_step: i32,
    margin_x: i32,
    margin_y: i32,
    taskbar_height: i32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawIconLayout {
    x: i32,
    y: i32,
    spacing: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct RawIcon {
    icon_id: String,
    display_name: String,
    glyph: String,
    kind: WindowKind,
    window_defaults: WindowSize,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCatalog {
    window_manager: RawWindowManager,
    icon_layout: RawIconLayout,
    start_menu: Vec<StartMenuEntry>,
    icons: Vec<RawIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One desktop shortcut.
pub struct DesktopIconEntry {
    /// Stable catalog id.
    pub icon_id: String,
    /// Label under the icon, also the title of windows it opens.
    pub display_name: String,
    /// Emoji shown as the icon image.
    pub glyph: String,
    /// Kind of window the icon opens.
    pub kind: WindowKind,
    /// Top-left corner on the desktop.
    pub position: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One start menu row.
pub struct StartMenuEntry {
    /// Caption.
    pub label: String,
    /// Emoji shown before the caption.
    pub glyph: String,
    /// Draw a divider above this row.
    #[serde(default)]
    pub separator_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Decoded catalog.
pub struct DesktopCatalog {
    /// Desktop icons in display order.
    pub icons: Vec<DesktopIconEntry>,
    /// Start menu rows in display order.
    pub start_menu: Vec<StartMenuEntry>,
    /// Registry layout constants, with per-kind sizes taken from the icons.
    pub window_manager: WindowManagerConfig,
}

impl DesktopCatalog {
    /// Decodes a generated catalog payload.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the payload is not valid catalog JSON or repeats an icon id.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let mut window_manager = WindowManagerConfig {
            cascade_origin: PointerPosition::new(
                raw.window_manager.cascade_origin_x,
                raw.window_manager.cascade_origin_y,
            ),
            cascade_step: raw.window_manager.cascade_step,
            margin_x: raw.window_manager.margin_x,
            margin_y: raw.window_manager.margin_y,
            taskbar_height: raw.window_manager.taskbar_height,
            ..WindowManagerConfig::default()
        };

        let mut icons = Vec::with_capacity(raw.icons.len());
        for (index, icon) in raw.icons.into_iter().enumerate() {
            if icons
                .iter()
                .any(|existing: &DesktopIconEntry| existing.icon_id == icon.icon_id)
            {
                return Err(CatalogError::DuplicateIcon(icon.icon_id));
            }
            window_manager
                .default_sizes
                .insert(icon.kind, icon.window_defaults);
            icons.push(DesktopIconEntry {
                icon_id: icon.icon_id,
                display_name: icon.display_name,
                glyph: icon.glyph,
                kind: icon.kind,
                position: PointerPosition::new(
                    raw.icon_layout.x,
                    raw.icon_layout.y + raw.icon_layout.spacing * index as i32,
                ),
            });
        }

        Ok(Self {
            icons,
            start_menu: raw.start_menu,
            window_manager,
        })
    }

    /// Looks up an icon by id.
    pub fn icon(&self, icon_id: &str) -> Option<&DesktopIconEntry> {
        self.icons.iter().find(|icon| icon.icon_id == icon_id)
    }
}

/// Returns the generated catalog JSON payload.
pub fn desktop_catalog_json() -> &'static str {
    DESKTOP_CATALOG_JSON
}

/// The process-wide catalog, decoded once.
///
/// A payload that fails to decode is logged and replaced by an empty catalog with default layout
/// constants.
pub fn desktop_catalog() -> &'static DesktopCatalog {
    static CATALOG: OnceLock<DesktopCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        DesktopCatalog::parse(DESKTOP_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("{err}; using default desktop layout");
            DesktopCatalog::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_catalog_lists_icons_in_layout_order() {
        let catalog = DesktopCatalog::parse(desktop_catalog_json()).expect("catalog parses");
        let names: Vec<_> = catalog
            .icons
            .iter()
            .map(|icon| icon.display_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Internet Explorer",
                "Notepad",
                "Terminal",
                "Contact Me",
                "My Computer"
            ]
        );
        let positions: Vec<_> = catalog.icons.iter().map(|icon| icon.position).collect();
        assert_eq!(positions[0], PointerPosition::new(50, 50));
        assert_eq!(positions[2], PointerPosition::new(50, 190));
    }

    #[test]
    fn generated_catalog_carries_window_defaults() {
        let catalog = DesktopCatalog::parse(desktop_catalog_json()).expect("catalog parses");
        let config = &catalog.window_manager;
        assert_eq!(config.cascade_origin, PointerPosition::new(100, 100));
        assert_eq!(config.cascade_step, 30);
        assert_eq!((config.margin_x, config.margin_y), (200, 100));
        assert_eq!(
            config.default_size(WindowKind::MailCompose),
            WindowSize {
                width: 500,
                height: 450
            }
        );
        assert_eq!(
            catalog.icon("terminal").map(|icon| icon.kind),
            Some(WindowKind::GameConsole)
        );
    }

    #[test]
    fn start_menu_items_come_from_config() {
        let catalog = desktop_catalog();
        let labels: Vec<_> = catalog
            .start_menu
            .iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Programs",
                "Documents",
                "Settings",
                "Find",
                "Help",
                "Run...",
                "Shut Down..."
            ]
        );
    }

    #[test]
    fn malformed_and_duplicate_payloads_are_rejected() {
        assert!(matches!(
            DesktopCatalog::parse("{\"icons\": 3}"),
            Err(CatalogError::Malformed(_))
        ));

        let duplicate = r#"{
            "window_manager": {"cascade_origin_x": 0, "cascade_origin_y": 0, "cascade_step": 1,
                               "margin_x": 0, "margin_y": 0, "taskbar_height": 0},
            "icon_layout": {"x": 0, "y": 0, "spacing": 1},
            "start_menu": [],
            "icons": [
                {"icon_id": "a", "display_name": "A", "glyph": "*", "kind": "generic",
                 "window_defaults": {"width": 300, "height": 200}},
                {"icon_id": "a", "display_name": "B", "glyph": "*", "kind": "browser",
                 "window_defaults": {"width": 300, "height": 200}}
            ]
        }"#;
        assert!(matches!(
            DesktopCatalog::parse(duplicate),
            Err(CatalogError::DuplicateIcon(id)) if id == "a"
        ));
    }
}
