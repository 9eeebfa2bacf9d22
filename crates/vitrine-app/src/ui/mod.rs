//! HTML pages for the presentation windows.
//!
//! Each page is a static template with a `/*DATA*/null` placeholder that is
//! replaced by the page's initial state as JSON. Later updates arrive through
//! `window.vitrine.on(...)` handlers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vitrine_layout::{Assignment, LayoutStore, Slot, ViewStore};
use vitrine_shell::{Action, SaveKind, SaveRequest};

const SELECTOR_HTML: &str = include_str!("selector.html");
const MENU_HTML: &str = include_str!("menu.html");
const SCREEN_MANAGER_HTML: &str = include_str!("screen_manager.html");
const SAVE_DIALOG_HTML: &str = include_str!("save_dialog.html");

const DATA_PLACEHOLDER: &str = "/*DATA*/null";

/// Serialize a value for a `<script>` block; `</` is escaped so a name like
/// `</script>` cannot end the block early.
pub fn embed_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

fn render(template: &str, data: &Value) -> String {
    template.replacen(DATA_PLACEHOLDER, &embed_json(data), 1)
}

// =============================================================================
// PAGE DATA
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub windows: usize,
}

pub fn view_entries(views: &ViewStore) -> Vec<ViewEntry> {
    views
        .iter()
        .map(|(id, view)| ViewEntry {
            id: id.clone(),
            name: if view.name.is_empty() {
                id.clone()
            } else {
                view.name.clone()
            },
            description: view.description.clone(),
            windows: view.windows.len(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn action_entries(actions: &[Action]) -> Vec<ActionEntry> {
    actions
        .iter()
        .map(|a| ActionEntry {
            id: a.id(),
            label: a.label(),
            icon: a.icon(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub slots: &'a [Slot],
}

pub fn layout_entries(layouts: &LayoutStore) -> Vec<LayoutEntry<'_>> {
    layouts
        .iter()
        .map(|(name, layout)| LayoutEntry {
            name,
            description: &layout.description,
            slots: &layout.slots,
        })
        .collect()
}

// =============================================================================
// PAGES
// =============================================================================

pub fn selector_page(views: &[ViewEntry]) -> String {
    render(SELECTOR_HTML, &json!({ "views": views }))
}

pub fn menu_page(actions: &[ActionEntry]) -> String {
    render(MENU_HTML, &json!({ "actions": actions }))
}

pub fn screen_manager_page(layouts: &[LayoutEntry<'_>], windows: &[String]) -> String {
    render(
        SCREEN_MANAGER_HTML,
        &json!({ "layouts": layouts, "windows": windows }),
    )
}

pub fn save_dialog_page(view_ids: &[String], layout_names: &[String]) -> String {
    render(
        SAVE_DIALOG_HTML,
        &json!({ "views": view_ids, "layouts": layout_names }),
    )
}

// =============================================================================
// PAYLOADS FROM THE PAGES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct IdPayload {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct NamePayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyLayoutPayload {
    pub layout: String,
    #[serde(default)]
    pub assignment: Assignment,
}

/// CSS pixels of the menu's content.
#[derive(Debug, Deserialize)]
pub struct SizePayload {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct SavePayload {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl SavePayload {
    pub fn into_request(self) -> Option<SaveRequest> {
        let kind = match self.kind.as_str() {
            "view" => SaveKind::View,
            "layout" => SaveKind::Layout,
            _ => return None,
        };
        Some(SaveRequest {
            kind,
            name: self.name,
            description: self.description,
        })
    }
}

/// Decode a message payload, `None` when it has the wrong shape.
pub fn parse_payload<T: for<'de> Deserialize<'de>>(payload: &Value) -> Option<T> {
    serde_json::from_value(payload.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_common::FracRect;
    use vitrine_shell::menu_actions;

    fn data_of(page: &str) -> Value {
        let start = page.find("const DATA = ").unwrap() + "const DATA = ".len();
        let end = start + page[start..].find(";\n").unwrap();
        serde_json::from_str(&page[start..end].replace("<\\/", "</")).unwrap()
    }

    #[test]
    fn embed_escapes_script_close() {
        let out = embed_json(&json!({ "name": "</script><script>alert(1)</script>" }));
        assert!(!out.contains("</"));
        assert!(out.contains("<\\/script>"));
    }

    #[test]
    fn every_template_has_one_placeholder() {
        for template in [SELECTOR_HTML, MENU_HTML, SCREEN_MANAGER_HTML, SAVE_DIALOG_HTML] {
            assert_eq!(template.matches(DATA_PLACEHOLDER).count(), 1);
        }
    }

    #[test]
    fn selector_page_carries_views() {
        let views = vec![ViewEntry {
            id: "ops".into(),
            name: "Ops".into(),
            description: "Wall".into(),
            windows: 3,
        }];
        let page = selector_page(&views);
        assert!(!page.contains(DATA_PLACEHOLDER));
        let data = data_of(&page);
        assert_eq!(data["views"][0]["id"], "ops");
        assert_eq!(data["views"][0]["windows"], 3);
    }

    #[test]
    fn view_entries_fall_back_to_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("views.json");
        std::fs::write(&path, r#"{"night": {"name": "", "windows": []}}"#).unwrap();
        let entries = view_entries(&ViewStore::load(&path));
        assert_eq!(entries[0].name, "night");
    }

    #[test]
    fn menu_page_lists_actions_for_mode() {
        let page = menu_page(&action_entries(&menu_actions(true)));
        let data = data_of(&page);
        let ids: Vec<&str> = data["actions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"save_view"));
        assert!(!ids.contains(&"show_views"));
    }

    #[test]
    fn screen_manager_page_carries_layouts_and_windows() {
        let dir = tempfile::tempdir().unwrap();
        let mut layouts = LayoutStore::load(dir.path().join("layouts.json"));
        layouts
            .save_layout(
                "Two Up",
                "",
                vec![Slot {
                    id: "left".into(),
                    geometry: FracRect::new(0.0, 0.0, 0.5, 1.0),
                }],
            )
            .unwrap();
        let page = screen_manager_page(&layout_entries(&layouts), &["grafana".to_string()]);
        let data = data_of(&page);
        assert_eq!(data["layouts"][0]["name"], "Two Up");
        assert_eq!(data["layouts"][0]["description"], "Custom layout: Two Up");
        assert_eq!(data["layouts"][0]["slots"][0]["geometry"]["width"], 0.5);
        assert_eq!(data["windows"][0], "grafana");
    }

    #[test]
    fn save_payload_kinds() {
        let payload: SavePayload =
            parse_payload(&json!({ "kind": "layout", "name": "Ops" })).unwrap();
        let request = payload.into_request().unwrap();
        assert_eq!(request.kind, SaveKind::Layout);
        assert_eq!(request.description, "");

        let payload: SavePayload =
            parse_payload(&json!({ "kind": "dashboard", "name": "Ops" })).unwrap();
        assert!(payload.into_request().is_none());
    }

    #[test]
    fn apply_layout_payload() {
        let payload: ApplyLayoutPayload = parse_payload(&json!({
            "layout": "Two Up",
            "assignment": { "left": "grafana", "right": "kibana" }
        }))
        .unwrap();
        assert_eq!(payload.layout, "Two Up");
        assert_eq!(payload.assignment.get("left").map(String::as_str), Some("grafana"));
        assert!(parse_payload::<ApplyLayoutPayload>(&json!({ "assignment": {} })).is_none());
    }
}
