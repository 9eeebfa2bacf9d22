//! IPC between Rust and the pages.
//!
//! - **JS -> Rust**: `window.vitrine.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through wry's IPC channel.
//! - **Rust -> JS**: `evaluate_script` with `js_dispatch_message`, delivered
//!   to handlers registered with `window.vitrine.on(kind, fn)`.

use serde::{Deserialize, Serialize};

/// A raw message from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Messages posted by the scripts injected into pane pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum PaneMessage {
    /// Load progress of the page, 0-100.
    Progress { percent: u8 },
    /// Overlay pointer pressed, in physical pixels relative to the pane.
    OverlayDown { x: i32, y: i32 },
    OverlayMove { x: i32, y: i32 },
    OverlayUp,
    /// Zoom slider moved.
    Zoom { percent: u32 },
}

impl PaneMessage {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Sets up `window.vitrine` in every page. Must run before the other scripts.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.vitrine) { return; }
    window.vitrine = {
        send: function(kind, payload) {
            var msg = { kind: kind };
            if (payload !== undefined) { msg.payload = payload; }
            window.ipc.postMessage(JSON.stringify(msg));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Reports `document.readyState` as a rough load percentage. wry has no
/// progress callback, so completion is observed from inside the page.
pub const PROGRESS_SCRIPT: &str = r#"
(function() {
    var last = -1;
    function report(percent) {
        if (percent > last) {
            last = percent;
            window.vitrine.send('progress', { percent: percent });
        }
    }
    function check() {
        switch (document.readyState) {
            case 'loading': report(10); break;
            case 'interactive': report(70); break;
            case 'complete': report(100); break;
        }
    }
    document.addEventListener('readystatechange', check);
    window.addEventListener('load', function() { report(100); });
    check();
})();
"#;

/// Edit overlay: a full-page layer that captures the pointer, with a resize
/// handle in the bottom-right corner and a zoom slider. Built lazily the
/// first time `window.vitrine.setEditMode` is called.
pub fn overlay_script(handle_size: i32, zoom_min: u32, zoom_max: u32) -> String {
    OVERLAY_TEMPLATE
        .replace("__HANDLE__", &handle_size.to_string())
        .replace("__ZOOM_MIN__", &zoom_min.to_string())
        .replace("__ZOOM_MAX__", &zoom_max.to_string())
}

const OVERLAY_TEMPLATE: &str = r#"
(function() {
    var overlay = null, slider = null, label = null, dragging = false;
    function px(v) { return Math.round(v * window.devicePixelRatio); }
    function build() {
        overlay = document.createElement('div');
        overlay.style.cssText = 'position:fixed;left:0;top:0;right:0;bottom:0;z-index:2147483647;'
            + 'cursor:move;border:4px solid rgba(0,170,255,0.8);box-sizing:border-box;'
            + 'display:none;touch-action:none;';
        var handle = document.createElement('div');
        handle.style.cssText = 'position:absolute;right:0;bottom:0;width:__HANDLE__px;height:__HANDLE__px;'
            + 'background:rgba(0,170,255,0.8);cursor:nwse-resize;';
        overlay.appendChild(handle);

        var bar = document.createElement('div');
        bar.style.cssText = 'position:absolute;left:50%;top:8px;transform:translateX(-50%);'
            + 'background:rgba(25,28,32,0.92);color:#fff;padding:4px 10px;border-radius:6px;'
            + 'font:12px sans-serif;cursor:default;display:flex;align-items:center;gap:8px;';
        slider = document.createElement('input');
        slider.type = 'range';
        slider.min = '__ZOOM_MIN__';
        slider.max = '__ZOOM_MAX__';
        slider.step = '5';
        slider.value = '100';
        label = document.createElement('span');
        label.textContent = '100%';
        bar.appendChild(slider);
        bar.appendChild(label);
        bar.addEventListener('pointerdown', function(e) { e.stopPropagation(); });
        slider.addEventListener('input', function() {
            label.textContent = slider.value + '%';
            window.vitrine.send('zoom', { percent: parseInt(slider.value, 10) });
        });
        overlay.appendChild(bar);

        overlay.addEventListener('pointerdown', function(e) {
            if (e.button !== 0) { return; }
            overlay.setPointerCapture(e.pointerId);
            dragging = true;
            window.vitrine.send('overlay_down', { x: px(e.clientX), y: px(e.clientY) });
            e.preventDefault();
        });
        overlay.addEventListener('pointermove', function(e) {
            if (dragging) {
                window.vitrine.send('overlay_move', { x: px(e.clientX), y: px(e.clientY) });
            }
        });
        function release() {
            if (dragging) {
                dragging = false;
                window.vitrine.send('overlay_up');
            }
        }
        overlay.addEventListener('pointerup', release);
        overlay.addEventListener('pointercancel', release);
        document.documentElement.appendChild(overlay);
    }
    window.vitrine.setEditMode = function(enabled, zoom) {
        if (!overlay) { build(); }
        overlay.style.display = enabled ? 'block' : 'none';
        if (zoom) {
            slider.value = String(zoom);
            label.textContent = zoom + '%';
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.vitrine && window.vitrine._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Snippet toggling the edit overlay in a pane page.
pub fn js_set_edit_mode(enabled: bool, zoom: u32) -> String {
    format!("window.vitrine && window.vitrine.setEditMode && window.vitrine.setEditMode({enabled}, {zoom});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generic_message() {
        let msg = IpcMessage::from_json(r#"{"kind":"action","payload":{"id":"quit"}}"#).unwrap();
        assert_eq!(msg.kind, "action");
        assert_eq!(msg.payload["id"], "quit");

        let msg = IpcMessage::from_json(r#"{"kind":"close"}"#).unwrap();
        assert!(msg.payload.is_null());
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn parses_pane_messages() {
        assert_eq!(
            PaneMessage::from_json(r#"{"kind":"progress","payload":{"percent":70}}"#),
            Some(PaneMessage::Progress { percent: 70 })
        );
        assert_eq!(
            PaneMessage::from_json(r#"{"kind":"overlay_down","payload":{"x":12,"y":-3}}"#),
            Some(PaneMessage::OverlayDown { x: 12, y: -3 })
        );
        assert_eq!(
            PaneMessage::from_json(r#"{"kind":"overlay_up"}"#),
            Some(PaneMessage::OverlayUp)
        );
        assert_eq!(
            PaneMessage::from_json(r#"{"kind":"zoom","payload":{"percent":125}}"#),
            Some(PaneMessage::Zoom { percent: 125 })
        );
        assert_eq!(PaneMessage::from_json(r#"{"kind":"eval"}"#), None);
    }

    #[test]
    fn overlay_script_fills_limits() {
        let js = overlay_script(16, 25, 300);
        assert!(js.contains("width:16px;height:16px"));
        assert!(js.contains("slider.min = '25'"));
        assert!(js.contains("slider.max = '300'"));
        assert!(!js.contains("__"));
    }

    #[test]
    fn dispatch_escapes_kind() {
        let js = js_dispatch_message("set_actions", &serde_json::json!(["quit"]));
        assert_eq!(
            js,
            r#"window.vitrine && window.vitrine._dispatch("set_actions", ["quit"]);"#
        );
        assert_eq!(
            js_set_edit_mode(true, 80),
            "window.vitrine && window.vitrine.setEditMode && window.vitrine.setEditMode(true, 80);"
        );
    }
}
