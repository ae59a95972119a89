//! RPC method handler for the EmuBrowser JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! session façade.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::BrowserSession;
use crate::services::page_renderer::{ContentRenderer, PlaceholderRenderer};
use crate::types::personality::{BrowserPersonality, PERSONALITIES};
use crate::types::tab::TabId;

fn tab_id_param(params: &Value) -> Result<TabId, String> {
    params
        .get("id")
        .and_then(|v| v.as_u64())
        .map(TabId)
        .ok_or_else(|| "missing id".to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(
    session: &Mutex<BrowserSession>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        // ─── Session ───
        "session.snapshot" => {
            let s = session.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(s.snapshot()).map_err(|e| e.to_string())
        }
        "session.advance" => {
            let ms = params
                .get("ms")
                .and_then(|v| v.as_u64())
                .ok_or("missing ms")?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            s.advance_time(ms);
            Ok(json!({"ok": true, "now_ms": s.now_ms()}))
        }

        // ─── Tabs ───
        "tab.new" => {
            let mut s = session.lock().map_err(|e| e.to_string())?;
            let id = s.new_tab();
            Ok(json!({"id": id.0}))
        }
        "tab.close" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            s.close_tab(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "tab.activate" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            Ok(json!({"ok": s.set_active_tab(id)}))
        }

        // ─── Navigation ───
        "nav.navigate" => {
            let id = tab_id_param(params)?;
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            s.navigate(id, url).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "nav.back" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            Ok(json!({"moved": s.back(id)}))
        }
        "nav.forward" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            Ok(json!({"moved": s.forward(id)}))
        }
        "nav.refresh" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            s.refresh(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "nav.home" => {
            let id = tab_id_param(params)?;
            let mut s = session.lock().map_err(|e| e.to_string())?;
            s.home(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Personalities ───
        "personality.list" => serde_json::to_value(PERSONALITIES).map_err(|e| e.to_string()),
        "personality.get" => {
            let key = params
                .get("key")
                .and_then(|v| v.as_str())
                .ok_or("missing key")?;
            let personality = BrowserPersonality::by_key(key)
                .ok_or_else(|| format!("unknown personality: {}", key))?;
            serde_json::to_value(personality).map_err(|e| e.to_string())
        }

        // ─── Presentation ───
        "page.render" => {
            let id = tab_id_param(params)?;
            let s = session.lock().map_err(|e| e.to_string())?;
            let snapshot = s.snapshot();
            let tab = snapshot
                .tab(id)
                .ok_or_else(|| format!("tab not found: {}", id))?;
            let content = PlaceholderRenderer.render(&tab.url, tab.loading);
            serde_json::to_value(content).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
