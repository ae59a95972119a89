//! EmuBrowser RPC Server — JSON-RPC over stdin/stdout for external UI
//! shells.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"nav.navigate", "params":{"id":1,"url":"openai.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use emubrowser::app::BrowserSession;
use emubrowser::rpc_handler::handle_method;
use emubrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn main() {
    // Settings file location can be pinned for tests via EMUBROWSER_CONFIG.
    let mut engine = SettingsEngine::new(std::env::var("EMUBROWSER_CONFIG").ok());
    let settings = match engine.load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("settings load failed ({}), using defaults", e);
            engine.settings().clone()
        }
    };
    let session = Mutex::new(BrowserSession::new(settings));

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                println!("{}", json!({"id":null,"error":format!("parse error: {}",e)}));
                let _ = io::stdout().flush();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let empty = json!({});
        let params = req.get("params").unwrap_or(&empty);

        let response = match handle_method(&session, method, params) {
            Ok(result) => json!({"id": id, "result": result}),
            Err(error) => json!({"id": id, "error": error}),
        };
        println!("{}", response);
        let _ = io::stdout().flush();
    }
}
