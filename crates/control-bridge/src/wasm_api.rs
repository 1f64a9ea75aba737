//! WASM entry points for the browser host.
//!
//! Only compiled for `wasm32`. The host fetches the model file itself and
//! hands the bytes to [`load_model`]; every other interaction goes through
//! [`process_message`] as JSON.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::messages::{EngineToUi, UiToEngine};
use crate::session_state::{BridgeError, SessionState};
use scene_graph::GltfLoader;

// Single session per module; the host is single-threaded.
thread_local! {
    static SESSION: std::cell::RefCell<Option<SessionState>> = const { std::cell::RefCell::new(None) };
}

/// Initialize the session. Must be called once before any other function.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(SessionState::new());
    });
}

/// Process a JSON `UiToEngine` message and return a JSON `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = with_session(|state| match serde_json::from_str::<UiToEngine>(json_input) {
        Ok(msg) => dispatch::dispatch(state, msg),
        Err(e) => EngineToUi::Error {
            message: format!("failed to parse message: {}", e),
        },
    });
    to_json(&response)
}

/// Import a glTF/GLB model and finish loading. Returns a JSON `EngineToUi`
/// (`Ready` or `LoadError`).
#[wasm_bindgen]
pub fn load_model(bytes: &[u8]) -> String {
    let response = with_session(|state| dispatch::complete_load(state, bytes, &GltfLoader::new()));
    if let EngineToUi::LoadError { message } = &response {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
    to_json(&response)
}

/// Current node transforms as JSON, for the per-frame render read.
#[wasm_bindgen]
pub fn get_transforms() -> String {
    process_message(r#"{"type":"GetTransforms"}"#)
}

fn with_session(f: impl FnOnce(&mut SessionState) -> EngineToUi) -> EngineToUi {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => f(state),
        None => EngineToUi::Error {
            message: "session not initialized; call init() first".to_string(),
        },
    })
}

fn to_json(response: &EngineToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        let err = BridgeError::Serialization {
            reason: e.to_string(),
        };
        format!(r#"{{"type":"Error","message":"{}"}}"#, err)
    })
}
