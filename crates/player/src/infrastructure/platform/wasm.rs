//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys bindings.

use crate::ports::outbound::platform::{LinkOpener, PlatformError, StorageProvider};
use crate::state::Platform;
use wasm_bindgen::JsValue;

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// WASM storage provider using `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Result<web_sys::Storage, PlatformError> {
        web_sys::window()
            .ok_or(PlatformError::Unsupported("window"))?
            .local_storage()
            .map_err(|e| PlatformError::storage(js_error(e)))?
            .ok_or(PlatformError::Unsupported("localStorage"))
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| PlatformError::storage(js_error(e)))
    }

    fn load(&self, key: &str) -> Option<String> {
        match Self::local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                tracing::warn!("localStorage unavailable: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| PlatformError::storage(js_error(e)))
    }
}

/// WASM link opener using `window.open(url, "_blank")`
#[derive(Clone, Default)]
pub struct WasmLinkOpener;

impl LinkOpener for WasmLinkOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::Unsupported("window"))?;
        window
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|e| PlatformError::link(url, js_error(e)))
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(WasmStorageProvider, WasmLinkOpener)
}
