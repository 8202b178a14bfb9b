//! Browser bindings
//!
//! Exposes the roller to a JS front end. Rendering, the reveal overlay, and
//! its timer stay on the JS side; `reveal_ms` tells it how long to show a roll.

use wasm_bindgen::prelude::*;

use crate::platform::LocalStorage;
use crate::roller::{ItemView, RollOutcome, Roller};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

#[wasm_bindgen]
pub struct WebRoller {
    roller: Roller<LocalStorage>,
    reveal_ms: u32,
}

#[wasm_bindgen]
impl WebRoller {
    /// Roller backed by LocalStorage, with saved progress applied
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let settings = Settings::default();
        Self {
            roller: crate::open(LocalStorage::new(), &settings),
            reveal_ms: settings.reveal_ms,
        }
    }

    /// `[{key, name, icon, unlocked}, ...]` in display order
    pub fn items_json(&self) -> Result<String, JsValue> {
        let items: Vec<ItemView> = self.roller.items().collect();
        serde_json::to_string(&items).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Key of the newly unlocked item, or `undefined` when everything is unlocked
    pub fn roll(&mut self) -> Option<String> {
        let result = self.roller.roll();
        if let Some(e) = &result.write_error {
            log::warn!("Roll not saved: {}", e);
        }
        match result.value {
            RollOutcome::Unlocked(key) => Some(key.to_string()),
            RollOutcome::AllUnlocked => None,
        }
    }

    /// New flag for `key`; throws on unknown keys
    pub fn toggle(&mut self, key: &str) -> Result<bool, JsValue> {
        let result = self
            .roller
            .toggle(key)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Some(e) = &result.write_error {
            log::warn!("Toggle not saved: {}", e);
        }
        Ok(result.value)
    }

    pub fn reset(&mut self) {
        if let Some(e) = self.roller.reset().write_error {
            log::warn!("Reset not saved: {}", e);
        }
    }

    pub fn reveal_ms(&self) -> u32 {
        self.reveal_ms
    }
}

impl Default for WebRoller {
    fn default() -> Self {
        Self::new()
    }
}
