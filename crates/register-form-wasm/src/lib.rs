//! Register-Form WASM
//!
//! WebAssembly bindings that let a browser page drive the registration form.
//! The page forwards each input's change event and the form's submit event;
//! rendering stays on the JavaScript side.

use register_form::{Acknowledgment, Field, Notifier, RegisterForm};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation state of one field as seen by JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldStatus {
    pub field: String,
    /// `neutral`, `valid` or `invalid`
    pub state: String,
    pub message: Option<String>,
}

/// Delivers acknowledgments to a JS callback, or to `window.alert` when none is set
struct BrowserNotifier<'a> {
    callback: Option<&'a js_sys::Function>,
}

impl Notifier for BrowserNotifier<'_> {
    fn notify(&mut self, ack: &Acknowledgment) {
        let message = JsValue::from_str(&ack.message());

        let delivered = match self.callback {
            Some(callback) => callback
                .call2(&JsValue::NULL, &message, &JsValue::from_bool(ack.is_success()))
                .is_ok(),
            None => web_sys::window()
                .map(|window| window.alert_with_message(&ack.message()).is_ok())
                .unwrap_or(false),
        };

        if !delivered {
            web_sys::console::log_1(&message);
        }
    }
}

/// One registration form mounted on a page
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmRegisterForm {
    form: RegisterForm,
    notifier: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl WasmRegisterForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmRegisterForm {
        WasmRegisterForm::default()
    }

    /// Route acknowledgments to `callback(message, success)` instead of `alert`
    #[wasm_bindgen(js_name = setNotifier)]
    pub fn set_notifier(&mut self, callback: js_sys::Function) {
        self.notifier = Some(callback);
    }

    /// Handle an input change. Returns the field's new state tag.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// input.addEventListener('input', (e) => {
    ///     const state = form.handleChange(e.target.name, e.target.value);
    ///     e.target.dataset.state = state;
    /// });
    /// ```
    #[wasm_bindgen(js_name = handleChange)]
    pub fn handle_change(&mut self, name: &str, value: &str) -> Result<String, JsValue> {
        self.form
            .handle_change(name, value)
            .map(|state| state.tag().to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Handle the form's submit event. Always prevents the browser's own submission.
    #[wasm_bindgen(js_name = handleSubmit)]
    pub fn handle_submit(&self, event: Option<web_sys::Event>) -> bool {
        if let Some(event) = event {
            event.prevent_default();
        }

        let mut notifier = BrowserNotifier {
            callback: self.notifier.as_ref(),
        };
        self.form.submit(&mut notifier)
    }

    /// Current value of a field, `""` if never set
    pub fn value(&self, name: &str) -> Result<String, JsValue> {
        let field = parse_field(name)?;
        Ok(self.form.value(field).to_string())
    }

    /// Error message of a field, if it is invalid
    pub fn message(&self, name: &str) -> Result<Option<String>, JsValue> {
        let field = parse_field(name)?;
        Ok(self.form.state(field).message().map(str::to_string))
    }

    /// Snapshot of every value set so far, keyed by field name
    pub fn values(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.form.values())?)
    }

    /// Status of every field, in layout order
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.statuses())?)
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}

impl WasmRegisterForm {
    fn statuses(&self) -> Vec<FieldStatus> {
        Field::ALL
            .into_iter()
            .map(|field| {
                let state = self.form.state(field);
                FieldStatus {
                    field: field.as_str().to_string(),
                    state: state.tag().to_string(),
                    message: state.message().map(str::to_string),
                }
            })
            .collect()
    }
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
