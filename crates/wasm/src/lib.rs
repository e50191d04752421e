//! WASM bindings for the intake personal detail form
//!
//! This crate provides a JavaScript-friendly API for:
//! - Accumulating submitted form fields (in DOM order)
//! - Attaching an optional JPEG/PNG photo
//! - Rendering the styled A4 personal detail PDF in the browser
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { IntakeForm } from 'intakeform-wasm';
//!
//! await init();
//!
//! const form = new IntakeForm();
//! form.setFields([...new FormData(formElement).entries()]);
//!
//! // Photo read by the host (FileReader / arrayBuffer), passed as bytes
//! form.setPhoto(new Uint8Array(photoBuffer));
//!
//! const pdfBytes = form.render();
//! download(pdfBytes, form.filename());
//! ```

use intake_form::{FormFields, SubmissionRecord};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// One form submission, accumulated field by field and rendered to PDF
///
/// Instances are per-submission; create a fresh one for each render.
#[wasm_bindgen]
pub struct IntakeForm {
    fields: FormFields,
    photo: Option<Vec<u8>>,
}

#[wasm_bindgen]
impl IntakeForm {
    /// Create an empty form
    #[wasm_bindgen(constructor)]
    pub fn new() -> IntakeForm {
        IntakeForm {
            fields: FormFields::new(),
            photo: None,
        }
    }

    /// Append one submitted field
    ///
    /// @param name - Field name as submitted
    /// @param value - Field value
    #[wasm_bindgen(js_name = addField)]
    pub fn add_field(&mut self, name: &str, value: &str) {
        self.fields.push(name, value);
    }

    /// Replace all fields from an array of `[name, value]` pairs
    ///
    /// @param entries - e.g. `[...new FormData(form).entries()]`
    #[wasm_bindgen(js_name = setFields)]
    pub fn set_fields(&mut self, entries: JsValue) -> Result<(), JsValue> {
        let pairs: Vec<(String, String)> = serde_wasm_bindgen::from_value(entries)?;
        self.fields = pairs.into_iter().collect();
        Ok(())
    }

    /// Attach the applicant photo
    ///
    /// The host performs the async file read; this takes the resolved bytes.
    ///
    /// @param data - JPEG or PNG bytes (Uint8Array)
    #[wasm_bindgen(js_name = setPhoto)]
    pub fn set_photo(&mut self, data: &[u8]) {
        self.photo = Some(data.to_vec());
    }

    /// Render the personal detail PDF
    ///
    /// @returns PDF bytes (Uint8Array)
    pub fn render(&self) -> Result<Vec<u8>, JsValue> {
        let record = SubmissionRecord::from_fields(&self.fields);
        intake_report::render_pdf(&record, self.photo.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Download filename derived from the submitted full name
    pub fn filename(&self) -> String {
        intake_report::output_filename(&self.fields.first("fullName"))
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}
