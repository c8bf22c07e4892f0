//! WebAssembly bindings for the Forge design engine.
//!
//! This crate provides the JavaScript API the browser editor shell drives.
//!
//! ## Example
//!
//! ```js
//! import { ForgeEngine } from 'forge-engine';
//!
//! const engine = new ForgeEngine();
//!
//! // Load the canvas state (camelCase records, as the editor stores them)
//! engine.loadComponents([
//!   { id: 'root', type: 'div', name: 'Root', category: 'layout',
//!     props: {}, styles: { display: 'flex' } },
//!   { id: 'cta', type: 'button', name: 'CTA', category: 'interactive',
//!     parentId: 'root', props: { children: 'Go' }, styles: {} },
//! ]);
//!
//! // Emit source text; tree diagnostics land in the console
//! const code = engine.generateCode('react', true, true);
//! ```

use wasm_bindgen::prelude::*;

use forge_canvas::CanvasRect;
use forge_codegen::{generate_from_tree, CodegenOptions, Framework};
use forge_core::{ComponentRecord, Point};
use forge_document::{demo, ComponentLibrary, Document};
use forge_tree::ComponentTree;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The main engine interface for JavaScript.
#[wasm_bindgen]
pub struct ForgeEngine {
    document: Document,
    library: ComponentLibrary,
    last_warnings: Vec<String>,
}

#[wasm_bindgen]
impl ForgeEngine {
    /// Create a new engine instance with the standard component library.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            library: ComponentLibrary::standard(),
            last_warnings: Vec::new(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the document with an array of component records.
    #[wasm_bindgen(js_name = loadComponents)]
    pub fn load_components(&mut self, records: JsValue) -> Result<(), JsValue> {
        let records: Vec<ComponentRecord> = serde_wasm_bindgen::from_value(records)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.document.clear();
        for record in records {
            self.document.insert(record);
        }
        Ok(())
    }

    /// Replace the document with the built-in demo page.
    #[wasm_bindgen(js_name = loadDemoContent)]
    pub fn load_demo_content(&mut self) {
        demo::load_demo_content(&mut self.document);
    }

    /// Place a library component on the canvas; returns the new component's
    /// id, or `undefined` for an unknown kind.
    #[wasm_bindgen(js_name = addComponent)]
    pub fn add_component(&mut self, kind: &str, x: f64, y: f64) -> Option<String> {
        let item = self.library.get(kind)?.clone();
        let id = self
            .document
            .add_from_library(&item, Some(Point::new(x, y)), None);
        Some(id.to_string())
    }

    /// Number of components currently loaded.
    #[wasm_bindgen(js_name = componentCount)]
    pub fn component_count(&self) -> usize {
        self.document.len()
    }

    /// Generate source text for the loaded components.
    ///
    /// `framework` is `"react"`, `"html"`, or `"tailwind"` (anything else
    /// falls back to React). Tree warnings are forwarded to `console.warn`
    /// and kept for [`last_warnings`](Self::last_warnings).
    #[wasm_bindgen(js_name = generateCode)]
    pub fn generate_code(&mut self, framework: &str, include_styles: bool, format: bool) -> String {
        let tree = ComponentTree::build(self.document.records());

        self.last_warnings = tree.warnings().iter().map(|w| w.to_string()).collect();
        for warning in &self.last_warnings {
            web_sys::console::warn_1(&JsValue::from_str(warning));
        }

        let options = CodegenOptions {
            framework: Framework::from_name(framework),
            include_styles,
            format,
        };
        generate_from_tree(&tree, &options)
    }

    /// Warnings produced by the most recent `generateCode` call.
    #[wasm_bindgen(js_name = lastWarnings)]
    pub fn last_warnings(&self) -> Vec<String> {
        self.last_warnings.clone()
    }

    /// Export the current document as an array of component records.
    #[wasm_bindgen(js_name = components)]
    pub fn components(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.document.records())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ForgeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert client (viewport) coordinates to logical canvas coordinates.
#[wasm_bindgen(js_name = clientToCanvas)]
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    zoom: f64,
    scroll_x: f64,
    scroll_y: f64,
) -> Result<JsValue, JsValue> {
    let rect = CanvasRect::new(rect_left, rect_top, 0.0, 0.0);
    let point = forge_canvas::client_to_canvas(
        client_x,
        client_y,
        &rect,
        zoom,
        Point::new(scroll_x, scroll_y),
    );
    serde_wasm_bindgen::to_value(&point).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert logical canvas coordinates to client (viewport) coordinates.
#[wasm_bindgen(js_name = canvasToClient)]
pub fn canvas_to_client(
    logical_x: f64,
    logical_y: f64,
    rect_left: f64,
    rect_top: f64,
    zoom: f64,
    scroll_x: f64,
    scroll_y: f64,
) -> Result<JsValue, JsValue> {
    let rect = CanvasRect::new(rect_left, rect_top, 0.0, 0.0);
    let point = forge_canvas::canvas_to_client(
        logical_x,
        logical_y,
        &rect,
        zoom,
        Point::new(scroll_x, scroll_y),
    );
    serde_wasm_bindgen::to_value(&point).map_err(|e| JsValue::from_str(&e.to_string()))
}
