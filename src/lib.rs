//! # jsonschema-jsdoc
//!
//! Convert [JSON Schema](https://json-schema.org/) documents into
//! [JSDoc](https://jsdoc.app/) typedef files that editors can type-check
//! plain JavaScript against.
//!
//! ## Features
//!
//! - Resolves `$ref`s (same document, sibling files, or `http(s)` URLs)
//! - One `@typedef` per top-level property, plus a typed placeholder variable
//! - Nested objects flatten into dotted `@property` paths (`location.street`)
//! - Enumerations become literal unions (`"home"|"work"`), or `string` when large
//! - Nullable type lists render with the `?type` shorthand
//! - CLI tool `jsonschema2jsdoc` for file conversion
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use jsonschema_jsdoc::converter::jsons_to_jsdoc;
//!
//! let schema = json!({
//!     "properties": {
//!         "Person": {
//!             "type": "object",
//!             "properties": {
//!                 "name": { "type": "string" },
//!                 "age": { "type": "integer" }
//!             },
//!             "required": ["name"]
//!         }
//!     }
//! });
//!
//! let jsdoc = jsons_to_jsdoc(&schema);
//! assert!(jsdoc.contains(" * @property {string} name - "));
//! assert!(jsdoc.contains(" * @property {integer} [age] - "));
//! assert!(jsdoc.ends_with("module.exports = { Person }\n"));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! jsonschema2jsdoc schema.json types.js
//! ```
//!
//! ## Crate Layout
//!
//! - [`schema`] — Parsed schema tree (`SchemaNode`, `NodeKind`)
//! - [`common`] — Naming and JavaScript literal helpers
//! - [`converter`] — Dereferencing and JSON Schema → JSDoc rendering
//! - [`error`] — The crate error type
//!
//! The CLI binary is enabled with the `cli` feature (on by default).
pub mod common;
pub mod converter;
pub mod error;
pub mod schema;

pub use converter::{JsonToJsdocConverter, RenderOptions};
pub use error::{ConversionError, Result};
pub use schema::SchemaNode;
