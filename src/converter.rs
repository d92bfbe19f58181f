pub mod properties;
pub mod references;
pub mod state;
pub mod typedefs;
pub mod types;

pub use state::{JsonToJsdocConverter, RenderOptions, MAX_ENUM_MEMBERS};

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::common::names::typedef_name;
use crate::error::{ConversionError, Result};
use crate::schema::SchemaNode;
use references::dereference_file;

impl JsonToJsdocConverter<'_> {
    /// Render a whole (dereferenced) document.
    ///
    /// Every top-level property except `$schema` becomes a typedef followed by
    /// a typed placeholder variable; the file ends with a `module.exports`
    /// line listing those variables in order.
    pub fn render_document(&self, root: &SchemaNode) -> String {
        let mut jsdoc = String::new();
        let mut export_objects: Vec<&str> = Vec::new();

        for (property_key, property) in &root.properties {
            self.log(property_key);

            if property_key == "$schema" {
                continue;
            }

            let type_name = typedef_name(property_key, &self.options.type_suffix);

            jsdoc.push_str(&self.generate_component(property, &type_name));

            jsdoc.push_str(&format!("/** @type {{{type_name}}} */ \n"));
            jsdoc.push_str(&format!("let {property_key} = {{}}; \n\n"));

            export_objects.push(property_key);
        }

        jsdoc.push_str(&format!(
            "module.exports = {{ {} }}\n",
            export_objects.join(", ")
        ));
        jsdoc
    }
}

/// Convert an in-memory, already dereferenced JSON Schema into JSDoc text
/// with default options.
pub fn jsons_to_jsdoc(json_schema: &Value) -> String {
    JsonToJsdocConverter::new().render_document(&SchemaNode::from(json_schema))
}

/// Convert a JSON Schema file into a JSDoc file.
///
/// The input must exist; it is read, dereferenced and rendered with
/// `converter`, and the result is written to `jsdoc_path`, creating parent
/// directories as needed.
pub fn convert_jsons_to_jsdoc(
    json_schema_path: &Path,
    jsdoc_path: &Path,
    converter: &JsonToJsdocConverter<'_>,
) -> Result<()> {
    if !json_schema_path.exists() {
        return Err(ConversionError::InputNotFound(json_schema_path.to_path_buf()));
    }

    let json_schema = dereference_file(json_schema_path)?;
    let root = SchemaNode::from(&json_schema);
    if root.properties.is_empty() {
        tracing::warn!(
            "{} has no top-level properties, output will only export an empty object",
            json_schema_path.display()
        );
    }
    let jsdoc = converter.render_document(&root);

    let write_err = |source| ConversionError::Write {
        path: jsdoc_path.to_path_buf(),
        source,
    };
    if let Some(parent) = jsdoc_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(jsdoc_path, &jsdoc).map_err(write_err)?;

    tracing::info!(
        "wrote {} bytes of JSDoc to {}",
        jsdoc.len(),
        jsdoc_path.display()
    );
    Ok(())
}
