use serde_json::Value;

use crate::converter::types::generate_enums;
use crate::converter::JsonToJsdocConverter;
use crate::schema::{NodeKind, SchemaNode};

impl JsonToJsdocConverter<'_> {
    /// Generate a JSDoc typedef for one (dereferenced) schema node.
    ///
    /// Empty nodes produce an empty string. Enum nodes always take the enum
    /// path, even when they also carry `properties`.
    pub fn generate_component(&self, schema: &SchemaNode, name: &str) -> String {
        if schema.is_empty() {
            return String::new();
        }
        if schema.is_enum() {
            return self.process_enum_schema(schema, name);
        }

        let mut jsdoc = String::from("\n");
        jsdoc.push_str("/**\n");
        jsdoc.push_str(&typedef_header(schema, name));
        jsdoc.push_str(&self.process_properties(schema, Some(self.options.ignore.as_slice())));
        jsdoc.push_str(" */\n\n");
        jsdoc
    }

    /// Standalone typedef for an enumeration node.
    ///
    /// With a description the block carries an extra closing ` */` line;
    /// consumers of the generated files rely on that exact shape.
    pub fn process_enum_schema(&self, schema: &SchemaNode, name: &str) -> String {
        let values: &[Value] = match &schema.kind {
            NodeKind::Enum(values) => values.as_slice(),
            _ => &[],
        };
        let enums = generate_enums(values, self.options.max_enum_members);

        let mut jsdoc = String::from("/**\n");
        jsdoc.push_str(&format!(" * @typedef {{{enums}}} {name}\n"));
        if let Some(description) = schema.description() {
            jsdoc.push_str(" *\n");
            jsdoc.push_str(&format!(" * {description} */\n\n"));
        }
        jsdoc.push_str(" */\n\n");
        jsdoc
    }
}

/// Header lines naming the typedef, plus the description when there is one.
fn typedef_header(schema: &SchemaNode, name: &str) -> String {
    let mut text = format!(" * @typedef {{Object}} {name}\n");
    text.push_str(" *\n");
    if let Some(description) = schema.description() {
        text.push_str(&format!(" * {description}\n"));
        text.push_str(" *\n");
    }
    text
}
