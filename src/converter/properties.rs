use crate::common::literal::{is_truthy, js_string};
use crate::common::names::{field_token, upper_first};
use crate::converter::types::get_type;
use crate::converter::JsonToJsdocConverter;
use crate::schema::SchemaNode;

impl JsonToJsdocConverter<'_> {
    /// One `@property` line per entry of `schema.properties`, recursing into
    /// nested objects.
    ///
    /// Nested keys are flattened to dotted paths (`location.street`). The
    /// object line itself is always optional, and nested fields are only
    /// required if the nested `required` list names the dotted path, which in
    /// practice never happens.
    ///
    /// `ignore` drops properties whose schema equals one of the listed nodes.
    /// It only applies at this level; recursive calls pass `None`.
    pub fn process_properties(&self, schema: &SchemaNode, ignore: Option<&[SchemaNode]>) -> String {
        let mut text = String::new();

        // work on a private copy, flattening renames keys in place
        let properties = schema.properties.clone();

        for (key, property) in properties {
            self.log(&format!("--{key}"));

            if ignore.is_some_and(|list| list.contains(&property)) {
                continue;
            }

            let property = if property.properties.is_empty() {
                property
            } else {
                for sub_key in property.properties.keys() {
                    self.log(&format!("----{sub_key}"));
                }
                property.into_dotted_properties(&key)
            };

            if property.is_object() && !property.properties.is_empty() {
                text.push_str(&write_param(
                    "object",
                    &key,
                    property.description().unwrap_or(""),
                    true,
                ));
                text.push_str(&self.process_properties(&property, None));
            } else {
                let optional = !schema.is_required(&key);
                let ty = get_type(&property, self.options.max_enum_members)
                    .unwrap_or_else(|| upper_first(&key));
                let description = match property.description() {
                    Some(d) => d.to_string(),
                    None => property
                        .example
                        .as_ref()
                        .filter(|e| is_truthy(e))
                        .map(|e| format!("Example: {}", js_string(e)))
                        .unwrap_or_default(),
                };
                text.push_str(&write_param(&ty, &key, &description, optional));
            }
        }

        text
    }
}

/// Serialize a single field annotation.
pub fn write_param(ty: &str, field: &str, description: &str, optional: bool) -> String {
    format!(
        " * @property {{{ty}}} {} - {description} \n",
        field_token(field, optional)
    )
}
