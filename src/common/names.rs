/// Upper-case the first character, leaving the rest untouched.
///
/// Used as the type of last resort: a property `address` with no usable
/// type renders as `{Address}`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Name of the typedef emitted for a top-level property.
pub fn typedef_name(property_key: &str, suffix: &str) -> String {
    format!("{property_key}{suffix}")
}

/// Field token for a `@property` line; optional fields are bracketed.
pub fn field_token(field: &str, optional: bool) -> String {
    if optional {
        format!("[{field}]")
    } else {
        field.to_string()
    }
}
