use serde_json::Value;

use crate::common::literal::quoted;
use crate::schema::{NodeKind, SchemaNode, TypeDecl};

/// Build a JSDoc union of literals, e.g. `"home"|"work"|"cell"`.
///
/// Falls back to `string` once the enumeration has more than `max_members`
/// values; a huge union is unreadable in editor tooltips.
pub fn generate_enums(values: &[Value], max_members: usize) -> String {
    if values.len() > max_members {
        return "string".to_string();
    }
    values.iter().map(quoted).collect::<Vec<_>>().join("|")
}

/// JSDoc type expression for a schema node, if it declares one.
///
/// - enum → literal union (see [`generate_enums`])
/// - `type: [..]` containing `"null"` → `?` + the *first* entry, whatever it is
/// - `type: [..]` otherwise → entries joined with `|`
/// - `type: "x"` → `x`
///
/// An empty expression is reported as `None`.
pub fn get_type(node: &SchemaNode, max_enum_members: usize) -> Option<String> {
    let ty = match &node.kind {
        NodeKind::Empty => None,
        NodeKind::Enum(values) => Some(generate_enums(values, max_enum_members)),
        NodeKind::Object => Some("object".to_string()),
        NodeKind::Array => Some("array".to_string()),
        NodeKind::Leaf(None) => None,
        NodeKind::Leaf(Some(TypeDecl::Single(s))) => Some(s.clone()),
        NodeKind::Leaf(Some(TypeDecl::Many(types))) => {
            if types.iter().any(|t| t == "null") {
                Some(format!("?{}", types[0]))
            } else {
                Some(types.join("|"))
            }
        }
    };
    ty.filter(|t| !t.is_empty())
}
