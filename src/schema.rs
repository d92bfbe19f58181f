use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A JSON Schema `type` declaration: either a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    Single(String),
    Many(Vec<String>),
}

/// What a schema node is, decided once when the node is parsed.
///
/// An `enum` wins over everything else; after that `type` picks `Object`
/// or `Array`, and anything left over is a `Leaf`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Absent, non-object, or key-less input.
    Empty,
    Enum(Vec<Value>),
    Object,
    Array,
    Leaf(Option<TypeDecl>),
}

/// One point of a dereferenced schema tree.
///
/// `properties` and `required` live next to the kind rather than inside it:
/// the property walk consults them on every node, whatever its kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SchemaNode {
    pub kind: NodeKind,
    pub properties: IndexMap<String, SchemaNode>,
    pub required: Vec<String>,
    pub description: Option<String>,
    pub example: Option<Value>,
}

impl SchemaNode {
    pub fn empty() -> Self {
        Self {
            kind: NodeKind::Empty,
            properties: IndexMap::new(),
            required: Vec::new(),
            description: None,
            example: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, NodeKind::Enum(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, NodeKind::Object)
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|r| r == key)
    }

    /// Description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Rename every direct property key to a dotted path under `parent`,
    /// e.g. `street` under `location` becomes `location.street`.
    pub fn into_dotted_properties(mut self, parent: &str) -> Self {
        self.properties = std::mem::take(&mut self.properties)
            .into_iter()
            .map(|(key, child)| (format!("{parent}.{key}"), child))
            .collect();
        self
    }
}

impl Default for SchemaNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&Value> for SchemaNode {
    fn from(value: &Value) -> Self {
        let Some(obj) = value.as_object().filter(|o| !o.is_empty()) else {
            return Self::empty();
        };

        let properties = obj
            .get("properties")
            .and_then(|p| p.as_object())
            .map(|map| {
                map.iter()
                    .map(|(key, child)| (key.clone(), SchemaNode::from(child)))
                    .collect()
            })
            .unwrap_or_default();

        let required = obj
            .get("required")
            .and_then(|r| r.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let ty = match obj.get("type") {
            Some(Value::String(s)) => Some(TypeDecl::Single(s.clone())),
            Some(Value::Array(arr)) => Some(TypeDecl::Many(
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect(),
            )),
            _ => None,
        };

        let kind = if let Some(values) = obj.get("enum").and_then(|e| e.as_array()) {
            NodeKind::Enum(values.clone())
        } else {
            match ty {
                Some(TypeDecl::Single(ref s)) if s == "object" => NodeKind::Object,
                Some(TypeDecl::Single(ref s)) if s == "array" => NodeKind::Array,
                other => NodeKind::Leaf(other),
            }
        };

        Self {
            kind,
            properties,
            required,
            description: obj
                .get("description")
                .and_then(|d| d.as_str())
                .map(|s| s.to_string()),
            example: obj.get("example").cloned(),
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        SchemaNode::from(&value)
    }
}
