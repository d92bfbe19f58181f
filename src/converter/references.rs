use percent_encoding::percent_decode_str;
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;
use url::Url;

use crate::error::{ConversionError, Result};

/// Definition tables are only reachable through `$ref`; they are copied
/// as written so unused recursive definitions never get expanded.
const DEFINITION_KEYS: [&str; 2] = ["definitions", "$defs"];

/// Base URI for schemas that were never read from disk and carry no `$id`.
/// Relative `$ref`s to other documents fail against it with an unsupported
/// scheme error.
const IN_MEMORY_BASE: &str = "memory:///schema.json";

/// A simple cache of parsed schema documents, keyed by URL without fragment.
#[derive(Default)]
pub struct ContentCache {
    cache: HashMap<String, Rc<Value>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &Url) -> Option<Rc<Value>> {
        self.cache.get(url.as_str()).cloned()
    }

    pub fn insert(&mut self, url: &Url, document: Rc<Value>) {
        self.cache.insert(url.to_string(), document);
    }
}

/// Fetch schema text from an `http(s)` or `file` URL.
pub fn fetch_content(url: &Url) -> Result<String> {
    match url.scheme() {
        "http" | "https" => {
            let http_err = |source| ConversionError::Http {
                url: url.to_string(),
                source,
            };
            let client = Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(http_err)?;
            client
                .get(url.as_str())
                .send()
                .and_then(|resp| resp.error_for_status())
                .and_then(|resp| resp.text())
                .map_err(http_err)
        }
        "file" => {
            let path = url.to_file_path().map_err(|_| ConversionError::Reference {
                reference: url.to_string(),
                reason: "not a local file path".to_string(),
            })?;
            fs::read_to_string(&path).map_err(|source| ConversionError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        other => Err(ConversionError::UnsupportedScheme(other.to_string())),
    }
}

/// Inlines every `$ref` of a schema, loading referenced documents on demand.
///
/// Supports:
/// - JSON Pointer fragments into the same document (`#/definitions/...`),
/// - relative or absolute `file:` documents, and `http(s):` documents.
///
/// Also tolerates sloppy `#definitions/...` by normalizing to `#/definitions/...`.
/// Keys written next to a `$ref` are laid over the resolved object.
/// `definitions` / `$defs` tables are left untouched; a cycle is only an
/// error when it is reachable from the rest of the document.
#[derive(Default)]
pub struct Dereferencer {
    cache: ContentCache,
    // targets currently being expanded, as `document#pointer`
    stack: Vec<String>,
}

impl Dereferencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dereference `schema`, resolving relative references against `base`.
    pub fn dereference(&mut self, schema: Value, base: &Url) -> Result<Value> {
        let mut document_url = base.clone();
        document_url.set_fragment(None);
        let document = Rc::new(schema);
        self.cache.insert(&document_url, Rc::clone(&document));
        self.expand(&document, &document, &document_url)
    }

    fn expand(&mut self, value: &Value, document: &Rc<Value>, base: &Url) -> Result<Value> {
        match value {
            Value::Object(map) => {
                if let Some(reference) = map.get("$ref").and_then(|r| r.as_str()) {
                    let mut resolved = self.resolve_reference(reference, document, base)?;
                    if let Value::Object(target) = &mut resolved {
                        for (key, sibling) in map.iter().filter(|(k, _)| *k != "$ref") {
                            target.insert(key.clone(), self.expand(sibling, document, base)?);
                        }
                    }
                    return Ok(resolved);
                }

                let mut out = Map::with_capacity(map.len());
                for (key, child) in map {
                    let child = match key.as_str() {
                        k if DEFINITION_KEYS.contains(&k) => child.clone(),
                        "properties" => self.expand_named(child, document, base)?,
                        _ => self.expand(child, document, base)?,
                    };
                    out.insert(key.clone(), child);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.expand(item, document, base))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }

    /// Expand a name -> schema map; its keys are property names, not keywords.
    fn expand_named(&mut self, value: &Value, document: &Rc<Value>, base: &Url) -> Result<Value> {
        let Value::Object(map) = value else {
            return self.expand(value, document, base);
        };
        let mut out = Map::with_capacity(map.len());
        for (name, child) in map {
            out.insert(name.clone(), self.expand(child, document, base)?);
        }
        Ok(Value::Object(out))
    }

    fn resolve_reference(&mut self, reference: &str, document: &Rc<Value>, base: &Url) -> Result<Value> {
        let parsed = base.join(reference).map_err(|e| ConversionError::Reference {
            reference: reference.to_string(),
            reason: e.to_string(),
        })?;

        let mut target_url = parsed.clone();
        target_url.set_fragment(None);

        let target_document = if target_url == *base {
            Rc::clone(document)
        } else {
            self.load(&target_url)?
        };

        // url keeps fragments percent-encoded; JSON Pointers need the raw names
        let fragment = percent_decode_str(parsed.fragment().unwrap_or(""))
            .decode_utf8()
            .map_err(|e| ConversionError::Reference {
                reference: reference.to_string(),
                reason: e.to_string(),
            })?;

        // normalize fragment to RFC6901 JSON Pointer
        let pointer = if fragment.is_empty() || fragment.starts_with('/') {
            fragment.into_owned()
        } else {
            format!("/{fragment}")
        };

        let key = format!("{target_url}#{pointer}");
        if self.stack.contains(&key) {
            return Err(ConversionError::CircularReference(key));
        }

        let target = target_document
            .pointer(&pointer)
            .ok_or_else(|| ConversionError::Reference {
                reference: reference.to_string(),
                reason: format!("JSON Pointer {pointer} not found in {target_url}"),
            })?;

        tracing::debug!("resolving $ref {reference} -> {key}");
        self.stack.push(key);
        let resolved = self.expand(target, &target_document, &target_url);
        self.stack.pop();
        resolved
    }

    fn load(&mut self, url: &Url) -> Result<Rc<Value>> {
        if let Some(cached) = self.cache.get(url) {
            return Ok(cached);
        }
        let text = fetch_content(url)?;
        let document: Value = serde_json::from_str(&text).map_err(|source| ConversionError::Parse {
            origin: url.to_string(),
            source,
        })?;
        let document = Rc::new(document);
        self.cache.insert(url, Rc::clone(&document));
        Ok(document)
    }
}

/// Dereference an in-memory schema.
///
/// Relative references resolve against the schema's `$id` when it is an
/// absolute URL.
pub fn dereference(schema: &Value) -> Result<Value> {
    let base = match schema
        .get("$id")
        .and_then(|id| id.as_str())
        .and_then(|id| Url::parse(id).ok())
    {
        Some(id) => id,
        None => Url::parse(IN_MEMORY_BASE).map_err(|e| ConversionError::Reference {
            reference: IN_MEMORY_BASE.to_string(),
            reason: e.to_string(),
        })?,
    };
    Dereferencer::new().dereference(schema.clone(), &base)
}

/// Read a schema file and dereference it, resolving relative references
/// against the file's own location.
pub fn dereference_file(path: &Path) -> Result<Value> {
    let read_err = |source| ConversionError::Read {
        path: path.display().to_string(),
        source,
    };
    let canonical = fs::canonicalize(path).map_err(read_err)?;
    let text = fs::read_to_string(&canonical).map_err(read_err)?;
    let schema: Value = serde_json::from_str(&text).map_err(|source| ConversionError::Parse {
        origin: path.display().to_string(),
        source,
    })?;

    let base = Url::from_file_path(&canonical).map_err(|_| ConversionError::Reference {
        reference: canonical.display().to_string(),
        reason: "cannot be expressed as a file URL".to_string(),
    })?;
    Dereferencer::new().dereference(schema, &base)
}
