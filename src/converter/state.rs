use crate::schema::SchemaNode;

/// Enumerations longer than this render as plain `string`.
pub const MAX_ENUM_MEMBERS: usize = 30;

/// Knobs for rendering a schema into JSDoc.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Appended to each top-level property name to form its typedef name.
    pub type_suffix: String,
    pub max_enum_members: usize,
    /// Property schemas to leave out of the top-level walk, matched by value.
    pub ignore: Vec<SchemaNode>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            type_suffix: "Type".to_string(),
            max_enum_members: MAX_ENUM_MEMBERS,
            ignore: Vec::new(),
        }
    }
}

/// Holds the state for converting JSON Schema → JSDoc.
///
/// Rendering goes through `&self` only; the logger is called with one line
/// per visited property and never influences the produced text.
pub struct JsonToJsdocConverter<'a> {
    pub options: RenderOptions,
    logger: Box<dyn Fn(&str) + 'a>,
}

impl Default for JsonToJsdocConverter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> JsonToJsdocConverter<'a> {
    /// Create a new converter with default settings and a silent logger.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            logger: Box::new(|_: &str| {}),
        }
    }

    pub fn with_logger(mut self, logger: impl Fn(&str) + 'a) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub(crate) fn log(&self, message: &str) {
        (self.logger)(message);
    }
}
