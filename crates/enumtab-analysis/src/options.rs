use crate::adapters::FormatSet;
use crate::naming::NameTransform;

/// How display names are derived from raw constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    /// Literal prefix stripped from identifiers (exact leading match only).
    pub trim_prefix: Option<String>,
    /// Prefix prepended to identifier-derived names after transforming.
    pub add_prefix: Option<String>,
    /// Use a constant's trailing annotation, when non-empty, as its name.
    pub use_annotation_as_name: bool,
    pub transform: NameTransform,
}

/// Everything the engine needs from the configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Enumeration types to process. Empty means every declared type.
    pub type_names: Vec<String>,
    pub naming: NamingOptions,
    pub formats: FormatSet,
}

impl GenerateOptions {
    pub fn for_type(type_name: impl Into<String>) -> Self {
        GenerateOptions {
            type_names: vec![type_name.into()],
            ..GenerateOptions::default()
        }
    }

    pub fn with_trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.naming.trim_prefix = Some(prefix.into());
        self
    }

    pub fn with_annotations(mut self) -> Self {
        self.naming.use_annotation_as_name = true;
        self
    }

    pub fn with_formats(mut self, formats: FormatSet) -> Self {
        self.formats = formats;
        self
    }
}
