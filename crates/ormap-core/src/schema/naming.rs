use super::{Catalog, ClassId, PropertySelector};

/// Configures how default entity table names are derived.
///
/// Join table names are never affected; they always follow
/// [`resolve_join_table_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Naming {
    /// If set, prefix all entity table names with this string
    pub table_name_prefix: Option<String>,

    /// If set, suffix all entity table names with this string
    pub table_name_suffix: Option<String>,
}

impl Naming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn table_name_suffix(&mut self, suffix: &str) -> &mut Self {
        self.table_name_suffix = Some(suffix.to_string());
        self
    }

    /// Default table name for `class`, with the configured prefix and suffix.
    pub fn table_name(&self, catalog: &Catalog, class: ClassId) -> String {
        let base = resolve_default_table_name(catalog.name(class));

        match (&self.table_name_prefix, &self.table_name_suffix) {
            (None, None) => base,
            (prefix, suffix) => format!(
                "{}{base}{}",
                prefix.as_deref().unwrap_or_default(),
                suffix.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Join table name for a many-to-many relationship between two classes.
///
/// The ordinally smaller name goes first, so declaring the relationship from
/// either side yields the same table. A self-referencing relationship repeats
/// the class name.
pub fn resolve_join_table_name(class_a: &str, class_b: &str) -> String {
    let (first, second) = if class_a <= class_b {
        (class_a, class_b)
    } else {
        (class_b, class_a)
    };

    format!("{first}_{second}")
}

pub fn resolve_default_field_name(selector: &PropertySelector) -> String {
    selector.property().to_string()
}

pub fn resolve_default_table_name(class: &str) -> String {
    class.to_string()
}
