use super::Error;

/// Error when two declarations on one class resolve to the same field name.
#[derive(Debug)]
pub(super) struct DuplicateMappingError {
    class: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateMappingError {}

impl core::fmt::Display for DuplicateMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate mapping: field `{}` is already mapped on `{}`",
            self.field, self.class
        )
    }
}

impl Error {
    /// Creates a duplicate mapping error for `field` on `class`.
    pub fn duplicate_mapping(class: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateMapping(DuplicateMappingError {
            class: class.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate mapping error.
    pub fn is_duplicate_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateMapping(_))
    }
}
