use super::Error;

/// Error when finalized column facts are hazardous.
///
/// This occurs when:
/// - An auto-increment column is nullable
/// - Auto-increment is set on a non-integer column or on a relationship
/// - A max length is set on a column that is neither text nor binary
/// - A default value provider yields a value of the wrong type
///
/// These are caught at finalize time and reported together.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    issues: Box<[Box<str>]>,
}

impl InvalidSchema {
    pub(super) fn issues(&self) -> &[Box<str>] {
        &self.issues
    }
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid schema: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(issue)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an invalid schema error from a batch of column hazards.
    pub fn invalid_schema(issues: Vec<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            issues: issues.into_iter().map(String::into_boxed_str).collect(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
