use super::Error;

/// Error when relationship declarations disagree with each other.
///
/// Raised once by `Registry::finalize`, carrying every inconsistency found
/// across all classes.
#[derive(Debug)]
pub(super) struct InconsistentRelationshipError {
    issues: Box<[Box<str>]>,
}

impl std::error::Error for InconsistentRelationshipError {}

impl core::fmt::Display for InconsistentRelationshipError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "inconsistent relationships ({}): ", self.issues.len())?;
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
    /// Creates an inconsistent relationship error from a batch of issues.
    pub fn inconsistent_relationship(issues: Vec<String>) -> Error {
        Error::from(super::ErrorKind::InconsistentRelationship(
            InconsistentRelationshipError {
                issues: issues.into_iter().map(String::into_boxed_str).collect(),
            },
        ))
    }

    /// Returns `true` if this error is an inconsistent relationship error.
    pub fn is_inconsistent_relationship(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InconsistentRelationship(_))
    }

    /// Individual issues carried by an inconsistent relationship or invalid
    /// schema error. Empty for every other kind.
    pub fn issues(&self) -> impl Iterator<Item = &str> {
        let issues: &[Box<str>] = match self.kind() {
            super::ErrorKind::InconsistentRelationship(err) => &err.issues,
            super::ErrorKind::InvalidSchema(err) => err.issues(),
            _ => &[],
        };
        issues.iter().map(|issue| &**issue)
    }
}
