use super::Error;

/// Error when a mapping is registered after the registry was finalized.
#[derive(Debug)]
pub(super) struct RegistryClosedError {
    class: Box<str>,
}

impl std::error::Error for RegistryClosedError {}

impl core::fmt::Display for RegistryClosedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mapping registry is closed; cannot register `{}`",
            self.class
        )
    }
}

impl Error {
    /// Creates a registry closed error for an attempted registration on `class`.
    pub fn registry_closed(class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RegistryClosed(RegistryClosedError {
            class: class.into().into(),
        }))
    }

    /// Returns `true` if this error is a registry closed error.
    pub fn is_registry_closed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RegistryClosed(_))
    }
}
