mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Catalog, Mappings, Registry};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
