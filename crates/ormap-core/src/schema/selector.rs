use super::{ClassId, ValueType};

/// Names exactly one property on exactly one class.
///
/// Selectors are plain descriptors: the owning class, the property name, and
/// the property's declared type. Obtain one through [`Catalog::select`].
///
/// [`Catalog::select`]: super::Catalog::select
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySelector {
    class: ClassId,
    property: String,
    ty: ValueType,
}

impl PropertySelector {
    pub(super) fn new(class: ClassId, property: &str, ty: ValueType) -> Self {
        Self {
            class,
            property: property.to_string(),
            ty,
        }
    }

    /// The owning class.
    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// The property's declared value type.
    pub fn ty(&self) -> ValueType {
        self.ty
    }
}
