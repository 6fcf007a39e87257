use super::{Naming, PropertySelector, ValueType};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;

/// Uniquely identifies a class within a [`Catalog`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId(pub usize);

/// Description of one host class: its display name and declared properties.
#[derive(Debug, Clone)]
pub struct Class {
    /// Uniquely identifies the class within the catalog
    pub id: ClassId,

    /// Display name used when deriving table names
    pub name: String,

    /// Declared properties, in declaration order
    pub properties: IndexMap<String, Property>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: ValueType,
}

/// Injected class identity and display-name table.
///
/// The catalog stands in for the host's reflection facility. Mapping kinds
/// consult it for class names and property types, so naming never depends on
/// how the host introspects its types.
#[derive(Debug, Default)]
pub struct Catalog {
    classes: Vec<Class>,

    /// How default entity table names are derived
    naming: Naming,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: Naming) -> Self {
        Self {
            classes: vec![],
            naming,
        }
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Describes a new class and returns its identity.
    pub fn add_class(&mut self, name: impl Into<String>) -> Result<ClassId> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::configuration("class name must not be empty"));
        }

        if self.classes.iter().any(|class| class.name == name) {
            return Err(Error::configuration(format!(
                "class `{name}` is already described"
            )));
        }

        let id = ClassId(self.classes.len());
        self.classes.push(Class {
            id,
            name,
            properties: IndexMap::new(),
        });
        Ok(id)
    }

    /// Declares a property on an already described class.
    pub fn add_property(
        &mut self,
        class: ClassId,
        name: impl Into<String>,
        ty: impl Into<ValueType>,
    ) -> Result<()> {
        let name = name.into();
        let ty = ty.into();

        if name.is_empty() {
            return Err(Error::configuration(format!(
                "property name on `{}` must not be empty",
                self.try_class(class)?.name
            )));
        }

        if let Some(related) = ty.related_class() {
            self.try_class(related)?;
        }

        let class = self.try_class_mut(class)?;

        if class.properties.contains_key(&name) {
            return Err(Error::configuration(format!(
                "property `{}::{name}` is already declared",
                class.name
            )));
        }

        class.properties.insert(name.clone(), Property { name, ty });
        Ok(())
    }

    /// Selects `property` on `class`, anchoring a mapping declaration.
    pub fn select(&self, class: ClassId, property: &str) -> Result<PropertySelector> {
        let owner = self.try_class(class)?;
        let Some(property) = owner.properties.get(property) else {
            return Err(Error::configuration(format!(
                "`{}` has no property named `{property}`",
                owner.name
            )));
        };

        Ok(PropertySelector::new(class, &property.name, property.ty))
    }

    /// Get a class by ID
    #[track_caller]
    pub fn class(&self, id: ClassId) -> &Class {
        self.classes.get(id.0).expect("invalid class ID")
    }

    /// Get a class's display name
    #[track_caller]
    pub fn name(&self, id: ClassId) -> &str {
        &self.class(id).name
    }

    pub fn class_by_name(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }

    pub(crate) fn try_class(&self, id: ClassId) -> Result<&Class> {
        self.classes
            .get(id.0)
            .ok_or_else(|| Error::configuration(format!("class {id:?} is not described")))
    }

    fn try_class_mut(&mut self, id: ClassId) -> Result<&mut Class> {
        self.classes
            .get_mut(id.0)
            .ok_or_else(|| Error::configuration(format!("class {id:?} is not described")))
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Primitive;

    #[test]
    fn select_known_property() {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();
        catalog.add_property(user, "name", Primitive::String).unwrap();

        let selector = catalog.select(user, "name").unwrap();
        assert_eq!(selector.class(), user);
        assert_eq!(selector.property(), "name");
        assert_eq!(selector.ty(), ValueType::Primitive(Primitive::String));
    }

    #[test]
    fn select_unknown_property() {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();

        let err = catalog.select(user, "email").unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: `User` has no property named `email`"
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_class("").unwrap_err().is_configuration());

        let user = catalog.add_class("User").unwrap();
        assert!(catalog.add_class("User").unwrap_err().is_configuration());

        assert!(catalog
            .add_property(user, "", Primitive::I64)
            .unwrap_err()
            .is_configuration());

        catalog.add_property(user, "id", Primitive::I64).unwrap();
        assert!(catalog
            .add_property(user, "id", Primitive::String)
            .unwrap_err()
            .is_configuration());
    }

    #[test]
    fn related_class_must_be_described() {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();

        let err = catalog
            .add_property(user, "friends", ValueType::List(ClassId(7)))
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
