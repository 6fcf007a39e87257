use super::*;
use crate::schema::{Catalog, Primitive};

/// A plain column, including primary key and auto-increment columns.
#[derive(Debug, Clone)]
pub struct Scalar {
    pub(crate) def: PropertyDef,

    /// The column's primitive type
    pub primitive: Primitive,
}

impl Scalar {
    pub fn new(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let Some(primitive) = selector.ty().as_primitive() else {
            return Err(shape_error(
                MappingKind::Scalar,
                &selector,
                "a primitive type",
            ));
        };

        let table_name = catalog.naming().table_name(catalog, selector.class());
        log::debug!(
            "scalar `{}::{}` -> column in `{table_name}`",
            catalog.name(selector.class()),
            selector.property()
        );

        Ok(Self {
            def: PropertyDef::new(selector, table_name),
            primitive,
        })
    }

    /// Declares an identifier column: not null, unique, and auto-incremented
    /// when the type is an integer.
    pub fn id(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let scalar = Self::new(catalog, selector)?.disallow_nulls().mark_unique();

        Ok(if scalar.primitive.is_integer() {
            scalar.enable_auto_increment()
        } else {
            scalar
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Value;

    fn catalog() -> (Catalog, ClassId) {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();
        catalog.add_property(user, "id", Primitive::I64).unwrap();
        catalog.add_property(user, "key", Primitive::Uuid).unwrap();
        catalog.add_property(user, "name", Primitive::String).unwrap();
        (catalog, user)
    }

    #[test]
    fn defaults() {
        let (catalog, user) = catalog();
        let name = Scalar::new(&catalog, catalog.select(user, "name").unwrap()).unwrap();

        let def = name.def();
        assert_eq!(def.field_name, "name");
        assert_eq!(def.table_name, "User");
        assert!(def.nullable);
        assert!(!def.unique);
        assert!(!def.indexed);
        assert!(!def.auto_increment);
        assert!(!def.cascade);
        assert_eq!(def.max_length, None);
        assert_eq!(def.default_value(), Value::Null);
    }

    #[test]
    fn integer_id_auto_increments() {
        let (catalog, user) = catalog();
        let id = Scalar::id(&catalog, catalog.select(user, "id").unwrap()).unwrap();

        assert!(!id.def().nullable);
        assert!(id.def().unique);
        assert!(id.def().auto_increment);
    }

    #[test]
    fn uuid_id_does_not_auto_increment() {
        let (catalog, user) = catalog();
        let key = Scalar::id(&catalog, catalog.select(user, "key").unwrap()).unwrap();

        assert!(!key.def().nullable);
        assert!(!key.def().auto_increment);
    }

    #[test]
    fn requires_primitive() {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();
        catalog
            .add_property(user, "friends", ValueType::List(user))
            .unwrap();

        let err = Scalar::new(&catalog, catalog.select(user, "friends").unwrap()).unwrap_err();
        assert!(err.is_configuration());
    }
}
