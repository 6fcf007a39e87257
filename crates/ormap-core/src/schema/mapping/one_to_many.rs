use super::*;
use crate::schema::{Catalog, DefaultValue};

/// The referenced side of a one-to-many relationship. The foreign key lives
/// on the target's table.
#[derive(Debug, Clone)]
pub struct OneToMany {
    pub(crate) def: PropertyDef,

    /// The class holding the foreign key
    pub target: ClassId,

    /// The `ManyToOne` property on the target that pairs with this
    pub reciprocal: Option<String>,
}

impl OneToMany {
    pub fn new(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let target = collection_target(MappingKind::OneToMany, &selector)?;
        let table_name = catalog.naming().table_name(catalog, selector.class());

        log::debug!(
            "one-to-many `{}::{}` -> `{}`",
            catalog.name(selector.class()),
            selector.property(),
            catalog.name(target)
        );

        let mut def = PropertyDef::new(selector, table_name);
        def.default_value = Some(DefaultValue::empty_list());

        Ok(Self {
            def,
            target,
            reciprocal: None,
        })
    }

    /// Names the property on the target that holds the foreign key.
    pub fn reciprocal(mut self, property: impl Into<String>) -> Self {
        self.reciprocal = Some(property.into());
        self
    }
}
