use super::*;
use crate::schema::Catalog;

#[derive(Debug, Clone)]
pub struct OneToOne {
    pub(crate) def: PropertyDef,

    /// Associated class
    pub target: ClassId,

    /// True if this side's table holds the foreign key
    pub owning: bool,

    /// The `OneToOne` property on the target that pairs with this
    pub reciprocal: Option<String>,
}

impl OneToOne {
    /// Declares the referenced side. Use [`OneToOne::owns_foreign_key`] for
    /// the side whose table holds the key.
    pub fn new(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let target = single_target(MappingKind::OneToOne, &selector)?;
        let table_name = catalog.naming().table_name(catalog, selector.class());

        log::debug!(
            "one-to-one `{}::{}` -> `{}`",
            catalog.name(selector.class()),
            selector.property(),
            catalog.name(target)
        );

        Ok(Self {
            def: PropertyDef::new(selector, table_name),
            target,
            owning: false,
            reciprocal: None,
        })
    }

    pub fn owns_foreign_key(mut self) -> Self {
        self.owning = true;
        self
    }

    pub fn reciprocal(mut self, property: impl Into<String>) -> Self {
        self.reciprocal = Some(property.into());
        self
    }
}
