use super::*;
use crate::schema::Catalog;

/// The owning side of a one-to-many relationship: the owner's table holds a
/// foreign key to the target.
#[derive(Debug, Clone)]
pub struct ManyToOne {
    pub(crate) def: PropertyDef,

    /// The referenced class
    pub target: ClassId,
}

impl ManyToOne {
    pub fn new(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let target = single_target(MappingKind::ManyToOne, &selector)?;
        let table_name = catalog.naming().table_name(catalog, selector.class());

        log::debug!(
            "many-to-one `{}::{}` -> `{}`; key held by `{table_name}`",
            catalog.name(selector.class()),
            selector.property(),
            catalog.name(target)
        );

        Ok(Self {
            def: PropertyDef::new(selector, table_name),
            target,
        })
    }
}
