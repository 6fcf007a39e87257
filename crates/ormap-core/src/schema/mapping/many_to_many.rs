use super::*;
use crate::schema::{naming, Catalog, DefaultValue};

/// A relationship stored in a join table shared by both classes.
#[derive(Debug, Clone)]
pub struct ManyToMany {
    pub(crate) def: PropertyDef,

    /// The related class
    pub target: ClassId,
}

impl ManyToMany {
    /// Declares the relationship. The initial table name is the join table
    /// derived from both class names, so either side resolves the same table.
    pub fn new(catalog: &Catalog, selector: PropertySelector) -> Result<Self> {
        let target = collection_target(MappingKind::ManyToMany, &selector)?;
        let join_table =
            naming::resolve_join_table_name(catalog.name(selector.class()), catalog.name(target));

        log::debug!(
            "many-to-many `{}::{}` -> `{}` via `{join_table}`",
            catalog.name(selector.class()),
            selector.property(),
            catalog.name(target)
        );

        let mut def = PropertyDef::new(selector, join_table);
        def.default_value = Some(DefaultValue::empty_list());

        Ok(Self { def, target })
    }

    /// The two participating classes: the owner first, then the target.
    pub fn classes(&self) -> (ClassId, ClassId) {
        (self.def.selector.class(), self.target)
    }

    pub fn join_table(&self) -> &str {
        &self.def.table_name
    }

    pub fn is_self_referencing(&self) -> bool {
        self.def.selector.class() == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Value;

    #[test]
    fn default_value_is_a_fresh_empty_list() {
        let mut catalog = Catalog::new();
        let user = catalog.add_class("User").unwrap();
        catalog
            .add_property(user, "friends", ValueType::List(user))
            .unwrap();

        let friends = ManyToMany::new(&catalog, catalog.select(user, "friends").unwrap()).unwrap();

        assert!(friends.is_self_referencing());
        assert_eq!(friends.join_table(), "User_User");
        assert_eq!(friends.def().default_value(), Value::List(vec![]));
        assert_eq!(friends.def().default_value(), Value::List(vec![]));
    }

    #[test]
    fn join_table_ignores_naming_prefix() {
        let mut naming = crate::schema::Naming::new();
        naming.table_name_prefix("app_");

        let mut catalog = Catalog::with_naming(naming);
        let order = catalog.add_class("Order").unwrap();
        let customer = catalog.add_class("Customer").unwrap();
        catalog
            .add_property(order, "customers", ValueType::List(customer))
            .unwrap();

        let customers =
            ManyToMany::new(&catalog, catalog.select(order, "customers").unwrap()).unwrap();
        assert_eq!(customers.join_table(), "Customer_Order");
        assert_eq!(customers.classes(), (order, customer));
    }
}
