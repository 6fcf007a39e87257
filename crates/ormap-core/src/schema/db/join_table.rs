use crate::schema::{ClassId, Configure, ManyToMany, Mappings};

/// An association table between two classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    pub name: String,

    /// Participating classes, ordered by display name. Equal for
    /// self-referencing relationships.
    pub classes: (ClassId, ClassId),

    /// True if any declaring side enables cascade
    pub cascade: bool,

    /// Declaring properties, as `(class, property)`
    pub declared_by: Vec<(ClassId, String)>,
}

impl JoinTable {
    pub(super) fn new(mappings: &Mappings, many_to_many: &ManyToMany) -> Self {
        let catalog = mappings.catalog();
        let (owner, target) = many_to_many.classes();

        let classes = if catalog.name(owner) <= catalog.name(target) {
            (owner, target)
        } else {
            (target, owner)
        };

        Self {
            name: many_to_many.join_table().to_string(),
            classes,
            cascade: false,
            declared_by: vec![],
        }
    }

    pub(super) fn declare(&mut self, many_to_many: &ManyToMany) {
        let selector = &many_to_many.def().selector;
        self.cascade |= many_to_many.def().cascade;
        self.declared_by
            .push((selector.class(), selector.property().to_string()));
    }

    pub fn is_self_referencing(&self) -> bool {
        self.classes.0 == self.classes.1
    }
}
