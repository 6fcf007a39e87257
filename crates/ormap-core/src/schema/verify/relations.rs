use super::*;
use crate::schema::{ClassId, Configure, ManyToMany, MappingKind, OneToOne};

impl Verify<'_> {
    // Checks a relationship against the declarations on its target class.
    pub(super) fn verify_relation(&self, mapping: &Mapping, issues: &mut Vec<String>) {
        let Some(target) = mapping.target() else {
            return;
        };

        if !self.mappings.is_mapped(target) {
            issues.push(format!(
                "`{}` targets `{}`, which has no mappings",
                self.full_name(mapping.def()),
                self.class_name(target)
            ));
            return;
        }

        match mapping {
            Mapping::ManyToMany(many_to_many) => {
                self.verify_join_table_agrees(mapping, many_to_many, issues)
            }
            Mapping::OneToMany(_) => {
                self.verify_reciprocal(mapping, MappingKind::ManyToOne, issues);
            }
            Mapping::OneToOne(one_to_one) => {
                let pair = if one_to_one.reciprocal.is_some() {
                    match self.verify_reciprocal(mapping, MappingKind::OneToOne, issues) {
                        Some(Mapping::OneToOne(pair)) => pair,
                        _ => return,
                    }
                } else {
                    match self.infer_one_to_one_pair(one_to_one, target) {
                        Some(pair) => pair,
                        None => return,
                    }
                };

                self.verify_single_owner(one_to_one, pair, issues);
            }
            Mapping::Scalar(_) | Mapping::ManyToOne(_) => {}
        }
    }

    /// A reverse many-to-many declaration on the target must resolve to the
    /// same join table.
    ///
    /// One-sided declarations are accepted on purpose: both sides derive the
    /// join table from the same pair of class names, so the single side
    /// already determines it.
    fn verify_join_table_agrees(
        &self,
        mapping: &Mapping,
        many_to_many: &ManyToMany,
        issues: &mut Vec<String>,
    ) {
        if many_to_many.is_self_referencing() {
            return;
        }

        let (owner, target) = many_to_many.classes();
        let reverse: Vec<&ManyToMany> = self
            .mappings
            .definitions_for(target)
            .iter()
            .filter_map(Mapping::as_many_to_many)
            .filter(|reverse| reverse.target == owner)
            .collect();

        if reverse.is_empty()
            || reverse
                .iter()
                .any(|reverse| reverse.join_table() == many_to_many.join_table())
        {
            return;
        }

        issues.push(format!(
            "`{}` uses join table `{}` but `{}` declares {}",
            self.full_name(mapping.def()),
            many_to_many.join_table(),
            self.class_name(target),
            reverse
                .iter()
                .map(|reverse| format!("`{}`", reverse.join_table()))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    // Resolves the declared reciprocal property, if any, and checks that it
    // has the expected kind and points back at the owner.
    fn verify_reciprocal(
        &self,
        mapping: &Mapping,
        expected: MappingKind,
        issues: &mut Vec<String>,
    ) -> Option<&Mapping> {
        let reciprocal = mapping.reciprocal()?;
        let target = mapping.target()?;

        let Some(pair) = self.mappings.property(target, reciprocal) else {
            issues.push(format!(
                "`{}` names reciprocal `{}::{reciprocal}`, which is not mapped",
                self.full_name(mapping.def()),
                self.class_name(target)
            ));
            return None;
        };

        if pair.kind() != expected {
            issues.push(format!(
                "`{}` names reciprocal `{}`, which is {} instead of {expected}",
                self.full_name(mapping.def()),
                self.full_name(pair.def()),
                pair.kind()
            ));
            return None;
        }

        if pair.target() != Some(mapping.class()) {
            issues.push(format!(
                "`{}` names reciprocal `{}`, which does not point back to `{}`",
                self.full_name(mapping.def()),
                self.full_name(pair.def()),
                self.class_name(mapping.class())
            ));
            return None;
        }

        Some(pair)
    }

    // Without a declared reciprocal, the pair is the target's only
    // one-to-one pointing back at the owner.
    fn infer_one_to_one_pair(
        &self,
        one_to_one: &OneToOne,
        target: ClassId,
    ) -> Option<&OneToOne> {
        let owner = one_to_one.def().selector.class();
        let mut candidates = self
            .mappings
            .definitions_for(target)
            .iter()
            .filter_map(Mapping::as_one_to_one)
            .filter(|pair| pair.target == owner && !std::ptr::eq(*pair, one_to_one));

        let pair = candidates.next()?;
        candidates.next().is_none().then_some(pair)
    }

    // At most one side of a one-to-one pair holds the foreign key.
    fn verify_single_owner(
        &self,
        one_to_one: &OneToOne,
        pair: &OneToOne,
        issues: &mut Vec<String>,
    ) {
        if !(one_to_one.owning && pair.owning) {
            return;
        }

        let (this, other) = (one_to_one.def(), pair.def());
        let names_back = pair.reciprocal.as_deref() == Some(this.selector.property());

        // A pair both sides see the same way is reported once, from the side
        // that sorts first. Otherwise the side naming the reciprocal reports.
        let symmetric = match one_to_one.reciprocal {
            Some(_) => names_back,
            None => pair.reciprocal.is_none(),
        };
        let reports = if symmetric {
            (this.selector.class(), this.selector.property())
                < (other.selector.class(), other.selector.property())
        } else {
            one_to_one.reciprocal.is_some()
        };

        if reports {
            issues.push(format!(
                "`{}` and `{}` both own the foreign key",
                self.full_name(this),
                self.full_name(other)
            ));
        }
    }

    fn class_name(&self, class: ClassId) -> &str {
        self.mappings.catalog().name(class)
    }
}
