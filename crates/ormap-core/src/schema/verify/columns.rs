use super::*;
use crate::schema::ClassId;
use indexmap::{map::Entry, IndexMap, IndexSet};

impl Verify<'_> {
    // Flags per-definition facts a DDL generator cannot emit sensibly.
    pub(super) fn verify_columns(&self, mapping: &Mapping, hazards: &mut Vec<String>) {
        let def = mapping.def();
        let name = self.full_name(def);

        if def.field_name.is_empty() {
            hazards.push(format!("`{name}` has an empty field name"));
        }

        if def.table_name.is_empty() {
            hazards.push(format!("`{name}` has an empty table name"));
        }

        if def.auto_increment {
            match mapping {
                Mapping::Scalar(scalar) if !scalar.primitive.is_integer() => hazards.push(
                    format!("`{name}` is auto-increment but has type {}", scalar.primitive),
                ),
                Mapping::Scalar(_) => {}
                _ => hazards.push(format!(
                    "`{name}` is auto-increment but is a {} relationship",
                    mapping.kind()
                )),
            }

            if def.nullable {
                hazards.push(format!("`{name}` is auto-increment but nullable"));
            }
        }

        if let (Some(max_length), Some(scalar)) = (def.max_length, mapping.as_scalar()) {
            if !scalar.primitive.has_length() {
                hazards.push(format!(
                    "`{name}` has max length {max_length} but type {}",
                    scalar.primitive
                ));
            }
        }

        let default = def.default_value();
        if !default.is_a(&def.selector.ty()) {
            hazards.push(format!(
                "`{name}` default value {default:?} does not match {:?}",
                def.selector.ty()
            ));
        }
    }

    // Each table belongs to one class, and each column name appears once per
    // table. Join tables are checked by the relationship pass.
    pub(super) fn verify_tables(&self, hazards: &mut Vec<String>) {
        let mut owners: IndexMap<&str, IndexSet<ClassId>> = IndexMap::new();
        let mut columns: IndexMap<(&str, &str), &PropertyDef> = IndexMap::new();
        let mut duplicates = vec![];

        for mapping in self.mappings.iter() {
            if mapping.as_many_to_many().is_some() {
                continue;
            }

            let def = mapping.def();
            owners
                .entry(def.table_name.as_str())
                .or_default()
                .insert(mapping.class());

            if mapping.as_scalar().is_none() && !mapping.holds_foreign_key() {
                continue;
            }

            match columns.entry((def.table_name.as_str(), def.field_name.as_str())) {
                Entry::Occupied(existing) => duplicates.push(format!(
                    "`{}` and `{}` both map to column `{}`.`{}`",
                    self.full_name(existing.get()),
                    self.full_name(def),
                    def.table_name,
                    def.field_name
                )),
                Entry::Vacant(entry) => {
                    entry.insert(def);
                }
            }
        }

        for (table, classes) in &owners {
            if classes.len() > 1 {
                let names: Vec<_> = classes
                    .iter()
                    .map(|class| format!("`{}`", self.mappings.catalog().name(*class)))
                    .collect();
                hazards.push(format!(
                    "table `{table}` is mapped by more than one class: {}",
                    names.join(", ")
                ));
            }
        }

        hazards.extend(duplicates);
    }
}
