//! Database-level view of the finalized mappings.
//!
//! This is the hand-off to a DDL generator: every table and join table with
//! resolved names and constraint flags. No SQL is produced here.

mod column;
pub use column::{Column, ColumnId, ColumnType};

mod join_table;
pub use join_table::JoinTable;

mod table;
pub use table::{Table, TableId};

use super::{Mapping, Mappings};
use indexmap::IndexMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,

    /// Many-to-many join tables, one per distinct name
    pub join_tables: Vec<JoinTable>,
}

impl Schema {
    pub fn from_mappings(mappings: &Mappings) -> Self {
        let mut tables: IndexMap<String, Table> = IndexMap::new();
        let mut join_tables: IndexMap<String, JoinTable> = IndexMap::new();

        for mapping in mappings.iter() {
            let def = mapping.def();

            let ty = match mapping {
                Mapping::Scalar(scalar) => ColumnType::Primitive(scalar.primitive),
                Mapping::ManyToMany(many_to_many) => {
                    join_tables
                        .entry(def.table_name.clone())
                        .or_insert_with(|| JoinTable::new(mappings, many_to_many))
                        .declare(many_to_many);
                    continue;
                }
                _ => match mapping.target() {
                    Some(target) if mapping.holds_foreign_key() => ColumnType::Reference(target),
                    // The key lives on the other side of the relationship.
                    _ => continue,
                },
            };

            let next_id = TableId(tables.len());
            let table = tables
                .entry(def.table_name.clone())
                .or_insert_with(|| Table {
                    id: next_id,
                    name: def.table_name.clone(),
                    class: mapping.class(),
                    columns: vec![],
                });

            let references = match ty {
                ColumnType::Reference(target) => Some(mappings.table_name(target)),
                ColumnType::Primitive(_) => None,
            };

            table.columns.push(Column {
                id: ColumnId {
                    table: table.id,
                    index: table.columns.len(),
                },
                name: def.field_name.clone(),
                ty,
                nullable: def.nullable,
                unique: def.unique,
                indexed: def.indexed,
                auto_increment: def.auto_increment,
                cascade: def.cascade,
                max_length: def.max_length,
                references,
            });
        }

        log::debug!(
            "derived {} tables and {} join tables",
            tables.len(),
            join_tables.len()
        );

        Self {
            tables: tables.into_values().collect(),
            join_tables: join_tables.into_values().collect(),
        }
    }

    #[track_caller]
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    #[track_caller]
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn join_table(&self, name: &str) -> Option<&JoinTable> {
        self.join_tables.iter().find(|table| table.name == name)
    }
}
