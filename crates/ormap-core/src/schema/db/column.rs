use super::TableId;
use crate::schema::{ClassId, Primitive};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    pub ty: ColumnType,

    /// Whether or not the column is nullable
    pub nullable: bool,

    pub unique: bool,

    pub indexed: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// For foreign keys, whether deletes and updates cascade.
    pub cascade: bool,

    pub max_length: Option<u32>,

    /// Table referenced by a foreign key column
    pub references: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Primitive(Primitive),

    /// Foreign key to the class's table. The storage type follows the
    /// referenced key.
    Reference(ClassId),
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
