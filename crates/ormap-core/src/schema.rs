//! Relational mapping metadata: class descriptions, per-property mapping
//! declarations, and the registry that collects them.

mod catalog;
pub use catalog::{Catalog, Class, ClassId, Property};

pub mod db;

mod default;
pub use default::DefaultValue;

pub mod mapping;
pub use mapping::{ManyToMany, ManyToOne, Mapping, MappingKind, OneToMany, OneToOne, Scalar};

mod naming;
pub use naming::{
    resolve_default_field_name, resolve_default_table_name, resolve_join_table_name, Naming,
};

mod path;
pub use path::{PathStep, ResolvedPath};

mod property;
pub use property::{Configure, PropertyDef};

mod registry;
pub use registry::{Mappings, Registry};

mod selector;
pub use selector::PropertySelector;

mod ty;
pub use ty::{Primitive, ValueType};

mod value;
pub use value::Value;

mod verify;
