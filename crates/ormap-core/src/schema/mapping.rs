//! The closed set of mapping kinds.

mod many_to_many;
pub use many_to_many::ManyToMany;

mod many_to_one;
pub use many_to_one::ManyToOne;

mod one_to_many;
pub use one_to_many::OneToMany;

mod one_to_one;
pub use one_to_one::OneToOne;

mod scalar;
pub use scalar::Scalar;

pub use super::property::Configure;

use super::{property::impl_configure, ClassId, PropertyDef, PropertySelector, ValueType};
use crate::{Error, Result};
use std::fmt;

impl_configure!(Scalar, ManyToOne, OneToMany, OneToOne, ManyToMany);

/// A finished property definition, as stored in the registry.
#[derive(Debug, Clone)]
pub enum Mapping {
    Scalar(Scalar),
    ManyToOne(ManyToOne),
    OneToMany(OneToMany),
    OneToOne(OneToOne),
    ManyToMany(ManyToMany),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    Scalar,
    ManyToOne,
    OneToMany,
    OneToOne,
    ManyToMany,
}

impl Mapping {
    pub fn def(&self) -> &PropertyDef {
        match self {
            Self::Scalar(m) => &m.def,
            Self::ManyToOne(m) => &m.def,
            Self::OneToMany(m) => &m.def,
            Self::OneToOne(m) => &m.def,
            Self::ManyToMany(m) => &m.def,
        }
    }

    pub fn kind(&self) -> MappingKind {
        match self {
            Self::Scalar(_) => MappingKind::Scalar,
            Self::ManyToOne(_) => MappingKind::ManyToOne,
            Self::OneToMany(_) => MappingKind::OneToMany,
            Self::OneToOne(_) => MappingKind::OneToOne,
            Self::ManyToMany(_) => MappingKind::ManyToMany,
        }
    }

    /// The owning class.
    pub fn class(&self) -> ClassId {
        self.def().selector.class()
    }

    pub fn property(&self) -> &str {
        self.def().selector.property()
    }

    pub fn field_name(&self) -> &str {
        &self.def().field_name
    }

    pub fn table_name(&self) -> &str {
        &self.def().table_name
    }

    pub fn is_relation(&self) -> bool {
        !matches!(self, Self::Scalar(_))
    }

    /// If the mapping is a relation, return the related class.
    pub fn target(&self) -> Option<ClassId> {
        match self {
            Self::Scalar(_) => None,
            Self::ManyToOne(m) => Some(m.target),
            Self::OneToMany(m) => Some(m.target),
            Self::OneToOne(m) => Some(m.target),
            Self::ManyToMany(m) => Some(m.target),
        }
    }

    /// Returns `true` if this side's table holds the foreign key column.
    pub fn holds_foreign_key(&self) -> bool {
        match self {
            Self::ManyToOne(_) => true,
            Self::OneToOne(m) => m.owning,
            _ => false,
        }
    }

    /// The paired property on the target class, when declared.
    pub fn reciprocal(&self) -> Option<&str> {
        match self {
            Self::OneToMany(m) => m.reciprocal.as_deref(),
            Self::OneToOne(m) => m.reciprocal.as_deref(),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_one_to_one(&self) -> Option<&OneToOne> {
        match self {
            Self::OneToOne(one_to_one) => Some(one_to_one),
            _ => None,
        }
    }

    pub fn as_many_to_many(&self) -> Option<&ManyToMany> {
        match self {
            Self::ManyToMany(many_to_many) => Some(many_to_many),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_many_to_many(&self) -> &ManyToMany {
        match self {
            Self::ManyToMany(many_to_many) => many_to_many,
            _ => panic!("expected many-to-many mapping, but was {self:?}"),
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::ManyToOne => "many-to-one",
            Self::OneToMany => "one-to-many",
            Self::OneToOne => "one-to-one",
            Self::ManyToMany => "many-to-many",
        };
        f.write_str(name)
    }
}

macro_rules! impl_from_kind {
    ( $($t:ident),+ ) => {
        $(
            impl From<$t> for Mapping {
                fn from(value: $t) -> Self {
                    Self::$t(value)
                }
            }
        )+
    };
}

impl_from_kind!(Scalar, ManyToOne, OneToMany, OneToOne, ManyToMany);

/// Rejects a selector whose type does not have the shape a kind needs.
fn shape_error(kind: MappingKind, selector: &PropertySelector, expected: &str) -> Error {
    Error::configuration(format!(
        "{kind} mapping for `{}` requires {expected}, but the property is {:?}",
        selector.property(),
        selector.ty()
    ))
}

/// Extracts the related class from a single reference.
fn single_target(kind: MappingKind, selector: &PropertySelector) -> Result<ClassId> {
    match selector.ty() {
        ValueType::Class(target) => Ok(target),
        _ => Err(shape_error(kind, selector, "a reference to a class")),
    }
}

/// Extracts the related class from a collection.
fn collection_target(kind: MappingKind, selector: &PropertySelector) -> Result<ClassId> {
    match selector.ty() {
        ValueType::List(target) => Ok(target),
        _ => Err(shape_error(kind, selector, "a collection of a class")),
    }
}
