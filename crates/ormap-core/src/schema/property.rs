use super::{naming, DefaultValue, PropertySelector, Value};
use crate::{Error, Result};

/// Attributes shared by every mapping kind.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// The class property being mapped
    pub selector: PropertySelector,

    /// Column or field identifier. Defaults to the property name.
    pub field_name: String,

    /// Owning table for columns, or the join table for many-to-many.
    pub table_name: String,

    /// True if the column may hold nulls.
    pub nullable: bool,

    pub unique: bool,

    pub indexed: bool,

    pub auto_increment: bool,

    /// True if deletes and updates of the owner propagate to related rows.
    pub cascade: bool,

    pub max_length: Option<u32>,

    /// Produces the value to use when none is supplied.
    pub default_value: Option<DefaultValue>,
}

impl PropertyDef {
    pub(crate) fn new(selector: PropertySelector, table_name: String) -> Self {
        Self {
            field_name: naming::resolve_default_field_name(&selector),
            selector,
            table_name,
            nullable: true,
            unique: false,
            indexed: false,
            auto_increment: false,
            cascade: false,
            max_length: None,
            default_value: None,
        }
    }

    /// Invokes the default value provider, or returns `Null` when none is set.
    pub fn default_value(&self) -> Value {
        self.default_value
            .as_ref()
            .map(DefaultValue::produce)
            .unwrap_or(Value::Null)
    }
}

/// Fluent configuration shared by every mapping kind.
///
/// Each kind implements only [`Configure::def_mut`]; the builder methods are
/// provided once here and return the concrete kind, so chains stay typed:
///
/// ```
/// # use ormap_core::schema::*;
/// # fn main() -> ormap_core::Result<()> {
/// let mut catalog = Catalog::new();
/// let user = catalog.add_class("User")?;
/// catalog.add_property(user, "email", Primitive::String)?;
///
/// let email = Scalar::new(&catalog, catalog.select(user, "email")?)?
///     .disallow_nulls()
///     .mark_unique()
///     .set_max_length(254)?;
///
/// assert!(email.def().unique);
/// # Ok(())
/// # }
/// ```
pub trait Configure: Sized {
    fn def(&self) -> &PropertyDef;

    fn def_mut(&mut self) -> &mut PropertyDef;

    fn set_default_value<T, F>(mut self, provider: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        self.def_mut().default_value = Some(DefaultValue::new(provider));
        self
    }

    fn disallow_nulls(mut self) -> Self {
        self.def_mut().nullable = false;
        self
    }

    fn mark_unique(mut self) -> Self {
        self.def_mut().unique = true;
        self
    }

    fn enable_indexing(mut self) -> Self {
        self.def_mut().indexed = true;
        self
    }

    fn enable_auto_increment(mut self) -> Self {
        self.def_mut().auto_increment = true;
        self
    }

    fn enable_cascade(mut self) -> Self {
        self.def_mut().cascade = true;
        self
    }

    fn set_field_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::configuration(format!(
                "field name for `{}` must not be empty",
                self.def().selector.property()
            )));
        }

        self.def_mut().field_name = name;
        Ok(self)
    }

    fn set_table_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::configuration(format!(
                "table name for `{}` must not be empty",
                self.def().selector.property()
            )));
        }

        self.def_mut().table_name = name;
        Ok(self)
    }

    fn set_max_length(mut self, max_length: u32) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::configuration(format!(
                "max length for `{}` must be positive",
                self.def().selector.property()
            )));
        }

        self.def_mut().max_length = Some(max_length);
        Ok(self)
    }
}

macro_rules! impl_configure {
    ( $($t:ty),+ ) => {
        $(
            impl $crate::schema::Configure for $t {
                fn def(&self) -> &$crate::schema::PropertyDef {
                    &self.def
                }

                fn def_mut(&mut self) -> &mut $crate::schema::PropertyDef {
                    &mut self.def
                }
            }
        )+
    };
}

pub(crate) use impl_configure;
