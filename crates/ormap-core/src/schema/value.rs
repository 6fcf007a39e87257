use super::{Primitive, ValueType};

/// A dynamically typed value produced by a default value provider.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Ordered sequence, used for collection-valued relationships.
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if the value can be stored in a property of type `ty`.
    ///
    /// `Null` is accepted everywhere; nullability is checked separately.
    pub fn is_a(&self, ty: &ValueType) -> bool {
        match (self, ty) {
            (Self::Null, _) => true,
            (Self::List(_), ValueType::List(_)) => true,
            (_, ValueType::List(_) | ValueType::Class(_)) => false,
            (_, ValueType::Primitive(primitive)) => self.is_a_primitive(*primitive),
        }
    }

    fn is_a_primitive(&self, primitive: Primitive) -> bool {
        match self {
            Self::Bool(_) => primitive == Primitive::Bool,
            Self::I64(_) | Self::U64(_) => primitive.is_numeric(),
            Self::F64(_) => matches!(primitive, Primitive::F64 | Primitive::Decimal),
            Self::String(_) => matches!(
                primitive,
                Primitive::String
                    | Primitive::Uuid
                    | Primitive::Date
                    | Primitive::Time
                    | Primitive::DateTime
                    | Primitive::Decimal
            ),
            Self::Bytes(_) => matches!(primitive, Primitive::Bytes | Primitive::Uuid),
            Self::Null | Self::List(_) => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ClassId;

    #[test]
    fn null_matches_every_type() {
        assert!(Value::Null.is_a(&Primitive::I64.into()));
        assert!(Value::Null.is_a(&ValueType::Class(ClassId(0))));
        assert!(Value::Null.is_a(&ValueType::List(ClassId(0))));
    }

    #[test]
    fn primitive_matching() {
        assert!(Value::from(1_i64).is_a(&Primitive::I32.into()));
        assert!(Value::from("2024-01-01").is_a(&Primitive::Date.into()));
        assert!(!Value::from("x").is_a(&Primitive::I64.into()));
        assert!(!Value::from(true).is_a(&Primitive::String.into()));
        assert!(!Value::from(1.5).is_a(&Primitive::I64.into()));
    }

    #[test]
    fn lists_only_match_collections() {
        let list = Value::List(vec![]);
        assert!(list.is_a(&ValueType::List(ClassId(1))));
        assert!(!list.is_a(&ValueType::Class(ClassId(1))));
        assert!(!list.is_a(&Primitive::Bytes.into()));
    }

    #[test]
    fn option_maps_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(4_i64)), Value::I64(4));
    }
}
