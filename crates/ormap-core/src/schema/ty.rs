use super::ClassId;
use std::fmt;

/// Declared type of a class property, as reported by the host's type
/// description facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A plain column value.
    Primitive(Primitive),

    /// A single reference to another mapped class.
    Class(ClassId),

    /// An ordered collection of another mapped class.
    List(ClassId),
}

/// Primitive and primitive-like column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I32,
    I64,
    U64,
    F64,
    Decimal,
    String,
    Bytes,
    Uuid,
    Date,
    Time,
    DateTime,
}

impl ValueType {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match *self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The related class, for single references and collections.
    pub fn related_class(&self) -> Option<ClassId> {
        match *self {
            Self::Primitive(_) => None,
            Self::Class(class) | Self::List(class) => Some(class),
        }
    }
}

impl From<Primitive> for ValueType {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl Primitive {
    /// Returns `true` for types that can back an auto-increment column.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::I32 | Self::I64 | Self::U64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Self::F64 | Self::Decimal)
    }

    /// Returns `true` for types where a max length is meaningful.
    pub fn has_length(self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_types_are_numeric() {
        for primitive in [Primitive::I32, Primitive::I64, Primitive::U64] {
            assert!(primitive.is_integer());
            assert!(primitive.is_numeric());
        }

        assert!(!Primitive::F64.is_integer());
        assert!(Primitive::Decimal.is_numeric());
        assert!(!Primitive::String.is_numeric());
    }

    #[test]
    fn related_class() {
        let class = ClassId(3);
        assert_eq!(ValueType::Class(class).related_class(), Some(class));
        assert_eq!(ValueType::List(class).related_class(), Some(class));
        assert_eq!(ValueType::from(Primitive::Uuid).related_class(), None);
    }
}
