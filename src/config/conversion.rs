// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::{IniError, Value};

impl TryFrom<Value> for String {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(IniError::type_error("string", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(IniError::Type {
                message: format!("Expected bool, got {}", other.type_name()),
                line: 0,
                hint: Some("Use true/false, yes/no or on/off".into()),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            other => Err(IniError::type_error("integer", other.type_name())),
        }
    }
}

/// Integers narrower than `i64` go through `i64` with a range check.
macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = IniError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| IniError::Type {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                    })
                }
            }
        )*
    };
}

narrow_integer!(i32, u16, u32, u64, usize);

impl TryFrom<Value> for f64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| IniError::type_error("number", value.type_name()))
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(IniError::Type {
                message: format!("Expected list, got {}", other.type_name()),
                line: 0,
                hint: Some("Write list entries as key[]=value".into()),
            }),
        }
    }
}

impl<T> TryFrom<Value> for IndexMap<String, T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| T::try_from(v).map(|v| (k, v)))
                .collect(),
            other => Err(IniError::Type {
                message: format!("Expected map, got {}", other.type_name()),
                line: 0,
                hint: Some("Write map entries as key[name]=value".into()),
            }),
        }
    }
}
