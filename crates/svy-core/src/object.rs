//! Identifier and field-presence lookups shared by every entity.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entities::{Home, Household};
use crate::enums::{Activity, Mode, ObjectType};
use crate::geometry::Geography;

/// An entity of the interview tree.
pub trait SurveyObject {
    /// Level of the tree this entity lives at.
    const OBJECT_TYPE: ObjectType;

    /// Raw identifier, as stored.
    fn uuid(&self) -> Option<&str>;

    /// Whether the named attribute holds a usable value.
    ///
    /// Known attributes are matched by their JSON (camelCase) name; anything
    /// else is looked up among the attributes the typed model does not know.
    fn has_value(&self, field: &str) -> bool;

    /// Identifier if it is present and not blank.
    fn valid_uuid(&self) -> Option<&str> {
        self.uuid().filter(|uuid| !uuid.trim().is_empty())
    }
}

/// Whether a stored answer counts as "given".
pub trait Present {
    fn is_present(&self) -> bool;
}

impl<T: Present> Present for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Present::is_present)
    }
}

impl<T> Present for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Present for f64 {
    fn is_present(&self) -> bool {
        self.is_finite()
    }
}

impl Present for Value {
    fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::String(s) => !s.trim().is_empty(),
            Self::Number(n) => n.as_f64().is_some_and(f64::is_finite),
            _ => true,
        }
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Present for $ty {
            fn is_present(&self) -> bool {
                true
            }
        })*
    };
}

always_present!(bool, i64, Geography, Mode, Activity, Home, Household);

/// Look up an attribute the typed model does not know.
pub(crate) fn extra_has_value(extra: &BTreeMap<String, Value>, field: &str) -> bool {
    extra.get(field).is_some_and(Present::is_present)
}

/// Implement [`SurveyObject`] for an entity with a `uuid` and an `extra` map.
macro_rules! survey_object {
    ($ty:ty, $object_type:expr, { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::object::SurveyObject for $ty {
            const OBJECT_TYPE: $crate::enums::ObjectType = $object_type;

            fn uuid(&self) -> Option<&str> {
                self.uuid.as_deref()
            }

            fn has_value(&self, field: &str) -> bool {
                match field {
                    "uuid" => $crate::object::Present::is_present(&self.uuid),
                    $($name => $crate::object::Present::is_present(&self.$field),)*
                    other => $crate::object::extra_has_value(&self.extra, other),
                }
            }
        }
    };
}

pub(crate) use survey_object;
