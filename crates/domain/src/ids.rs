use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer-backed entity ids. The roster backend owns id assignment, so
/// there is no local `new()` constructor; ids only enter the system from
/// wire responses.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn from_i64(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(MemberId);
define_id!(CategoryId);
define_id!(ImageId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = MemberId::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(MemberId::from(42), id);
    }

    #[test]
    fn test_id_serializes_transparent() {
        let id = CategoryId::from_i64(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
    }
}
