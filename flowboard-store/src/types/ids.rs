//! Typed entity ids
//!
//! Ids are server-assigned integers, strictly increasing per entity table.
//! The newtypes keep a task id from being handed to a user lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw id
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw id
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifies a project
    ProjectId
);
entity_id!(
    /// Identifies a task
    TaskId
);
entity_id!(
    /// Identifies a user
    UserId
);
entity_id!(
    /// Identifies a comment
    CommentId
);
entity_id!(
    /// Identifies a task dependency
    DependencyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_raw() {
        let id = TaskId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.get(), 7);
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_transparent_serde() {
        let id: ProjectId = serde_json::from_str("3").unwrap();
        assert_eq!(id, ProjectId::new(3));
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }

    #[test]
    fn test_ordering() {
        assert!(UserId::new(1) < UserId::new(2));
    }
}
