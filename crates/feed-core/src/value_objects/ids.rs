//! Typed entity identifiers
//!
//! Every entity kind gets its own id newtype over `i64`. Ids are opaque
//! positive integers assigned by the store; the type system keeps a
//! `UserId` from ever being passed where a `PostId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an entity id from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an id from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.parse::<i64>()
                    .map($name)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s)
            }
        }
    };
}

entity_id!(
    /// Identifier of a user account
    UserId
);
entity_id!(
    /// Identifier of a post
    PostId
);
entity_id!(
    /// Identifier of an item a post belongs to
    ItemId
);
entity_id!(
    /// Identifier of a tag
    TagId
);
entity_id!(
    /// Identifier of a photo
    PhotoId
);
