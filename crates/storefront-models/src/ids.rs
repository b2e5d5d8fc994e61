//! Strongly-typed ID newtypes for storefront entities.
//!
//! Generated rows carry sequential `BIGSERIAL` keys starting at 1. Wrapping
//! each key in its own type keeps a `StoreId` from being passed where an
//! `EmployeeId` is expected when builders thread foreign keys around.
//!
//! # Example
//!
//! ```ignore
//! use storefront_models::ids::{StoreId, EmployeeId};
//!
//! let store = StoreId::new(1);
//! let employee = EmployeeId::from_index(0); // first sequential id
//! assert_eq!(employee.get(), 1);
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Id for the zero-based position `index` in a sequential batch.
            #[inline]
            pub const fn from_index(index: usize) -> Self {
                Self(index as i64 + 1)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        // SQLx Type implementation for Postgres
        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i64 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i64 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i64 as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Role entities.
    RoleId
);

define_id!(
    /// Strongly-typed ID for Employee entities.
    EmployeeId
);

define_id!(
    /// Strongly-typed ID for Store entities.
    StoreId
);

define_id!(
    /// Strongly-typed ID for Product entities.
    ProductId
);

define_id!(
    /// Strongly-typed ID for Transaction entities.
    TransactionId
);

define_id!(
    /// Strongly-typed ID for Supplier entities.
    SupplierId
);

define_id!(
    /// Strongly-typed ID for Order entities.
    OrderId
);

define_id!(
    /// Strongly-typed ID for seeded User accounts.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_is_one_based() {
        assert_eq!(StoreId::from_index(0), StoreId::new(1));
        assert_eq!(StoreId::from_index(41).get(), 42);
    }

    #[test]
    fn test_id_debug() {
        let id = EmployeeId::new(7);
        assert_eq!(format!("{:?}", id), "EmployeeId(7)");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(12)), "12");
    }

    #[test]
    fn test_id_from_str() {
        let id: RoleId = "3".parse().unwrap();
        assert_eq!(id, RoleId::new(3));
        assert!("three".parse::<RoleId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let json = serde_json::to_string(&SupplierId::new(9)).unwrap();
        assert_eq!(json, "9");

        let id: OrderId = serde_json::from_str("15").unwrap();
        assert_eq!(id, OrderId::new(15));
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![UserId::new(3), UserId::new(1), UserId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![UserId::new(1), UserId::new(2), UserId::new(3)]);
        assert_eq!(ids.iter().max(), Some(&UserId::new(3)));
    }

    #[test]
    fn test_id_conversion_roundtrip() {
        let id: TransactionId = 99_i64.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 99);
    }
}
