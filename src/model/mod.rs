//! Record types for the four collections and the capabilities they share.

mod base;
mod event;
mod ministry;
mod setting;
mod staff;

pub use base::{SoftDeletable, SoftDeleteModel, DELETED_AT};
pub use event::{Event, RecurrenceRule};
pub use ministry::Ministry;
pub use setting::SiteSetting;
pub use staff::{StaffCategory, StaffMember};

use crate::sql::SqlValue;
use sqlx::postgres::PgRow;
use thiserror::Error;

/// A row type backed by one table. `column` exposes values by column name so the
/// same `Select` descriptor can be evaluated outside PostgreSQL.
pub trait Record: for<'r> sqlx::FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    /// True when the table carries a `deleted_at` marker and default reads hide deleted rows.
    const SOFT_DELETE: bool;

    fn column(&self, name: &str) -> SqlValue;
}

#[derive(Error, Debug)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Text-column enums: decode through `&str` and `FromStr`.
macro_rules! text_column_enum {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <&str as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                Ok(s.parse()?)
            }
        }
    };
}

pub(crate) use text_column_enum;
