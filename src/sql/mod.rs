//! Read-query descriptors and their PostgreSQL rendering. Identifiers come from
//! record definitions only; values are always bound as parameters.

mod builder;
mod select;
mod value;

pub use builder::{build_select, QueryBuf};
pub use select::{Condition, Direction, Scope, Select};
pub use value::SqlValue;
