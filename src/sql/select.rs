//! Filter/order/limit descriptor for a read against one record collection.

use super::SqlValue;
use crate::model::{Record, DELETED_AT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Whether soft-deleted rows are visible. Ignored for collections without a deletion marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Live,
    WithDeleted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Eq(&'static str, SqlValue),
    Gte(&'static str, SqlValue),
    Lte(&'static str, SqlValue),
    IsNull(&'static str),
    /// Disjunction of the inner conditions.
    Any(Vec<Condition>),
}

impl Condition {
    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Condition::Eq(column, value.into())
    }

    pub fn gte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Condition::Gte(column, value.into())
    }

    pub fn lte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Condition::Lte(column, value.into())
    }

    /// `column IS NULL OR column <= value`: an unset lower bound is unbounded.
    pub fn unset_or_lte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Condition::Any(vec![Condition::IsNull(column), Condition::lte(column, value)])
    }

    /// `column IS NULL OR column >= value`: an unset upper bound is unbounded.
    pub fn unset_or_gte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Condition::Any(vec![Condition::IsNull(column), Condition::gte(column, value)])
    }

    /// Evaluate against a column accessor with SQL semantics (NULL never matches a comparison).
    pub fn matches<F>(&self, column: &F) -> bool
    where
        F: Fn(&str) -> SqlValue,
    {
        use std::cmp::Ordering::*;
        match self {
            Condition::Eq(c, v) => column(c).compare(v) == Some(Equal),
            Condition::Gte(c, v) => matches!(column(c).compare(v), Some(Greater | Equal)),
            Condition::Lte(c, v) => matches!(column(c).compare(v), Some(Less | Equal)),
            Condition::IsNull(c) => column(c).is_null(),
            Condition::Any(inner) => inner.iter().any(|cond| cond.matches(column)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Select {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub soft_delete: bool,
    pub conditions: Vec<Condition>,
    pub order: Vec<(&'static str, Direction)>,
    pub limit: Option<u32>,
    pub scope: Scope,
}

impl Select {
    pub fn from<R: Record>() -> Self {
        Select {
            table: R::TABLE,
            columns: R::COLUMNS,
            soft_delete: R::SOFT_DELETE,
            conditions: Vec::new(),
            order: Vec::new(),
            limit: None,
            scope: Scope::Live,
        }
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn with_deleted(mut self) -> Self {
        self.scope = Scope::WithDeleted;
        self
    }

    /// Conditions actually applied, including the implicit soft-delete exclusion.
    pub fn effective_conditions(&self) -> Vec<Condition> {
        let mut out = Vec::with_capacity(self.conditions.len() + 1);
        if self.soft_delete && self.scope == Scope::Live {
            out.push(Condition::IsNull(DELETED_AT));
        }
        out.extend(self.conditions.iter().cloned());
        out
    }
}
