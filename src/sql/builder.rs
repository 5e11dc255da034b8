//! Renders a `Select` into parameterized PostgreSQL.

use super::{Condition, Select, SqlValue};

/// Quote identifier for PostgreSQL (safe: identifiers only come from record definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn push_param(&mut self, v: SqlValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn render_condition(q: &mut QueryBuf, cond: &Condition) -> String {
    match cond {
        Condition::Eq(c, v) => format!("{} = ${}", quoted(c), q.push_param(v.clone())),
        Condition::Gte(c, v) => format!("{} >= ${}", quoted(c), q.push_param(v.clone())),
        Condition::Lte(c, v) => format!("{} <= ${}", quoted(c), q.push_param(v.clone())),
        Condition::IsNull(c) => format!("{} IS NULL", quoted(c)),
        Condition::Any(inner) if inner.is_empty() => "FALSE".to_string(),
        Condition::Any(inner) => {
            let parts: Vec<String> = inner.iter().map(|c| render_condition(q, c)).collect();
            format!("({})", parts.join(" OR "))
        }
    }
}

/// SELECT columns FROM table [WHERE ...] [ORDER BY ...] [LIMIT n]. Params bound in condition order.
pub fn build_select(select: &Select) -> QueryBuf {
    let mut q = QueryBuf::default();
    let cols = select
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ");

    let where_parts: Vec<String> = select
        .effective_conditions()
        .iter()
        .map(|c| render_condition(&mut q, c))
        .collect();
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let order_clause = if select.order.is_empty() {
        String::new()
    } else {
        let parts: Vec<String> = select
            .order
            .iter()
            .map(|(c, d)| format!("{} {}", quoted(c), d.as_sql()))
            .collect();
        format!(" ORDER BY {}", parts.join(", "))
    };
    let limit_clause = select.limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();

    q.sql = format!(
        "SELECT {} FROM {}{}{}{}",
        cols,
        quoted(select.table),
        where_clause,
        order_clause,
        limit_clause
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ministry, SiteSetting};
    use crate::sql::Direction;

    #[test]
    fn soft_deletable_select_excludes_deleted_rows_first() {
        let q = build_select(
            &Select::from::<Ministry>()
                .filter(Condition::eq("is_active", true))
                .order_by("sort_order", Direction::Asc)
                .order_by("name", Direction::Asc),
        );
        assert!(q.sql.starts_with("SELECT \"id\", "));
        assert!(q.sql.ends_with(
            " FROM \"ministries\" WHERE \"deleted_at\" IS NULL AND \"is_active\" = $1 ORDER BY \"sort_order\" ASC, \"name\" ASC"
        ));
        assert_eq!(q.params, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn with_deleted_drops_implicit_filter() {
        let q = build_select(&Select::from::<Ministry>().with_deleted());
        assert!(!q.sql.contains("deleted_at\" IS NULL"));
        assert!(!q.sql.contains("WHERE"));
    }

    #[test]
    fn plain_records_have_no_deletion_filter() {
        let q = build_select(&Select::from::<SiteSetting>());
        assert_eq!(
            q.sql,
            "SELECT \"key\", \"value\", \"description\", \"updated_by\", \"updated_at\" FROM \"site_settings\""
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn disjunction_is_parenthesized_and_numbered_in_order() {
        let q = build_select(
            &Select::from::<SiteSetting>()
                .filter(Condition::eq("key", "church_name"))
                .filter(Condition::unset_or_gte("updated_by", 3i64))
                .limit(2),
        );
        assert!(q.sql.ends_with(
            " WHERE \"key\" = $1 AND (\"updated_by\" IS NULL OR \"updated_by\" >= $2) LIMIT 2"
        ));
        assert_eq!(q.params, vec![SqlValue::from("church_name"), SqlValue::Int(3)]);
    }

    #[test]
    fn identifiers_are_quoted_safely() {
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }
}
