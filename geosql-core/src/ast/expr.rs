use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A composable SQL expression node.
///
/// Predicate methods on [`Comparator`](crate::comparator::Comparator) return
/// these; the caller renders them with
/// [`ToSql`](crate::transpiler::ToSql) or nests them inside larger
/// expressions. Nothing here is ever evaluated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A column reference, optionally table-qualified (`geom`, `towns.geom`).
    Column(String),
    /// A typed literal value.
    Literal(Value),
    /// An n-ary SQL function call.
    FuncCall { name: String, args: Vec<Expr> },
}

impl Expr {
    /// Create a function-call node.
    pub fn func(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::FuncCall {
            name: name.into(),
            args,
        }
    }

    /// Create a literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}
