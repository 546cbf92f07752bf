//! SQL rendering for geosql expression trees.
//!
//! Converts predicate expressions into SQL strings, inline or with
//! extracted bind parameters.

pub mod dialect;
pub mod geometry;

#[cfg(test)]
mod tests;

use crate::ast::{Expr, Value};
pub use dialect::{
    build_predicate, Arity, Dialect, Predicate, PredicateSpec, ReturnKind, SqlGenerator,
    PREDICATES,
};
pub use geometry::{resolve, CanonicalLiteral, GeomConstructor};

/// Result of parameterized rendering: the SQL template and the values to
/// bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranspileResult {
    /// SQL with placeholders (`$1, $2` or `?, ?` depending on dialect)
    pub sql: String,
    /// Extracted parameter values in order
    pub params: Vec<Value>,
}

impl TranspileResult {
    /// Create a new TranspileResult.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Create a result with no parameters.
    pub fn sql_only(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

/// Context for parameterized query building.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Current parameter index (1-based)
    pub index: usize,
    /// Collected parameter values in order
    pub params: Vec<Value>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self {
            index: 0,
            params: Vec::new(),
        }
    }

    /// Add a value and return the placeholder for it.
    pub fn add_param(&mut self, value: Value, generator: &dyn SqlGenerator) -> String {
        self.index += 1;
        self.params.push(value);
        generator.placeholder(self.index)
    }
}

/// Trait for converting expression nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string using the default dialect.
    fn to_sql(&self) -> String {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Convert this node to a SQL string with a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String;
}

/// Trait for converting expression nodes to parameterized SQL.
pub trait ToSqlParameterized {
    /// Convert to SQL with extracted parameters (default dialect).
    fn to_sql_parameterized(&self) -> TranspileResult {
        self.to_sql_parameterized_with_dialect(Dialect::default())
    }
    /// Convert to SQL with extracted parameters for a specific dialect.
    fn to_sql_parameterized_with_dialect(&self, dialect: Dialect) -> TranspileResult;
}

impl ToSql for Expr {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> String {
        let generator = dialect.generator();
        render_expr(self, generator.as_ref())
    }
}

impl ToSqlParameterized for Expr {
    fn to_sql_parameterized_with_dialect(&self, dialect: Dialect) -> TranspileResult {
        let generator = dialect.generator();
        let mut context = ParamContext::new();
        let sql = render_expr_parameterized(self, generator.as_ref(), &mut context);
        TranspileResult::new(sql, context.params)
    }
}

fn render_expr(expr: &Expr, generator: &dyn SqlGenerator) -> String {
    match expr {
        Expr::Column(name) => quote_column(name, generator),
        Expr::Literal(value) => render_value(value),
        Expr::FuncCall { name, args } => {
            let rendered: Vec<String> = args
                .iter()
                .map(|arg| render_expr(arg, generator))
                .collect();
            format!("{}({})", name, rendered.join(", "))
        }
    }
}

fn render_expr_parameterized(
    expr: &Expr,
    generator: &dyn SqlGenerator,
    context: &mut ParamContext,
) -> String {
    match expr {
        Expr::Column(name) => quote_column(name, generator),
        Expr::Literal(value) => match value {
            // Structural scalars (SRIDs, flags) stay inline; payload values
            // become bind parameters.
            Value::Int(_) | Value::Bool(_) | Value::Null => render_value(value),
            payload => context.add_param(payload.clone(), generator),
        },
        Expr::FuncCall { name, args } => {
            let rendered: Vec<String> = args
                .iter()
                .map(|arg| render_expr_parameterized(arg, generator, context))
                .collect();
            format!("{}({})", name, rendered.join(", "))
        }
    }
}

/// Quote a possibly table-qualified column reference part by part.
fn quote_column(name: &str, generator: &dyn SqlGenerator) -> String {
    name.split('.')
        .map(|part| generator.quote_identifier(part))
        .collect::<Vec<_>>()
        .join(".")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Bytes(bytes) => {
            let hex: String = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
            format!("X'{hex}'")
        }
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Value::Geometry(literal) => literal.clone(),
        Value::Null => "NULL".to_string(),
    }
}
