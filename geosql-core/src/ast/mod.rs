pub mod builders;
pub mod element;
pub mod expr;
pub mod values;

pub use self::element::{GeomOperand, SpatialElement, UNKNOWN_SRID};
pub use self::expr::Expr;
pub use self::values::Value;
