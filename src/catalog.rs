//! Table of exported functions and their documentation.

use serde::Serialize;

use crate::error::CalcError;
use crate::operand::Operand;
use crate::ops::BinaryOp;

/// Documentation of the calculator module itself.
pub const MODULE_DOC: &str = "Calculator";

/// An exported arithmetic function.
#[derive(Debug, Clone, Serialize)]
pub struct Function {
    /// Short name, e.g. `sub`.
    pub name: &'static str,
    /// Dotted path from the module root, e.g. `subtract.sub`.
    pub path: &'static str,
    /// One-line description.
    pub doc: &'static str,
    /// The operation the function performs.
    pub op: BinaryOp,
}

impl Function {
    /// Calls the function with two operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::TypeMismatch`] if either operand is not an integer.
    pub fn call(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64, CalcError> {
        self.op.apply(a.into(), b.into())
    }
}

static CATALOG: [Function; 2] = [
    Function {
        name: "add",
        path: "add",
        doc: "A function that adds two numbers",
        op: BinaryOp::Add,
    },
    Function {
        name: "sub",
        path: "subtract.sub",
        doc: "A function that subtracts two numbers",
        op: BinaryOp::Sub,
    },
];

/// Returns every exported function.
pub fn catalog() -> &'static [Function] {
    &CATALOG
}

/// Finds a function by short name or dotted path.
pub fn lookup(name: &str) -> Option<&'static Function> {
    CATALOG.iter().find(|f| f.name == name || f.path == name)
}
