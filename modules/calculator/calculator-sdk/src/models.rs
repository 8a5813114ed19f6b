//! Operation model shared by every calculator surface.

use std::fmt;
use std::str::FromStr;

use crate::api::CalculatorError;

/// How many operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Needs both `a` and `b`.
    Binary,
    /// Needs `a`; `b` is ignored.
    Unary,
    /// Needs `a`; `b`, when present, is the logarithm base.
    UnaryWithOptionalBase,
}

/// The fixed set of operations the calculator evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Percentage,
    Factorial,
    Sin,
    Cos,
    Tan,
    Log,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Percentage,
        Operation::Factorial,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::Log,
    ];

    /// Name used on the wire (`operation` field of the HTTP request).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::Percentage => "percentage",
            Operation::Factorial => "factorial",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
            Operation::Log => "log",
        }
    }

    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Percentage => Arity::Binary,
            Operation::SquareRoot
            | Operation::Factorial
            | Operation::Sin
            | Operation::Cos
            | Operation::Tan => Arity::Unary,
            Operation::Log => Arity::UnaryWithOptionalBase,
        }
    }

    /// Position in the text menu, starting at 1.
    #[must_use]
    pub fn menu_number(self) -> usize {
        Self::ALL
            .iter()
            .position(|op| *op == self)
            .map_or(0, |idx| idx + 1)
    }

    /// Inverse of [`Operation::menu_number`].
    #[must_use]
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|op| op.name() == s)
            .copied()
            .ok_or_else(|| CalculatorError::unknown_operation(s))
    }
}

/// Operands of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: Option<f64>,
}

impl Operands {
    #[must_use]
    pub fn unary(a: f64) -> Self {
        Self { a, b: None }
    }

    #[must_use]
    pub fn binary(a: f64, b: f64) -> Self {
        Self { a, b: Some(b) }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(CalculatorError::unknown_operation("modulo"))
        );
        // Names are case-sensitive
        assert!("ADD".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn menu_numbers_follow_menu_order() {
        assert_eq!(Operation::Add.menu_number(), 1);
        assert_eq!(Operation::Log.menu_number(), 12);
        assert_eq!(Operation::from_menu_number(4), Some(Operation::Divide));
        assert_eq!(Operation::from_menu_number(0), None);
        assert_eq!(Operation::from_menu_number(13), None);
        for op in Operation::ALL {
            assert_eq!(Operation::from_menu_number(op.menu_number()), Some(op));
        }
    }

    #[test]
    fn arity_matches_operation_shape() {
        assert_eq!(Operation::Percentage.arity(), Arity::Binary);
        assert_eq!(Operation::Factorial.arity(), Arity::Unary);
        assert_eq!(Operation::Log.arity(), Arity::UnaryWithOptionalBase);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Operation::SquareRoot.to_string(), "square_root");
    }
}
