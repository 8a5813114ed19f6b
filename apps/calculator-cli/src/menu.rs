//! Numbered text menu over a `CalculatorClientV1`.
//!
//! The loop reads from any `BufRead` and writes to any `Write`; end of input
//! at any prompt ends the session.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use calculator_sdk::{Arity, CalculatorClientV1, CalculatorError, Operands, Operation};

use crate::format;

const RULE: &str = "==================================================";
const EXIT_CHOICE: &str = "13";
const BASE_PROMPT: &str = "Enter base (press Enter for natural log): ";

/// Run the interactive session until the user exits or input ends.
///
/// # Errors
/// Returns an I/O error if reading `input` or writing `output` fails.
pub fn run<R, W>(input: &mut R, output: &mut W, client: &dyn CalculatorClientV1) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        input,
        output,
        client,
    };
    writeln!(session.output, "Welcome to Rust Calculator!")?;

    loop {
        session.display_menu()?;
        let Some(choice) = session.prompt_line("Enter your choice (1-13): ")? else {
            break;
        };
        let choice = choice.trim();

        if choice == EXIT_CHOICE {
            writeln!(
                session.output,
                "Thank you for using the calculator! Goodbye!"
            )?;
            break;
        }

        if let Some(op) = menu_operation(choice) {
            tracing::debug!(operation = %op, "menu choice");
            if session.run_operation(op)?.is_break() {
                break;
            }
        } else {
            tracing::debug!(choice, "invalid menu choice");
            writeln!(
                session.output,
                "Invalid choice! Please select a number from 1-13."
            )?;
        }

        if session.prompt_line("\nPress Enter to continue...")?.is_none() {
            break;
        }
    }

    session.output.flush()
}

/// Operation for an exact menu entry such as `"4"`.
fn menu_operation(choice: &str) -> Option<Operation> {
    let number: usize = choice.parse().ok()?;
    Operation::from_menu_number(number).filter(|op| op.menu_number().to_string() == choice)
}

fn menu_label(op: Operation) -> &'static str {
    match op {
        Operation::Add => "Addition (+)",
        Operation::Subtract => "Subtraction (-)",
        Operation::Multiply => "Multiplication (*)",
        Operation::Divide => "Division (/)",
        Operation::Power => "Power (^)",
        Operation::SquareRoot => "Square Root (\u{221a})",
        Operation::Percentage => "Percentage (%)",
        Operation::Factorial => "Factorial (!)",
        Operation::Sin => "Sine (sin)",
        Operation::Cos => "Cosine (cos)",
        Operation::Tan => "Tangent (tan)",
        Operation::Log => "Logarithm (log)",
    }
}

/// Prompts for `a` and, for binary operations, `b`.
fn operand_prompts(op: Operation) -> (&'static str, &'static str) {
    match op {
        Operation::Add | Operation::Subtract | Operation::Multiply => {
            ("Enter first number: ", "Enter second number: ")
        }
        Operation::Divide => ("Enter dividend: ", "Enter divisor: "),
        Operation::Power => ("Enter base: ", "Enter exponent: "),
        Operation::Percentage => ("Enter percentage: ", "Enter number: "),
        Operation::SquareRoot | Operation::Log => ("Enter number: ", BASE_PROMPT),
        Operation::Factorial => ("Enter a non-negative integer: ", ""),
        Operation::Sin | Operation::Cos | Operation::Tan => ("Enter angle in radians: ", ""),
    }
}

/// Text after `Result: ` for a successful evaluation rendered as `r`.
fn describe(op: Operation, operands: Operands, r: &str) -> String {
    let a = format::number(operands.a);
    let b = operands.b.map_or_else(String::new, format::number);

    match op {
        Operation::Add => format!("{a} + {b} = {r}"),
        Operation::Subtract => format!("{a} - {b} = {r}"),
        Operation::Multiply => format!("{a} * {b} = {r}"),
        Operation::Divide => format!("{a} / {b} = {r}"),
        Operation::Power => format!("{a} ^ {b} = {r}"),
        Operation::SquareRoot => format!("\u{221a}{a} = {r}"),
        Operation::Percentage => format!("{a}% of {b} = {r}"),
        Operation::Factorial => format!("{}! = {r}", format::integer(operands.a)),
        Operation::Sin => format!("sin({a}) = {r}"),
        Operation::Cos => format!("cos({a}) = {r}"),
        Operation::Tan => format!("tan({a}) = {r}"),
        Operation::Log if operands.b.is_some() => format!("log_{b}({a}) = {r}"),
        Operation::Log => format!("ln({a}) = {r}"),
    }
}

struct Session<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    client: &'a dyn CalculatorClientV1,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "           RUST CALCULATOR")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Available operations:")?;
        for op in Operation::ALL {
            let number = format!("{}.", op.menu_number());
            writeln!(self.output, "{number:<4}{}", menu_label(op))?;
        }
        writeln!(self.output, "{EXIT_CHOICE}. Exit")?;
        writeln!(self.output, "{RULE}")
    }

    /// Write `prompt` and read one line; `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt until the line parses as a float; `None` at end of input.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if let Ok(value) = line.trim().parse::<f64>() {
                return Ok(Some(value));
            }
            writeln!(self.output, "Please enter a valid number!")?;
        }
    }

    fn run_operation(&mut self, op: Operation) -> io::Result<ControlFlow<()>> {
        let (first_prompt, second_prompt) = operand_prompts(op);
        let Some(a) = self.read_number(first_prompt)? else {
            return Ok(ControlFlow::Break(()));
        };

        let b = match op.arity() {
            Arity::Unary => None,
            Arity::Binary => match self.read_number(second_prompt)? {
                Some(b) => Some(b),
                None => return Ok(ControlFlow::Break(())),
            },
            Arity::UnaryWithOptionalBase => {
                let Some(line) = self.prompt_line(second_prompt)? else {
                    return Ok(ControlFlow::Break(()));
                };
                let line = line.trim();
                if line.is_empty() {
                    None
                } else if let Ok(base) = line.parse::<f64>() {
                    Some(base)
                } else {
                    let err = CalculatorError::domain(format!(
                        "could not convert string to float: '{line}'"
                    ));
                    self.report(&err)?;
                    return Ok(ControlFlow::Continue(()));
                }
            }
        };

        let operands = Operands { a, b };
        let rendered = if op == Operation::Factorial {
            self.client.factorial(a).map(|exact| exact.to_string())
        } else {
            self.client.evaluate(op, operands).map(format::number)
        };
        match rendered {
            Ok(r) => writeln!(self.output, "Result: {}", describe(op, operands, &r))?,
            Err(err) => self.report(&err)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn report(&mut self, err: &CalculatorError) -> io::Result<()> {
        tracing::debug!(error = %err, domain = err.is_domain(), "operation failed");
        if err.is_domain() {
            writeln!(self.output, "Error: {err}")
        } else {
            writeln!(self.output, "An unexpected error occurred: {err}")
        }
    }
}
