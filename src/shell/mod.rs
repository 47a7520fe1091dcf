use crate::convert::convert;
use crate::{evaluate_expression, format_number};
use log::{debug, info};
use std::env;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

mod command;

pub use command::{Command, CommandParser};

const DEFAULT_PROMPT: &str = "SM.AI> ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const HELP: &str = "
--- SM.AI HELP ---
  Available Shell Commands:
    exit            - Terminate the program.
    help            - Show this help message.
    clear           - Clear the screen.

  Mathematical Expressions (RPN Parser):
    Supports: +, -, *, /, ^, ( ), unary minus.
    FUNCTIONS: abs().
    Example: 5 * 2 + abs(-10)

  Physics Calculations (Conversion):
    CONVERT [value] [unit_1] TO [unit_2] (or 'conv' ... 'in' ...)
    SPEED: m/s <-> km/h
    TEMPERATURE: C <-> F <-> K (Celsius, Fahrenheit, Kelvin)
    MASS: kg <-> lb (kilograms, pounds)
    Example: conv 100 kg to lb
----------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ShellConfig {
    /// Reads overrides from the environment (`SMAI_PROMPT`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(prompt) = env::var("SMAI_PROMPT") {
            config.prompt = prompt;
        }
        config
    }
}

/// Blocking read-evaluate-print loop. Results go to `output`, errors to
/// `errors`; no error ends the loop except I/O failures.
pub struct Shell<R, W, E> {
    input: R,
    output: W,
    errors: E,
    config: ShellConfig,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(input: R, output: W, errors: E, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            errors,
            config,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        info!("Starting shell");
        self.print_help()?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }

            if self.execute_line(&line)?.is_break() {
                break;
            }
        }

        writeln!(self.output, "SM.AI finished work. Goodbye!")?;
        self.output.flush()
    }

    /// Handles one line of input.
    pub fn execute_line(&mut self, line: &str) -> io::Result<ControlFlow<()>> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.output, "Result: Error: {}", err)?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        match command {
            Command::Empty => {}
            Command::Exit => return Ok(ControlFlow::Break(())),
            Command::Help => self.print_help()?,
            Command::Clear => {
                write!(self.output, "{}", CLEAR_SCREEN)?;
                self.print_help()?;
            }
            Command::Convert {
                value,
                unit_from,
                unit_to,
            } => match convert(value, &unit_from, &unit_to) {
                Ok(result) => {
                    writeln!(self.output, "Result: {} {}", format_number(result), unit_to)?
                }
                Err(err) => writeln!(self.output, "Result: Error: {}", err)?,
            },
            Command::Evaluate(expression) => match evaluate_expression(&expression) {
                Ok(result) => writeln!(self.output, "Result: {}", format_number(result))?,
                Err(err) => writeln!(self.errors, "!!! ERROR: {}", err)?,
            },
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", HELP)
    }
}
