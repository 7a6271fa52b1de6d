mod command;
mod error;

use command::Command;
use env_logger::Env;
use error::Error;
use formula_compute::{normalize_expression, Formula};
use formula_num::{FormatOptions, FormatOptionsBuilder, NumberFormat, Scientific, Separator};
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{collections::{BTreeSet, HashMap}, fs, io::{self, BufRead, IsTerminal}};

/// The state kept between lines of input.
#[derive(Debug, Default)]
struct Session {
    /// The values bound with `let`, as decimal literals.
    bindings: HashMap<String, String>,

    /// The requested number of significant digits.
    precision: u32,
}

impl Session {
    /// Parses the expression at the precision of the session.
    fn formula(&self, expr: &str) -> Result<Formula, Error> {
        Formula::builder()
            .precision(self.precision)
            .build(expr)
            .map_err(|error| Error::Formula {
                source: normalize_expression(expr, false),
                error,
            })
    }

    /// The format to print results with.
    fn format(&self, formula: &Formula) -> FormatOptions {
        FormatOptionsBuilder::new()
            .number(NumberFormat::Auto)
            .scientific(Scientific::Times)
            .precision(Some(formula.precision().digits() as usize))
            .separators(Separator::Never)
            .build()
    }

    /// Runs a single line of input, returning the text to print, if any.
    fn run(&mut self, line: &str) -> Result<Option<String>, Error> {
        let command = Command::parse(line).map_err(Error::Command)?;
        debug!("running {:?}", command);

        match command {
            Command::Eval(expr) => {
                let formula = self.formula(expr)?;
                let value = formula.get_value(&self.bindings).map_err(|error| Error::Formula {
                    source: formula.expression().to_string(),
                    error,
                })?;
                Ok(Some(value.fmt(self.format(&formula)).to_string()))
            },
            Command::Let { name, expr } => {
                let formula = self.formula(expr)?;
                let value = formula.get_value(&self.bindings).map_err(|error| Error::Formula {
                    source: formula.expression().to_string(),
                    error,
                })?;
                if value.is_complex() {
                    return Err(Error::Command(format!("cannot bind the complex value {} to `{}`", value, name)));
                }

                // every digit, in a form that can be parsed back
                let literal = value.fmt(FormatOptions {
                    precision: None,
                    ..Default::default()
                }).to_string();
                self.bindings.insert(name.to_string(), literal);
                Ok(None)
            },
            Command::Derive { var, expr } => {
                let formula = self.formula(expr)?;
                let derivative = formula.get_derivative_value(var, &self.bindings)
                    .map_err(|error| Error::Formula {
                        source: formula.expression().to_string(),
                        error,
                    })?;
                Ok(Some(derivative.fmt(self.format(&formula)).to_string()))
            },
            Command::Vars(expr) => {
                let formula = self.formula(expr)?;
                let vars = formula.variables().into_iter().collect::<BTreeSet<_>>();
                Ok(Some(vars.into_iter().collect::<Vec<_>>().join(", ")))
            },
            Command::Precision(digits) => {
                let digits = digits.parse::<u32>()
                    .map_err(|_| Error::Command(format!("`{}` is not a number of digits", digits)))?;
                let formula = Formula::builder()
                    .precision(digits)
                    .build("0")
                    .map_err(|error| Error::Command(error.to_string()))?;
                self.precision = digits;
                Ok(Some(format!("using {}", formula.precision())))
            },
        }
    }

    /// Runs a line of input and prints the result or the error.
    fn run_and_print(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match self.run(line) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => (),
            Err(err) => if let Err(io_err) = err.report_to_stderr() {
                eprintln!("failed to report error: {}", io_err);
            },
        }
    }
}

/// Runs every line of the given reader.
fn run_lines(session: &mut Session, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        session.run_and_print(&line?);
    }
    Ok(())
}

/// Runs the interactive mode until the input ends.
fn repl(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        session.run_and_print(&input);
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut session = Session::default();
    let mut file = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "--precision" => {
                let Some(digits) = args.next().and_then(|digits| digits.parse().ok()) else {
                    eprintln!("error: expected a number of digits after `{}`", arg);
                    std::process::exit(2);
                };
                session.precision = digits;
            },
            _ => file = Some(arg),
        }
    }

    let result = if let Some(filename) = file {
        // run source file
        fs::read_to_string(&filename).and_then(|input| run_lines(&mut session, input.as_bytes()))
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        run_lines(&mut session, io::stdin().lock())
    } else {
        // run the repl / interactive mode
        repl(&mut session).map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn run(session: &mut Session, line: &str) -> Option<String> {
        session.run(line).unwrap()
    }

    #[test]
    fn bindings_persist() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "let x = 1.5"), None);
        assert_eq!(run(&mut session, "let y = x * 4"), None);
        assert_eq!(run(&mut session, "x + y"), Some("7.5".to_string()));
        assert_eq!(run(&mut session, "d/dx x^2 * y"), Some("18".to_string()));
    }

    #[test]
    fn lists_variables() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "vars z + sin(y) * x"), Some("x, y, z".to_string()));
    }

    #[test]
    fn precision() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "precision 20"), Some("using 24 digits".to_string()));
        assert_eq!(run(&mut session, "1/3"), Some(format!("0.{}", "3".repeat(24))));
        assert!(matches!(session.run("precision 9000"), Err(Error::Command(_))));
        assert!(matches!(session.run("precision many"), Err(Error::Command(_))));
    }

    #[test]
    fn errors_carry_normalized_source() {
        let mut session = Session::default();
        let Err(Error::Formula { source, error }) = session.run("1 / (x - x)") else {
            panic!("expected a formula error");
        };
        assert_eq!(source, "1/(x-x)");
        assert!(error.to_string().contains("x"));

        let Err(Error::Formula { source, .. }) = session.run("sin( x") else {
            panic!("expected a formula error");
        };
        assert_eq!(source, "sin(x");
    }

    #[test]
    fn complex_results() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "3 - 2*i"), Some("3+i*(-2)".to_string()));
        assert!(matches!(session.run("let z = 2*i"), Err(Error::Command(_))));
    }
}
