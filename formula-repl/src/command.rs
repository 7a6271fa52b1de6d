//! The commands accepted by the REPL, one per line of input.

/// A single line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Evaluate an expression with the current bindings.
    Eval(&'a str),

    /// `let <name> = <expr>`: evaluate an expression and bind the result to a variable.
    Let { name: &'a str, expr: &'a str },

    /// `d/d<name> <expr>`: evaluate the derivative of an expression with respect to a variable.
    Derive { var: &'a str, expr: &'a str },

    /// `vars <expr>`: list the variables of an expression.
    Vars(&'a str),

    /// `precision <digits>`: change the number of significant digits.
    Precision(&'a str),
}

impl<'a> Command<'a> {
    /// Parses a line of input, which must not be empty.
    pub fn parse(line: &'a str) -> Result<Self, String> {
        let line = line.trim();

        if let Some(rest) = keyword(line, "let") {
            let (name, expr) = rest.split_once('=')
                .ok_or_else(|| "expected `let <name> = <expression>`".to_string())?;
            let name = name.trim();
            if name.is_empty() {
                return Err("missing variable name after `let`".to_string());
            }
            return Ok(Command::Let { name, expr });
        }

        if let Some(rest) = line.strip_prefix("d/d") {
            let (var, expr) = rest.split_once(char::is_whitespace)
                .ok_or_else(|| "expected `d/d<name> <expression>`".to_string())?;
            return Ok(Command::Derive { var, expr });
        }

        if let Some(rest) = keyword(line, "vars") {
            return Ok(Command::Vars(rest));
        }

        if let Some(rest) = keyword(line, "precision") {
            return Ok(Command::Precision(rest.trim()));
        }

        Ok(Command::Eval(line))
    }
}

/// Returns the rest of the line if it starts with the given keyword followed by whitespace.
fn keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}
