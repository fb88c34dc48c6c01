//! Generic command-line assembly
//!
//! Knows nothing about HTTP. Collects a binary name, flag/value options and
//! positional arguments, then renders them as one POSIX shell line in which
//! every value is single-quoted.

/// A single-character flag paired with its value, rendered as `-<flag> '<value>'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub flag: char,
    pub value: String,
}

/// Builds a shell-safe command line
///
/// Options are emitted in insertion order, then positional arguments in
/// insertion order. Duplicate options are kept.
#[derive(Debug, Clone)]
pub struct CommandLineGenerator {
    binary: String,
    options: Vec<CommandOption>,
    arguments: Vec<String>,
}

impl CommandLineGenerator {
    /// Create a generator for the given binary
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            options: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Append a `-<flag> <value>` option
    pub fn add_option(&mut self, flag: char, value: impl Into<String>) -> &mut Self {
        self.options.push(CommandOption {
            flag,
            value: value.into(),
        });
        self
    }

    /// Append a positional argument
    pub fn add_argument(&mut self, value: impl Into<String>) -> &mut Self {
        self.arguments.push(value.into());
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Render the command line
    pub fn generate(&self) -> String {
        let mut out = self.binary.clone();

        for option in &self.options {
            out.push_str(" -");
            out.push(option.flag);
            out.push(' ');
            out.push_str(&shell_quote(&option.value));
        }

        for argument in &self.arguments {
            out.push(' ');
            out.push_str(&shell_quote(argument));
        }

        out
    }
}

/// Quote a value as a single POSIX shell word
///
/// The value is always wrapped in single quotes. Each embedded `'` closes the
/// quoted run, emits an escaped quote and reopens: `'\''`.
pub fn shell_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}
