//! Typed argument lists for oracle server invocations.

use core::fmt;

/// A single command line argument.
///
/// Valued flags always render as two tokens, bare flags as one. A bare flag can never pick up a
/// value by accident when the list is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleArg {
    /// A flag followed by its value, e.g. `--l1 http://localhost:8545`.
    Flag {
        /// The flag, including its leading dashes.
        name: &'static str,
        /// The rendered value.
        value: String,
    },
    /// A presence-only flag or positional token, e.g. `--l2.custom`.
    Bare(&'static str),
}

impl OracleArg {
    /// Returns the flag name or bare token.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flag { name, .. } | Self::Bare(name) => *name,
        }
    }

    /// Returns the value of a valued flag.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Flag { value, .. } => Some(value.as_str()),
            Self::Bare(_) => None,
        }
    }

    /// Returns `true` if the argument is a bare flag.
    pub const fn is_bare(&self) -> bool {
        matches!(self, Self::Bare(_))
    }
}

/// An ordered list of [OracleArg]s.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OracleArgs(Vec<OracleArg>);

impl OracleArgs {
    /// Creates an empty argument list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a valued flag.
    pub fn flag(mut self, name: &'static str, value: impl ToString) -> Self {
        self.0.push(OracleArg::Flag { name, value: value.to_string() });
        self
    }

    /// Appends a valued flag whose value is `values` joined by `,`, in order and without
    /// deduplication. Nothing is appended if `values` is empty.
    pub fn joined_flag(self, name: &'static str, values: &[String]) -> Self {
        if values.is_empty() {
            return self;
        }
        self.flag(name, values.join(","))
    }

    /// Appends a bare flag.
    pub fn bare(mut self, name: &'static str) -> Self {
        self.0.push(OracleArg::Bare(name));
        self
    }

    /// Appends a bare flag if `enabled` is `true`.
    pub fn bare_if(self, enabled: bool, name: &'static str) -> Self {
        if enabled {
            self.bare(name)
        } else {
            self
        }
    }

    /// Returns the first argument with the given name.
    pub fn get(&self, name: &str) -> Option<&OracleArg> {
        self.0.iter().find(|arg| arg.name() == name)
    }

    /// Returns the value of the first valued flag with the given name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OracleArg::value)
    }

    /// Returns `true` if an argument with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns an iterator over the arguments.
    pub fn iter(&self) -> impl Iterator<Item = &OracleArg> {
        self.0.iter()
    }

    /// Returns the number of arguments. Valued flags count once.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens the arguments into the token list passed to the process.
    pub fn into_args(self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.0.len() * 2);
        for arg in self.0 {
            match arg {
                OracleArg::Flag { name, value } => {
                    tokens.push(name.to_string());
                    tokens.push(value);
                }
                OracleArg::Bare(name) => tokens.push(name.to_string()),
            }
        }
        tokens
    }
}

impl<'a> IntoIterator for &'a OracleArgs {
    type Item = &'a OracleArg;
    type IntoIter = core::slice::Iter<'a, OracleArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A fully assembled oracle server invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleCommand {
    /// The executable to launch.
    pub program: String,
    /// The arguments to launch it with.
    pub args: OracleArgs,
}

impl OracleCommand {
    /// Flattens the arguments into the token list passed to the process.
    pub fn into_args(self) -> Vec<String> {
        self.args.into_args()
    }
}

impl fmt::Display for OracleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg.name()))?;
            if let Some(value) = arg.value() {
                write!(f, " {}", shell_quote(value))?;
            }
        }
        Ok(())
    }
}

/// Quotes a token for display in a POSIX shell. Tokens made only of safe characters are left
/// untouched.
fn shell_quote(token: &str) -> String {
    let safe = !token.is_empty() &&
        token.chars().all(|c| c.is_ascii_alphanumeric() || "-_./:,=@%+".contains(c));
    if safe {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
