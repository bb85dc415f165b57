use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Call site attached to every classified failure, shown as `[file:line:column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for ErrorLocation {
    fn from(caller: &'static Location<'static>) -> Self {
        ErrorLocation {
            file: caller.file(),
            line: caller.line(),
            column: caller.column(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ErrorLocation { file, line, column } = self;
        write!(f, "[{file}:{line}:{column}]")
    }
}
