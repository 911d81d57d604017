use super::types::{STATIC_PREFIX, WILDCARD_METHOD};
use crate::errors::RouteError;

/// One tokenized configuration line, prior to entry expansion.
///
/// The verb is still raw text here: verb validation happens per produced
/// entry in the factory, so a wildcard line fails on its first expanded
/// entry rather than at tokenization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRoute {
    /// 1-based line number in the routes file, for diagnostics
    pub line_no: usize,
    /// Verb token as written
    pub verb: String,
    /// Path pattern token
    pub path: String,
    /// Target token: `controller.method`, `controller.{method}`, or
    /// `staticDir:<path>`
    pub target: String,
}

impl RawRoute {
    /// Split the target into `(controller, method)`.
    ///
    /// Only valid for non-static targets; the parser guarantees exactly one
    /// `.` with non-empty sides.
    pub(crate) fn split_target(&self) -> (&str, &str) {
        match self.target.split_once('.') {
            Some((controller, method)) => (controller, method),
            None => (self.target.as_str(), ""),
        }
    }

    pub(crate) fn is_static(&self) -> bool {
        self.target.starts_with(STATIC_PREFIX)
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        !self.is_static() && self.split_target().1 == WILDCARD_METHOD
    }
}

/// Tokenize raw routes-file text into [`RawRoute`] lines.
///
/// Lines that are empty, whitespace-only, or start with `#` in column zero
/// are dropped. Each surviving line must split on runs of whitespace into at
/// least three tokens; extra tokens are ignored. A non-static target must
/// contain exactly one `.` with text on both sides. Violations are rejected
/// here, up front, with the line number instead of surfacing later as a
/// confusing controller-resolution failure.
pub fn parse(raw: &str) -> Result<Vec<RawRoute>, RouteError> {
    let mut routes = Vec::new();

    for (idx, line) in raw.split('\n').enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let malformed = || RouteError::MalformedRoute {
            line_no: idx + 1,
            line: line.trim_end().to_string(),
        };

        let mut fields = line.split_whitespace();
        let (Some(verb), Some(path), Some(target)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };

        if let Some(dir) = target.strip_prefix(STATIC_PREFIX) {
            if dir.is_empty() {
                return Err(malformed());
            }
        } else {
            // controller.method, both sides non-empty, single separator
            match target.split_once('.') {
                Some((controller, method))
                    if !controller.is_empty() && !method.is_empty() && !method.contains('.') => {}
                _ => return Err(malformed()),
            }
        }

        routes.push(RawRoute {
            line_no: idx + 1,
            verb: verb.to_string(),
            path: path.to_string(),
            target: target.to_string(),
        });
    }

    Ok(routes)
}
