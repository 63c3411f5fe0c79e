// Mon Oct 19 2026 - Alex

use std::fmt;

pub const EXTRA_ARGS_WARNING: &str = "Extra arguments discarded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Answer,
    Failure,
    Farewell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub warning: Option<&'static str>,
    pub body: String,
    pub kind: ReplyKind,
}

impl Reply {
    pub fn answer(body: impl Into<String>) -> Self {
        Self {
            warning: None,
            body: body.into(),
            kind: ReplyKind::Answer,
        }
    }

    pub fn failure(body: impl Into<String>) -> Self {
        Self {
            warning: None,
            body: body.into(),
            kind: ReplyKind::Failure,
        }
    }

    pub fn farewell(body: impl Into<String>) -> Self {
        Self {
            warning: None,
            body: body.into(),
            kind: ReplyKind::Farewell,
        }
    }

    pub fn with_warning(mut self, warning: Option<&'static str>) -> Self {
        self.warning = warning;
        self
    }

    pub fn is_farewell(&self) -> bool {
        self.kind == ReplyKind::Farewell
    }

    /// Plain text exactly as printed without styling.
    pub fn text(&self) -> String {
        match self.warning {
            Some(warning) => format!("{}\n{}", warning, self.body),
            None => self.body.clone(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
