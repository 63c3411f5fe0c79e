// Mon Oct 19 2026 - Alex

use crate::commands::{Reply, ReplyKind};
use colored::*;
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct Theme {
    pub use_color: bool,
    pub failure: Color,
    pub warning: Color,
    pub farewell: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            use_color: true,
            failure: Color::Red,
            warning: Color::Yellow,
            farewell: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self::default().with_color(false)
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_farewell(&self, text: &str) -> String {
        self.paint(text, self.farewell)
    }

    pub fn render(&self, reply: &Reply) -> String {
        let body = match reply.kind {
            ReplyKind::Answer => reply.body.clone(),
            ReplyKind::Failure => self.paint(&reply.body, self.failure),
            ReplyKind::Farewell => self.paint(&reply.body, self.farewell),
        };

        match reply.warning {
            Some(warning) => format!("{}\n{}", self.paint(warning, self.warning), body),
            None => body,
        }
    }

    pub fn format_error(&self, error: &dyn Display) -> String {
        let header = if self.use_color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        format!("{} {}", header, error)
    }
}
