// Mon Oct 19 2026 - Alex

use super::theme::Theme;
use crate::commands::{Dispatcher, GOOD_BYE};
use crate::config::Config;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Farewell,
    EndOfInput,
}

/// Prompt loop reading one command per line until a farewell.
pub struct Shell<R, W> {
    input: R,
    output: W,
    dispatcher: Dispatcher,
    theme: Theme,
    prompt: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            dispatcher: Dispatcher::new(),
            theme: Theme::default().with_color(config.use_color),
            prompt: config.prompt.clone(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<ShellExit> {
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("Input closed");
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.theme.paint_farewell(GOOD_BYE))?;
                return Ok(ShellExit::EndOfInput);
            }

            let Some(reply) = self.dispatcher.dispatch(&line) else {
                continue;
            };

            writeln!(self.output, "{}", self.theme.render(&reply))?;

            if reply.is_farewell() {
                return Ok(ShellExit::Farewell);
            }
        }
    }
}
