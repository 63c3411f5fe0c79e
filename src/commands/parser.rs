// Mon Oct 19 2026 - Alex

use super::args::ArgList;
use super::registry::{find_in, CommandSpec, REGISTRY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a, 't> {
    Known {
        spec: &'t CommandSpec,
        args: ArgList<'a>,
    },
    Unknown(&'a str),
}

pub fn parse_line(line: &str) -> Option<ParsedLine<'_, 'static>> {
    parse_with(REGISTRY, line)
}

/// Splits a line into a command from `table` and its arguments.
///
/// Candidate command names are the space-joined prefixes of the tokens,
/// tried from one token upwards; the first candidate present in the table
/// wins even when a longer key would also match. Tokens are separated by a
/// single space, so repeated spaces produce empty arguments.
///
/// Returns `None` for a blank line.
pub fn parse_with<'a, 't>(table: &'t [CommandSpec], line: &'a str) -> Option<ParsedLine<'a, 't>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let boundaries = line
        .match_indices(' ')
        .map(|(pos, _)| pos)
        .chain(std::iter::once(line.len()));

    for end in boundaries {
        let candidate = &line[..end];
        if let Some(spec) = find_in(table, candidate) {
            let args = match line.get(end + 1..) {
                Some(rest) => rest.split(' ').collect(),
                None => Vec::new(),
            };
            log::debug!("Parsed command {:?} with {} argument(s)", spec.name, args.len());
            return Some(ParsedLine::Known {
                spec,
                args: ArgList::new(args),
            });
        }
    }

    log::debug!("No command matches {:?}", line);
    Some(ParsedLine::Unknown(line))
}
