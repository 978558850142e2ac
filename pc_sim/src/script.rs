//! Tick scripts.
//!
//! One line per tick. Tokens on a line are presses registered before that
//! tick runs:
//!
//! - `+` or `+N`: increment presses
//! - `-` or `-N`: decrement presses
//! - `v`: a validate press
//! - `wait N`: N idle ticks
//!
//! `#` starts a comment and an empty line is a single idle tick.

use std::{
    io::BufRead,
    iter::{self, RepeatN},
};

use pour_combien::{Button, ButtonPanel};
use thiserror::Error;

/// Presses registered between two ticks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickInput {
    pub increments: u32,
    pub decrements: u32,
    pub validate: bool,
}

impl TickInput {
    /// Register the presses on the panel.
    pub fn apply(&self, panel: &ButtonPanel) {
        panel.press_n(Button::Increment, self.increments);
        panel.press_n(Button::Decrement, self.decrements);
        if self.validate {
            panel.press(Button::Validate);
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown token {token:?}")]
    UnknownToken { line: usize, token: String },
    #[error("line {line}: bad count in {token:?}")]
    BadCount { line: usize, token: String },
}

/// One parsed line: the same presses for `ticks` ticks in a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptLine {
    pub input: TickInput,
    pub ticks: usize,
}

impl ScriptLine {
    fn once(input: TickInput) -> Self {
        Self { input, ticks: 1 }
    }

    fn idle(ticks: usize) -> Self {
        Self {
            input: TickInput::default(),
            ticks,
        }
    }
}

/// Parse one script line.
pub fn parse_line(line_number: usize, line: &str) -> Result<ScriptLine, ScriptError> {
    let line = line.split('#').next().unwrap_or_default();
    let mut tokens = line.split_whitespace();
    let mut input = TickInput::default();

    let bad_count = |token: &str| ScriptError::BadCount {
        line: line_number,
        token: token.to_string(),
    };

    while let Some(token) = tokens.next() {
        match token {
            "v" | "V" => input.validate = true,
            "wait" => {
                let count = tokens.next().ok_or_else(|| bad_count(token))?;
                let ticks: usize = count.parse().map_err(|_| bad_count(count))?;
                if input != TickInput::default() || tokens.next().is_some() {
                    return Err(ScriptError::UnknownToken {
                        line: line_number,
                        token: line.trim().to_string(),
                    });
                }
                return Ok(ScriptLine::idle(ticks));
            }
            _ => {
                let (counter, count) = if let Some(count) = token.strip_prefix('+') {
                    (&mut input.increments, count)
                } else if let Some(count) = token.strip_prefix('-') {
                    (&mut input.decrements, count)
                } else {
                    return Err(ScriptError::UnknownToken {
                        line: line_number,
                        token: token.to_string(),
                    });
                };
                let presses = if count.is_empty() {
                    1
                } else {
                    count.parse::<u32>().map_err(|_| bad_count(token))?
                };
                *counter = counter.saturating_add(presses);
            }
        }
    }

    Ok(ScriptLine::once(input))
}

/// Ticks read lazily from a script source.
pub struct Script<R> {
    reader: R,
    line_number: usize,
    pending: RepeatN<TickInput>,
}

impl<R: BufRead> Script<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pending: iter::repeat_n(TickInput::default(), 0),
        }
    }
}

impl<R: BufRead> Iterator for Script<R> {
    type Item = anyhow::Result<TickInput>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(input) = self.pending.next() {
                return Some(Ok(input));
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(error) => return Some(Err(error.into())),
            }
            self.line_number += 1;

            match parse_line(self.line_number, line.trim_end_matches(['\r', '\n'])) {
                Ok(parsed) => self.pending = iter::repeat_n(parsed.input, parsed.ticks),
                Err(error) => return Some(Err(error.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pour_combien::ButtonSource;

    fn tick(increments: u32, decrements: u32, validate: bool) -> TickInput {
        TickInput {
            increments,
            decrements,
            validate,
        }
    }

    #[test]
    fn test_parse_presses() {
        assert_eq!(parse_line(1, "+5 -2 v").unwrap(), ScriptLine::once(tick(5, 2, true)));
        assert_eq!(parse_line(1, "+ + -").unwrap(), ScriptLine::once(tick(2, 1, false)));
        assert_eq!(parse_line(1, "V").unwrap(), ScriptLine::once(tick(0, 0, true)));
    }

    #[test]
    fn test_empty_and_comment_lines_are_idle_ticks() {
        assert_eq!(parse_line(1, "").unwrap(), ScriptLine::idle(1));
        assert_eq!(parse_line(1, "   # host thinks").unwrap(), ScriptLine::idle(1));
        assert_eq!(parse_line(1, "+2 # two up").unwrap(), ScriptLine::once(tick(2, 0, false)));
    }

    #[test]
    fn test_wait() {
        assert_eq!(parse_line(1, "wait 3").unwrap(), ScriptLine::idle(3));
        assert_eq!(parse_line(1, "wait 0").unwrap().ticks, 0);
    }

    #[test]
    fn test_long_wait_is_lazy() {
        let source = format!("wait {}\n", usize::MAX);
        assert_eq!(
            parse_line(1, source.trim_end()).unwrap(),
            ScriptLine::idle(usize::MAX)
        );

        let ticks: Vec<_> = Script::new(source.as_bytes()).take(4).collect();
        assert_eq!(ticks.len(), 4);
        assert!(ticks.iter().all(|tick| matches!(tick, Ok(t) if *t == TickInput::default())));
    }

    #[test]
    fn test_errors_carry_line_number() {
        assert_eq!(
            parse_line(7, "+2 x").unwrap_err(),
            ScriptError::UnknownToken {
                line: 7,
                token: "x".to_string()
            }
        );
        assert_eq!(
            parse_line(3, "+two").unwrap_err(),
            ScriptError::BadCount {
                line: 3,
                token: "+two".to_string()
            }
        );
        assert!(matches!(
            parse_line(4, "wait"),
            Err(ScriptError::BadCount { line: 4, .. })
        ));
        assert!(matches!(
            parse_line(5, "+1 wait 2"),
            Err(ScriptError::UnknownToken { line: 5, .. })
        ));
    }

    #[test]
    fn test_script_expands_waits() {
        let source = "+3\nwait 2\n\nv\n";
        let ticks: Vec<_> = Script::new(source.as_bytes())
            .collect::<anyhow::Result<_>>()
            .unwrap();
        assert_eq!(
            ticks,
            vec![
                tick(3, 0, false),
                TickInput::default(),
                TickInput::default(),
                TickInput::default(),
                tick(0, 0, true),
            ]
        );
    }

    #[test]
    fn test_script_reports_bad_line() {
        let source = "+1\n+1\n?\n";
        let err = Script::new(source.as_bytes())
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScriptError>(),
            Some(&ScriptError::UnknownToken {
                line: 3,
                token: "?".to_string()
            })
        );
    }

    #[test]
    fn test_apply_registers_presses() {
        let panel = ButtonPanel::new();
        tick(2, 1, true).apply(&panel);
        assert_eq!(panel.press_count(Button::Increment), 2);
        assert_eq!(panel.press_count(Button::Decrement), 1);
        assert_eq!(panel.press_count(Button::Validate), 1);
    }
}
