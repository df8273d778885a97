//! Where `input` reads from.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

pub enum InputHandler {
    Stdin,
    /// Pre-supplied lines, consumed in order.
    Scripted(Mutex<VecDeque<String>>),
}

impl InputHandler {
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputHandler::Scripted(Mutex::new(lines.into_iter().map(Into::into).collect()))
    }

    /// Read one line without its terminator.
    ///
    /// End of input reads as an empty line.
    pub fn read_line(&self) -> io::Result<String> {
        match self {
            InputHandler::Stdin => {
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(line)
            }
            InputHandler::Scripted(lines) => Ok(lines.lock().pop_front().unwrap_or_default()),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandler>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandler::Stdin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_come_out_in_order_then_empty() {
        let handler = InputHandler::scripted(["first", "second"]);
        assert_eq!(handler.read_line().ok().as_deref(), Some("first"));
        assert_eq!(handler.read_line().ok().as_deref(), Some("second"));
        assert_eq!(handler.read_line().ok().as_deref(), Some(""));
    }
}
