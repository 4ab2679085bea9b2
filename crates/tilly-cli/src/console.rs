//! Stdin/stdout terminal with a typed-text effect and screen clearing.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tilly_fiction::{FictionError, FictionResult, GameConfig, Terminal};

pub struct ConsoleTerminal {
    typing_delay: Duration,
    clear_screen: bool,
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl ConsoleTerminal {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            typing_delay: config.typing_delay,
            clear_screen: config.clear_screen,
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn display(&mut self, text: &str) -> FictionResult<()> {
        let mut out = self.stdout.lock();

        if self.typing_delay.is_zero() {
            writeln!(out, "{text}")?;
        } else {
            for ch in text.chars() {
                write!(out, "{ch}")?;
                out.flush()?;
                thread::sleep(self.typing_delay);
            }
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> FictionResult<String> {
        {
            let mut out = self.stdout.lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(FictionError::InputClosed);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn clear(&mut self) -> FictionResult<()> {
        if self.clear_screen {
            execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
