//! Display surface abstraction
//!
//! The renderer never talks to the terminal directly. It drives a
//! `DisplaySurface`, which is a real terminal in the game and a recording
//! fake in tests.

use std::io::{self, BufRead, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use super::ConsoleColor;

/// Capabilities a character display must provide
pub trait DisplaySurface {
    /// Blank the whole display and home the cursor
    fn clear(&mut self) -> io::Result<()>;

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()>;

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()>;

    fn write_char(&mut self, ch: char) -> io::Result<()>;

    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Write text and move to the start of the next line
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Current display width in columns
    fn width(&self) -> io::Result<u16>;

    /// Block until a key is pressed
    fn read_key(&mut self) -> io::Result<()>;

    /// Block until a full line is entered, returning it without the terminator
    fn read_line(&mut self) -> io::Result<String>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Terminal surface on stdout, driven through crossterm commands
pub struct CrosstermSurface {
    stdout: Stdout,
}

impl CrosstermSurface {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    /// Restore the terminal's colours before handing it back to the shell
    pub fn reset(&mut self) -> io::Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()
    }
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for CrosstermSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.stdout.queue(cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.stdout.queue(SetForegroundColor(color.into()))?;
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.stdout.queue(Print(ch))?;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn width(&self) -> io::Result<u16> {
        terminal::size().map(|(cols, _)| cols)
    }

    fn read_key(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        terminal::enable_raw_mode()?;
        let result = wait_for_key_press();
        terminal::disable_raw_mode()?;
        result
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn wait_for_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Releases and auto-repeats are not a fresh press
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory surface that records every call and keeps a virtual screen.

    use std::collections::VecDeque;
    use std::io;

    use super::DisplaySurface;
    use crate::render::ConsoleColor;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        Clear,
        MoveTo(u16, u16),
        Foreground(ConsoleColor),
        Char(char),
        Str(String),
        ReadKey,
        ReadLine,
        Flush,
    }

    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub width: u16,
        pub lines_to_read: VecDeque<String>,
        screen: Vec<Vec<char>>,
        cursor: (u16, u16),
        color: ConsoleColor,
        /// Every character written, with the colour it was written in
        pub painted: Vec<(char, ConsoleColor)>,
    }

    impl RecordingSurface {
        pub fn new(width: u16, height: u16) -> Self {
            Self {
                ops: Vec::new(),
                width,
                lines_to_read: VecDeque::new(),
                screen: vec![vec![' '; width as usize]; height as usize],
                cursor: (0, 0),
                color: ConsoleColor::White,
                painted: Vec::new(),
            }
        }

        pub fn with_input(mut self, line: &str) -> Self {
            self.lines_to_read.push_back(line.to_string());
            self
        }

        /// Visible text of a screen row, trailing blanks stripped
        pub fn row_text(&self, row: u16) -> String {
            self.screen[row as usize].iter().collect::<String>().trim_end().to_string()
        }

        pub fn cursor(&self) -> (u16, u16) {
            self.cursor
        }

        pub fn count(&self, op: &Op) -> usize {
            self.ops.iter().filter(|o| *o == op).count()
        }

        fn put(&mut self, ch: char) {
            if ch == '\n' {
                self.cursor = (0, self.cursor.1.saturating_add(1));
                return;
            }
            // Past the right edge the terminal wraps onto the next row
            if self.cursor.0 >= self.width {
                self.cursor = (0, self.cursor.1.saturating_add(1));
            }
            let (col, row) = self.cursor;
            if let Some(cell) = self
                .screen
                .get_mut(row as usize)
                .and_then(|r| r.get_mut(col as usize))
            {
                *cell = ch;
            }
            self.painted.push((ch, self.color));
            self.cursor.0 = col.saturating_add(1);
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn clear(&mut self) -> io::Result<()> {
            self.ops.push(Op::Clear);
            for row in &mut self.screen {
                row.fill(' ');
            }
            self.cursor = (0, 0);
            Ok(())
        }

        fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
            self.ops.push(Op::MoveTo(col, row));
            self.cursor = (col, row);
            Ok(())
        }

        fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
            self.ops.push(Op::Foreground(color));
            self.color = color;
            Ok(())
        }

        fn write_char(&mut self, ch: char) -> io::Result<()> {
            self.ops.push(Op::Char(ch));
            self.put(ch);
            Ok(())
        }

        fn write_str(&mut self, text: &str) -> io::Result<()> {
            self.ops.push(Op::Str(text.to_string()));
            for ch in text.chars() {
                self.put(ch);
            }
            Ok(())
        }

        fn width(&self) -> io::Result<u16> {
            Ok(self.width)
        }

        fn read_key(&mut self) -> io::Result<()> {
            self.ops.push(Op::ReadKey);
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<String> {
            self.ops.push(Op::ReadLine);
            self.lines_to_read
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input"))
        }

        fn flush(&mut self) -> io::Result<()> {
            self.ops.push(Op::Flush);
            Ok(())
        }
    }
}
