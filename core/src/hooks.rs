use std::fs;
use std::io::{self, Write};

/// The monitor's console, abstracted so tests can feed canned keyboard
/// lines and capture console output instead of touching a real terminal.
/// The default implementation used outside tests talks to stdin/stdout.
pub trait ConsoleIo {
    fn read_line(&mut self) -> String;
    fn write_byte(&mut self, b: u8);
}

pub struct StdConsoleIo;

impl ConsoleIo for StdConsoleIo {
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(&['\r', '\n'][..]).to_string()
    }

    fn write_byte(&mut self, b: u8) {
        let _ = io::stdout().write_all(&[b]);
        let _ = io::stdout().flush();
    }
}

/// The FLOUT/SAVE hooks' view of the host filesystem, abstracted for the
/// same reason as `ConsoleIo`.
pub trait FileService {
    fn line_count(&self, filename: &str) -> io::Result<usize>;
    fn read_line(&self, filename: &str, line: usize) -> io::Result<String>;
    fn write_all(&self, filename: &str, contents: &str) -> io::Result<()>;
}

pub struct StdFileService;

impl FileService for StdFileService {
    fn line_count(&self, filename: &str) -> io::Result<usize> {
        let contents = fs::read_to_string(filename)?;
        Ok(contents.lines().count())
    }

    fn read_line(&self, filename: &str, line: usize) -> io::Result<String> {
        let contents = fs::read_to_string(filename)?;
        contents
            .lines()
            .nth(line)
            .map(|s| s.to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no such line"))
    }

    fn write_all(&self, filename: &str, contents: &str) -> io::Result<()> {
        fs::write(filename, contents)
    }
}
