use std::io;

quick_error! {
    /// Failure modes for loading an Intel-HEX image into memory.
    #[derive(Debug)]
    pub enum HexLoadError {
        Io(err: io::Error) {
            from()
            display("{}", err)
        }
        MalformedRecord(line: usize, reason: String) {
            display("malformed HEX record at line {}: {}", line, reason)
        }
    }
}

quick_error! {
    /// Failure modes for a single monitor command line. Every call site
    /// catches this, prints a short message, and returns to the prompt —
    /// nothing here ever aborts the REPL.
    #[derive(Debug)]
    pub enum CommandError {
        BadNumber(text: String) {
            display("not a hex number: {}", text)
        }
        UnknownRegister(name: String) {
            display("unknown register: {}", name)
        }
        UnknownFlag(name: String) {
            display("unknown flag: {}", name)
        }
        OutOfRange(value: u32) {
            display("value out of range: {:#X}", value)
        }
        MissingArgument {
            display("missing argument")
        }
    }
}
