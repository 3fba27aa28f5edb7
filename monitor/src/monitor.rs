use std::io::{self, Write};

use log::{info, trace, warn};

use i8080_core::disasm::disasm_at;
use i8080_core::machine::{Machine, StopReason};
use i8080_core::cpu::{Reg16, Reg8};
use i8080_core::error::CommandError;

#[cfg(test)]
#[path = "./monitor_test.rs"]
mod monitor_test;

/// Drives a `Machine` from single-letter commands split on whitespace.
/// The first token is matched case-insensitively; every argument is
/// uppercased too, except the `L` command's filename, which keeps its
/// original case so paths on case-sensitive filesystems still resolve.
pub struct Monitor {
    pub machine: Machine,
    trace_enabled: bool,
    quit: bool,
}

impl Monitor {
    pub fn new() -> Self {
        Monitor {
            machine: Machine::new(),
            trace_enabled: false,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Parses and runs a single command line, printing its effect to
    /// stdout. Unknown commands are silently ignored, matching the
    /// reference behaviour.
    pub fn exec_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let raw: Vec<&str> = line.split_whitespace().collect();
        let cmd = raw[0].to_uppercase();
        let args: Vec<String> = if cmd == "L" {
            raw[1..].iter().map(|s| s.to_string()).collect()
        } else {
            raw[1..].iter().map(|s| s.to_uppercase()).collect()
        };

        trace!("monitor command: {} {:?}", cmd, args);

        if let Err(e) = self.dispatch(&cmd, &args) {
            println!("error: {}", e);
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &[String]) -> Result<(), CommandError> {
        match cmd {
            "B" => self.cmd_breakpoint(args),
            "C" => {
                self.machine.pc_breakpoint = None;
                println!("breakpoint cleared");
                Ok(())
            }
            "D" => self.cmd_dump(args),
            "E" => self.cmd_run(args),
            "F" => self.cmd_flag(args),
            "H" | "HELP" => {
                self.cmd_help();
                Ok(())
            }
            "L" => self.cmd_load(args),
            "M" => self.cmd_write_mem(args),
            "P" => self.cmd_port(args),
            "Q" | "QUIT" => {
                self.quit = true;
                Ok(())
            }
            "R" => self.cmd_register(args),
            "S" => self.cmd_step(args),
            "T" => self.cmd_trace(args),
            "I" => {
                self.cmd_info();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn cmd_help(&self) {
        println!("B [HHHH]       set or show breakpoint");
        println!("C              clear breakpoint");
        println!("D A1 [A2]      dump memory");
        println!("E [A]          run from A or PC until stop");
        println!("F NAME BIT     set a flag (S Z K AC P V CY) to 0 or 1");
        println!("H | HELP       this text");
        println!("L path         load an Intel-HEX file");
        println!("M A B1 [B2..]  write bytes starting at A");
        println!("P N [B]        show or set I/O port N");
        println!("Q | QUIT       exit");
        println!("R [NAME HH]    show or set a register");
        println!("S [A]          single-step one instruction");
        println!("T [ON|OFF]     toggle or report the execution trace");
        println!("I              show cycle and instruction counters");
    }

    fn cmd_breakpoint(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            match self.machine.pc_breakpoint {
                Some(addr) => println!("breakpoint: {:04X}", addr),
                None => println!("breakpoint: none"),
            }
            return Ok(());
        }
        let addr = parse_u16_hex(&args[0])?;
        self.machine.pc_breakpoint = Some(addr);
        println!("breakpoint set: {:04X}", addr);
        Ok(())
    }

    fn cmd_dump(&self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument);
        }
        let start = parse_u16_hex(&args[0])?;
        let end = if args.len() > 1 { parse_u16_hex(&args[1])? } else { start };
        if end < start {
            return Err(CommandError::OutOfRange(u32::from(start)));
        }

        let mut addr = start;
        loop {
            if (addr - start) % 16 == 0 {
                if addr != start {
                    println!();
                }
                print!("{:04X}: ", addr);
            }
            print!("{:02X} ", self.machine.memory[addr as usize]);
            if addr == end {
                break;
            }
            addr += 1;
        }
        println!();
        Ok(())
    }

    fn cmd_run(&mut self, args: &[String]) -> Result<(), CommandError> {
        if !args.is_empty() {
            self.machine.cpu.pc = parse_u16_hex(&args[0])?;
        }
        let reason = self.machine.run();
        self.report_stop(reason);
        Ok(())
    }

    fn report_stop(&self, reason: StopReason) {
        match reason {
            StopReason::Halted => println!("halted at {:04X}", self.machine.cpu.pc),
            StopReason::Breakpoint => println!("breakpoint at {:04X}", self.machine.cpu.pc),
            StopReason::Invalid(op) => {
                warn!("invalid opcode {:02X} at {:04X}", op, self.machine.cpu.pc);
                println!("invalid opcode {:02X} at {:04X}", op, self.machine.cpu.pc);
            }
            StopReason::PcOutOfRange => println!("PC out of range"),
        }
        println!(
            "{} instructions, {} cycles",
            self.machine.cpu.instruction_count, self.machine.cpu.cycles
        );
    }

    fn cmd_flag(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.len() < 2 {
            return Err(CommandError::MissingArgument);
        }
        let bit = match args[1].as_str() {
            "0" => false,
            "1" => true,
            _ => return Err(CommandError::BadNumber(args[1].clone())),
        };
        match args[0].as_str() {
            "S" => self.machine.cpu.flags.sign = bit,
            "Z" => self.machine.cpu.flags.zero = bit,
            "K" => self.machine.cpu.flags.k = bit,
            "AC" => self.machine.cpu.flags.aux_carry = bit,
            "P" => self.machine.cpu.flags.parity = bit,
            "V" => self.machine.cpu.flags.v = bit,
            "CY" => self.machine.cpu.flags.carry = bit,
            other => return Err(CommandError::UnknownFlag(other.to_string())),
        }
        println!("{} = {}", args[0], bit as u8);
        Ok(())
    }

    fn cmd_load(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument);
        }
        let path = args.join(" ");
        match self.machine.load_hex_file(&path) {
            Ok(()) => {
                info!("loaded hex image from {}", path);
                println!("loaded {}", path);
            }
            Err(e) => println!("load failed: {}", e),
        }
        Ok(())
    }

    fn cmd_write_mem(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.len() < 2 {
            return Err(CommandError::MissingArgument);
        }
        let mut addr = parse_u16_hex(&args[0])?;
        for b in &args[1..] {
            self.machine.memory[addr as usize] = parse_u8_hex(b)?;
            addr = addr.wrapping_add(1);
        }
        println!("wrote {} byte(s) at {:04X}", args.len() - 1, parse_u16_hex(&args[0])?);
        Ok(())
    }

    fn cmd_port(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument);
        }
        let n = parse_u8_hex(&args[0])?;
        if args.len() > 1 {
            let b = parse_u8_hex(&args[1])?;
            self.machine.ports[n as usize] = b;
            println!("port {:02X} = {:02X}", n, b);
        } else {
            println!("port {:02X} = {:02X}", n, self.machine.read_port(n));
        }
        Ok(())
    }

    fn cmd_register(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            self.print_registers();
            return Ok(());
        }
        if args.len() < 2 {
            return Err(CommandError::MissingArgument);
        }
        let name = &args[0];
        if let Some(r8) = Reg8::from_str(name) {
            self.machine.cpu.set_r8(r8, parse_u8_hex(&args[1])?);
        } else if let Some(r16) = Reg16::from_str(name) {
            self.machine.cpu.set_r16(r16, parse_u16_hex(&args[1])?);
        } else {
            return Err(CommandError::UnknownRegister(name.clone()));
        }
        println!("{} = {}", name, args[1]);
        Ok(())
    }

    fn print_registers(&self) {
        let cpu = &self.machine.cpu;
        println!(
            "A:{:02X}  BC:{:04X}  DE:{:04X}  HL:{:04X}  PC:{:04X}  SP:{:04X}",
            cpu.a, cpu.bc(), cpu.de(), cpu.hl(), cpu.pc, cpu.sp
        );
        println!(
            "S{} Z{} P{} CY{} AC{} K{} V{}  PSW:{:02X}",
            cpu.flags.sign as u8,
            cpu.flags.zero as u8,
            cpu.flags.parity as u8,
            cpu.flags.carry as u8,
            cpu.flags.aux_carry as u8,
            cpu.flags.k as u8,
            cpu.flags.v as u8,
            cpu.flags.psw_byte(),
        );
    }

    fn cmd_step(&mut self, args: &[String]) -> Result<(), CommandError> {
        if !args.is_empty() {
            self.machine.cpu.pc = parse_u16_hex(&args[0])?;
        }
        let pc = self.machine.cpu.pc;
        let (text, _) = disasm_at(&self.machine.memory, pc);
        if let Some(reason) = self.machine.step() {
            self.report_stop(reason);
        }
        println!("{:04X}  {}", pc, text);
        Ok(())
    }

    fn cmd_trace(&mut self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            println!("trace: {}", if self.trace_enabled { "on" } else { "off" });
            return Ok(());
        }
        match args[0].as_str() {
            "ON" => self.trace_enabled = true,
            "OFF" => self.trace_enabled = false,
            other => return Err(CommandError::BadNumber(other.to_string())),
        }
        println!("trace: {}", if self.trace_enabled { "on" } else { "off" });
        Ok(())
    }

    fn cmd_info(&self) {
        println!(
            "{} instructions, {} cycles",
            self.machine.cpu.instruction_count, self.machine.cpu.cycles
        );
    }
}

fn parse_u16_hex(s: &str) -> Result<u16, CommandError> {
    u16::from_str_radix(s.trim_start_matches("0X"), 16).map_err(|_| CommandError::BadNumber(s.to_string()))
}

fn parse_u8_hex(s: &str) -> Result<u8, CommandError> {
    u8::from_str_radix(s.trim_start_matches("0X"), 16).map_err(|_| CommandError::BadNumber(s.to_string()))
}

/// Reads lines from stdin and feeds them to a `Monitor` until `Q`/`QUIT`
/// or end of input. Printing the prompt is the caller's convention, not
/// the engine's, so tests can drive `Monitor::exec_line` directly.
pub fn run_repl(mut monitor: Monitor) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        monitor.exec_line(&line);
        if monitor.should_quit() {
            break;
        }
    }
    Ok(())
}
