/*!
## Terminal Module

The interactive front end: reads lines, prints output and errors,
and turns runtime events into process exits. All interpreter state
lives in [`crate::mach::Runtime`]; this loop only moves text.

*/

extern crate ansi_term;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::Write;

pub fn main() {
    match main_loop() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop() -> std::io::Result<i32> {
    let mut runtime = Runtime::default();
    let command = Interface::new("basic")?;
    let input = Interface::new("input")?;
    command.write_fmt(format_args!("TINY BASIC\n"))?;
    loop {
        match runtime.execute() {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(0),
                };
                runtime.enter(&string);
                command.add_history_unique(string);
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                        input.add_history_unique(string);
                    }
                    // End of input while a statement still wants a
                    // reply is a failure exit.
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(1),
                }
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Quit => return Ok(0),
        }
    }
}
