use super::{evaluate, Program, Var};
use crate::error;
use crate::lang::ast::{Command, Relop, Statement};
use crate::lang::{Error, Line, Parsed};
use std::collections::VecDeque;
use std::rc::Rc;

const HELP: &str =
    "TINY BASIC: STATEMENTS REM LET PRINT INPUT END GOTO IF; COMMANDS RUN LIST CLEAR QUIT HELP";

/// What the runtime needs from its driver next. The runtime never
/// performs I/O itself; the driver loop reads lines, emits text, and
/// exits the process.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Awaiting the next top-level line.
    Stopped,
    /// An INPUT statement awaits a reply line; feed it to `enter`.
    Input(String),
    /// Emit text exactly as given.
    Print(String),
    /// Emit an error message.
    Error(Error),
    /// QUIT was entered; terminate with success.
    Quit,
}

enum State {
    Stopped,
    /// Running the stored program at this line.
    Running(u16),
    /// Suspended in an INPUT statement. `resume` is the line to
    /// continue at once a valid reply arrives; `None` resumes the
    /// top-level loop (immediate INPUT, or INPUT on the last line).
    Input { name: Rc<str>, resume: Option<u16> },
}

/// Where control goes after one statement executes.
enum Flow {
    Next,
    Jump(u16),
    Halt,
    Await(Rc<str>),
}

/// The session: stored program, variable store, and transient
/// execution state.
pub struct Runtime {
    program: Program,
    vars: Var,
    state: State,
    queue: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            program: Program::new(),
            vars: Var::new(),
            state: State::Stopped,
            queue: VecDeque::new(),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Accept one line of text: a numbered or immediate statement, a
    /// command, a bare line number, or, while suspended in INPUT, the
    /// reply.
    pub fn enter(&mut self, source: &str) {
        if let State::Input { .. } = self.state {
            self.reply(source);
            return;
        }
        let line = Line::new(source);
        if line.is_empty() {
            match line.number() {
                Some(number) => self.program.remove(number),
                None => self.queue.push_back(Event::Error(error!(SyntaxError))),
            }
            return;
        }
        match line.parse() {
            Err(e) => self.queue.push_back(Event::Error(e)),
            Ok(Parsed::Command(command)) => {
                if line.is_direct() {
                    self.command(command);
                } else {
                    self.queue.push_back(Event::Error(error!(SyntaxError)));
                }
            }
            Ok(Parsed::Statement(statement)) => {
                if line.is_direct() {
                    if statement.is_immediate() {
                        self.immediate(statement);
                    } else {
                        self.queue.push_back(Event::Error(error!(SyntaxError)));
                    }
                } else {
                    self.program.insert(line, statement);
                }
            }
        }
    }

    /// Drive the session forward until something is required of the
    /// driver. A RUN in progress executes here, one statement at a
    /// time, until it stops, errors, or suspends for INPUT.
    pub fn execute(&mut self) -> Event {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return event;
            }
            match self.state {
                State::Stopped => return Event::Stopped,
                State::Input { .. } => return Event::Input("? ".to_string()),
                State::Running(pc) => self.step(pc),
            }
        }
    }

    fn command(&mut self, command: Command) {
        match command {
            Command::Run => {
                if let Some(first) = self.program.first_line() {
                    self.state = State::Running(first);
                }
            }
            Command::List => {
                for line in self.program.lines() {
                    self.queue.push_back(Event::Print(format!("{}\n", line)));
                }
            }
            Command::Clear => {
                self.program = Program::new();
                self.vars = Var::new();
            }
            Command::Quit => self.queue.push_back(Event::Quit),
            Command::Help => self.queue.push_back(Event::Print(format!("{}\n", HELP))),
        }
    }

    fn immediate(&mut self, statement: Statement) {
        match execute(&statement, &mut self.vars, &mut self.queue) {
            Ok(Flow::Await(name)) => self.state = State::Input { name, resume: None },
            Ok(Flow::Next) => {}
            Ok(Flow::Jump(_)) | Ok(Flow::Halt) => {
                debug_assert!(false, "non-immediate statement executed directly")
            }
            Err(e) => self.queue.push_back(Event::Error(e)),
        }
    }

    fn step(&mut self, pc: u16) {
        let statement = match self.program.statement(pc) {
            Some(statement) => statement,
            None => {
                debug_assert!(false, "program counter at a missing line");
                self.state = State::Stopped;
                return;
            }
        };
        // The default successor; GOTO and a taking IF overwrite it.
        let next = self.program.next_line(pc);
        match execute(statement, &mut self.vars, &mut self.queue) {
            Ok(Flow::Next) => {
                self.state = match next {
                    Some(number) => State::Running(number),
                    None => State::Stopped,
                }
            }
            Ok(Flow::Jump(target)) => {
                if self.program.contains(target) {
                    self.state = State::Running(target);
                } else {
                    self.queue.push_back(Event::Error(error!(LineNumberError)));
                    self.state = State::Stopped;
                }
            }
            Ok(Flow::Halt) => self.state = State::Stopped,
            Ok(Flow::Await(name)) => self.state = State::Input { name, resume: next },
            Err(e) => {
                // Abort the run; prior assignments persist.
                self.queue.push_back(Event::Error(e));
                self.state = State::Stopped;
            }
        }
    }

    /// A reply to an INPUT prompt: optional `-`, then digits. Anything
    /// else reprompts with INVALID NUMBER.
    fn reply(&mut self, source: &str) {
        let (name, resume) = match &self.state {
            State::Input { name, resume } => (name.clone(), *resume),
            _ => return,
        };
        match parse_reply(source) {
            Some(value) => {
                self.vars.store(&name, value);
                self.state = match resume {
                    Some(number) => State::Running(number),
                    None => State::Stopped,
                };
            }
            None => self.queue.push_back(Event::Error(error!(InvalidNumber))),
        }
    }
}

fn parse_reply(source: &str) -> Option<i64> {
    let s = source.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok()
}

fn execute(statement: &Statement, vars: &mut Var, queue: &mut VecDeque<Event>) -> Result<Flow, Error> {
    match statement {
        Statement::Rem(_) => Ok(Flow::Next),
        Statement::End(_) => Ok(Flow::Halt),
        Statement::Let(_, name, expr) => {
            let value = evaluate(expr, vars)?;
            vars.store(name, value);
            Ok(Flow::Next)
        }
        Statement::Print(_, expr) => {
            let value = evaluate(expr, vars)?;
            queue.push_back(Event::Print(format!("{}\n", value)));
            Ok(Flow::Next)
        }
        Statement::Input(_, name) => Ok(Flow::Await(name.clone())),
        Statement::Goto(_, target) => Ok(Flow::Jump(*target)),
        Statement::If(_, lhs, relop, rhs, target) => {
            let lhs = evaluate(lhs, vars)?;
            let rhs = evaluate(rhs, vars)?;
            let taken = match relop {
                Relop::Less => lhs < rhs,
                Relop::Greater => lhs > rhs,
                Relop::Equal => lhs == rhs,
            };
            if taken {
                Ok(Flow::Jump(*target))
            } else {
                Ok(Flow::Next)
            }
        }
    }
}
