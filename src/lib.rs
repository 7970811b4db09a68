//! # TINY BASIC
//!
//! An interactive interpreter for a minimal line-numbered BASIC.
//!
//! Each line you type is either a numbered statement (stored for later),
//! an immediate statement (executed on the spot), a bare line number
//! (deletes that stored line), or a command.
//!
//! ```text
//! TINY BASIC
//! 10 LET A = 0
//! 20 PRINT A
//! 30 LET A = A+1
//! 40 IF A < 3 THEN 20
//! 50 END
//! RUN
//! 0
//! 1
//! 2
//! ```
//!
//! Statements: `REM` `LET` `PRINT` `INPUT` `END` `GOTO` `IF`.
//! Commands: `RUN` `LIST` `CLEAR` `QUIT` `HELP`.
//!
//! Values are integers. Variables are case-sensitive alphanumeric names.
//! `LET`, `PRINT`, and `INPUT` may be entered without a line number for
//! immediate execution.

pub mod lang;
pub mod mach;
pub mod term;
