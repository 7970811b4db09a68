use super::Column;
use std::rc::Rc;

/// A parsed statement. Built once when a line is entered; a stored line
/// is replaced wholesale when its number is re-entered.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem(Column),
    Let(Column, Rc<str>, Expression),
    Print(Column, Expression),
    Input(Column, Rc<str>),
    End(Column),
    Goto(Column, u16),
    If(Column, Expression, Relop, Expression, u16),
}

impl Statement {
    /// LET, PRINT, and INPUT may be entered without a line number and
    /// executed on the spot. The rest must be stored.
    pub fn is_immediate(&self) -> bool {
        use Statement::*;
        match self {
            Let(..) | Print(..) | Input(..) => true,
            Rem(..) | End(..) | Goto(..) | If(..) => false,
        }
    }
}

/// Session commands. Never stored, never take arguments.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Run,
    List,
    Clear,
    Quit,
    Help,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relop {
    Less,
    Greater,
    Equal,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(Column, i64),
    Var(Column, Rc<str>),
    Group(Column, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
}
