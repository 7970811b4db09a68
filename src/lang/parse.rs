use super::{ast::*, token::*, Column, Error};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What a line's body turned out to be.
#[derive(Debug, PartialEq)]
pub enum Parsed {
    Statement(Statement),
    Command(Command),
}

/// Parse the token stream of one line body. The whole stream must be
/// consumed; trailing tokens after a statement, or anything at all
/// after a command keyword, fail the parse.
pub fn parse(tokens: &[Token]) -> Result<Parsed> {
    let mut parser = Parser {
        token_stream: tokens.iter(),
        peeked: None,
        col: 0..0,
    };
    match parser.line() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(e.in_column(&parser.col)),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn line(&mut self) -> Result<Parsed> {
        let parsed = match self.next() {
            Some(Token::Word(word)) => {
                let word = *word;
                use Word::*;
                match word {
                    Run => Parsed::Command(Command::Run),
                    List => Parsed::Command(Command::List),
                    Clear => Parsed::Command(Command::Clear),
                    Quit => Parsed::Command(Command::Quit),
                    Help => Parsed::Command(Command::Help),
                    _ => Parsed::Statement(Statement::for_word(self, word)?),
                }
            }
            _ => return Err(error!(SyntaxError)),
        };
        match self.next() {
            None => Ok(parsed),
            Some(_) => Err(error!(SyntaxError)),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Plus)) => Operator::Plus,
                Some(Token::Operator(Operator::Minus)) => Operator::Minus,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.atom()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(Operator::Multiply)) => Operator::Multiply,
                Some(Token::Operator(Operator::Divide)) => Operator::Divide,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.atom()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn atom(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::LParen) => {
                let start = self.column().start;
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                let column = start..self.column().end;
                Ok(Expression::Group(column, Box::new(expr)))
            }
            Some(Token::Ident(name)) => {
                Ok(Expression::Var(self.column(), name.as_str().into()))
            }
            Some(Token::Literal(s)) => match s.parse::<i64>() {
                Ok(n) => Ok(Expression::Literal(self.column(), n)),
                Err(_) => Err(error!(SyntaxError)),
            },
            _ => Err(error!(SyntaxError)),
        }
    }

    fn ident(&mut self) -> Result<(Column, Rc<str>)> {
        match self.next() {
            Some(Token::Ident(name)) => Ok((self.column(), name.as_str().into())),
            _ => Err(error!(SyntaxError)),
        }
    }

    fn line_number(&mut self) -> Result<u16> {
        if let Some(Token::Literal(s)) = self.next() {
            if let Ok(number) = s.parse::<u16>() {
                if number > 0 {
                    return Ok(number);
                }
            }
        }
        Err(error!(SyntaxError))
    }

    fn relop(&mut self) -> Result<Relop> {
        match self.next() {
            Some(Token::Operator(Operator::Less)) => Ok(Relop::Less),
            Some(Token::Operator(Operator::Greater)) => Ok(Relop::Greater),
            Some(Token::Operator(Operator::Equal)) => Ok(Relop::Equal),
            _ => Err(error!(SyntaxError)),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let lhs = Box::new(lhs);
        let rhs = Box::new(rhs);
        match op {
            Plus => Expression::Add(col, lhs, rhs),
            Minus => Expression::Subtract(col, lhs, rhs),
            Multiply => Expression::Multiply(col, lhs, rhs),
            Divide => Expression::Divide(col, lhs, rhs),
            Less | Greater | Equal => {
                debug_assert!(false, "relational operator in expression");
                Expression::Add(col, lhs, rhs)
            }
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Rem => Self::rem(parse, column),
            Let => Self::r#let(parse, column),
            Print => Self::print(parse, column),
            Input => Self::input(parse, column),
            End => Ok(Statement::End(column)),
            Goto => Self::goto(parse, column),
            If => Self::r#if(parse, column),
            Then | Run | List | Clear | Quit | Help => Err(error!(SyntaxError)),
        }
    }

    fn rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        // The lexer folds everything after REM into one remark token.
        if let Some(token) = parse.next() {
            debug_assert!(matches!(token, Token::Unknown(_)));
        }
        Ok(Statement::Rem(column))
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (_, name) = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, name, expr))
    }

    fn print(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Print(column, parse.expression()?))
    }

    fn input(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (_, name) = parse.ident()?;
        Ok(Statement::Input(column, name))
    }

    fn goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let lhs = parse.expression()?;
        let relop = parse.relop()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(column, lhs, relop, rhs, target))
    }
}
