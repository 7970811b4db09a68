use super::error::Error;
use super::lex::lex;
use super::parse::{parse, Parsed};
use super::token::Token;
use super::LineNumber;

/// One raw input line: the optional line number, the verbatim source
/// text (LIST reproduces it exactly), and its tokens.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let source = s.trim().to_string();
        let (number, tokens) = lex(&source);
        Line {
            number,
            source,
            tokens,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn parse(&self) -> Result<Parsed, Error> {
        parse(&self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_display() {
        let line = Line::new("  10 LET A = 1 \n");
        assert_eq!(line.number(), Some(10));
        assert_eq!(line.to_string(), "10 LET A = 1");
    }

    #[test]
    fn test_bare_number_is_empty() {
        let line = Line::new("10");
        assert_eq!(line.number(), Some(10));
        assert!(line.is_empty());
        assert!(Line::new("").is_empty());
    }
}
