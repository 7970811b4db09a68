#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

/// Reserved words. Keywords match case-sensitively, upper case exactly;
/// `print` is an identifier, `PRINT` is not.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Rem,
    Let,
    Print,
    Input,
    End,
    Goto,
    If,
    Then,
    Run,
    List,
    Clear,
    Quit,
    Help,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "REM" => Some(Rem),
            "LET" => Some(Let),
            "PRINT" => Some(Print),
            "INPUT" => Some(Input),
            "END" => Some(End),
            "GOTO" => Some(Goto),
            "IF" => Some(If),
            "THEN" => Some(Then),
            "RUN" => Some(Run),
            "LIST" => Some(List),
            "CLEAR" => Some(Clear),
            "QUIT" => Some(Quit),
            "HELP" => Some(Help),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Rem => write!(f, "REM"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            Run => write!(f, "RUN"),
            List => write!(f, "LIST"),
            Clear => write!(f, "CLEAR"),
            Quit => write!(f, "QUIT"),
            Help => write!(f, "HELP"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Less,
    Greater,
    Equal,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        use Operator::*;
        match c {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '<' => Some(Less),
            '>' => Some(Greater),
            '=' => Some(Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Equal => write!(f, "="),
        }
    }
}
