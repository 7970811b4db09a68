use super::{token::*, LineNumber};

pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_basic_alphanumeric(c: char) -> bool {
    is_basic_digit(c) || is_basic_alphabetic(c)
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            let token = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = token {
                self.remark = true;
            }
            return token;
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let (line_number, s) = BasicLexer::take_line_number(s);
        let mut tokens: Vec<Token> = BasicLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    // A line number is a run of leading digits followed by whitespace
    // or end of line, in 1..=65535. Anything else is left for the
    // tokenizer; `10PRINT` holds no line number.
    fn take_line_number(s: &str) -> (LineNumber, &str) {
        let trimmed = s.trim_start_matches(is_basic_whitespace);
        let digits = trimmed
            .char_indices()
            .find(|(_, c)| !is_basic_digit(*c))
            .map(|(i, _)| i)
            .unwrap_or_else(|| trimmed.len());
        if digits == 0 {
            return (None, s);
        }
        match trimmed[digits..].chars().next() {
            None | Some(' ') | Some('\t') => {}
            Some(_) => return (None, s),
        }
        match trimmed[..digits].parse::<u16>() {
            Ok(number) if number > 0 => {
                let mut rest = &trimmed[digits..];
                if let Some(' ') = rest.chars().next() {
                    rest = &rest[1..];
                }
                (Some(number), rest)
            }
            _ => (None, s),
        }
    }

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars.next();
            len += 1;
            if let Some(pk) = self.chars.peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars.next() {
                s.push(ch);
            }
            if let Some(pk) = self.chars.peek() {
                if is_basic_digit(*pk) {
                    continue;
                }
            }
            return Some(Token::Literal(s));
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars.next() {
                s.push(ch);
            }
            if let Some(pk) = self.chars.peek() {
                if is_basic_alphanumeric(*pk) {
                    continue;
                }
            }
            break;
        }
        match Word::from_string(&s) {
            Some(word) => Some(Token::Word(word)),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars.next()?;
        if let Some(op) = Operator::from_char(ch) {
            return Some(Token::Operator(op));
        }
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => {
                let mut s = String::new();
                s.push(ch);
                loop {
                    if let Some(pk) = self.chars.peek() {
                        if !is_basic_alphanumeric(*pk)
                            && !is_basic_whitespace(*pk)
                            && Operator::from_char(*pk).is_none()
                            && *pk != '('
                            && *pk != ')'
                        {
                            s.push(*pk);
                            self.chars.next();
                            continue;
                        }
                    }
                    return Some(Token::Unknown(s));
                }
            }
        }
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                let s = s.trim_end().to_string();
                if !s.is_empty() {
                    tokens.push(Token::Unknown(s));
                }
            }
        }
    }
}
