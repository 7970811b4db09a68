use crate::lang::ast::Statement;
use crate::lang::Line;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// The stored program: line number to statement, with the verbatim
/// source kept for LIST. Iteration is always numeric ascending,
/// independent of entry order.
#[derive(Debug, Default)]
pub struct Program {
    source: BTreeMap<u16, Entry>,
}

#[derive(Debug)]
struct Entry {
    line: Line,
    statement: Statement,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Replaces any prior statement at the same line number.
    pub fn insert(&mut self, line: Line, statement: Statement) {
        if let Some(number) = line.number() {
            self.source.insert(number, Entry { line, statement });
        } else {
            debug_assert!(false, "insert of a direct line");
        }
    }

    /// No error if the line was never stored.
    pub fn remove(&mut self, number: u16) {
        self.source.remove(&number);
    }

    pub fn contains(&self, number: u16) -> bool {
        self.source.contains_key(&number)
    }

    pub fn statement(&self, number: u16) -> Option<&Statement> {
        self.source.get(&number).map(|entry| &entry.statement)
    }

    pub fn first_line(&self) -> Option<u16> {
        self.source.keys().next().copied()
    }

    /// The smallest stored line number strictly greater than `number`.
    pub fn next_line(&self, number: u16) -> Option<u16> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.source.values().map(|entry| &entry.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Parsed;

    fn entry(program: &mut Program, s: &str) {
        let line = Line::new(s);
        match line.parse() {
            Ok(Parsed::Statement(statement)) => program.insert(line, statement),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_ascending_iteration() {
        let mut program = Program::new();
        entry(&mut program, "30 END");
        entry(&mut program, "10 PRINT 1");
        entry(&mut program, "20 PRINT 2");
        let numbers: Vec<u16> = program.lines().map(|l| l.number().unwrap()).collect();
        assert_eq!(numbers, vec![10, 20, 30]);
        assert_eq!(program.first_line(), Some(10));
        assert_eq!(program.next_line(10), Some(20));
        assert_eq!(program.next_line(20), Some(30));
        assert_eq!(program.next_line(30), None);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut program = Program::new();
        entry(&mut program, "10 PRINT 1");
        entry(&mut program, "10 PRINT 2");
        let sources: Vec<String> = program.lines().map(|l| l.to_string()).collect();
        assert_eq!(sources, vec!["10 PRINT 2"]);
        program.remove(10);
        assert!(program.is_empty());
        program.remove(10);
    }
}
