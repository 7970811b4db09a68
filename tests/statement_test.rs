mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_immediate_let_and_print() {
    let mut r = Runtime::new();
    r.enter("LET A = 6");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT A*7");
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_immediate_is_not_stored() {
    let mut r = Runtime::new();
    r.enter("PRINT 1+1");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_immediate_restriction() {
    let mut r = Runtime::new();
    r.enter("END");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("GOTO 10");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("IF 1 = 1 THEN 10");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("REM nothing");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}

#[test]
fn test_stored_command_is_rejected() {
    let mut r = Runtime::new();
    r.enter("10 RUN");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("10 LIST");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_empty_line_is_an_error() {
    let mut r = Runtime::new();
    r.enter("");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("   ");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}

#[test]
fn test_line_deletion() {
    let mut r = Runtime::new();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("10");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "20 PRINT 2\n");
    // Deleting an absent line is not an error.
    r.enter("30");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_bad_line_is_not_stored() {
    let mut r = Runtime::new();
    r.enter("10 LET = 5");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_rem_runs_as_no_op() {
    let mut r = Runtime::new();
    r.enter("10 REM nothing to see here");
    r.enter("20 PRINT 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_variables_persist_across_runs() {
    let mut r = Runtime::new();
    r.enter("10 LET A = A+1");
    r.enter("20 PRINT A");
    r.enter("LET A = 0");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_clear_resets_the_session() {
    let mut r = Runtime::new();
    r.enter("10 PRINT A");
    r.enter("LET A = 1");
    r.enter("CLEAR");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "VARIABLE NOT DEFINED\n");
}

#[test]
fn test_variable_names_are_case_sensitive() {
    let mut r = Runtime::new();
    r.enter("LET a = 1");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "VARIABLE NOT DEFINED\n");
    r.enter("PRINT a");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_keywords_must_be_upper_case() {
    let mut r = Runtime::new();
    r.enter("print 1");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}
