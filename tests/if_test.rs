mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_counting_loop() {
    let mut r = Runtime::new();
    r.enter("10 LET A = 0");
    r.enter("20 PRINT A");
    r.enter("30 LET A = A+1");
    r.enter("40 IF A < 3 THEN 20");
    r.enter("50 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "0\n1\n2\n");
}

#[test]
fn test_comparators() {
    let mut r = Runtime::new();
    r.enter("10 IF 2 > 1 THEN 30");
    r.enter("20 PRINT 0");
    r.enter("30 IF 1 = 1 THEN 50");
    r.enter("40 PRINT 0");
    r.enter("50 IF 1 > 2 THEN 70");
    r.enter("60 PRINT 9");
    r.enter("70 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_if_not_taken_falls_through() {
    let mut r = Runtime::new();
    r.enter("10 IF 1 = 2 THEN 999");
    r.enter("20 PRINT 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_goto() {
    let mut r = Runtime::new();
    r.enter("10 GOTO 30");
    r.enter("20 PRINT 0");
    r.enter("30 PRINT 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_goto_missing_line_aborts() {
    let mut r = Runtime::new();
    r.enter("10 GOTO 999");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR\n");
}

#[test]
fn test_if_taken_to_missing_line_aborts() {
    let mut r = Runtime::new();
    r.enter("10 IF 1 = 1 THEN 999");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR\n");
}

#[test]
fn test_end_stops_before_later_lines() {
    let mut r = Runtime::new();
    r.enter("10 PRINT 1");
    r.enter("20 END");
    r.enter("30 PRINT 2");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_no_else_extensions() {
    let mut r = Runtime::new();
    r.enter("10 IF 1 <= 2 THEN 20");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
    r.enter("10 IF 1 <> 2 THEN 20");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}
