use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. Values live until CLEAR or process end;
/// they are not reset between runs.
#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &Rc<str>) -> Result<i64> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(VariableNotDefined)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i64) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }
}
