/*!
## Machine Module

The session state and execution engine: the program store, the
variable store, the expression evaluator, and the event-driven
runtime that ties them together.

*/

mod eval;
mod program;
mod runtime;
mod var;

pub use eval::evaluate;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
