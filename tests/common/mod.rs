use basic::mach::{Event, Runtime};

/// Pump the runtime and collect its output into a transcript.
/// Stops when the runtime awaits the next top-level line or quits;
/// an INPUT prompt is appended and then control returns so the test
/// can feed the reply through `enter`.
pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped | Event::Quit => break,
            Event::Input(prompt) => {
                s.push_str(&prompt);
                break;
            }
            Event::Print(text) => s.push_str(&text),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
        }
    }
    s
}
