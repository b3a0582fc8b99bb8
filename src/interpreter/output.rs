use std::{cell::RefCell, rc::Rc};

/// The print side channel.
///
/// Both the `print` statement and the `print` built-in send their value here.
/// The engine makes no formatting decision; implementations decide how a
/// number is rendered.
pub trait Output {
    /// Emits one printed value.
    fn print(&mut self, value: f64);
}

/// Writes each printed value on its own line of standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn print(&mut self, value: f64) {
        println!("{}", render_number(value));
    }
}

/// Records printed values in memory.
///
/// Clones share the same buffer, so one clone can be handed to an
/// environment while another is kept to inspect the output.
///
/// # Example
/// ```
/// use bella::{Capture, Environment};
///
/// let capture = Capture::default();
/// let mut env = Environment::with_output(capture.clone());
///
/// bella::run("print 1 + 1; print hypot(3, 4);", &mut env).unwrap();
/// assert_eq!(capture.values(), vec![2.0, 5.0]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Capture {
    values: Rc<RefCell<Vec<f64>>>,
}

impl Capture {
    /// Returns a copy of everything printed so far.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.values.borrow().clone()
    }

    /// Renders everything printed so far, one value per line.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.values
            .borrow()
            .iter()
            .map(|value| render_number(*value) + "\n")
            .collect()
    }
}

impl Output for Capture {
    fn print(&mut self, value: f64) {
        self.values.borrow_mut().push(value);
    }
}

/// Renders a number the way Bella programs print it.
///
/// Integral values have no fractional part, infinities are spelled out and
/// not-a-number prints as `NaN`.
///
/// # Example
/// ```
/// use bella::interpreter::output::render_number;
///
/// assert_eq!(render_number(3.0), "3");
/// assert_eq!(render_number(0.5), "0.5");
/// assert_eq!(render_number(-1.0 / 0.0), "-Infinity");
/// assert_eq!(render_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{value}")
    }
}
