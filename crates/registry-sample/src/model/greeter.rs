/// A standalone kind: a class with no separate contract. Its logical name is
/// just the type name.
#[derive(Debug, Default)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello, {}!", name)
    }
}
