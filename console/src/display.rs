use rag_frontend::TextOutput;

/// Prints every write to stdout, prefixed with the area's element id.
pub struct ConsoleArea {
    label: &'static str,
}

impl ConsoleArea {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    fn render(&self, text: &str) -> String {
        format!("{}: {}", self.label, text)
    }
}

impl TextOutput for ConsoleArea {
    fn set_text(&self, text: &str) {
        println!("{}", self.render(text));
    }
}
