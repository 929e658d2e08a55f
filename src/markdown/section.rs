#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(self.lines.len() + 1);
        lines.push(&self.title);
        lines.extend(self.lines.iter().map(String::as_str));
        lines.join("\n")
    }
}
