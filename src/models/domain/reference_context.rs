pub const TRUNCATION_MARKER: &str = "... (truncated)";
pub const OMISSION_MARKER: &str = "... (additional papers truncated due to length)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub document_name: String,
    pub text: String,
}

/// Grounding text gathered for a single generation request.
///
/// `total_chars` counts the characters of every appended entry text
/// (truncation markers included, headers excluded).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceContext {
    entries: Vec<ReferenceEntry>,
    total_chars: usize,
    omitted: bool,
}

impl ReferenceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document_name: &str, text: String) {
        self.total_chars += text.chars().count();
        self.entries.push(ReferenceEntry {
            document_name: document_name.to_string(),
            text,
        });
    }

    pub fn mark_omitted(&mut self) {
        self.omitted = true;
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    pub fn is_omitted(&self) -> bool {
        self.omitted
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn document_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.document_name.clone()).collect()
    }

    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for entry in &self.entries {
            rendered.push_str("=== ");
            rendered.push_str(&entry.document_name);
            rendered.push_str(" ===\n");
            rendered.push_str(&entry.text);
            rendered.push_str("\n\n");
        }
        if self.omitted {
            rendered.push_str(OMISSION_MARKER);
        }
        rendered
    }
}
