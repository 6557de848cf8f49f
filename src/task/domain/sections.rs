//! Splits a requirements document into level-2 heading sections.

/// Title used when a non-empty document has no level-2 headings.
pub const FALLBACK_SECTION_TITLE: &str = "Implement Requirements";

/// One `## heading` block of a requirements document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    body: String,
}

impl Section {
    /// Creates a section from already-trimmed parts.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the heading text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the text between this heading and the next one.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Parses `document` into sections in document order.
///
/// Text before the first heading is discarded. A document without any
/// level-2 heading becomes a single section titled
/// [`FALLBACK_SECTION_TITLE`]; blank input yields no sections.
#[must_use]
pub fn parse_sections(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in document.lines() {
        if let Some(title) = heading_text(line) {
            if let Some((open_title, body)) = current.take() {
                sections.push(close_section(open_title, &body));
            }
            current = Some((title.to_owned(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((open_title, body)) = current {
        sections.push(close_section(open_title, &body));
    }

    let trimmed = document.trim();
    if sections.is_empty() && !trimmed.is_empty() {
        sections.push(Section::new(FALLBACK_SECTION_TITLE, trimmed));
    }

    sections
}

fn close_section(title: String, body: &[&str]) -> Section {
    Section {
        title,
        body: body.join("\n").trim().to_owned(),
    }
}

/// Returns the trimmed heading text when `line` is a `## <text>` heading.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}
