//! Minimal indented HTML writer.
//!
//! Every text node and attribute value goes through [`escape_html`]; the
//! only way to emit unescaped markup is [`HtmlBuilder::doctype`].

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds an HTML document line by line with two-space indentation.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    out: String,
    depth: usize,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doctype(&mut self) -> &mut Self {
        self.out.push_str("<!DOCTYPE html>\n");
        self
    }

    /// Open `tag` on its own line; children are indented one level.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.indent();
        self.start_tag(tag, attrs);
        self.out.push('\n');
        self.depth += 1;
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.end_tag(tag);
        self.out.push('\n');
        self
    }

    /// `<tag attrs>text</tag>` on one line.
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.indent();
        self.start_tag(tag, attrs);
        self.out.push_str(&escape_html(text));
        self.end_tag(tag);
        self.out.push('\n');
        self
    }

    /// A void element such as `<meta>` or `<input>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.indent();
        self.start_tag(tag, attrs);
        self.out.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_html(value));
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn end_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}
