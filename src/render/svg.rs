//! SVG document utilities for scene serialization.

use std::fmt::Write;

use super::Label;

/// Escape special characters for XML text and attribute values.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// An SVG builder producing an indented document.
pub struct SvgBuilder {
    output: String,
    indent: usize,
}

impl SvgBuilder {
    /// Start a document of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(
            output,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        Self { output, indent: 1 }
    }

    fn write_attrs(&mut self, attrs: &[(&str, String)]) {
        for (key, value) in attrs {
            let _ = write!(self.output, " {}=\"{}\"", key, escape_xml(value));
        }
    }

    /// Open an element.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, String)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        self.output.push_str(">\n");
        self.indent += 1;
        self
    }

    /// Close the most recently opened element.
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "</{tag}>");
        self
    }

    /// Add a self-closing element.
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, String)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        self.output.push_str("/>\n");
        self
    }

    /// Add an element with text content.
    pub fn text(&mut self, tag: &str, attrs: &[(&str, String)], content: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{tag}");
        self.write_attrs(attrs);
        let _ = writeln!(self.output, ">{}</{tag}>", escape_xml(content));
        self
    }

    /// Add a scene label as a `text` element.
    pub fn label(&mut self, label: &Label) -> &mut Self {
        let mut attrs = vec![
            ("x", label.x.to_string()),
            ("y", label.y.to_string()),
            ("text-anchor", "middle".to_string()),
        ];
        if label.centered {
            attrs.push(("dominant-baseline", "middle".to_string()));
        }
        if let Some(class) = label.class {
            attrs.push(("class", class.to_string()));
        }
        attrs.push(("fill", label.fill.to_string()));
        attrs.push(("font-weight", "bold".to_string()));
        if let Some(size) = label.font_size {
            attrs.push(("font-size", size.to_string()));
        }
        self.text("text", &attrs, &label.text)
    }

    /// Close the document and return it.
    pub fn finish(mut self) -> String {
        self.output.push_str("</svg>\n");
        self.output
    }
}
