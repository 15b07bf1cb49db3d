// WHY: segments stay rendering-agnostic; marker styles turn them into text
// for terminals (brackets) or web views (HTML)

use crate::data_class::DataClass;

use super::Segment;

/// How highlighted segments are marked in rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MarkerStyle {
    /// `[NAME: Ahmad bin Abdullah]`, plain text untouched
    #[default]
    Bracket,
    /// `<span class="...">` per class, all text HTML-escaped
    Html,
}

/// CSS classes for the HTML highlight of each data class
pub fn highlight_class(class: DataClass) -> &'static str {
    match class {
        DataClass::Name => "bg-yellow-200 px-1 rounded font-medium",
        DataClass::Phone => "bg-blue-200 px-1 rounded font-medium",
        DataClass::Email => "bg-green-200 px-1 rounded font-medium",
    }
}

/// Render segments with a new allocation
pub fn render(segments: &[Segment<'_>], style: MarkerStyle) -> String {
    let mut buffer = String::new();
    render_into(segments, style, &mut buffer);
    buffer
}

/// Render segments into supplied buffer, clearing it first
pub fn render_into(segments: &[Segment<'_>], style: MarkerStyle, buffer: &mut String) {
    buffer.clear();

    for segment in segments {
        match (style, segment) {
            (MarkerStyle::Bracket, Segment::Plain(text)) => buffer.push_str(text),
            (MarkerStyle::Bracket, Segment::Highlight { class, text }) => {
                buffer.push('[');
                buffer.push_str(class.label());
                buffer.push_str(": ");
                buffer.push_str(text);
                buffer.push(']');
            }
            (MarkerStyle::Html, Segment::Plain(text)) => escape_html_into(text, buffer),
            (MarkerStyle::Html, Segment::Highlight { class, text }) => {
                buffer.push_str("<span class=\"");
                buffer.push_str(highlight_class(*class));
                buffer.push_str("\">");
                escape_html_into(text, buffer);
                buffer.push_str("</span>");
            }
        }
    }
}

fn escape_html_into(text: &str, buffer: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#39;"),
            _ => buffer.push(ch),
        }
    }
}
