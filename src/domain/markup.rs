//! Inline markdown flattening for terminal output

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};

/// Render one content paragraph as plain text.
///
/// Emphasis and link markup are dropped, inline code keeps its backticks
/// and list items get a bullet.
pub fn to_plain_text(paragraph: &str) -> String {
    let mut output = String::new();

    for event in MdParser::new(paragraph) {
        match event {
            Event::Text(text) => output.push_str(&text),
            Event::Code(code) => {
                output.push('`');
                output.push_str(&code);
                output.push('`');
            }
            Event::Start(Tag::Item) => output.push_str("• "),
            Event::SoftBreak | Event::HardBreak => output.push(' '),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                if !output.ends_with(' ') {
                    output.push(' ');
                }
            }
            _ => {}
        }
    }

    output.trim().to_string()
}
