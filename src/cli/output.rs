//! Output formatting utilities
//!
//! Renders decoded API records as text lines, or the raw response body
//! when JSON output is requested.

use crate::domain::{Post, ShortResponse, SuggestResponse};
use std::io::{self, Write};

/// Write a record's text rendering to `out`
pub fn print_output<W: Write, T: TextDisplay>(out: &mut W, data: &T) -> io::Result<()> {
    out.write_all(data.to_text().as_bytes())?;
    out.flush()
}

/// Write a response body verbatim, followed by a newline
pub fn print_raw<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Trait for types that render as plain text output
pub trait TextDisplay {
    /// Full text, each line newline-terminated
    fn to_text(&self) -> String;
}

/// One line per post: optional `"<stamp>, "` prefix, then the href
#[derive(Debug, Clone, Copy)]
pub struct PostLines<'a> {
    pub posts: &'a [Post],
    pub show_date: bool,
}

impl<'a> PostLines<'a> {
    pub fn new(posts: &'a [Post], show_date: bool) -> Self {
        Self { posts, show_date }
    }
}

impl TextDisplay for PostLines<'_> {
    fn to_text(&self) -> String {
        let mut output = String::new();

        for post in self.posts {
            if self.show_date {
                output.push_str(&post.stamp());
                output.push_str(", ");
            }
            output.push_str(&post.href);
            output.push('\n');
        }

        output
    }
}

impl TextDisplay for SuggestResponse {
    fn to_text(&self) -> String {
        let mut output = String::from("Popular:\n");
        push_tags(&mut output, self.popular());
        output.push_str("Recommended:\n");
        push_tags(&mut output, self.recommended());
        output
    }
}

/// Every tag followed by ", ", then a newline
fn push_tags(output: &mut String, tags: &[String]) {
    for tag in tags {
        output.push_str(tag);
        output.push_str(", ");
    }
    output.push('\n');
}

impl TextDisplay for ShortResponse {
    fn to_text(&self) -> String {
        format!("{}\n", self.result_code)
    }
}
