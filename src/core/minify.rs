use crate::config::AssetKind;
use crate::utils::error::Result;
use regex::Regex;

/// Regex-based minifier. The first block comment of the input survives
/// verbatim as the header; every other block comment is dropped.
///
/// Stylesheets are collapsed onto a single line. Scripts keep their line
/// structure: a `//` comment that is left in place (see
/// [`strip_line_comments`]) would otherwise comment out everything after it.
#[derive(Debug, Clone)]
pub struct Minifier {
    block_comment: Regex,
    whitespace: Regex,
    punctuation: Regex,
    trailing_semicolon: Regex,
    blank_lines: Regex,
    trailing_spaces: Regex,
}

impl Minifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block_comment: Regex::new(r"(?s)/\*.*?\*/")?,
            whitespace: Regex::new(r"\s+")?,
            punctuation: Regex::new(r"\s*([{}:;,>+~])\s*")?,
            trailing_semicolon: Regex::new(r";\s*\}")?,
            blank_lines: Regex::new(r"\n\s*\n")?,
            trailing_spaces: Regex::new(r"(?m)[ \t]+$")?,
        })
    }

    pub fn minify(&self, kind: AssetKind, content: &str) -> String {
        match kind {
            AssetKind::Css => self.minify_css(content),
            AssetKind::Js => self.minify_js(content),
        }
    }

    pub fn minify_css(&self, content: &str) -> String {
        let header = self.header(content);

        let body = self.block_comment.replace_all(content, "");
        let body = self.whitespace.replace_all(&body, " ");
        let body = self.punctuation.replace_all(&body, "$1");
        let body = self.trailing_semicolon.replace_all(&body, "}");

        with_header(header, body.trim())
    }

    pub fn minify_js(&self, content: &str) -> String {
        let header = self.header(content);

        let body = self.block_comment.replace_all(content, "");
        let body = strip_line_comments(&body);
        let body = self.blank_lines.replace_all(&body, "\n");
        let body = self.trailing_spaces.replace_all(&body, "");

        with_header(header, body.trim())
    }

    fn header<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.block_comment.find(content).map(|m| m.as_str())
    }
}

fn with_header(header: Option<&str>, body: &str) -> String {
    match header {
        Some(header) => format!("{}\n{}", header, body),
        None => body.to_string(),
    }
}

/// Cuts each line at its first `//`, unless a `:` occurs anywhere before it
/// on that line (keeps `http://` intact, and also keeps real comments on any
/// line that happens to contain a colon).
pub fn strip_line_comments(content: &str) -> String {
    content
        .split('\n')
        .map(|line| match line.find("//") {
            Some(idx) if !line[..idx].contains(':') => &line[..idx],
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
