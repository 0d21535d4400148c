use raw_import_error::Error;
use raw_import_resolver::ResolvedFile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{QuoteStyle, TransformOptions};

/// A string literal ready to be spliced into the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLiteral {
  /// The string the literal evaluates to.
  pub value: String,
  /// `value` escaped for the quote below.
  pub body: String,
  pub quote: char,
}

impl RenderedLiteral {
  /// The literal as it appears in source, quotes included.
  pub fn raw(&self) -> String {
    format!("{q}{}{q}", self.body, q = self.quote)
  }
}

pub fn render(
  content: String,
  file: &ResolvedFile,
  options: &TransformOptions,
) -> crate::Result<RenderedLiteral> {
  // An empty `.json` is inlined as an empty string, like any empty file.
  let value = if file.kind.is_json() && !content.is_empty() {
    pretty_json(&content, options.json_indent).map_err(|err| Error::invalid_json(&file.path, err))?
  } else {
    content
  };
  Ok(render_str(value, options.quote))
}

pub fn render_str(value: String, quote: QuoteStyle) -> RenderedLiteral {
  let quote = quote.as_char();
  RenderedLiteral {
    body: escape_literal_body(&value, quote),
    value,
    quote,
  }
}

/// Escape `text` to sit between two `quote`s.
///
/// Line terminators are written as escapes since they can't appear raw in a
/// string literal.
pub fn escape_literal_body(text: &str, quote: char) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '\n' => escaped.push_str("\\n"),
      '\r' => escaped.push_str("\\r"),
      '\u{2028}' => escaped.push_str("\\u2028"),
      '\u{2029}' => escaped.push_str("\\u2029"),
      c if c == quote => {
        escaped.push('\\');
        escaped.push(c);
      }
      c => escaped.push(c),
    }
  }
  escaped
}

/// Re-serialize `content` with `indent` spaces per level, plus a trailing newline.
///
/// Object keys keep their source order.
fn pretty_json(content: &str, indent: usize) -> serde_json::Result<String> {
  let value: serde_json::Value = serde_json::from_str(content)?;
  let indent = " ".repeat(indent);
  let mut buf = Vec::with_capacity(content.len());
  let mut ser =
    serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
  value.serialize(&mut ser)?;
  buf.push(b'\n');
  Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use raw_import_common::AssetKind;

  use super::*;

  fn file(name: &str) -> ResolvedFile {
    let path = PathBuf::from("/project").join(name);
    ResolvedFile {
      kind: AssetKind::from_path(&path),
      path,
    }
  }

  fn options(quote: QuoteStyle, json_indent: usize) -> TransformOptions {
    TransformOptions {
      quote,
      json_indent,
      ..TransformOptions::new("/project")
    }
  }

  #[test]
  fn plain_text_newlines_are_escaped() {
    let literal = render(
      "hello\nworld".to_string(),
      &file("notes.txt"),
      &options(QuoteStyle::Single, 4),
    )
    .unwrap();
    assert_eq!(literal.value, "hello\nworld");
    assert_eq!(literal.body, r"hello\nworld");
    assert_eq!(literal.raw(), r"'hello\nworld'");
  }

  #[test]
  fn only_the_chosen_quote_is_escaped() {
    let text = r#"it's "quoted" \ here"#;
    assert_eq!(
      escape_literal_body(text, '\''),
      r#"it\'s "quoted" \\ here"#
    );
    assert_eq!(
      escape_literal_body(text, '"'),
      r#"it's \"quoted\" \\ here"#
    );
  }

  #[test]
  fn line_terminators() {
    assert_eq!(
      escape_literal_body("a\r\nb\u{2028}c\u{2029}", '\''),
      r"a\r\nb\u2028c\u2029"
    );
    assert_eq!(escape_literal_body("tab\there", '\''), "tab\there");
  }

  #[test]
  fn empty_content_renders_empty_literal() {
    let literal = render(
      String::new(),
      &file("empty.txt"),
      &options(QuoteStyle::Double, 4),
    )
    .unwrap();
    assert_eq!(literal.raw(), "\"\"");

    let literal = render(
      String::new(),
      &file("empty.json"),
      &options(QuoteStyle::Single, 4),
    )
    .unwrap();
    assert_eq!(literal.raw(), "''");
  }

  #[test]
  fn json_is_pretty_printed_with_the_configured_indent() {
    let literal = render(
      r#"{"name":"x"}"#.to_string(),
      &file("package.json"),
      &options(QuoteStyle::Single, 4),
    )
    .unwrap();
    assert_eq!(literal.value, "{\n    \"name\": \"x\"\n}\n");
    assert_eq!(literal.raw(), r#"'{\n    "name": "x"\n}\n'"#);

    let literal = render(
      r#"{"b":[1,2],"a":{}}"#.to_string(),
      &file("data.json"),
      &options(QuoteStyle::Single, 3),
    )
    .unwrap();
    assert_eq!(
      literal.value,
      "{\n   \"b\": [\n      1,\n      2\n   ],\n   \"a\": {}\n}\n"
    );
  }

  #[test]
  fn json_strings_survive_both_escapes() {
    let literal = render(
      r#"{"text": "line\nbreak", "q": "it's"}"#.to_string(),
      &file("data.json"),
      &options(QuoteStyle::Single, 2),
    )
    .unwrap();
    assert_eq!(
      literal.body,
      r#"{\n  "text": "line\\nbreak",\n  "q": "it\'s"\n}\n"#
    );
    let reparsed: serde_json::Value = serde_json::from_str(&literal.value).unwrap();
    assert_eq!(reparsed["text"], "line\nbreak");
  }

  #[test]
  fn invalid_json() {
    let err = render(
      r#"{"name": }"#.to_string(),
      &file("broken.json"),
      &options(QuoteStyle::Single, 4),
    )
    .unwrap_err();
    assert_eq!(err.kind.code(), "INVALID_JSON");
    assert_eq!(err.path(), Some(&PathBuf::from("/project/broken.json")));
  }

  #[test]
  fn number_forms() {
    let literal = render(
      r#"{"a":1.0,"b":1e2,"c":-0,"d":18446744073709551616,"e":18446744073709551615,"f":-9223372036854775808,"g":9007199254740993}"#
        .to_string(),
      &file("numbers.json"),
      &options(QuoteStyle::Single, 2),
    )
    .unwrap();
    assert_eq!(
      literal.value,
      "{\n  \"a\": 1.0,\n  \"b\": 100.0,\n  \"c\": -0.0,\n  \"d\": 1.8446744073709552e19,\n  \"e\": 18446744073709551615,\n  \"f\": -9223372036854775808,\n  \"g\": 9007199254740993\n}\n"
    );
  }

  #[test]
  fn zero_indent_still_breaks_lines() {
    let literal = render(
      "[1, 2]".to_string(),
      &file("list.json"),
      &options(QuoteStyle::Single, 0),
    )
    .unwrap();
    assert_eq!(literal.value, "[\n1,\n2\n]\n");
  }
}
