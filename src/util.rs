//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Uppercase the first letter of every word ("cell biology" -> "Cell Biology").
pub fn capitalize_words(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut at_word_start = true;
  for ch in s.chars() {
    if at_word_start && ch.is_alphanumeric() {
      out.extend(ch.to_uppercase());
    } else {
      out.push(ch);
    }
    at_word_start = !(ch.is_alphanumeric() || ch == '_');
  }
  out
}

/// Escape text for inclusion in generated HTML.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Greedy word wrap to at most `width` characters per line.
/// Words longer than `width` stay whole on their own line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = String::new();
  for word in text.split_whitespace() {
    let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
    if needed > width && !current.is_empty() {
      lines.push(std::mem::take(&mut current));
    }
    if !current.is_empty() {
      current.push(' ');
    }
    current.push_str(word);
  }
  if !current.is_empty() {
    lines.push(current);
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_fills_all_keys() {
    let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and y and x");
  }

  #[test]
  fn capitalize_each_word() {
    assert_eq!(capitalize_words("cell biology 101"), "Cell Biology 101");
    assert_eq!(capitalize_words("world-war two"), "World-War Two");
  }

  #[test]
  fn escapes_markup() {
    assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
  }

  #[test]
  fn wraps_on_word_boundaries() {
    let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10);
    assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
    assert_eq!(wrap_words("", 10), Vec::<String>::new());
    assert_eq!(wrap_words("supercalifragilistic x", 5), vec!["supercalifragilistic", "x"]);
  }
}
