//! Regex predicates over learner source text.
//!
//! Everything here is textual: no markup, CSS or JS parser is involved, so
//! nested or duplicated tags and minified code can fool the checks. Names are
//! spliced into the patterns as given (a selector like `.card` keeps its
//! regex meaning for `.`).
//!
//! A pattern that fails to compile never panics: the check reports `false`
//! and a warning is logged under the `challenge` target.

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::util::normalize_whitespace;

pub const DEFAULT_LOOP_KINDS: &str = "for|while";

const CONSOLE_LOG: &str = r"(?i)console\.log\s*\(";
const CONDITIONAL: &str = r"(?i)\bif\s*\(";
const ARROW_FUNCTION: &str = r"=>\s*\{?";

fn compile(pattern: &str) -> Option<Regex> {
  match Regex::new(pattern) {
    Ok(re) => Some(re),
    Err(e) => {
      warn!(target: "challenge", %pattern, error = %e, "Invalid requirement pattern; check evaluates to false");
      None
    }
  }
}

// -------- Generic helpers --------

pub fn matches(code: &str, pattern: &str) -> bool {
  compile(pattern).map(|re| re.is_match(code)).unwrap_or(false)
}

/// Number of non-overlapping matches.
pub fn count_matches(code: &str, pattern: &str) -> usize {
  compile(pattern).map(|re| re.find_iter(code).count()).unwrap_or(0)
}

/// Every full match, in order of appearance.
pub fn all_matches(code: &str, pattern: &str) -> Vec<String> {
  compile(pattern)
    .map(|re| re.find_iter(code).map(|m| m.as_str().to_string()).collect())
    .unwrap_or_default()
}

/// First capture group of the first match. `Some("")` when the group matched empty.
pub fn first_capture(code: &str, pattern: &str) -> Option<String> {
  let re = compile(pattern)?;
  let caps = re.captures(code)?;
  Some(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default())
}

// -------- HTML --------

/// Open tag followed somewhere later by the matching close tag.
pub fn has_tag(code: &str, tag: &str) -> bool {
  matches(code, &format!(r"(?is)<{tag}[^>]*>.*</{tag}>"))
}

pub fn has_open_tag(code: &str, tag: &str) -> bool {
  matches(code, &format!(r"(?i)<{tag}[^>]*>"))
}

pub fn count_tag(code: &str, tag: &str) -> usize {
  count_matches(code, &format!(r"(?i)<{tag}[^>]*>"))
}

pub fn has_attribute(code: &str, tag: &str, attr: &str) -> bool {
  matches(code, &format!(r"(?i)<{tag}[^>]*\s{attr}="))
}

/// Trimmed body of the first `<tag>...</tag>`, empty when there is none.
pub fn get_tag_content(code: &str, tag: &str) -> String {
  first_capture(code, &format!(r"(?is)<{tag}[^>]*>(.*?)</{tag}>"))
    .map(|s| s.trim().to_string())
    .unwrap_or_default()
}

pub fn has_class(code: &str, class_name: &str) -> bool {
  matches(code, &format!(r#"(?i)class=["'][^"']*{class_name}[^"']*["']"#))
}

pub fn has_id(code: &str, id_name: &str) -> bool {
  matches(code, &format!(r#"(?i)id=["']{id_name}["']"#))
}

// -------- CSS --------

pub fn has_selector(code: &str, selector: &str) -> bool {
  matches(code, &format!(r"(?i){selector}\s*\{{"))
}

pub fn has_property(code: &str, property: &str) -> bool {
  matches(code, &format!(r"(?i){property}\s*:"))
}

/// Body of the first `selector { ... }` block.
fn selector_block(code: &str, selector: &str) -> Option<String> {
  first_capture(code, &format!(r"(?is){selector}\s*\{{([^}}]+)\}}"))
}

/// True when `property` appears inside the first block for `selector`.
pub fn has_selector_with_property(code: &str, selector: &str, property: &str) -> bool {
  match selector_block(code, selector) {
    Some(block) => has_property(&block, property),
    None => false,
  }
}

/// Literal value bound to `property` in the first block for `selector`.
/// The declaration must be terminated by `;`.
pub fn get_property_value(code: &str, selector: &str, property: &str) -> Option<String> {
  let block = selector_block(code, selector)?;
  first_capture(&block, &format!(r"(?i){property}\s*:\s*([^;]+);")).map(|v| v.trim().to_string())
}

// -------- JavaScript --------

pub fn has_function(code: &str, function_name: &str) -> bool {
  matches(code, &format!(r"(?i)function\s+{function_name}\s*\("))
}

pub fn has_variable(code: &str, var_name: &str) -> bool {
  matches(code, &format!(r"(?i)(let|const|var)\s+{var_name}\s*="))
}

pub fn has_console_log(code: &str) -> bool {
  matches(code, CONSOLE_LOG)
}

/// `kinds` is an alternation of loop keywords, e.g. `for|while`.
pub fn has_loop(code: &str, kinds: &str) -> bool {
  matches(code, &format!(r"(?i)\b({kinds})\s*\("))
}

pub fn has_conditional(code: &str) -> bool {
  matches(code, CONDITIONAL)
}

pub fn has_arrow_function(code: &str) -> bool {
  matches(code, ARROW_FUNCTION)
}

// -------- Declarative checks (challenge bank) --------

/// Serializable form of the predicates above, used by challenges defined in
/// the TOML bank: `check = { kind = "has_attribute", tag = "img", attr = "alt" }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
  HasTag { tag: String },
  HasOpenTag { tag: String },
  MinTagCount { tag: String, min: usize },
  HasAttribute { tag: String, attr: String },
  HasClass { name: String },
  HasId { name: String },
  /// Body of the first `<tag>` differs from the starter's and is not empty.
  TagContentChanged { tag: String },
  HasSelector { selector: String },
  HasProperty { property: String },
  SelectorWithProperty { selector: String, property: String },
  PropertyValue { selector: String, property: String, value: String },
  HasFunction { name: String },
  HasVariable { name: String },
  ConsoleLog,
  Loop { #[serde(default)] kinds: Option<String> },
  Conditional,
  ArrowFunction,
  Contains { text: String },
  Matches { pattern: String },
  /// Whitespace-normalized code differs from the starter.
  ChangedFromStarter,
}

impl Check {
  pub fn evaluate(&self, code: &str, starter: &str) -> bool {
    match self {
      Check::HasTag { tag } => has_tag(code, tag),
      Check::HasOpenTag { tag } => has_open_tag(code, tag),
      Check::MinTagCount { tag, min } => count_tag(code, tag) >= *min,
      Check::HasAttribute { tag, attr } => has_attribute(code, tag, attr),
      Check::HasClass { name } => has_class(code, name),
      Check::HasId { name } => has_id(code, name),
      Check::TagContentChanged { tag } => {
        let now = get_tag_content(code, tag);
        !now.is_empty() && now != get_tag_content(starter, tag)
      }
      Check::HasSelector { selector } => has_selector(code, selector),
      Check::HasProperty { property } => has_property(code, property),
      Check::SelectorWithProperty { selector, property } => has_selector_with_property(code, selector, property),
      Check::PropertyValue { selector, property, value } => get_property_value(code, selector, property)
        .map(|v| v.eq_ignore_ascii_case(value.trim()))
        .unwrap_or(false),
      Check::HasFunction { name } => has_function(code, name),
      Check::HasVariable { name } => has_variable(code, name),
      Check::ConsoleLog => has_console_log(code),
      Check::Loop { kinds } => has_loop(code, kinds.as_deref().unwrap_or(DEFAULT_LOOP_KINDS)),
      Check::Conditional => has_conditional(code),
      Check::ArrowFunction => has_arrow_function(code),
      Check::Contains { text } => code.contains(text.as_str()),
      Check::Matches { pattern } => matches(code, pattern),
      Check::ChangedFromStarter => normalize_whitespace(code) != normalize_whitespace(starter),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tag_checks_are_case_insensitive_and_span_lines() {
    let code = "<DIV class=\"box\">\n  <p>hi</p>\n</div>";
    assert!(has_tag(code, "div"));
    assert!(has_tag(code, "p"));
    assert!(!has_tag("<p>never closed", "p"));
    assert!(has_open_tag("<p>never closed", "p"));
  }

  #[test]
  fn count_tag_counts_open_tags_only() {
    let code = "<li>a</li><li class=\"x\">b</li><LI>c</LI>";
    assert_eq!(count_tag(code, "li"), 3);
    assert_eq!(count_tag(code, "ul"), 0);
  }

  #[test]
  fn attribute_must_follow_the_tag() {
    assert!(has_attribute(r#"<img src="a.png" alt="cat">"#, "img", "alt"));
    assert!(!has_attribute(r#"<img src="a.png">"#, "img", "alt"));
    assert!(!has_attribute(r#"alt="x" <img>"#, "img", "alt"));
  }

  #[test]
  fn tag_content_is_trimmed_first_match() {
    assert_eq!(get_tag_content("<h1>  One </h1><h1>Two</h1>", "h1"), "One");
    assert_eq!(get_tag_content("<p>no heading</p>", "h1"), "");
  }

  #[test]
  fn class_and_id_lookups() {
    let code = r#"<div class="card big" id='main'></div>"#;
    assert!(has_class(code, "big"));
    assert!(!has_class(code, "small"));
    assert!(has_id(code, "main"));
    assert!(!has_id(code, "mai"));
  }

  #[test]
  fn selector_block_property_lookup() {
    let css = "h1 { color: red; }\np {\n  font-size: 14px;\n}";
    assert!(has_selector(css, "p"));
    assert!(has_selector_with_property(css, "h1", "color"));
    assert!(!has_selector_with_property(css, "h1", "font-size"));
    assert!(has_selector_with_property(css, "p", "font-size"));
    assert_eq!(get_property_value(css, "h1", "color").as_deref(), Some("red"));
    assert_eq!(get_property_value(css, "h2", "color"), None);
    assert!(has_property(css, "font-size"));
  }

  #[test]
  fn javascript_lexical_checks() {
    let js = "function greet(name) {\n  let count = 1;\n  if (count > 0) { console.log(name); }\n}\nconst f = () => 1;";
    assert!(has_function(js, "greet"));
    assert!(!has_function(js, "other"));
    assert!(has_variable(js, "count"));
    assert!(has_console_log(js));
    assert!(has_conditional(js));
    assert!(has_arrow_function(js));
    assert!(!has_loop(js, DEFAULT_LOOP_KINDS));
    assert!(has_loop("while (x) {}", DEFAULT_LOOP_KINDS));
    assert!(!has_conditional("const gift = 1;"));
  }

  #[test]
  fn invalid_pattern_is_false_not_panic() {
    assert!(!matches("anything", "(unclosed"));
    assert_eq!(count_matches("anything", "[z-a]"), 0);
    assert_eq!(first_capture("anything", "(unclosed"), None);
  }

  #[test]
  fn declarative_checks_delegate() {
    let starter = "<h1>Hello</h1>";
    assert!(Check::TagContentChanged { tag: "h1".into() }.evaluate("<h1>Ada</h1>", starter));
    assert!(!Check::TagContentChanged { tag: "h1".into() }.evaluate("<h1> Hello </h1>", starter));
    assert!(!Check::ChangedFromStarter.evaluate("<h1>Hello</h1>\n", starter));
    assert!(Check::MinTagCount { tag: "p".into(), min: 2 }.evaluate("<p>a</p><p>b</p>", ""));
    assert!(Check::PropertyValue { selector: "p".into(), property: "color".into(), value: "RED".into() }
      .evaluate("p { color: red; }", ""));
    assert!(Check::Loop { kinds: Some("for".into()) }.evaluate("for (;;) {}", ""));
  }
}
