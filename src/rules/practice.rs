//! Practice editor track. Lessons are matched by page title; every check is a
//! regex from the predicate library.

use crate::domain::{LessonChallenge, Requirement, Track};
use crate::predicates::{count_tag, first_capture, has_console_log, has_open_tag, matches};

use super::{lesson, req};

const T: Track = Track::Practice;

pub(super) fn lessons() -> Vec<LessonChallenge> {
  let titled = [
    ("What is HTML?", vec![
      req("Step 1: Need an <h1> heading tag", |code, _| matches(code, r"(?i)<h1[^>]*>(.+?)</h1>")),
      req("Step 1: Try changing \"Hello, World!\" in your <h1> to your name!", |code, _| {
        matches_and_differs(code, r"(?i)<h1[^>]*>([^<]+)</h1>", "Hello, World!")
      }),
      req("Step 2: Need at least one <p> paragraph tag", |code, _| matches(code, r"(?i)<p[^>]*>(.+?)</p>")),
      req("Step 3: Need 2 paragraphs! Add another <p> tag with your favorite hobby.", |code, _| count_tag(code, "p") >= 2),
    ], "Perfect! You completed the challenge!"),

    ("HTML Structure", vec![
      req("Need <!DOCTYPE html> at the top", |code, _| matches(code, r"(?i)<!DOCTYPE\s+html>")),
      req("Need <html> tag", |code, _| has_open_tag(code, "html")),
      req("Need <head> tag for metadata", |code, _| has_open_tag(code, "head")),
      req("Need <body> tag for content", |code, _| has_open_tag(code, "body")),
      req("Remember to close your tags!", |code, _| matches(code, r"(?i)</html>|</head>|</body>")),
    ], "Great! You have the basic HTML structure!"),

    ("Headings & Paragraphs", vec![
      req("Add at least one <h1> heading", |code, _| count_tag(code, "h1") > 0),
      req("Try adding an <h2> subheading", |code, _| count_tag(code, "h2") > 0),
      req("Add multiple <p> paragraphs", |code, _| count_tag(code, "p") >= 2),
    ], "Excellent heading and paragraph structure!"),

    ("Text Formatting", vec![
      req("Add <strong> or <b> for bold text", |code, _| matches(code, r"(?i)<(b|strong)[^>]*>.*?</(b|strong)>")),
      req("Try adding <em> or <i> for italic text", |code, _| matches(code, r"(?i)<(i|em)[^>]*>.*?</(i|em)>")),
    ], "Nice text formatting!"),

    ("Links", vec![
      req("Add an <a> link with href attribute", |code, _| matches(code, r"(?i)<a[^>]+href[^>]*>.*?</a>")),
      req("Make sure your link has an href attribute", |code, _| matches(code, r#"(?i)href\s*=\s*["'][^"']*["']"#)),
    ], "Links working great!"),

    ("Images", vec![
      req("Add an <img> image tag", |code, _| has_open_tag(code, "img")),
      req("Your image needs a src attribute", |code, _| matches(code, r#"(?i)src\s*=\s*["'][^"']*["']"#)),
      req("Always add an alt attribute for accessibility!", |code, _| matches(code, r#"(?i)alt\s*=\s*["'][^"']*["']"#)),
    ], "Perfect image implementation!"),

    ("Lists", vec![
      req("Add a <ul> or <ol> list", |code, _| has_open_tag(code, "ul") || has_open_tag(code, "ol")),
      req("Add <li> list items inside your list", |code, _| matches(code, r"(?i)<li[^>]*>.*?</li>")),
    ], "Great list structure!"),

    ("What is CSS?", vec![
      req("Add a <style> tag with CSS rules", |code, _| matches(code, r"(?i)<style>[\s\S]*?</style>")),
      req("Add a color property in your CSS!",
        |code, _| matches(code, r"(?i)color\s*:\s*\w+|color\s*:\s*#[0-9a-f]{3,6}|color\s*:\s*rgb")),
      req("Try changing the font-size!", |code, _| matches(code, r"(?i)font-size\s*:\s*[\d.]+")),
    ], "CSS is working beautifully!"),

    ("Selectors", vec![
      req("Add CSS selectors with rules",
        |code, _| matches(code, r"(?i)\w+\s*\{[\s\S]*?\}|\.[\w-]+\s*\{[\s\S]*?\}|#[\w-]+\s*\{[\s\S]*?\}")),
      req("Try using class selectors!", |code, _| matches(code, r#"(?i)\.\w+\s*\{|class\s*=\s*["']"#)),
    ], "Selectors look great!"),

    ("Colors & Backgrounds", vec![
      req("Add a color property", |code, _| matches(code, r"(?i)color\s*:\s*")),
      req("Try adding a background or background-color!", |code, _| matches(code, r"(?i)background|background-color")),
    ], "Great color styling!"),

    ("What is JavaScript?", vec![
      req("Use console.log() to print output", |code, _| has_console_log(code)),
      req("Create a variable with let, const, or var!", |code, _| matches(code, r"(?i)let\s+\w+|const\s+\w+|var\s+\w+")),
    ], "JavaScript is running perfectly!"),

    ("Variables", variable_requirements(), "Variables working great!"),

    ("Data Types", variable_requirements(), "Variables working great!"),

    ("Operators", vec![
      req("Use mathematical or logical operators (+, -, *, /, etc.)", |code, _| matches(code, r"(?i)[+\-*/%&|]|\s(and|or)\s")),
      req("Display the result with console.log() or alert()", |code, _| matches(code, r"(?i)console\.log|alert")),
    ], "Operators working perfectly!"),

    ("Conditionals", vec![
      req("Use if statements", |code, _| matches(code, r"(?i)if\s*\(")),
      req("Add comparison operators (===, >, <, etc.)", |code, _| matches(code, r"===|==|!=|!==|>|<|>=|<=")),
    ], "Conditionals working great!"),

    ("Loops", vec![
      req("Use a for or while loop", |code, _| matches(code, r"(?i)(for|while)\s*\(")),
    ], "Loops working perfectly!"),

    ("Functions", vec![
      req("Define a function", |code, _| matches(code, r"(?i)function\s+\w+|const\s+\w+\s*=\s*\(|let\s+\w+\s*=\s*\(")),
    ], "Functions working great!"),

    ("Arrays", vec![
      req("Create an array with []", |code, _| matches(code, r"\[\s*\]|\[.*\]")),
      req("Try using array methods!", |code, _| matches(code, r"(?i)\.push|\.pop|\.slice|\.map|\.filter|\.length")),
    ], "Arrays working perfectly!"),

    ("Objects", vec![
      req("Create an object with {}", |code, _| matches(code, r"\{\s*[^}]*\}")),
      req("Add properties to your object", |code, _| matches(code, r"\.\w+|\w+\s*:")),
    ], "Objects working great!"),
  ];

  titled
    .into_iter()
    .zip(1u32..)
    .map(|((title, requirements, success), number)| lesson(T, number, title, None, requirements, success))
    .collect()
}

/// Shared by the "Variables" and "Data Types" pages.
fn variable_requirements() -> Vec<Requirement> {
  vec![
    req("Declare a variable with let, const, or var", |code, _| matches(code, r"(?i)let\s+\w+\s*=|const\s+\w+\s*=|var\s+\w+\s*")),
    req("Log your variables with console.log()", |code, _| matches(code, r"(?i)console\.log")),
  ]
}

/// `pattern` matches and its first capture is not `rejected`.
fn matches_and_differs(code: &str, pattern: &str, rejected: &str) -> bool {
  first_capture(code, pattern)
    .map(|found| found != rejected)
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn get(title: &str) -> LessonChallenge {
    lessons()
      .into_iter()
      .find(|c| c.title == title)
      .unwrap_or_else(|| panic!("no practice lesson {title}"))
  }

  fn failures(c: &LessonChallenge, code: &str) -> Vec<String> {
    c.requirements.iter().filter(|r| !r.is_met(code, "")).map(|r| r.message.clone()).collect()
  }

  #[test]
  fn practice_lessons_are_numbered_in_order() {
    let all = lessons();
    assert_eq!(all.first().map(|c| c.title.as_str()), Some("What is HTML?"));
    for (i, c) in all.iter().enumerate() {
      assert_eq!(c.lesson as usize, i + 1);
      assert_eq!(c.track, Track::Practice);
      assert!(c.starter_code.is_none());
    }
  }

  #[test]
  fn default_heading_is_rejected() {
    let c = get("What is HTML?");
    let f = failures(&c, "<h1>Hello, World!</h1><p>a</p><p>b</p>");
    assert_eq!(f, vec!["Step 1: Try changing \"Hello, World!\" in your <h1> to your name!".to_string()]);
    assert!(failures(&c, "<h1>Ada</h1><p>a</p><p>b</p>").is_empty());
  }

  #[test]
  fn images_report_src_and_alt_separately() {
    let c = get("Images");
    assert_eq!(failures(&c, "<img src=\"cat.png\">"), vec!["Always add an alt attribute for accessibility!".to_string()]);
    assert_eq!(failures(&c, "<p>no image</p>").len(), 3);
  }

  #[test]
  fn css_and_js_practice_checks() {
    assert!(failures(&get("What is CSS?"), "<style>p { color: red; font-size: 12px; }</style>").is_empty());
    assert!(failures(&get("Loops"), "while (i < 3) { i++; }").is_empty());
    assert_eq!(failures(&get("Loops"), "let i = 0;").len(), 1);
    assert!(failures(&get("Conditionals"), "if (a > b) {}").is_empty());
  }

  #[test]
  fn data_types_page_checks_like_variables() {
    let variables = get("Variables");
    let data_types = get("Data Types");
    assert_eq!(data_types.lesson, variables.lesson + 1);
    assert_eq!(data_types.success_message, variables.success_message);
    for code in ["const n = 1;\nconsole.log(typeof n);", "let s = 'x';", "console.log(1);"] {
      assert_eq!(failures(&data_types, code), failures(&variables, code));
    }
    assert!(failures(&data_types, "let s = 'x';\nconsole.log(s);").is_empty());
  }
}
