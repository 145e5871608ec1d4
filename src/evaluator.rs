//! Challenge evaluation: starter-code pre-check, then every requirement, then one verdict.
//!
//! Evaluation is synchronous and deterministic. Every track aggregates all
//! failed requirements; nothing short-circuits except the unchanged-starter
//! check, which pre-empts the requirement table.

use tracing::debug;

use crate::domain::{FeedbackClass, LessonChallenge, Verdict};
use crate::util::normalize_whitespace;

pub const MISSING_PREFIX: &str = "Missing: ";

pub const UNCHANGED_STARTER_MESSAGE: &str =
  "Please modify the code to complete the challenge. The example code is just a starting point!";

/// True when the submission is the starter code again, ignoring whitespace layout.
pub fn is_unchanged_starter(challenge: &LessonChallenge, code: &str) -> bool {
  challenge
    .starter_code
    .as_deref()
    .map(|starter| normalize_whitespace(code) == normalize_whitespace(starter))
    .unwrap_or(false)
}

/// Display text for a list of failed requirement messages.
pub fn render_failures(failures: &[String]) -> String {
  match failures {
    [] => String::new(),
    [only] => only.clone(),
    many => format!("{}{}", MISSING_PREFIX, many.join(", ")),
  }
}

/// Evaluate `code` against one lesson. `unchanged_message` is shown when the
/// learner submits the starter code untouched.
pub fn evaluate(challenge: &LessonChallenge, code: &str, unchanged_message: &str) -> Verdict {
  let failure_class = challenge.track.failure_class();

  if is_unchanged_starter(challenge, code) {
    debug!(target: "challenge", track = %challenge.track, lesson = challenge.lesson, "Submission equals starter code");
    return Verdict {
      passed: false,
      class: failure_class,
      message: unchanged_message.to_string(),
      messages: vec![unchanged_message.to_string()],
    };
  }

  let starter = challenge.starter_code.as_deref().unwrap_or("");
  let failures: Vec<String> = challenge
    .requirements
    .iter()
    .filter(|r| !r.is_met(code, starter))
    .map(|r| r.message.clone())
    .collect();

  if failures.is_empty() {
    Verdict {
      passed: true,
      class: FeedbackClass::Success,
      message: challenge.success_message.clone(),
      messages: Vec::new(),
    }
  } else {
    Verdict {
      passed: false,
      class: failure_class,
      message: render_failures(&failures),
      messages: failures,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Track;
  use crate::rules::Catalog;

  fn run(catalog: &Catalog, track: Track, lesson: u32, code: &str) -> Verdict {
    let c = catalog.get(track, lesson).expect("lesson exists");
    evaluate(c, code, UNCHANGED_STARTER_MESSAGE)
  }

  #[test]
  fn starter_code_always_yields_modify_message() {
    let catalog = Catalog::built_in();
    for track in Track::ALL {
      for c in catalog.lessons(track) {
        if let Some(starter) = &c.starter_code {
          let reflowed = format!("\n  {}  \n", starter.replace('\n', "\n\n   "));
          for code in [starter.as_str(), reflowed.as_str()] {
            let v = evaluate(c, code, UNCHANGED_STARTER_MESSAGE);
            assert!(!v.passed, "{track} lesson {} passed with starter code", c.lesson);
            assert_eq!(v.message, UNCHANGED_STARTER_MESSAGE);
            assert_eq!(v.class, FeedbackClass::Error);
          }
        }
      }
    }
  }

  #[test]
  fn links_scenario_reports_missing_target_only() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Html, 5, r#"<a href="https://x.com">go</a>"#);
    assert!(!v.passed);
    assert_eq!(v.message, "Add target=\"_blank\" to open in new tab");
    assert!(!v.message.starts_with(MISSING_PREFIX));
  }

  #[test]
  fn css_lesson_one_scenario_succeeds() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Css, 1, "p { color: red; font-size: 14px; }");
    assert!(v.passed);
    assert_eq!(v.class, FeedbackClass::Success);
    assert_eq!(v.message, "Perfect! You've applied CSS styling successfully.");
    assert!(v.messages.is_empty());
  }

  #[test]
  fn js_conditional_without_else() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Js, 4, "let x = 2;\nif (x > 1) { }");
    assert_eq!(v.message, "Include an else clause");
    assert_eq!(v.messages, vec!["Include an else clause".to_string()]);
  }

  #[test]
  fn multiple_failures_are_listed_in_table_order() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Html, 6, "<p>no picture here</p>");
    assert_eq!(
      v.message,
      "Missing: Include an <img> tag with src attribute, Add alt attribute for accessibility, Change the alt text to describe the image"
    );
    assert_eq!(v.messages.len(), 3);
    assert_eq!(v.class, FeedbackClass::Error);
  }

  #[test]
  fn practice_failures_use_incomplete_class() {
    let catalog = Catalog::built_in();
    let images = catalog.find_by_title(Track::Practice, "Images").expect("practice lesson");
    let v = evaluate(images, "<img>", UNCHANGED_STARTER_MESSAGE);
    assert_eq!(v.class, FeedbackClass::Incomplete);
    assert!(v.message.starts_with(MISSING_PREFIX));
  }

  #[test]
  fn html_changes_are_compared_against_starter() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Html, 4, "<p>This is <strong>bold</strong> text.</p>\n<p>Mine <em>own</em></p>");
    assert_eq!(v.message, "Change the bold text to your own words");

    let v = run(&catalog, Track::Html, 14, "<audio src=\"audio.mp3\" controls>Your browser is old</audio>");
    assert!(v.passed, "{}", v.message);
  }

  /// One passing submission per numbered lesson.
  const PASSING: &[(Track, u32, &str)] = &[
    (Track::Html, 1, "<h1>Ada Lovelace</h1>\n<p>I write programs.</p>"),
    (Track::Html, 2, "<!DOCTYPE html>\n<html>\n<head><title>Ada's page</title></head>\n<body></body>\n</html>"),
    (Track::Html, 3, "<h1>Cats</h1>\n<h2>Why</h2>\n<p>Soft.</p>\n<p>Loud.</p>"),
    (Track::Html, 4, "<p>I am <strong>sure</strong>.</p>\n<p>So <em>very</em> sure.</p>"),
    (Track::Html, 5, r#"<a href="https://ada.dev" target="_blank">Ada</a>"#),
    (Track::Html, 6, r#"<img src="cat.png" alt="A sleeping cat">"#),
    (Track::Html, 7, "<ol><li>Tea</li><li>Books</li><li>Rain</li></ol>"),
    (Track::Html, 8, "<table><tr><th>City</th><th>Pop</th></tr><tr><td>Oslo</td><td>700k</td></tr></table>"),
    (Track::Html, 9, "<form><label>Name</label><input><button>Send</button></form>"),
    (Track::Html, 10, "<header>Me</header>\n<section>Work</section>\n<footer>Bye</footer>"),
    (Track::Html, 11, "<p>&copy; 2024 &lt;me&gt;</p>"),
    (Track::Html, 12, "<!-- header section -->\n<!-- body -->\n<!-- footer -->"),
    (Track::Html, 13, r#"<head><meta charset="UTF-8"><meta name="viewport" content="width=device-width"><meta name="description" content="Ada"></head>"#),
    (Track::Html, 14, "<audio src=\"audio.mp3\" controls>Your browser is old</audio>"),
    (Track::Html, 15, r#"<iframe src="https://www.youtube.com/embed/x" title="Video"></iframe>"#),
    (Track::Css, 1, "p { color: red; font-size: 14px; }"),
    (Track::Css, 2, ".card { color: red; }\n#main { margin: 0; }"),
    (Track::Css, 3, ".box { background: #eee; border: 1px solid; padding: 4px; }"),
    (Track::Css, 4, "p { font-family: serif; font-weight: bold; }"),
    (Track::Css, 5, ".nav { display: block; position: relative; }"),
    (Track::Css, 6, ".row { display: flex; justify-content: center; }"),
    (Track::Css, 7, ".grid { display: grid; grid-template-columns: 1fr 1fr; }"),
    (Track::Css, 8, "a:hover { color: red; transition: color 0.3s; }"),
    (Track::Css, 9, "@media (max-width: 600px) { body { margin: 0; } }"),
    (Track::Css, 10, "@keyframes spin { to { transform: rotate(1turn); } } .x { animation: spin 1s; }"),
    (Track::Js, 1, "let name = 'Ada';\nconsole.log(name);"),
    (Track::Js, 2, "let n = 42;\nconsole.log(typeof n === 'number');"),
    (Track::Js, 3, "let sum = 2 + 3;\nlet same = sum === 5;"),
    (Track::Js, 4, "let x = 2;\nif (x > 1) { x = 0; } else { x = 1; }"),
    (Track::Js, 5, "for (let i = 0; i < 3; i++) { console.log(i); }"),
    (Track::Js, 6, "function double(n) { return n * 2; }"),
    (Track::Js, 7, "const pets = ['cat', 'dog'];\npets.push('fish');"),
    (Track::Js, 8, "const cat = { name: 'Tom' };\nlet n = cat.name;"),
    (Track::Js, 9, "button.addEventListener('click', go);"),
    (Track::Js, 10, "document.getElementById('out').textContent = 'Hi';"),
    (Track::Js, 11, "box.classList.toggle('dark');"),
    (Track::Js, 12, "async function load() { await fetch('/x'); }"),
  ];

  /// One passing submission per practice page, by title.
  const PASSING_PRACTICE: &[(&str, &str)] = &[
    ("What is HTML?", "<h1>Ada</h1><p>a</p><p>b</p>"),
    ("HTML Structure", "<!DOCTYPE html><html><head></head><body></body></html>"),
    ("Headings & Paragraphs", "<h1>A</h1><h2>B</h2><p>c</p><p>d</p>"),
    ("Text Formatting", "<p><strong>bold</strong> and <em>soft</em></p>"),
    ("Links", r#"<a href="https://ada.dev">Ada</a>"#),
    ("Images", r#"<img src="cat.png" alt="Cat">"#),
    ("Lists", "<ul><li>Tea</li></ul>"),
    ("What is CSS?", "<style>p { color: red; font-size: 12px; }</style>"),
    ("Selectors", "<style>.note { color: red; }</style>"),
    ("Colors & Backgrounds", "body { color: navy; background-color: #eee; }"),
    ("What is JavaScript?", "let a = 1;\nconsole.log(a);"),
    ("Variables", "const n = 1;\nconsole.log(n);"),
    ("Data Types", "let s = 'text';\nconsole.log(typeof s);"),
    ("Operators", "console.log(2 + 3);"),
    ("Conditionals", "if (a > b) {}"),
    ("Loops", "while (i < 3) { i++; }"),
    ("Functions", "function go() {}"),
    ("Arrays", "const xs = [1, 2];\nxs.push(3);"),
    ("Objects", "const cat = { name: 'Tom' };\ncat.name;"),
  ];

  #[test]
  fn every_numbered_lesson_has_a_passing_submission() {
    let catalog = Catalog::built_in();
    for track in [Track::Html, Track::Css, Track::Js] {
      let rows = PASSING.iter().filter(|(t, _, _)| *t == track).count();
      assert_eq!(rows, catalog.lesson_count(track), "{track}: one passing row per lesson");
    }
    for &(track, lesson, code) in PASSING {
      let c = catalog.get(track, lesson).unwrap_or_else(|| panic!("no {track} lesson {lesson}"));
      let v = evaluate(c, code, UNCHANGED_STARTER_MESSAGE);
      assert!(v.passed, "{track} lesson {lesson}: {}", v.message);
      assert_eq!(v.class, FeedbackClass::Success);
      assert_eq!(v.message, c.success_message);
      assert!(v.messages.is_empty());
    }
  }

  #[test]
  fn every_practice_page_has_a_passing_submission() {
    let catalog = Catalog::built_in();
    assert_eq!(PASSING_PRACTICE.len(), catalog.lesson_count(Track::Practice));
    for &(title, code) in PASSING_PRACTICE {
      let c = catalog
        .find_by_title(Track::Practice, &format!("Lesson: {title}"))
        .unwrap_or_else(|| panic!("no practice lesson for {title}"));
      assert_eq!(c.title, title);
      let v = evaluate(c, code, UNCHANGED_STARTER_MESSAGE);
      assert!(v.passed, "practice {title}: {}", v.message);
      assert_eq!(v.message, c.success_message);
    }
  }

  #[test]
  fn object_lesson_rejects_console_dot_access() {
    let catalog = Catalog::built_in();
    let v = run(&catalog, Track::Js, 8, "const cat = { name: 'Tom' };\nconsole.log(cat.name);");
    assert_eq!(v.message, "Access object properties with dot notation");
  }

  #[test]
  fn evaluation_is_idempotent() {
    let catalog = Catalog::built_in();
    let code = "<h1>Me</h1>";
    let first = run(&catalog, Track::Html, 3, code);
    let second = run(&catalog, Track::Html, 3, code);
    assert_eq!(first, second);
  }

  #[test]
  fn render_failures_shapes() {
    assert_eq!(render_failures(&[]), "");
    assert_eq!(render_failures(&["a".to_string()]), "a");
    assert_eq!(render_failures(&["a".to_string(), "b".to_string()]), "Missing: a, b");
  }
}
