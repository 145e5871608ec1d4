//! Preview documents for the learner's iframe.
//!
//! The service never executes learner code. It builds the document the page
//! loads into its isolated frame (`srcdoc`): markup as-is (or wrapped in a
//! minimal skeleton), or a console harness that captures `console.*` output
//! and exceptions for script lessons. What the frame shows is never fed back
//! into validation.

use regex::Regex;
use serde::Serialize;

use crate::domain::Track;
use crate::rules::FIRST_DOM_LESSON;
use crate::util::fill_template;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SandboxMode {
  Markup,
  Script,
}

#[derive(Clone, Debug, Serialize)]
pub struct SandboxDocument {
  pub mode: SandboxMode,
  pub document: String,
}

const MARKUP_SKELETON: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; }
    </style>
</head>
<body>
    {code}
</body>
</html>"#;

const CONSOLE_HARNESS: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body { font-family: 'Monaco', 'Courier New', monospace; margin: 0; padding: 20px; background: #1e1e1e; color: #d4d4d4; }
        .console-output { background: #252526; border: 1px solid #404040; border-radius: 4px; padding: 15px; }
        .console-line { margin: 5px 0; white-space: pre-wrap; word-break: break-word; font-size: 13px; }
        .console-log { color: #d4d4d4; }
        .console-error { color: #f48771; font-weight: bold; }
        .console-warn { color: #dcdcaa; }
        h3 { margin-top: 0; color: #4ec9b0; }
    </style>
</head>
<body>
    <div class="console-output">
        <h3>Console Output:</h3>
        <div id="console-output"></div>
    </div>
    <script>
        const logs = [];
        const format = (args) => args.map(a => typeof a === 'object' ? JSON.stringify(a, null, 2) : String(a)).join(' ');
        const capture = (type) => (...args) => { logs.push({ type, message: format(args) }); renderLogs(); };
        console.log = capture('log');
        console.error = capture('error');
        console.warn = capture('warn');
        window.alert = (message) => { logs.push({ type: 'log', message: 'Alert: ' + message }); renderLogs(); };
        function escapeHtml(text) {
            const div = document.createElement('div');
            div.textContent = text;
            return div.innerHTML;
        }
        function renderLogs() {
            const output = document.getElementById('console-output');
            output.innerHTML = logs.map(log =>
                '<div class="console-line console-' + log.type + '">' + escapeHtml(log.message) + '</div>'
            ).join('');
        }
        try {
            {code}
        } catch (e) {
            console.error('Error: ' + e.message);
        }
        if (logs.length === 0) {
            document.getElementById('console-output').innerHTML =
                '<div class="console-line console-log">Code executed successfully (no output)</div>';
        }
    </script>
</body>
</html>"#;

/// Practice editor rule: anything with both `<` and `>` is markup.
pub fn detect_mode(code: &str) -> SandboxMode {
  if code.contains('<') && code.contains('>') {
    SandboxMode::Markup
  } else {
    SandboxMode::Script
  }
}

/// How a lesson's code is previewed.
pub fn mode_for_lesson(track: Track, lesson: u32, code: &str) -> SandboxMode {
  match track {
    Track::Html | Track::Css => SandboxMode::Markup,
    Track::Js if lesson >= FIRST_DOM_LESSON => SandboxMode::Markup,
    Track::Js => SandboxMode::Script,
    Track::Practice => detect_mode(code),
  }
}

/// Wrap fragments in the minimal skeleton; full documents pass through.
pub fn wrap_markup(code: &str) -> String {
  if code.contains("<html") || code.contains("<!DOCTYPE") {
    code.to_string()
  } else {
    fill_template(MARKUP_SKELETON, &[("code", code)])
  }
}

/// Console harness around learner script. A literal `</script` (any casing)
/// inside the code would end the harness early, so it is written as `<\/script`.
pub fn script_document(code: &str) -> String {
  let guarded = match Regex::new(r"(?i)</(script)") {
    Ok(re) => re.replace_all(code, r"<\/${1}").into_owned(),
    Err(_) => code.replace("</script", "<\\/script"),
  };
  fill_template(CONSOLE_HARNESS, &[("code", &guarded)])
}

/// Build the preview document for one run. Tutorial tracks write markup
/// wholesale; the practice editor wraps fragments.
pub fn build_document(track: Track, lesson: u32, code: &str) -> SandboxDocument {
  let mode = mode_for_lesson(track, lesson, code);
  let document = match (mode, track) {
    (SandboxMode::Script, _) => script_document(code),
    (SandboxMode::Markup, Track::Practice) => wrap_markup(code),
    (SandboxMode::Markup, _) => code.to_string(),
  };
  SandboxDocument { mode, document }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mode_detection() {
    assert_eq!(detect_mode("<p>hi</p>"), SandboxMode::Markup);
    assert_eq!(detect_mode("if (a < b) console.log(a)"), SandboxMode::Script);
    assert_eq!(mode_for_lesson(Track::Js, 3, "<p>"), SandboxMode::Script);
    assert_eq!(mode_for_lesson(Track::Js, 10, "document.body"), SandboxMode::Markup);
    assert_eq!(mode_for_lesson(Track::Css, 1, "p { color: red; }"), SandboxMode::Markup);
  }

  #[test]
  fn fragments_are_wrapped_but_documents_are_not() {
    let wrapped = wrap_markup("<p>hi</p>");
    assert!(wrapped.starts_with("<!DOCTYPE html>"));
    assert!(wrapped.contains("<body>\n    <p>hi</p>\n</body>"));
    let full = "<!DOCTYPE html><html><body></body></html>";
    assert_eq!(wrap_markup(full), full);
  }

  #[test]
  fn tutorial_markup_is_written_wholesale() {
    let doc = build_document(Track::Html, 1, "<h1>Me</h1>");
    assert_eq!(doc.mode, SandboxMode::Markup);
    assert_eq!(doc.document, "<h1>Me</h1>");
    let doc = build_document(Track::Practice, 1, "<h1>Me</h1>");
    assert!(doc.document.contains("<meta charset=\"UTF-8\">"));
  }

  #[test]
  fn script_harness_embeds_code_inside_try() {
    let doc = build_document(Track::Js, 1, "console.log('</script>')");
    assert_eq!(doc.mode, SandboxMode::Script);
    assert!(doc.document.contains("try {\n            console.log('<\\/script>')\n        } catch (e)"));
    assert!(doc.document.contains("Code executed successfully (no output)"));
    assert!(!doc.document.contains("{code}"));
  }

  #[test]
  fn script_close_tag_is_guarded_in_any_case() {
    let doc = script_document("let a = '</SCRIPT>';\nlet b = '</ScRiPt >';");
    assert!(doc.contains("let a = '<\\/SCRIPT>';"));
    assert!(doc.contains("let b = '<\\/ScRiPt >';"));
    assert!(!doc.contains("</SCRIPT"));
    assert!(!doc.contains("</ScRiPt"));
  }
}
