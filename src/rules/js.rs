//! JavaScript track: twelve lessons. Lessons 10–12 are DOM lessons that run as
//! markup in the sandbox; the checks are lexical either way.

use crate::domain::{LessonChallenge, Track};
use crate::predicates::matches;

use super::{contains_any, lesson, req};

const T: Track = Track::Js;

/// First JS lesson whose code runs as a page instead of a console script.
pub const FIRST_DOM_LESSON: u32 = 10;

pub(super) fn lessons() -> Vec<LessonChallenge> {
  vec![
    lesson(T, 1, "What is JavaScript?", None,
      vec![
        req("Declare a variable (let, const, or var)", |code, _| contains_any(code, &["let ", "const ", "var "])),
        req("Use console.log() to display output", |code, _| code.contains("console.log")),
      ],
      "Perfect! You've declared variables and used console.log()."),

    lesson(T, 2, "Variables & Data Types", None,
      vec![
        req("Use typeof to check data types", |code, _| matches(code, r"typeof\s+\w+")),
        req("Work with different data types", |code, _| contains_any(code, &["string", "number", "boolean"])),
      ],
      "Excellent! You understand JavaScript data types."),

    lesson(T, 3, "Operators", None,
      vec![
        req("Use arithmetic operators", |code, _| contains_any(code, &["+", "-", "*", "/"])),
        req("Use comparison operators", |code, _| contains_any(code, &["===", "==", "!=="])),
      ],
      "Great work! You've mastered operators."),

    lesson(T, 4, "Conditionals", None,
      vec![
        req("Use an if statement", |code, _| code.contains("if") && code.contains('{')),
        req("Include an else clause", |code, _| code.contains("else")),
      ],
      "Well done! You've implemented conditional logic."),

    lesson(T, 5, "Loops", None,
      vec![
        req("Create a for loop", |code, _| code.contains("for") && code.contains('{')),
        req("Output something in the loop", |code, _| code.contains("console.log")),
      ],
      "Excellent! You've mastered loops."),

    lesson(T, 6, "Functions", None,
      vec![
        req("Define a function", |code, _| contains_any(code, &["function ", "=>"])),
        req("Use return to send back a value", |code, _| code.contains("return")),
      ],
      "Perfect! You've created a reusable function."),

    lesson(T, 7, "Arrays", None,
      vec![
        req("Create an array with []", |code, _| code.contains('[') && code.contains(']')),
        req("Use array methods or access elements", |code, _| contains_any(code, &[".length", ".push", "[0]"])),
      ],
      "Great! You've worked with arrays successfully."),

    lesson(T, 8, "Objects", None,
      vec![
        req("Create an object with properties", |code, _| code.contains('{') && code.contains(':')),
        req("Access object properties with dot notation", |code, _| code.contains('.') && !code.contains("console.")),
      ],
      "Excellent! You understand objects and properties."),

    lesson(T, 9, "Events", None,
      vec![
        req("Use addEventListener for events", |code, _| code.contains("addEventListener")),
        req("Handle an event type", |code, _| contains_any(code, &["click", "input", "change"])),
      ],
      "Perfect! You've added event handling."),

    lesson(T, 10, "DOM Manipulation", None,
      vec![
        req("Select a DOM element", |code, _| contains_any(code, &["querySelector", "getElementById"])),
        req("Modify element content", |code, _| contains_any(code, &[".innerHTML", ".textContent"])),
      ],
      "Outstanding! You've manipulated the DOM successfully."),

    lesson(T, 11, "Styling with JavaScript", None,
      vec![
        req("Use classList or style to modify CSS", |code, _| contains_any(code, &[".classList", ".style"])),
        req("Add, remove, or toggle classes", |code, _| contains_any(code, &["add", "remove", "toggle"])),
      ],
      "Fantastic! You've dynamically styled elements."),

    lesson(T, 12, "Async & Promises", None,
      vec![
        req("Use async/await or promises", |code, _| contains_any(code, &["async", ".then"])),
        req("Work with asynchronous operations", |code, _| contains_any(code, &["fetch", "setTimeout"])),
      ],
      "Excellent! You've mastered asynchronous JavaScript."),
  ]
}
