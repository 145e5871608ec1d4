//! CSS track: ten lessons, checked by plain substring presence.

use crate::domain::{LessonChallenge, Track};
use crate::predicates::matches;

use super::{contains_any, lesson, req};

const T: Track = Track::Css;

pub(super) fn lessons() -> Vec<LessonChallenge> {
  vec![
    lesson(T, 1, "What is CSS?", None,
      vec![
        req("Set the color property", |code, _| contains_any(code, &["color:", "color :"])),
        req("Set the font-size property", |code, _| contains_any(code, &["font-size:", "font-size :"])),
      ],
      "Perfect! You've applied CSS styling successfully."),

    lesson(T, 2, "Selectors", None,
      vec![
        req("Use a class selector (e.g., .classname)", |code, _| code.contains('.') && code.contains('{')),
        req("Use an ID selector (e.g., #idname)", |code, _| code.contains('#') && code.contains('{')),
      ],
      "Excellent! You've mastered CSS selectors."),

    lesson(T, 3, "Box Model", None,
      vec![
        req("Use a background property", |code, _| code.contains("background")),
        req("Add a border property", |code, _| code.contains("border")),
        req("Use padding or margin", |code, _| contains_any(code, &["padding", "margin"])),
      ],
      "Great! You've applied the box model properties."),

    lesson(T, 4, "Text Styling", None,
      vec![
        req("Set the font-family", |code, _| code.contains("font-family")),
        req("Use font-weight or font-style", |code, _| contains_any(code, &["font-weight", "font-style"])),
      ],
      "Well done! You've styled text with various properties."),

    lesson(T, 5, "Positioning", None,
      vec![
        req("Use the display property", |code, _| code.contains("display")),
        req("Use positioning (position or float)", |code, _| contains_any(code, &["position", "float"])),
      ],
      "Excellent! You've controlled element layout and positioning."),

    lesson(T, 6, "Flexbox", None,
      vec![
        req("Set display: flex", |code, _| contains_any(code, &["display: flex", "display:flex"])),
        req("Use justify-content or align-items", |code, _| contains_any(code, &["justify-content", "align-items"])),
      ],
      "Perfect! You've created a flexbox layout."),

    lesson(T, 7, "Grid Layout", None,
      vec![
        req("Set display: grid", |code, _| contains_any(code, &["display: grid", "display:grid"])),
        req("Use grid-template property", |code, _| code.contains("grid-template")),
      ],
      "Outstanding! You've mastered CSS Grid layout."),

    lesson(T, 8, "Transitions", None,
      vec![
        req("Add a :hover pseudo-class", |code, _| code.contains(":hover")),
        req("Include a transition property", |code, _| code.contains("transition")),
      ],
      "Excellent! You've added interactive hover effects."),

    lesson(T, 9, "Responsive Design", None,
      vec![
        req("Use a @media query", |code, _| code.contains("@media")),
        req("Include a media query condition", |code, _| matches(code, r"@media.*\(.*\)")),
      ],
      "Great work! You've made your design responsive."),

    lesson(T, 10, "Animations", None,
      vec![
        req("Define @keyframes for animation", |code, _| code.contains("@keyframes")),
        req("Apply the animation property", |code, _| code.contains("animation")),
      ],
      "Fantastic! You've created a CSS animation."),
  ]
}
