//! Hint lookup keyed by lesson title.

/// Ordered; the first key contained in the page title wins.
const HINTS: &[(&str, &str)] = &[
  ("What is HTML?", "Hint: Use <h1>Your Name</h1> and add at least 2 <p> paragraphs describing yourself and your hobbies."),
  ("HTML Structure", "Hint: Structure: <!DOCTYPE html> → <html> → <head> & <body>"),
  ("Headings & Paragraphs", "Hint: <h1> for main title, <h2> for subtitles, <p> for paragraphs"),
  ("Text Formatting", "Hint: Use <strong> or <b> for bold, <em> or <i> for italic"),
  ("Links", "Hint: Format: <a href=\"url\">Link text</a>"),
  ("Images", "Hint: <img src=\"url\" alt=\"description\"> - alt is important!"),
  ("Lists", "Hint: <ul> for unordered or <ol> for ordered, with <li> items inside"),
  ("Tables", "Hint: <table> with <tr> rows, <td> cells, and <th> headers"),
  ("Forms", "Hint: Use <form>, <input>, <textarea>, and <button>"),
  ("Semantic HTML", "Hint: Use <header>, <nav>, <main>, <article>, <footer>"),
  ("What is CSS?", "Hint: Rules go in <style> tag: selector { property: value; }"),
  ("Selectors", "Hint: Elements (h1), classes (.classname), IDs (#id), or combinations"),
  ("Colors & Backgrounds", "Hint: color for text, background-color for background. Use color names, hex, or rgb()"),
  ("Text Styling", "Hint: font-size, font-family, font-weight, text-align, line-height"),
  ("Box Model", "Hint: margin (outside), padding (inside), border, width, height"),
  ("Borders & Spacing", "Hint: border, border-radius, padding, margin for spacing"),
  ("Flexbox", "Hint: display: flex on parent, then use justify-content, align-items, flex properties"),
  ("Grid Layout", "Hint: display: grid with grid-template-columns, grid-template-rows"),
  ("Positioning", "Hint: position: static, relative, absolute, fixed, or sticky"),
  ("Transitions & Animations", "Hint: transition for smooth changes, @keyframes for animations"),
  ("What is JavaScript?", "Hint: console.log(\"message\") prints output, let myVar = value creates variables"),
  ("Variables & Data Types", "Hint: let name = \"text\", let num = 42, let bool = true"),
  ("Operators", "Hint: + - * / for math, === for comparison, && and || for logic"),
  ("Conditionals", "Hint: if (condition) { } else if { } else { }"),
  ("Loops", "Hint: for (let i = 0; i < 10; i++) or while (condition) { }"),
  ("Functions", "Hint: function myFunc() { } or const myFunc = () => { }"),
  ("Arrays", "Hint: let arr = [1, 2, 3], access with arr[0], use .push(), .pop(), .map()"),
  ("Objects", "Hint: let obj = { name: \"value\" }, access with obj.name or obj[\"name\"]"),
  ("DOM Manipulation", "Hint: document.getElementById(), .querySelector(), .textContent, .innerHTML"),
  ("Events", "Hint: addEventListener(\"click\", function() { }), event handlers"),
  ("ES6 Features", "Hint: const/let, arrow functions =>, destructuring, spread operator ..."),
  ("Async & Promises", "Hint: Promise, .then(), async/await, .catch() for errors"),
];

pub fn hint_for_title(title: &str) -> Option<&'static str> {
  HINTS
    .iter()
    .find(|(key, _)| title.contains(key))
    .map(|(_, hint)| *hint)
}
