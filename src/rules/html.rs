//! HTML track: fifteen lessons, each with starter code the learner must change.

use crate::domain::{LessonChallenge, Track};
use crate::predicates::{all_matches, count_matches};
use crate::util::normalize_whitespace;

use super::{capture_changed, contains_any, lesson, matches_changed, req};

const T: Track = Track::Html;

pub(super) fn lessons() -> Vec<LessonChallenge> {
  vec![
    lesson(T, 1, "What is HTML?",
      Some("<h1>My First Webpage</h1>\n<p>This is my first paragraph in HTML!</p>"),
      vec![
        req("Change the heading text (challenge requirement 1)",
          |code, starter| capture_changed(code, starter, r"<h1>(.*?)</h1>")),
        req("Change the paragraph text to describe yourself (challenge requirement 2)",
          |code, starter| capture_changed(code, starter, r"<p>(.*?)</p>")),
        req("Keep the <h1> heading tag", |code, _| code.contains("<h1>") && code.contains("</h1>")),
        req("Keep the <p> paragraph tag", |code, _| code.contains("<p>") && code.contains("</p>")),
      ],
      "Excellent! You've completed the challenge by personalizing the content with your name and description."),

    lesson(T, 2, "HTML Structure",
      Some("<!DOCTYPE html>\n<html>\n<head>\n    <title>My Page</title>\n</head>\n<body>\n    <h1>Hello World</h1>\n</body>\n</html>"),
      vec![
        req("Include <!DOCTYPE html>", |code, _| code.contains("<!DOCTYPE html>")),
        req("Include <html> tags", |code, _| code.contains("<html>") && code.contains("</html>")),
        req("Include <head> tags", |code, _| code.contains("<head>") && code.contains("</head>")),
        req("Include <body> tags", |code, _| code.contains("<body>") && code.contains("</body>")),
        req("Change the page title to something meaningful",
          |code, starter| capture_changed(code, starter, r"<title>(.*?)</title>")),
      ],
      "Perfect! You've created a complete HTML document structure with your own title."),

    lesson(T, 3, "Headings & Paragraphs",
      Some("<h1>Main Heading</h1>\n<h2>Subheading</h2>\n<p>First paragraph.</p>\n<p>Second paragraph.</p>"),
      vec![
        req("Include an <h1> heading tag", |code, _| code.contains("<h1>")),
        req("Include a subheading (h2 or h3)", |code, _| contains_any(code, &["<h2>", "<h3>"])),
        req("Include at least two paragraphs", |code, _| code.matches("<p>").count() >= 2),
        req("Modify the headings and paragraphs with your own content",
          |code, starter| code != starter && normalize_whitespace(code) != normalize_whitespace(starter)),
      ],
      "Great work! You've organized content with proper heading hierarchy and your own text."),

    lesson(T, 4, "Text Formatting",
      Some("<p>This is <strong>bold</strong> text.</p>\n<p>This is <em>italic</em> text.</p>"),
      vec![
        req("Use <strong> for important text", |code, _| code.contains("<strong>") && code.contains("</strong>")),
        req("Use <em> for emphasized text", |code, _| code.contains("<em>") && code.contains("</em>")),
        req("Change the bold text to your own words",
          |code, starter| capture_changed(code, starter, r"<strong>(.*?)</strong>")),
        req("Change the italic text to your own words",
          |code, starter| capture_changed(code, starter, r"<em>(.*?)</em>")),
      ],
      "Well done! You've applied text formatting with your own content."),

    lesson(T, 5, "Links",
      Some("<a href=\"https://www.slu.edu\">Visit SLU</a>\n<a href=\"https://www.google.com\" target=\"_blank\">Google</a>"),
      vec![
        req("Create at least one link with <a href=\"\">", |code, _| code.contains("<a href=")),
        req("Add target=\"_blank\" to open in new tab", |code, _| code.contains("target=\"_blank\"")),
        req("Modify the link URLs or add your own links",
          |code, starter| matches_changed(code, starter, r#"href="([^"]+)""#)),
      ],
      "Excellent! You've created and customized hyperlinks."),

    lesson(T, 6, "Images",
      Some("<img src=\"https://via.placeholder.com/300\" alt=\"Placeholder image\">"),
      vec![
        req("Include an <img> tag with src attribute", |code, _| code.contains("<img src=")),
        req("Add alt attribute for accessibility", |code, _| code.contains("alt=")),
        req("Change the alt text to describe the image",
          |code, starter| capture_changed(code, starter, r#"alt="([^"]+)""#)),
      ],
      "Perfect! You've added an accessible image with descriptive alt text."),

    lesson(T, 7, "Lists",
      Some("<ul>\n    <li>First item</li>\n    <li>Second item</li>\n    <li>Third item</li>\n</ul>"),
      vec![
        req("Create a list (ul or ol)", |code, _| contains_any(code, &["<ul>", "<ol>"])),
        req("Include at least 3 list items", |code, _| code.matches("<li>").count() >= 3),
        req("Change the list items to your own content",
          |code, starter| matches_changed(code, starter, r"<li>(.*?)</li>")),
      ],
      "Great! You've created a list with your own items."),

    lesson(T, 8, "Tables",
      Some("<table>\n    <tr>\n        <th>Name</th>\n        <th>Age</th>\n    </tr>\n    <tr>\n        <td>John</td>\n        <td>25</td>\n    </tr>\n</table>"),
      vec![
        req("Create a <table> element", |code, _| code.contains("<table>") && code.contains("</table>")),
        req("Include at least 2 table rows with <tr>", |code, _| code.matches("<tr>").count() >= 2),
        req("Add table headers with <th>", |code, _| code.contains("<th>")),
        req("Add table data cells with <td>", |code, _| code.contains("<td>")),
        req("Change the table content to your own data",
          |code, starter| matches_changed(code, starter, r"<t[hd]>(.*?)</t[hd]>")),
      ],
      "Excellent! You've built a properly structured table with your own data."),

    lesson(T, 9, "Forms",
      Some("<form>\n    <input type=\"text\" placeholder=\"Name\">\n    <button type=\"submit\">Submit</button>\n</form>"),
      vec![
        req("Create a <form> element", |code, _| code.contains("<form")),
        req("Include at least one <input> field", |code, _| code.contains("<input")),
        req("Add a submit button", |code, _| contains_any(code, &["<button", "type=\"submit\""])),
        req("Add more form fields or labels to improve the form",
          |code, starter| code.matches("<input").count() > starter.matches("<input").count() || code.contains("<label")),
      ],
      "Well done! You've created an improved form with proper structure."),

    lesson(T, 10, "Semantic HTML",
      Some("<div>\n    <h1>My Website</h1>\n    <p>Content here</p>\n</div>"),
      vec![
        req("Use semantic tags like <header> or <nav>", |code, _| contains_any(code, &["<header>", "<nav>"])),
        req("Use <section> or <article> for content", |code, _| contains_any(code, &["<section>", "<article>"])),
        req("Include a <footer> element", |code, _| code.contains("<footer>")),
        req("Replace generic <div> tags with semantic HTML5 elements", |code, _| {
          !code.contains("<div>") || count_matches(code, r"<header>|<nav>|<section>|<article>|<footer>") >= 3
        }),
      ],
      "Outstanding! You've used semantic HTML5 elements to improve structure and accessibility."),

    lesson(T, 11, "HTML Entities",
      Some("<p>Price: $100</p>\n<p>Copyright notice</p>"),
      vec![
        req("Use &copy; for copyright symbol", |code, _| code.contains("&copy;")),
        req("Use &lt; or &gt; to display < or > symbols", |code, _| contains_any(code, &["&lt;", "&gt;"])),
        req("Use at least 2 different HTML entities", |code, _| count_matches(code, r"&[a-z]+;") >= 2),
      ],
      "Excellent! You've mastered HTML entities and special characters."),

    lesson(T, 12, "Comments",
      Some("<h1>My Code</h1>\n<p>First section</p>\n<p>Second section</p>"),
      vec![
        req("Add HTML comments using <!-- -->", |code, _| code.contains("<!--")),
        req("Include at least 3 comments to organize your code", |code, _| code.matches("<!--").count() >= 3),
        req("Write descriptive comments that explain your code sections", |code, _| {
          all_matches(code, r"<!--(.*?)-->")
            .iter()
            .any(|c| c.chars().count() > 10)
        }),
      ],
      "Great! You've organized your code with helpful comments."),

    lesson(T, 13, "Meta Tags",
      Some("<!DOCTYPE html>\n<html>\n<head>\n    <title>My Site</title>\n</head>\n<body>\n    <h1>Content</h1>\n</body>\n</html>"),
      vec![
        req("Include <meta> tags in the head section", |code, _| code.contains("<meta")),
        req("Add a meta description tag", |code, _| code.contains("name=\"description\"")),
        req("Include viewport meta tag for responsive design", |code, _| code.contains("name=\"viewport\"")),
        req("Add charset meta tag (e.g., UTF-8)", |code, _| code.contains("charset=")),
      ],
      "Perfect! Your page is now optimized for search engines and mobile devices."),

    lesson(T, 14, "Multimedia",
      Some("<audio src=\"audio.mp3\"></audio>"),
      vec![
        req("Include a <video> or <audio> tag", |code, _| contains_any(code, &["<video", "<audio"])),
        req("Add controls attribute to media elements", |code, _| code.contains("controls")),
        req("Use <source> tags or src attribute for media files", |code, _| contains_any(code, &["<source", "src="])),
        req("Add fallback text or multiple <source> elements for better compatibility", |code, starter| {
          code != starter && (code.to_lowercase().contains("your browser") || code.matches("<source").count() > 1)
        }),
      ],
      "Excellent! You've successfully embedded multimedia with proper fallbacks."),

    lesson(T, 15, "Iframes",
      Some("<p>Click to visit a website</p>"),
      vec![
        req("Create an <iframe> element", |code, _| code.contains("<iframe")),
        req("Add src attribute to embed content", |code, _| code.contains("src=")),
        req("Include title or dimensions for better accessibility", |code, _| contains_any(code, &["title=", "width="])),
        req("Use a real embeddable URL (YouTube, Google Maps, etc.)",
          |code, _| contains_any(code, &["youtube.com", "maps.google.com", "https://"])),
      ],
      "Outstanding! You've completed all HTML lessons and mastered embedding external content!"),
  ]
}
