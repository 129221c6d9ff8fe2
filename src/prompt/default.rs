//! Built-in site generation prompt, used when no `prompt.txt` override exists.

pub const DEFAULT_PROMPT: &str = "You are a designer and frontend developer.

You are inside a folder that already contains:
- data.json (public company data)
- logo image
- post images

Use ONLY local files.
Do not fetch anything.

Analyze data.json and the images, then generate a modern website.

RULES:
- Use only facts found in data.json.
- You may generate descriptive text, but do NOT invent:
  phone numbers, emails, addresses, prices, dates, or statistics.
- If factual data is missing, simply omit it.

DESIGN:
- Take the main color palette from the logo.
- Support colors may come from post images.
- Reduce colors into a minimal, beautiful palette.
- Choose layout and style freely (do not reuse the same structure every time).
- Use icons, not emojis.
- Clean, modern, responsive design.

CONTENT:
- Decide sections yourself.
- Add extra meaningful content related to the company's industry.
- Keep tone natural and realistic (no hype).

LANGUAGES:
- Armenian (default), English, Russian.
- All text must exist in all three languages.
- Switch language with JavaScript.

OUTPUT:
- Create exactly 3 files:
  index.html
  styles.css
  script.js
- Use vanilla HTML, CSS, JS.
- Images must be referenced via relative paths.
- Output code only.
- Separate files with comments:
  /* ===== index.html ===== */
  /* ===== styles.css ===== */
  /* ===== script.js ===== */
";
