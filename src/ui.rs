use crate::models::{DATE_FORMAT, Submission};
use crate::session::SessionTracker;
use chrono::Local;

pub const CATEGORY_OPTIONS: [&str; 4] = ["fitness", "career", "personal", "custom"];

/// Values echoed back into the form after a rejected submission.
#[derive(Debug, Default)]
pub struct FormValues<'a> {
    pub category: &'a str,
    pub custom_category: &'a str,
    pub goal: &'a str,
}

/// Renders the page; `tracker` is `None` for visitors who have not
/// submitted anything yet.
pub fn render_index(
    tracker: Option<&SessionTracker>,
    form: &FormValues<'_>,
    error: Option<&str>,
) -> String {
    let result = tracker
        .and_then(|tracker| {
            tracker
                .last_submission()
                .map(|submission| render_result(submission, tracker))
        })
        .unwrap_or_default();

    let selected = if CATEGORY_OPTIONS.contains(&form.category) {
        form.category
    } else {
        CATEGORY_OPTIONS[0]
    };

    INDEX_HTML
        .replace("{{OPTIONS}}", &render_options(selected))
        .replace("{{CUSTOM_HIDDEN}}", if selected == "custom" { "" } else { "hidden" })
        .replace("{{CUSTOM}}", &escape_html(form.custom_category))
        .replace("{{GOAL}}", &escape_html(form.goal))
        .replace("{{ERROR}}", &render_error(error))
        .replace("{{RESULT}}", &result)
}

fn render_options(selected: &str) -> String {
    CATEGORY_OPTIONS
        .iter()
        .map(|option| {
            let marker = if *option == selected { " selected" } else { "" };
            format!("<option value=\"{option}\"{marker}>{}</option>", capitalize(option))
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn render_error(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            "<div class=\"status\" data-type=\"error\" role=\"alert\">{}</div>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn render_result(submission: &Submission, tracker: &SessionTracker) -> String {
    let today = Local::now().format(DATE_FORMAT).to_string();
    let history = tracker
        .history()
        .map(|record| {
            format!(
                "<li><strong>{}</strong> - {}: {}</li>",
                escape_html(&record.date_label()),
                escape_html(&record.category),
                escape_html(&record.goal)
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    RESULT_HTML
        .replace("{{TODAY}}", &today)
        .replace("{{CATEGORY}}", &escape_html(&submission.record.category))
        .replace("{{GOAL}}", &escape_html(&submission.record.goal))
        .replace("{{TIP}}", &escape_html(&submission.tip))
        .replace("{{QUOTE}}", &escape_html(&submission.quote))
        .replace("{{IMAGE}}", &escape_html(&submission.image))
        .replace("{{PROGRESS}}", &tracker.progress().to_string())
        .replace("{{COUNT}}", &tracker.len().to_string())
        .replace("{{HISTORY}}", &history)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // keeps user text from forming template placeholders
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const RESULT_HTML: &str = r#"<section class="result">
      <h2>Your Motivation for {{TODAY}}</h2>
      <div class="columns">
        <div class="details">
          <p><strong>Goal Category</strong>: {{CATEGORY}}</p>
          <p><strong>Your Goal</strong>: {{GOAL}}</p>
          <h3>Daily Progress Tip</h3>
          <div class="tip-box" id="tip">{{TIP}}</div>
          <h3>Motivational Quote</h3>
          <div class="quote-box" id="quote"><strong>{{QUOTE}}</strong></div>
        </div>
        <figure class="visual">
          <img src="{{IMAGE}}" alt="Inspiration visual" />
          <figcaption>Inspiration Visual</figcaption>
        </figure>
      </div>

      <h3>Your Progress</h3>
      <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{{PROGRESS}}">
        <div class="progress-fill" style="width: {{PROGRESS}}%"></div>
      </div>
      <p id="progress-text">You're {{PROGRESS}}% closer to your goal!</p>

      <details class="history">
        <summary>View Goal History ({{COUNT}})</summary>
        <ul id="history">
          {{HISTORY}}
        </ul>
      </details>
    </section>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Ultimate Goal Motivator</title>
  <style>
    :root {
      --bg: #f0f2f6;
      --ink: #262730;
      --accent: #4caf50;
      --accent-dark: #45a049;
      --tip: #e6f3ff;
      --card: #ffffff;
      --shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Source Sans Pro", "Segoe UI", sans-serif;
      display: grid;
      grid-template-columns: minmax(260px, 320px) 1fr;
    }

    aside {
      background: var(--card);
      padding: 28px 22px;
      box-shadow: var(--shadow);
      display: grid;
      align-content: start;
      gap: 14px;
    }

    main {
      padding: 36px;
      display: grid;
      align-content: start;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    label {
      font-size: 0.9rem;
      font-weight: 600;
    }

    select,
    input[type="text"] {
      width: 100%;
      padding: 10px 12px;
      border-radius: 8px;
      border: 1px solid #cfd3dc;
      font-size: 1rem;
    }

    [hidden] {
      display: none;
    }

    button {
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 10px;
      padding: 10px 20px;
      font-size: 16px;
      cursor: pointer;
    }

    button:hover {
      background: var(--accent-dark);
    }

    button.secondary {
      background: transparent;
      color: #6b645d;
      border: 1px solid #cfd3dc;
      font-size: 0.85rem;
    }

    .status[data-type="error"] {
      color: #c63b2b;
      background: #fdecea;
      border-radius: 8px;
      padding: 10px 12px;
    }

    .result {
      display: grid;
      gap: 12px;
    }

    .columns {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 20px;
    }

    .tip-box {
      background: var(--tip);
      border-radius: 10px;
      padding: 15px;
    }

    .quote-box {
      background: var(--card);
      border-radius: 10px;
      padding: 20px;
      box-shadow: var(--shadow);
    }

    .visual {
      margin: 0;
    }

    .visual img {
      width: 100%;
      border-radius: 10px;
    }

    .visual figcaption {
      text-align: center;
      color: #8b857d;
      font-size: 0.85rem;
    }

    .progress {
      height: 14px;
      background: #dfe3ea;
      border-radius: 999px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .history ul {
      padding-left: 18px;
    }

    @media (max-width: 760px) {
      body,
      .columns {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <aside>
    <h2>Set Your Goal</h2>
    <form id="goal-form" method="post" action="/goals">
      <label for="category">Choose your goal category:</label>
      <select id="category" name="category">
          {{OPTIONS}}
      </select>
      <div id="custom-field" {{CUSTOM_HIDDEN}}>
        <label for="custom_category">Enter your custom goal category:</label>
        <input id="custom_category" name="custom_category" type="text" value="{{CUSTOM}}" />
      </div>
      <label for="goal">Describe your specific goal:</label>
      <input id="goal" name="goal" type="text" value="{{GOAL}}" />
      <button type="submit">Generate Motivation</button>
    </form>
    {{ERROR}}
    <form method="post" action="/session/end">
      <button class="secondary" type="submit">Start over</button>
    </form>
  </aside>

  <main>
    <header>
      <h1>Ultimate Goal Motivator</h1>
      <p class="subtitle">Your personalized hub for daily inspiration and progress tracking!</p>
    </header>
    {{RESULT}}
  </main>

  <script>
    const select = document.getElementById('category');
    const customField = document.getElementById('custom-field');
    select.addEventListener('change', () => {
      customField.hidden = select.value !== 'custom';
    });
  </script>
</body>
</html>
"#;
