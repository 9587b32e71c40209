const PROJECT_URL: &str = "https://github.com/rxtech-lab/resume-mcp";

const TAGLINE: &str =
    "A Model Context Protocol server for AI agents to manage resume data and generate PDF previews";

/// Feature cards, verbatim from the product page.
const FEATURES: &[(&str, &str)] = &[
    (
        "Resume Management",
        "Create, update, and manage resume data with flexible JSON features",
    ),
    (
        "PDF Generation",
        "Generate beautiful PDF previews with customizable templates",
    ),
    (
        "MCP Tools",
        "Comprehensive set of tools for AI agents to interact with resume data",
    ),
    (
        "Local Storage",
        "SQLite database for secure local data storage with automatic migrations",
    ),
    (
        "REST API",
        "Built-in HTTP server for serving HTML previews and template rendering",
    ),
    (
        "Templates",
        "Flexible Go template system with CSS styling support",
    ),
];

const QUICK_START: &[(&str, &str)] = &[
    ("Install", "Download and install the macOS package"),
    ("Configure", "Set up MCP server in your AI agent"),
    ("Build", "Start creating and managing resumes"),
];

/// Escapes text for interpolation into HTML.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page.
///
/// `tag` and `download_url` come from the release fetch; either may be
/// absent. A missing URL renders the disabled control with a pointer to the
/// project page instead of a link.
pub fn render_page(tag: Option<&str>, download_url: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Resume MCP</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<header>
<h1>Resume MCP</h1>
<p class="tagline">{tagline}</p>
</header>
{download}
{features}
{quick_start}
{footer}
</div>
</body>
</html>
"#,
        css = STYLESHEET,
        tagline = TAGLINE,
        download = render_download_section(tag, download_url),
        features = render_features(),
        quick_start = render_quick_start(),
        footer = render_footer(),
    )
}

fn render_download_section(tag: Option<&str>, download_url: Option<&str>) -> String {
    let control = match download_url {
        Some(url) => {
            let label = match tag {
                Some(tag) if !tag.is_empty() => format!("Download {}", escape(tag)),
                _ => "Download Latest".to_string(),
            };
            format!(
                r#"<a class="button primary" href="{}">{}</a>"#,
                escape(url),
                label
            )
        }
        None => r#"<span class="button primary disabled" aria-disabled="true">Download Unavailable</span>"#.to_string(),
    };

    let fallback_note = if download_url.is_none() {
        format!(
            r#"
<p class="note">Unable to fetch latest release. Please visit <a href="{PROJECT_URL}">GitHub</a> for manual download.</p>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="download card">
<h2>Download for macOS</h2>
<p>Get the latest version and start building resume management tools</p>
<div class="actions">
{control}
<a class="button" href="{PROJECT_URL}">View on GitHub</a>
</div>{fallback_note}
</section>"#
    )
}

fn render_features() -> String {
    let cards: String = FEATURES
        .iter()
        .map(|(title, description)| {
            format!(
                r#"<div class="card">
<h3>{title}</h3>
<p>{description}</p>
</div>
"#
            )
        })
        .collect();

    format!(
        r#"<section class="features">
<h2>Features</h2>
<p>Comprehensive MCP tools for resume management and PDF generation</p>
<div class="grid">
{cards}</div>
</section>"#
    )
}

fn render_quick_start() -> String {
    let steps: String = QUICK_START
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            format!(
                r#"<div class="step">
<span class="step-number">{number}</span>
<h3>{title}</h3>
<p>{description}</p>
</div>
"#,
                number = i + 1,
            )
        })
        .collect();

    format!(
        r#"<section class="quick-start card">
<h2>Quick Start</h2>
<p>Get started with Resume MCP in three simple steps</p>
<div class="grid">
{steps}</div>
</section>"#
    )
}

fn render_footer() -> String {
    format!(
        r#"<footer>
<nav>
<a href="{PROJECT_URL}">GitHub</a>
<a href="{PROJECT_URL}/releases">Releases</a>
<a href="{PROJECT_URL}/issues">Issues</a>
</nav>
<p>Built by RxTech Lab</p>
</footer>"#
    )
}

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #1a1a1a; background: #fff; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
header { padding: 4rem 0 6rem; text-align: center; }
header h1 { font-size: 2.75rem; margin: 0 0 1rem; }
.tagline { font-size: 1.25rem; color: #666; max-width: 42rem; margin: 0 auto; }
section { margin-bottom: 6rem; text-align: center; }
.card { border: 1px solid #e5e5e5; border-radius: 0.75rem; padding: 1.5rem; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); margin-top: 2rem; }
.grid .card, .step { text-align: center; }
.actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.button { display: inline-block; padding: 0.75rem 1.5rem; border: 1px solid #1a1a1a; border-radius: 0.5rem; text-decoration: none; color: inherit; }
.button.primary { background: #1a1a1a; color: #fff; }
.button.disabled { opacity: 0.5; cursor: not-allowed; }
.note { font-size: 0.875rem; color: #666; margin-top: 0.5rem; }
.step-number { display: inline-flex; width: 3rem; height: 3rem; border-radius: 50%; background: #f0f0f0; align-items: center; justify-content: center; font-weight: 600; }
footer { padding-bottom: 3rem; text-align: center; color: #666; }
footer nav { display: flex; gap: 1.5rem; justify-content: center; margin-bottom: 1rem; }
footer a { color: inherit; }
"#;
