//! Minimal server-side HTML rendering.
//!
//! Pages are plain HTML strings assembled into a shared shell. The shell
//! carries the navigation state (`is_logged_in`) and the one-shot flash
//! messages drained from the session for this render.

use std::collections::BTreeMap;

use axum::response::Html;
use facultydir_session::Session;

/// Per-render context consumed by the page shell.
#[derive(Debug)]
pub struct PageContext {
    pub title: String,
    pub is_logged_in: bool,
    pub flash: BTreeMap<String, Vec<String>>,
}

impl PageContext {
    /// Build the context for the page about to render.
    ///
    /// Draining the flash here is the one consuming read: messages queued by
    /// an earlier request survive the redirect and die with this render.
    pub fn build(title: impl Into<String>, session: &Session) -> Self {
        Self {
            title: title.into(),
            is_logged_in: session.is_authenticated(),
            flash: session.take_flash(),
        }
    }
}

/// Escape a value for interpolation into HTML text or attributes.
pub fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn flash_block(flash: &BTreeMap<String, Vec<String>>) -> String {
    let mut block = String::new();
    for (category, messages) in flash {
        for message in messages {
            block.push_str(&format!(
                "<div class=\"flash flash-{}\">{}</div>\n",
                html_escape(category),
                html_escape(message),
            ));
        }
    }
    block
}

fn nav(is_logged_in: bool) -> &'static str {
    if is_logged_in {
        concat!(
            "<nav><a href=\"/\">Faculty</a> <a href=\"/admin\">Admin</a> ",
            "<form method=\"post\" action=\"/logout\" class=\"inline\">",
            "<button type=\"submit\">Sign out</button></form></nav>"
        )
    } else {
        "<nav><a href=\"/login\">Sign in</a></nav>"
    }
}

/// Render `body` inside the page shell.
pub fn page(ctx: &PageContext, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/styles.css\">\n</head>\n<body>\n{nav}\n{flash}<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = html_escape(&ctx.title),
        nav = nav(ctx.is_logged_in),
        flash = flash_block(&ctx.flash),
        body = body,
    ))
}
