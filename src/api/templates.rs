//! Embedded page templates.
//!
//! Templates are complete HTML documents embedded into the binary at compile
//! time (read from `templates/` at runtime in debug builds). The listing page
//! is the only one with a data slot; everything else is served as-is.

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;
use rust_embed::RustEmbed;

use crate::db::Project;

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct Templates;

/// Look up an embedded template by page name ("about" -> `templates/about.html`).
fn template(name: &str) -> Option<String> {
    let file = Templates::get(&format!("{name}.html"))?;
    Some(String::from_utf8_lossy(&file.data).into_owned())
}

fn html_response(status: StatusCode, body: String) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}

/// Render a static page by name.
///
/// A missing template means the binary was built without it, which surfaces
/// as a 500 rather than a panic.
pub fn page(name: &str) -> Response {
    match template(name) {
        Some(body) => html_response(StatusCode::OK, body),
        None => html_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("template '{name}' is missing"),
        ),
    }
}

/// Render the listing page with the given projects, already ordered
/// newest-first by the storage layer.
pub fn projects_page(projects: &[Project]) -> Response {
    let Some(body) = template("projects") else {
        return html_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "template 'projects' is missing".to_string(),
        );
    };

    let entries = if projects.is_empty() {
        r#"<p class="empty">No projects yet.</p>"#.to_string()
    } else {
        projects
            .iter()
            .map(project_entry)
            .collect::<Vec<_>>()
            .join("\n")
    };

    html_response(StatusCode::OK, body.replace("{{ projects }}", &entries))
}

fn project_entry(project: &Project) -> String {
    format!(
        concat!(
            "<article class=\"project\">\n",
            "  <img src=\"/static/images/{image}\" alt=\"{title}\">\n",
            "  <h2>{title}</h2>\n",
            "  <p>{description}</p>\n",
            "  <time>{created_at}</time>\n",
            "</article>"
        ),
        image = escape_html(&project.image_file_name),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        created_at = escape_html(&project.created_at),
    )
}

/// Escape text for interpolation into HTML.
///
/// Stored values stay verbatim in the database; escaping happens only here,
/// at render time.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
