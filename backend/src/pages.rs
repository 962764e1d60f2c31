//! HTML pages for the coordinate form and its result.

use crate::form::{FormError, SegmentForm, FIELDS};
use segment_core::Relationship;

/// Minimal escaping for text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n{}\n<footer>segment-core {}</footer>\n</body>\n</html>\n",
        escape_html(title),
        body,
        segment_core::version()
    )
}

fn form_fields(form: &SegmentForm) -> String {
    let mut html = String::new();
    for (segment, fields) in FIELDS.chunks(4).enumerate() {
        html.push_str(&format!(
            "<fieldset>\n<legend>Segment {}</legend>\n",
            segment + 1
        ));
        for field in fields {
            html.push_str(&format!(
                "<label>{f} <input type=\"text\" inputmode=\"decimal\" name=\"{f}\" value=\"{v}\" required></label>\n",
                f = field,
                v = escape_html(form.value(field))
            ));
        }
        html.push_str("</fieldset>\n");
    }
    html
}

fn form_block(form: &SegmentForm) -> String {
    format!(
        "<form method=\"post\" action=\"/calculate\">\n{}<button type=\"submit\">Calculate</button>\n</form>",
        form_fields(form)
    )
}

/// Entry form, optionally showing why the previous submission was rejected.
pub fn form_page(form: &SegmentForm, error: Option<&FormError>) -> String {
    let mut body = String::from("<h1>Segment intersection</h1>\n<p>Enter the endpoints of two segments.</p>\n");
    if let Some(error) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(&error.to_string())
        ));
    }
    body.push_str(&form_block(form));
    layout("Segment intersection", &body)
}

/// Summary, diagram and the pre-filled form for another try.
pub fn result_page(form: &SegmentForm, relationship: &Relationship, svg: &str) -> String {
    let body = format!(
        "<h1>Segment intersection</h1>\n<p class=\"summary {}\">{}</p>\n<figure>\n{}</figure>\n{}",
        relationship.kind(),
        escape_html(&relationship.summary()),
        svg,
        form_block(form)
    );
    layout("Segment intersection result", &body)
}
