use crate::domain::{catalog::Catalog, speech::PreviewResult};
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub text: String,
    pub level: String,
}

/// What the form page shows besides the form itself
#[derive(Debug, Default)]
pub struct PageContext {
    pub flash: Option<FlashMessage>,
    pub preview: Option<PreviewResult>,
    pub uploaded_text: String,
    pub translated_text: String,
}

/// Render the single form page.
pub fn render(catalog: &Catalog, context: &PageContext) -> Result<String, std::fmt::Error> {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>EchoVerse</title>\n</head>\n<body>\n<h1>EchoVerse</h1>\n",
    );

    if let Some(flash) = &context.flash {
        let level = match flash.level.as_str() {
            "danger" => "danger",
            _ => "warning",
        };
        writeln!(
            html,
            "<p class=\"flash flash-{}\">{}</p>",
            level,
            escape_html(&flash.text)
        )?;
    }

    html.push_str(
        "<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
         <textarea name=\"text\" rows=\"6\" cols=\"60\"></textarea>\n\
         <input type=\"file\" name=\"file\" accept=\".txt,.pdf\">\n\
         <input type=\"number\" name=\"speed\" value=\"180\" min=\"50\" max=\"400\">\n",
    );

    html.push_str("<select name=\"tone\">\n");
    for tone in catalog.tones() {
        let name = escape_html(&tone.name);
        writeln!(html, "<option value=\"{0}\">{0}</option>", name)?;
    }
    html.push_str("</select>\n<select name=\"language\">\n");
    for language in catalog.languages() {
        let name = escape_html(&language.name);
        writeln!(html, "<option value=\"{0}\">{0}</option>", name)?;
    }
    html.push_str(
        "</select>\n\
         <label><input type=\"checkbox\" name=\"translate\"> Translate</label>\n\
         <button type=\"submit\" name=\"action\" value=\"preview\">Preview</button>\n\
         <button type=\"submit\" name=\"action\" value=\"download\">Download</button>\n\
         </form>\n",
    );

    if let Some(preview) = &context.preview {
        writeln!(
            html,
            "<audio controls src=\"{}\"></audio>",
            preview.data_uri()
        )?;
    }

    if !context.uploaded_text.is_empty() {
        writeln!(
            html,
            "<h2>Uploaded text</h2>\n<pre>{}</pre>",
            escape_html(&context.uploaded_text)
        )?;
    }

    if !context.translated_text.is_empty() {
        writeln!(
            html,
            "<h2>Spoken text</h2>\n<pre>{}</pre>",
            escape_html(&context.translated_text)
        )?;
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
