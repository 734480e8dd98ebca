use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML with raw HTML in the source escaped.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            event => event,
        });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(source: String) -> Element {
    let rendered = render_markdown(&source);

    rsx!(div {
        class: "prose max-w-none",
        dangerous_inner_html: "{rendered}",
    })
}
