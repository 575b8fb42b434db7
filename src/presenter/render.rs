//! Text-to-HTML rewrite of generated course content.
//!
//! Four ordered whole-string substitutions, each applied once over the output
//! of the previous one. This is not a markdown parser: nothing is escaped and
//! list items are emitted bare, without a `<ul>`/`<ol>` wrapper.

use crate::models::GenerateReply;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n- (.*)").unwrap());
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\d+\. (.*)").unwrap());
static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n").unwrap());

const HEADING_HTML: &str = "<h2 class='text-xl font-semibold mt-6 mb-2 text-indigo-800'>${1}</h2>";
const ITEM_HTML: &str = "<li class='text-gray-700'>${1}</li>";
const LINE_BREAK_HTML: &str = "<br/>";

const OUTER_CLASS: &str = "bg-white shadow-lg rounded-3xl p-6 prose max-w-none text-gray-800";
const INNER_CLASS: &str = "prose max-w-none";

/// Apply the four rewrites to raw content.
pub fn to_html(content: &str) -> String {
    let html = HEADING.replace_all(content, HEADING_HTML);
    let html = BULLET_ITEM.replace_all(&html, ITEM_HTML);
    let html = NUMBERED_ITEM.replace_all(&html, ITEM_HTML);
    NEWLINE.replace_all(&html, LINE_BREAK_HTML).into_owned()
}

/// Markup for the results area. Empty when there is nothing to show.
pub fn render_content(reply: Option<&GenerateReply>) -> String {
    let Some(content) = reply
        .and_then(|r| r.content.as_deref())
        .filter(|c| !c.is_empty())
    else {
        return String::new();
    };

    format!(
        "\n<div class=\"{OUTER_CLASS}\">\n  <div class=\"{INNER_CLASS}\">\n    {}\n  </div>\n</div>\n",
        to_html(content)
    )
}
