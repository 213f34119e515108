//! Output formatting utilities

use crate::application::CompositionView;
use crate::domain::tags::CompositionMap;

/// Format matching page ids for display
pub fn format_page_list(pages: &[String]) -> String {
    if pages.is_empty() {
        return "No pages found".to_string();
    }

    let mut output = String::new();
    for page in pages {
        output.push_str(page);
        output.push('\n');
    }
    output
}

/// Format matching page ids as a JSON array
pub fn format_page_list_json(pages: &[String]) -> String {
    serde_json::Value::from(pages.to_vec()).to_string()
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

/// Format every stored composition as `tag = components`
pub fn format_composition_list(compositions: &CompositionMap) -> String {
    if compositions.is_empty() {
        return "No compositions defined".to_string();
    }

    let mut output = String::new();
    for (tag, text) in compositions {
        output.push_str(&format!("{} = {}\n", tag, text));
    }
    output
}

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

/// Format the relations of one tag
pub fn format_composition_view(view: &CompositionView) -> String {
    format!(
        "Tag: {}\nComponents: {}\nDependents: {}\nNamespace members: {}\n",
        view.tag,
        join_or_none(&view.components),
        join_or_none(&view.dependents),
        join_or_none(&view.namespace_members)
    )
}
