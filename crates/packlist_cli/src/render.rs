//! Plain-text views over `PackingApp` state.

use packlist_core::{Item, PackingApp};

/// One list row: `#<id> [x] <qty> <description>`.
pub fn item_line(item: &Item) -> String {
    let mark = if item.packed { 'x' } else { ' ' };
    format!("#{} [{}] {} {}", item.id, mark, item.quantity, item.description)
}

/// Full list in the active sort order, or a placeholder when empty.
pub fn list_view(app: &PackingApp) -> String {
    let items = app.visible_items();
    if items.is_empty() {
        return "(no items)".to_string();
    }
    let mut out = format!("sorted by {}\n", app.sort());
    let rows: Vec<String> = items.into_iter().map(item_line).collect();
    out.push_str(&rows.join("\n"));
    out
}

/// Current form state, e.g. `[Update] 2 x "Sun Hat"`.
pub fn form_view(app: &PackingApp) -> String {
    let form = app.form();
    format!(
        "[{}] {} x \"{}\"",
        form.submit_label(),
        form.quantity(),
        form.description()
    )
}
