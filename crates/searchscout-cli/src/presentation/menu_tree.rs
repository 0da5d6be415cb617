//! Renders context-menu items as an indented tree.

use searchscout_core::MenuItemSpec;

/// Render items in creation order, children under their parent.
///
/// Each top-level entry is followed by its children with box-drawing
/// connectors. Leaf entries show their id, which `search` accepts.
pub fn render_menu_tree(items: &[MenuItemSpec]) -> String {
    if items.is_empty() {
        return "(menu is empty)".to_string();
    }

    let mut out = String::new();
    for top in items.iter().filter(|i| i.parent_id.is_none()) {
        let children: Vec<&MenuItemSpec> = items
            .iter()
            .filter(|i| i.parent_id.as_deref() == Some(top.id.as_str()))
            .collect();

        if children.is_empty() {
            out.push_str(&format!("{}  ({})\n", top.title, top.id));
        } else {
            out.push_str(&top.title);
            out.push('\n');
        }
        for (idx, child) in children.iter().enumerate() {
            let connector = if idx + 1 == children.len() {
                "└─"
            } else {
                "├─"
            };
            out.push_str(&format!("  {connector} {}  ({})\n", child.title, child.id));
        }
    }
    out.trim_end().to_string()
}
