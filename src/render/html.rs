use crate::outline::OutlineNode;

/// Render the outline forest as nested `<ul>`/`<li>` markup.
///
/// One list item per node; children go in a nested `<ul>` inside the
/// parent's `<li>`. Returns an empty string for an empty forest so that
/// an outline-free page gets no stray empty list.
pub fn render_html(nodes: &[OutlineNode]) -> String {
    if nodes.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul>\n");
    for node in nodes {
        html.push_str(&node_html(node));
    }
    html.push_str("</ul>\n");
    html
}

fn node_html(node: &OutlineNode) -> String {
    let mut html = format!(
        "<li><a href=\"{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(&node.anchor),
        html_escape::encode_text(&node.label)
    );

    if !node.children.is_empty() {
        html.push_str("\n<ul>\n");
        for child in &node.children {
            html.push_str(&node_html(child));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</li>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str, id: &str, children: Vec<OutlineNode>) -> OutlineNode {
        let mut n = OutlineNode::new(label.to_string(), id);
        n.children = children;
        n
    }

    #[test]
    fn test_empty_forest_renders_nothing() {
        assert_eq!(render_html(&[]), "");
    }

    #[test]
    fn test_flat_list() {
        let forest = vec![node("A", "a", vec![]), node("B", "b", vec![])];
        let html = render_html(&forest);

        assert!(html.starts_with("<ul>"));
        assert!(html.contains("<li><a href=\"#a\">A</a></li>"));
        assert!(html.contains("<li><a href=\"#b\">B</a></li>"));
        assert!(html.trim_end().ends_with("</ul>"));
    }

    #[test]
    fn test_nested_list() {
        let forest = vec![node("A", "a", vec![node("B", "b", vec![])])];
        let html = render_html(&forest);

        let outer = html.find("<li><a href=\"#a\">A</a>").unwrap();
        let inner = html.find("<li><a href=\"#b\">B</a></li>").unwrap();
        assert!(outer < inner);
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_label_is_escaped() {
        let forest = vec![node("Tips & <tricks>", "tips", vec![])];
        let html = render_html(&forest);

        assert!(html.contains("Tips &amp; &lt;tricks&gt;"));
    }
}
