use crate::outline::OutlineNode;

/// Render the outline forest as an indented Markdown list
pub fn render_markdown(nodes: &[OutlineNode]) -> String {
    let mut md = String::new();
    for node in nodes {
        append_node(&mut md, node, 0);
    }
    md
}

fn append_node(md: &mut String, node: &OutlineNode, indent: usize) {
    let spaces = "  ".repeat(indent);
    md.push_str(&format!("{}* [{}]({})\n", spaces, node.label, node.anchor));

    for child in &node.children {
        append_node(md, child, indent + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_markdown_list() {
        let forest = vec![OutlineNode {
            label: "A".to_string(),
            anchor: "#a".to_string(),
            children: vec![OutlineNode::new("B".to_string(), "b")],
        }];

        let md = render_markdown(&forest);
        assert_eq!(md, "* [A](#a)\n  * [B](#b)\n");
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(render_markdown(&[]), "");
    }
}
