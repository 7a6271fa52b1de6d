use formula_parser::parser::ast::Node;
use std::collections::HashSet;

/// Returns the names of every variable in the tree.
pub fn collect_variables<T>(node: &Node<T>) -> HashSet<String> {
    node.post_order_iter()
        .filter_map(|node| match node {
            Node::Variable(variable) => Some(variable.name.clone()),
            _ => None,
        })
        .collect()
}
