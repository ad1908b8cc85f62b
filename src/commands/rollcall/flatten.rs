use super::models::{CommentConnection, CommentEdge, SimpleComment};

/// Flattens the nested reply tree into a single pre-order list.
///
/// Each comment is emitted before its replies, and each reply subtree is
/// fully flattened before the next sibling.
pub fn flatten_comments(comments: &CommentConnection) -> Vec<SimpleComment> {
    let mut result = Vec::new();
    flatten_edges(&comments.edges, &mut result);
    result
}

fn flatten_edges(edges: &[CommentEdge], result: &mut Vec<SimpleComment>) {
    for edge in edges {
        result.push(SimpleComment::from(&edge.node));
        flatten_edges(edge.node.reply_edges(), result);
    }
}
