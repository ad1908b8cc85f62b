//! Builders for comment trees used across rollcall tests.

use super::models::{
    ActionCounts, Author, CommentConnection, CommentEdge, RawCommentNode, ReactionCount,
    ReplyConnection, SimpleComment,
};

/// A leaf comment with no `replies` field, as Coral sends for deep chains.
pub fn node(author: &str, recs: u64, body: &str) -> CommentEdge {
    CommentEdge {
        node: RawCommentNode {
            body: body.to_string(),
            author: Author {
                username: author.to_string(),
            },
            action_counts: ActionCounts {
                reaction: ReactionCount { total: recs },
            },
            replies: None,
        },
    }
}

pub fn node_with_replies(
    author: &str,
    recs: u64,
    body: &str,
    replies: Vec<CommentEdge>,
) -> CommentEdge {
    let mut edge = node(author, recs, body);
    edge.node.replies = Some(ReplyConnection {
        edges: Some(replies),
    });
    edge
}

pub fn connection(edges: Vec<CommentEdge>) -> CommentConnection {
    CommentConnection { edges }
}

pub fn comment(author: &str, recs: u64, body: &str) -> SimpleComment {
    SimpleComment {
        recs,
        author: author.to_string(),
        body: body.to_string(),
    }
}
