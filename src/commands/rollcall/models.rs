use serde::{Deserialize, Serialize};

/// Top-level comments container returned under `story.comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentConnection {
    pub edges: Vec<CommentEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentEdge {
    pub node: RawCommentNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommentNode {
    pub body: String,
    pub author: Author,
    pub action_counts: ActionCounts,
    /// Coral stops sending this field once a reply chain gets deep enough.
    #[serde(default)]
    pub replies: Option<ReplyConnection>,
}

impl RawCommentNode {
    /// Direct replies to this comment.
    ///
    /// An absent `replies` field, an absent `edges` list and an empty `edges`
    /// list all mean "no children".
    pub fn reply_edges(&self) -> &[CommentEdge] {
        self.replies
            .as_ref()
            .and_then(|r| r.edges.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyConnection {
    #[serde(default)]
    pub edges: Option<Vec<CommentEdge>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionCounts {
    pub reaction: ReactionCount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionCount {
    pub total: u64,
}

/// A comment trimmed down to the fields the report cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleComment {
    pub recs: u64,
    pub author: String,
    pub body: String,
}

impl From<&RawCommentNode> for SimpleComment {
    fn from(node: &RawCommentNode) -> Self {
        Self {
            recs: node.action_counts.reaction.total,
            author: node.author.username.clone(),
            body: node.body.clone(),
        }
    }
}
