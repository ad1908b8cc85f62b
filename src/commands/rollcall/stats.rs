use std::collections::HashMap;

use serde::Serialize;

use super::models::SimpleComment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommenterStats {
    pub author: String,
    pub comments: usize,
    pub top_comment: SimpleComment,
    pub total_recs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Ordered by descending comment count; equal counts keep first-seen order.
    pub commenters: Vec<CommenterStats>,
    /// Every per-author top comment sharing the highest `recs`.
    pub top_comments: Vec<SimpleComment>,
}

/// Groups the flattened comments by author and computes per-author and
/// overall aggregates.
pub fn comment_statistics(comments: &[SimpleComment]) -> StatsReport {
    let mut commenters: Vec<CommenterStats> = group_by_author(comments)
        .into_iter()
        .filter_map(|(author, group)| commenter_stats(author, &group))
        .collect();

    // Vec::sort_by is stable.
    commenters.sort_by(|a, b| b.comments.cmp(&a.comments));

    let top_comments = top_comments(&commenters);

    StatsReport {
        commenters,
        top_comments,
    }
}

/// Buckets comments by author, keeping authors in first-seen order and each
/// bucket in encounter order.
fn group_by_author(comments: &[SimpleComment]) -> Vec<(&str, Vec<&SimpleComment>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&SimpleComment>)> = Vec::new();

    for comment in comments {
        let author = comment.author.as_str();
        let slot = *index.entry(author).or_insert_with(|| {
            groups.push((author, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(comment);
    }

    groups
}

fn commenter_stats(author: &str, group: &[&SimpleComment]) -> Option<CommenterStats> {
    let top_comment = top_comment(group)?;
    Some(CommenterStats {
        author: author.to_string(),
        comments: group.len(),
        top_comment: top_comment.clone(),
        total_recs: group.iter().map(|c| c.recs).sum(),
    })
}

/// Highest-`recs` comment in the group. Only a strictly greater count
/// replaces the current best, so the earliest comment wins a tie.
fn top_comment<'a>(group: &[&'a SimpleComment]) -> Option<&'a SimpleComment> {
    group.iter().copied().fold(None, |best, current| match best {
        Some(best) if best.recs >= current.recs => Some(best),
        _ => Some(current),
    })
}

fn top_comments(commenters: &[CommenterStats]) -> Vec<SimpleComment> {
    let mut winners: Vec<SimpleComment> = Vec::new();

    for commenter in commenters {
        let candidate = &commenter.top_comment;
        match winners.first().map(|w| w.recs) {
            Some(max) if max > candidate.recs => {}
            Some(max) if max == candidate.recs => winners.push(candidate.clone()),
            _ => winners = vec![candidate.clone()],
        }
    }

    winners
}
