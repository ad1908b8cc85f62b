use clap::ValueEnum;

use super::models::SimpleComment;
use super::stats::StatsReport;
use crate::shared::table::{body_preview, pad_or_truncate};

const AUTHOR_WIDTH: usize = 24;
const PREVIEW_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn print_flat(comments: &[SimpleComment], format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_flat(comments)),
        OutputFormat::Json => println!("{}", format_flat_json(comments)?),
    }
    Ok(())
}

pub fn print_stats(report: &StatsReport, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_stats(report)),
        OutputFormat::Json => println!("{}", format_stats_json(report)?),
    }
    Ok(())
}

pub fn format_flat_json(comments: &[SimpleComment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(comments)
}

pub fn format_stats_json(report: &StatsReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn format_flat(comments: &[SimpleComment]) -> String {
    if comments.is_empty() {
        return "No comments found.\n".to_string();
    }

    comments.iter().map(format_comment_line).collect()
}

fn format_comment_line(comment: &SimpleComment) -> String {
    format!(
        "[{}] @{}: \"{}\"\n",
        comment.recs,
        comment.author,
        body_preview(&comment.body, PREVIEW_WIDTH)
    )
}

pub fn format_stats(report: &StatsReport) -> String {
    if report.commenters.is_empty() {
        return "No comments found.\n".to_string();
    }

    let mut output = format!(
        "{} {:>8} {:>10} {:>8}\n",
        pad_or_truncate("AUTHOR", AUTHOR_WIDTH),
        "COMMENTS",
        "TOTAL RECS",
        "TOP RECS"
    );
    for commenter in &report.commenters {
        output.push_str(&format!(
            "{} {:>8} {:>10} {:>8}\n",
            pad_or_truncate(&commenter.author, AUTHOR_WIDTH),
            commenter.comments,
            commenter.total_recs,
            commenter.top_comment.recs
        ));
    }

    if let Some(first) = report.top_comments.first() {
        let label = if report.top_comments.len() == 1 {
            "Top comment"
        } else {
            "Top comments"
        };
        output.push_str(&format!("\n{label} ({} recs):\n", first.recs));
        for comment in &report.top_comments {
            output.push_str(&format!(
                "    @{}: \"{}\"\n",
                comment.author,
                body_preview(&comment.body, PREVIEW_WIDTH)
            ));
        }
    }

    output
}
