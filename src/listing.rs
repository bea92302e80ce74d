use crate::model::story::Story;

/// Stories printed when `--number` is not given.
pub const DEFAULT_COUNT: i64 = 8;

/// How `stories` output is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub include_timestamps: bool,
    /// Number of most recently moved stories to keep. Negative means no limit,
    /// as does any value larger than the number of stories.
    pub max_count: i64,
}

/// `sc-<id>-<title>` with the title lowercased and spaces turned into hyphens.
/// Every other character is left as is. Lowercasing is per character, with no
/// context rules (a final `Σ` becomes `σ`, not `ς`).
pub fn branch_name(story: &Story) -> String {
    let kebab: String = story
        .name
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect();
    format!("sc-{}-{}", story.id, kebab)
}

/// Render stories oldest-moved first, keeping only the last `max_count` lines.
pub fn render(stories: &[Story], config: &ListingConfig) -> String {
    let mut sorted: Vec<&Story> = stories.iter().collect();
    sorted.sort_by(|a, b| a.moved_at.cmp(&b.moved_at));

    let mut lines: Vec<String> = sorted
        .into_iter()
        .map(|story| {
            let branch = branch_name(story);
            if config.include_timestamps {
                format!("{}: {}", story.moved_at, branch)
            } else {
                branch
            }
        })
        .collect();

    let len = lines.len();
    if let Some(keep) = kept_count(config.max_count, len) {
        lines = lines.split_off(len - keep);
        tracing::debug!(kept = keep, dropped = len - keep, "truncated story listing");
    }

    lines.join("\n").trim_end_matches('\n').to_string()
}

fn kept_count(max_count: i64, len: usize) -> Option<usize> {
    let keep = usize::try_from(max_count).ok()?;
    (keep <= len).then_some(keep)
}
