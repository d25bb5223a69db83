use crate::domain::model::{CommandRecord, DedupeKey, LabelMapping, TransformResult};
use std::collections::HashSet;

/// Flattens label mappings into one `addToProject` command per
/// `(label, project)` pair, in input order. Nothing is filtered or merged.
pub fn expand_labels(mappings: &[LabelMapping]) -> Vec<CommandRecord> {
    mappings
        .iter()
        .flat_map(|mapping| {
            mapping
                .projects
                .iter()
                .map(move |project| CommandRecord::add_to_project(&mapping.label, project))
        })
        .collect()
}

/// Drops every command whose `(name, addToProject.url)` pair was already seen,
/// keeping the first occurrence. Records without `addToProject` are always
/// kept. `type` and `action` play no part in the comparison.
pub fn dedupe_commands(commands: Vec<CommandRecord>) -> TransformResult<CommandRecord> {
    let input_count = commands.len();
    let mut seen = HashSet::new();

    let kept: Vec<CommandRecord> = commands
        .into_iter()
        .filter(|command| match command.dedupe_key() {
            DedupeKey::Exempt | DedupeKey::Distinct => true,
            DedupeKey::Pair(name, url) => seen.insert((name, url)),
        })
        .collect();

    let dropped_count = input_count - kept.len();
    TransformResult::new(kept, input_count, dropped_count)
}
