use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Named stages of an editor save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStep {
    LoadCurrent,
    ResolveImage,
    CleanupOldImage,
    UpsertRecord,
    SyncRelations,
    DeleteRelations,
    DeleteRecord,
}

impl SaveStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveStep::LoadCurrent => "load_current",
            SaveStep::ResolveImage => "resolve_image",
            SaveStep::CleanupOldImage => "cleanup_old_image",
            SaveStep::UpsertRecord => "upsert_record",
            SaveStep::SyncRelations => "sync_relations",
            SaveStep::DeleteRelations => "delete_relations",
            SaveStep::DeleteRecord => "delete_record",
        }
    }
}

impl fmt::Display for SaveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a non-critical side effect. Never turned into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort {
    Done,
    Skipped,
    Failed(String),
}

impl BestEffort {
    /// Logs a failure at `warn` and hands the outcome back.
    pub fn logged(self, step: SaveStep, target: &str) -> Self {
        if let BestEffort::Failed(reason) = &self {
            warn!(step = %step, target = %target, reason = %reason, "Non-critical side effect failed");
        }
        self
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BestEffort::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_are_snake_case() {
        assert_eq!(SaveStep::SyncRelations.to_string(), "sync_relations");
        assert_eq!(
            serde_json::to_value(SaveStep::ResolveImage).unwrap(),
            serde_json::json!("resolve_image")
        );
    }

    #[test]
    fn logged_keeps_the_outcome() {
        let outcome = BestEffort::Failed("timeout".into()).logged(SaveStep::CleanupOldImage, "x");
        assert!(outcome.is_failed());
        assert_eq!(
            BestEffort::Done.logged(SaveStep::CleanupOldImage, "x"),
            BestEffort::Done
        );
    }
}
