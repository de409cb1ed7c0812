use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    Profile,
    Project,
    TechStack,
    Certificate,
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorKind::Profile => "profile",
            EditorKind::Project => "project",
            EditorKind::TechStack => "tech_stack",
            EditorKind::Certificate => "certificate",
        };
        f.write_str(name)
    }
}

/// What an open editor dialog is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorTarget {
    Create,
    Edit(Uuid),
    /// Editors over a single fixed record, such as the profile
    Singleton,
}

impl EditorTarget {
    pub fn from_id(id: Option<Uuid>) -> Self {
        id.map(EditorTarget::Edit).unwrap_or(EditorTarget::Create)
    }
}

/// Dialog lifecycle: `Closed -> Open -> Saving -> Closed`, or back to
/// `Open` on the same target when the save fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Closed,
    Open(EditorTarget),
    Saving(EditorTarget),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhaseError {
    #[error("A save is already in progress")]
    AlreadySaving,
    #[error("No save is in progress")]
    NotSaving,
}

impl EditorPhase {
    pub fn open(target: EditorTarget) -> Self {
        EditorPhase::Open(target)
    }

    pub fn begin_save(self, target: EditorTarget) -> Result<Self, PhaseError> {
        match self {
            EditorPhase::Saving(_) => Err(PhaseError::AlreadySaving),
            EditorPhase::Closed | EditorPhase::Open(_) => Ok(EditorPhase::Saving(target)),
        }
    }

    pub fn finish_save(self, succeeded: bool) -> Result<Self, PhaseError> {
        match self {
            EditorPhase::Saving(_) if succeeded => Ok(EditorPhase::Closed),
            EditorPhase::Saving(target) => Ok(EditorPhase::Open(target)),
            _ => Err(PhaseError::NotSaving),
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, EditorPhase::Saving(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A save for this {kind} is already in progress")]
pub struct EditorBusy {
    pub kind: EditorKind,
}

type PhaseMap = HashMap<(EditorKind, EditorTarget), EditorPhase>;

/// Tracks editor phases per target and refuses a second concurrent save
/// of the same target.
#[derive(Clone, Default)]
pub struct EditorRegistry {
    phases: Arc<Mutex<PhaseMap>>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PhaseMap> {
        // A panic while holding the lock cannot leave the map half-written
        self.phases.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn phase(&self, kind: EditorKind, target: EditorTarget) -> EditorPhase {
        self.lock()
            .get(&(kind, target))
            .copied()
            .unwrap_or(EditorPhase::Closed)
    }

    pub fn begin_save(
        &self,
        kind: EditorKind,
        target: EditorTarget,
    ) -> Result<SaveTicket, EditorBusy> {
        let mut phases = self.lock();
        let current = phases
            .get(&(kind, target))
            .copied()
            .unwrap_or(EditorPhase::Closed);

        let saving = current
            .begin_save(target)
            .map_err(|_| EditorBusy { kind })?;
        phases.insert((kind, target), saving);

        Ok(SaveTicket {
            registry: self.clone(),
            kind,
            target,
            finished: false,
        })
    }

    fn settle(&self, kind: EditorKind, target: EditorTarget, succeeded: bool) {
        let mut phases = self.lock();
        let next = phases
            .get(&(kind, target))
            .copied()
            .and_then(|p| p.finish_save(succeeded).ok());

        match next {
            Some(EditorPhase::Open(t)) => {
                phases.insert((kind, target), EditorPhase::Open(t));
            }
            _ => {
                phases.remove(&(kind, target));
            }
        }
    }
}

/// Held for the duration of a save. Dropping it without `finish` counts
/// as a failed save.
pub struct SaveTicket {
    registry: EditorRegistry,
    kind: EditorKind,
    target: EditorTarget,
    finished: bool,
}

impl SaveTicket {
    pub fn finish(mut self, succeeded: bool) {
        self.finished = true;
        self.registry.settle(self.kind, self.target, succeeded);
    }
}

impl Drop for SaveTicket {
    fn drop(&mut self) {
        if !self.finished {
            self.registry.settle(self.kind, self.target, false);
        }
    }
}
