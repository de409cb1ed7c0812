//! Building blocks shared by the entity editors: named save steps,
//! best-effort side effects and the per-editor dialog state.

pub mod detached;
pub mod editor_error;
pub mod editor_registry;
pub mod guarded_save;
pub mod save_step;

pub use detached::{run_to_completion, DetachedTaskError};
pub use editor_error::EditorError;
pub use editor_registry::{EditorBusy, EditorKind, EditorPhase, EditorRegistry, EditorTarget};
pub use guarded_save::{run_guarded, GuardedSaveError};
pub use save_step::{BestEffort, SaveStep};
