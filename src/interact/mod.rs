//! Pointer hit mapping, edit scopes, and the interactive session

/// Pointer-to-address mapping through nested mirrors
pub mod hit;
/// Edit-scope expansion and replacement-type computation
pub mod scope;
/// Gesture, parameter, and history orchestration
pub mod session;

pub use hit::{HitInfo, locate};
pub use scope::{EditMode, EditPlan, EditRequest, EditScope, EditTarget, resolve};
pub use session::EditorSession;
