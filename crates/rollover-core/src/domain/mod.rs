//! Domain model (artifact paths, rotation record, events, alerts, errors, ids).
//!
//! I/O は一切持たず、ports / app 層が使う型だけを定義します。

pub mod alert;
pub mod artifact;
pub mod errors;
pub mod events;
pub mod ids;

pub use self::alert::{AlertMessage, AlertTemplate};
pub use self::artifact::{ArtifactPaths, ArtifactRole, RotationRecord};
pub use self::errors::{CycleError, Remaining, RotationError};
pub use self::events::RotationEvent;
pub use self::ids::{CycleId, Id, IdMarker};
