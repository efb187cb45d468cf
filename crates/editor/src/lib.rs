//! # editor
//!
//! The event layer around the paste sanitizer: paste interception with
//! deferred insertion, the unsaved-changes guard, and the attribute-rewrite
//! shim driven by subtree mutation notifications.
//!
//! Everything here is single threaded and cooperative. A host delivers
//! events ([`PasteEvent`], blur/submit notes, added-subtree notifications)
//! and later flushes the [`DeferredQueue`]; nothing blocks, retries, or
//! surfaces errors to the user. Failures degrade to "nothing pasted".

pub mod defer;
pub mod guard;
pub mod paste;
pub mod shim;

pub use crate::defer::{DeferredQueue, EditSurface};
pub use crate::guard::UnsavedChangesGuard;
pub use crate::paste::{ClipboardPayload, HTML_FLAVOR, PasteEvent, PasteInterceptor};
pub use crate::shim::{AttributeRewrite, MutationWatcher};
