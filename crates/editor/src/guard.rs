//! Unsaved-changes guard for the page hosting the editor.
//!
//! Tracks a single dirty flag over the page's lifetime: any tracked form
//! field losing focus marks the page dirty, submitting the guarded form
//! marks it clean again, and the flag is read when the host is about to
//! unload. Owned state with explicit transitions, not a module global.

#[derive(Debug, Default)]
pub struct UnsavedChangesGuard {
    dirty: bool,
}

impl UnsavedChangesGuard {
    /// A fresh guard is clean; nothing has been edited yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracked field lost focus; assume its content changed.
    pub fn note_field_blur(&mut self) {
        self.dirty = true;
    }

    /// The guarded form was submitted; pending edits are on their way.
    pub fn note_submit(&mut self) {
        self.dirty = false;
    }

    /// Read at unload time: should the host ask for leave confirmation?
    pub fn should_block_unload(&self) -> bool {
        self.dirty
    }
}
