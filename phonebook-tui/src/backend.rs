//! Backend wrapper for phonebook-core

use phonebook_core::{Contact, ContactForm, ContactStore, MemoryStore, SubmitError, UuidSource};

/// Owns the contact store, the id source, and the entry form.
pub struct Backend {
    store: MemoryStore,
    ids: UuidSource,
    pub form: ContactForm,
}

impl Backend {
    pub fn new() -> Self {
        Backend {
            store: MemoryStore::new(),
            ids: UuidSource::new(),
            form: ContactForm::new(),
        }
    }

    /// Snapshot of the contact collection.
    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    /// Submits the current form draft into the store.
    pub fn submit(&mut self) -> Result<Contact, SubmitError> {
        self.form.submit(&mut self.store, &mut self.ids)
    }

    /// Removes a contact by id. Returns whether one was removed.
    pub fn remove_contact(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::new()
    }
}
