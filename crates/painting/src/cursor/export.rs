//! Exported image handles
//!
//! An [`ExportedImage`] is a scoped handle to encoded bytes held by an
//! [`ExportRegistry`]. The handle is released from the registry when it is
//! dropped, so replacing one handle with another can never leave the old
//! bytes behind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::constants::EXPORT_URL_PREFIX;

#[derive(Debug, Default)]
struct ExportTable {
    next_id: u64,
    live: HashMap<u64, Rc<[u8]>>,
}

/// Store of exported images, addressable by URL
///
/// Cloning shares the same store. Event-thread only (`Rc`, not `Send`).
#[derive(Debug, Clone, Default)]
pub struct ExportRegistry {
    table: Rc<RefCell<ExportTable>>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `bytes` and return the handle that keeps them alive
    pub fn export(&self, bytes: Vec<u8>) -> ExportedImage {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        let id = table.next_id;
        table.live.insert(id, Rc::from(bytes));

        let url = format!("{EXPORT_URL_PREFIX}{id}");
        debug!("ExportRegistry::export -> {} ({} live)", url, table.live.len());
        ExportedImage {
            id,
            url,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Look up the bytes behind a live URL
    pub fn resolve(&self, url: &str) -> Option<Rc<[u8]>> {
        let id = url.strip_prefix(EXPORT_URL_PREFIX)?.parse::<u64>().ok()?;
        self.table.borrow().live.get(&id).cloned()
    }

    /// Number of handles not yet released
    pub fn live_count(&self) -> usize {
        self.table.borrow().live.len()
    }
}

/// Scoped handle to an exported image; dropping it releases the export
#[derive(Debug)]
pub struct ExportedImage {
    id: u64,
    url: String,
    table: Weak<RefCell<ExportTable>>,
}

impl ExportedImage {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ExportedImage {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().live.remove(&self.id);
            debug!("ExportedImage released {}", self.url);
        }
    }
}
