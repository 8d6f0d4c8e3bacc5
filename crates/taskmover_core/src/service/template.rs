//! Template lookup for newly created daily notes.
//!
//! # Invariants
//! - Template lookup never fails; every failure degrades to the default.

use crate::vault::store::NoteStore;
use log::{info, warn};

/// Built-in template used when no template note is configured or readable.
pub const DEFAULT_TEMPLATE: &str =
    "# Daily Note\n\n## Tasks from Yesterday\n<<tasks>>\n\n## Today's Tasks\n";

/// Resolves template text from the vault.
pub struct TemplateLoader<'store, S: NoteStore> {
    store: &'store S,
}

impl<'store, S: NoteStore> TemplateLoader<'store, S> {
    pub fn new(store: &'store S) -> Self {
        Self { store }
    }

    /// Returns the template text for `template_path`.
    ///
    /// Empty or missing paths select `DEFAULT_TEMPLATE`. Read failures are
    /// logged and also fall back to the default.
    pub fn template_content(&self, template_path: &str) -> String {
        if template_path.is_empty() {
            return DEFAULT_TEMPLATE.to_string();
        }
        if !self.store.exists(template_path) {
            info!(
                "event=template_load module=template status=ok source=default reason=missing path={}",
                template_path
            );
            return DEFAULT_TEMPLATE.to_string();
        }

        match self.store.read(template_path) {
            Ok(content) => {
                info!(
                    "event=template_load module=template status=ok source=vault path={}",
                    template_path
                );
                content
            }
            Err(err) => {
                warn!(
                    "event=template_load module=template status=error source=default path={} error={}",
                    template_path, err
                );
                DEFAULT_TEMPLATE.to_string()
            }
        }
    }
}
