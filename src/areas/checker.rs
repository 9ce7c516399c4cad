use crate::areas::config::CheckerConfig;
use crate::areas::git::ChangeSource;
use std::cell::{RefCell, RefMut};

/// A check of one target project against one source project.
///
/// Commands are implemented on this type in `commands::porcelain`.
pub struct Checker {
    config: CheckerConfig,
    changes: Box<dyn ChangeSource>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Checker {
    pub fn new(
        config: CheckerConfig,
        changes: Box<dyn ChangeSource>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Checker {
            config,
            changes,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn changes(&self) -> &dyn ChangeSource {
        self.changes.as_ref()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
