use crate::artifacts::diff::changed_path::ChangedPath;
use derive_new::new;

/// Changed paths split by whether they exist under the source tree.
///
/// Every input path lands in exactly one of the two lists, in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Reconciliation {
    found: Vec<ChangedPath>,
    not_found: Vec<ChangedPath>,
}

impl Reconciliation {
    pub fn found(&self) -> &[ChangedPath] {
        &self.found
    }

    pub fn not_found(&self) -> &[ChangedPath] {
        &self.not_found
    }
}
