//! The category record.

use serde::{Deserialize, Serialize};

use authserver_core::CategoryId;

/// A named grouping of events. Creation/deletion is admin-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
