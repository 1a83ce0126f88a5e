use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag entity - referenced by id from post operations.
///
/// Tag administration is out of scope here; posts only validate that a tag
/// exists before associating with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
