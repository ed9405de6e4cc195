//! Customer entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer row as persisted in `customers(id, name, email, image_url)`.
///
/// Email uniqueness is enforced by the action layer before every write,
/// not by a storage constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            image_url,
        }
    }
}
