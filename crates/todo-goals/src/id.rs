//! Entity id generation

use uuid::Uuid;

/// Fresh id for a todo or goal (random UUID v4)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
