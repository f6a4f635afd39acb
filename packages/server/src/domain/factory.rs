//! Domain factories for creating domain entities and value objects.

use super::value_object::SessionId;

/// Factory for generating SessionId instances.
///
/// Encapsulates the generation concern so the rest of the domain never
/// constructs identifiers ad hoc.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId backed by a random UUID v4.
    pub fn generate() -> SessionId {
        SessionId::from_uuid(uuid::Uuid::new_v4())
    }
}
