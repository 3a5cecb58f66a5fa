//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

/// Core trait for all domain entities
///
/// Every entity is owned by the backend; the client's copy is a disposable
/// read-through cache that is replaced wholesale on reload, never patched.
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Display + Send + Sync + 'static;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
