//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO I/O; entities here mirror backend wire shapes.

mod bulk;
mod entity;
mod error;
mod media;
mod page;
mod pending_user;
mod student;

pub use bulk::{BulkAction, BulkReport};
pub use entity::Entity;
pub use error::{normalize_message, ApiError, ApiResult};
pub use media::{MediaCategory, MediaItem, NewUpload, UploadReceipt};
pub use page::{Page, Pagination};
pub use pending_user::PendingUser;
pub use student::Student;
