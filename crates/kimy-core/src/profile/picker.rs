//! Image-selection trait.
//!
//! The picker is an external capability: it may suspend for arbitrary user
//! interaction and reports cancellation as `Ok(None)`. Implementations live
//! in the application layer.

use kimy_types::error::PickerError;

/// Trait for the external image-selection capability.
pub trait ImagePicker {
    /// Ask the user to select an image.
    ///
    /// Returns the local image reference on success, `Ok(None)` when the
    /// user cancels. Callers must handle both outcomes; cancellation leaves
    /// any existing selection untouched.
    fn pick(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, PickerError>> + Send;
}
