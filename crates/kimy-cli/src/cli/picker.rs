//! Path-prompt image picker.
//!
//! Terminal stand-in for a platform image picker: asks for a local image
//! path and verifies the file exists. Empty input is the cancellation flag.

use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use kimy_core::profile::picker::ImagePicker;
use kimy_types::error::PickerError;

/// Prompts for a local image path on the terminal.
pub struct PathImagePicker;

impl PathImagePicker {
    /// Create a new picker.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathImagePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ImagePicker for PathImagePicker {
    async fn pick(&self) -> Result<Option<String>, PickerError> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Ruta de la imagen (vacío para cancelar)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PickerError::Io(e.to_string()))?;

        let path = input.trim().to_string();
        if path.is_empty() {
            return Ok(None);
        }

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| PickerError::Io(e.to_string()))?;
        if !exists {
            return Err(PickerError::NotFound(path));
        }
        Ok(Some(path))
    }
}
