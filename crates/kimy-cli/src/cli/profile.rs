//! Profile commands: show and the interactive settings editor.
//!
//! The editor mirrors the settings screen of the chat UI: username input,
//! optional avatar pick, then a validated save with user-facing feedback.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use kimy_core::profile::picker::ImagePicker;
use kimy_types::error::ProfileError;
use kimy_types::profile::Profile;

use crate::state::AppState;

use super::picker::PathImagePicker;

/// Print the saved profile.
pub async fn show_profile(state: &AppState, json: bool) -> anyhow::Result<()> {
    let profile = state.profile_service.load().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("Nombre:").bold(), profile.display_name());
    match &profile.avatar {
        Some(path) => println!("  {}  {}", style("Imagen:").bold(), path),
        None => println!("  {}  {}", style("Imagen:").bold(), style("sin imagen").dim()),
    }
    println!(
        "  {}   {}",
        style("Datos:").bold(),
        style(state.data_dir.display().to_string()).dim()
    );
    println!();
    Ok(())
}

/// Interactive settings flow: username input, optional avatar pick, save.
///
/// Returns the profile now in effect: the saved one on success, the stored
/// one untouched when validation rejects the input.
pub async fn edit_profile(state: &AppState) -> anyhow::Result<Profile> {
    let current = state.profile_service.load().await;

    println!();
    println!("  {}", style("Ajustes").cyan().bold());
    println!();

    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Ingresa tu nombre de usuario")
        .with_initial_text(current.username.clone())
        .allow_empty(true)
        .interact_text()?;

    let change_avatar = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("¿Cambiar la imagen de perfil?")
        .default(false)
        .interact()?;

    let avatar = if change_avatar {
        match PathImagePicker::new().pick().await {
            Ok(Some(path)) => Some(path),
            // Cancelled: the existing selection stays untouched.
            Ok(None) => {
                println!("  {}", style("Selección cancelada.").dim());
                current.avatar.clone()
            }
            Err(err) => {
                println!("  {} {err}", style("!").red().bold());
                current.avatar.clone()
            }
        }
    } else {
        current.avatar.clone()
    };

    let profile = Profile { username, avatar };
    match state.profile_service.save(&profile).await {
        Ok(()) => {
            println!();
            println!(
                "  {} {}",
                style("✓").green().bold(),
                "Configuración guardada: tus cambios se han guardado correctamente."
            );
            println!();
            Ok(profile)
        }
        Err(ProfileError::EmptyUsername) => {
            println!();
            println!(
                "  {} {}",
                style("!").red().bold(),
                "Por favor, ingresa un nombre de usuario."
            );
            println!();
            Ok(current)
        }
        Err(err) => Err(err.into()),
    }
}
