//! Identifier commands: WASTEAGUID, PASSWORD.

use super::Invocation;
use crate::engine::RandomEngine;
use crate::error::CommandResult;

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 32;

/// Password characters. Visually confusable glyphs (0 1 I O i l o) are left out.
pub const PASSWORD_ALPHABET: &str =
    "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz_";

/// `wasteaguid`
///
/// Generates a v4 UUID that nobody will ever use.
pub fn waste_a_guid(engine: &mut RandomEngine, _inv: &Invocation) -> CommandResult {
    let guid = engine.unique_identifier()?;
    Ok(format!(
        "A GUID has been generated and immediately discarded. \
         It will never identify anything, ever.\n\n\
         Mourn it:\n\n\
         {guid}\n\n\
         Thank you for helping exhaust the GUID supply."
    ))
}

/// `password`
///
/// A password posted where others can read it is labelled accordingly.
pub fn password(engine: &mut RandomEngine, inv: &Invocation) -> CommandResult {
    let alphabet: Vec<char> = PASSWORD_ALPHABET.chars().collect();
    let password = engine.random_string(PASSWORD_LENGTH, &alphabet)?;
    let label = if inv.is_public() {
        "Precompromised"
    } else {
        "Generated"
    };
    Ok(format!("Your {label} Password is: {password}"))
}
