use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::name_validator::NameValidator;
use crate::core::services::phone_validator::PhoneNumberValidator;

/// Execute the `phonebook validate` command.
///
/// Runs both validators without touching the record file or the audit
/// log. Works outside an initialized project using default settings.
pub fn execute(ctx: &Context, name: &str, number: &str) -> Result<()> {
    let names = if ctx.is_initialized() {
        super::directory_helpers::name_validator(&ctx.load_config()?)
    } else {
        NameValidator::new()
    };
    let phones = PhoneNumberValidator::new();

    let normalized = names.validate(name)?;
    phones.validate(number)?;

    output::header("phonebook validate");
    output::success(&format!("Name accepted, stored as: {normalized}"));
    match phones.matching_grammar(number) {
        Some(grammar) => output::success(&format!(
            "Phone number accepted ({}, e.g. {})",
            grammar.name, grammar.example
        )),
        None => output::success("Phone number accepted (no format enforced for this length)"),
    }

    Ok(())
}
