//! Line-oriented console front end for the registration form.
//!
//! Every command maps to one controller event; the screen is redrawn after
//! each event that changes it.

mod command;
mod render;

#[cfg(test)]
mod session_test;

use std::io::Write;

use anyhow::Result;
use registration::{
    Field, FormController, Registration, RegistrationRepository, Shop, SubmitError, ViewState,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use command::{Command, parse};

const NOTHING_TO_CLEAR: &str = "Nothing to clear: the form is empty";
const FORM_HIDDEN: &str = "The form is hidden, type 'back' to return to it";

/// Values for a one-shot registration.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub surname: String,
    pub first_name: String,
    pub phone: String,
    pub shop: Option<Shop>,
}

/// Runs an interactive session until `quit` or end of input.
///
/// # Errors
/// Fails only on I/O errors; rejected input is reported on `out`.
pub async fn run_session<R, I, W>(
    controller: &mut FormController<R>,
    input: I,
    out: &mut W,
) -> Result<()>
where
    R: RegistrationRepository,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    render::screen(out, &controller.snapshot())?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                render::error(out, &e.to_string())?;
                out.flush()?;
                continue;
            }
        };
        tracing::trace!(?command, "console command");

        match command {
            Command::Quit => break,
            Command::Help => render::help(out)?,
            Command::ListShops => render::shops(out)?,
            Command::Set(field, raw) => {
                if controller.view() == ViewState::Success {
                    render::error(out, FORM_HIDDEN)?;
                } else {
                    controller.on_field_changed(field, &raw);
                    render::screen(out, &controller.snapshot())?;
                }
            }
            Command::Submit => {
                if let Err(SubmitError::FormHidden) = controller.on_submit().await {
                    render::error(out, FORM_HIDDEN)?;
                } else {
                    render::screen(out, &controller.snapshot())?;
                }
            }
            Command::Clear => {
                if controller.view() == ViewState::Success {
                    render::error(out, FORM_HIDDEN)?;
                } else if controller.is_clear_enabled() {
                    controller.on_clear();
                    render::screen(out, &controller.snapshot())?;
                } else {
                    render::error(out, NOTHING_TO_CLEAR)?;
                }
            }
            Command::Back => {
                controller.on_back();
                render::screen(out, &controller.snapshot())?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

/// Fills the form from `input` and submits it once.
///
/// # Errors
/// Returns the controller's [`SubmitError`] when validation or storage fails.
pub async fn register_once<R: RegistrationRepository>(
    controller: &mut FormController<R>,
    input: &RegisterInput,
) -> Result<Registration, SubmitError> {
    controller.on_field_changed(Field::Surname, &input.surname);
    controller.on_field_changed(Field::FirstName, &input.first_name);
    controller.on_field_changed(Field::Phone, &input.phone);
    let shop = input.shop.map_or("", Shop::label);
    controller.on_field_changed(Field::Shop, shop);
    controller.on_submit().await
}

/// Writes the controller's current status line(s).
///
/// # Errors
/// Fails on I/O errors.
pub fn print_status<R: RegistrationRepository>(
    controller: &FormController<R>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    render::status(out, controller.status())
}
