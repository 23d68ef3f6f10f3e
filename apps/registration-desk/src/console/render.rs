//! Plain-text rendering of the form and success screens.

use std::io::{self, Write};

use colored::Colorize;
use registration::{Field, FormSnapshot, Shop, Status, ViewState};

const FIELDS: [Field; 4] = [Field::Surname, Field::FirstName, Field::Phone, Field::Shop];

pub fn screen(out: &mut impl Write, snapshot: &FormSnapshot) -> io::Result<()> {
    match snapshot.view {
        ViewState::Form => form(out, snapshot)?,
        ViewState::Success => {
            writeln!(out)?;
            writeln!(out, "{}", "Registration".bold())?;
        }
    }
    status(out, &snapshot.status)?;
    if snapshot.view == ViewState::Success {
        writeln!(out, "Type 'back' to return to the form.")?;
    }
    Ok(())
}

fn form(out: &mut impl Write, snapshot: &FormSnapshot) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Registration form".bold())?;
    for field in FIELDS {
        let value = snapshot.draft.value(field);
        if value.is_empty() {
            writeln!(out, "  {:<13} {}", format!("{}:", field.label()), "-".dimmed())?;
        } else {
            writeln!(out, "  {:<13} {value}", format!("{}:", field.label()))?;
        }
    }
    let clear = if snapshot.clear_enabled {
        "clear".normal()
    } else {
        "clear (disabled)".dimmed()
    };
    writeln!(out, "Actions: submit, {clear}, help")
}

pub fn status(out: &mut impl Write, status: &Status) -> io::Result<()> {
    let Some(text) = status.text() else {
        return Ok(());
    };
    if status.is_error() {
        for line in text.lines() {
            writeln!(out, "{}", line.red().bold())?;
        }
    } else {
        writeln!(out, "{}", text.green().bold())?;
    }
    Ok(())
}

pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

pub fn shops(out: &mut impl Write) -> io::Result<()> {
    for shop in Shop::ALL {
        writeln!(out, "  {:>2}. {shop}", shop.ordinal())?;
    }
    Ok(())
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  surname|s <text>   set the surname")?;
    writeln!(out, "  name|n <text>      set the first name")?;
    writeln!(out, "  phone|p <text>     set the phone number")?;
    writeln!(out, "  shop <n|name>      select a shop, see 'shops'")?;
    writeln!(out, "  shops              list the shops")?;
    writeln!(out, "  submit             validate and register")?;
    writeln!(out, "  clear              reset every field")?;
    writeln!(out, "  back               leave the success screen")?;
    writeln!(out, "  quit|exit          leave")
}
