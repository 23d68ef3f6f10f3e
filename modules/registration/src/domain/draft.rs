use super::error::ValidationErrors;
use super::models::{RegistrationRecord, Shop};
use super::sanitizer::{sanitize_name, sanitize_phone, PHONE_PREFIX};

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname,
    FirstName,
    Phone,
    Shop,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::FirstName => "First name",
            Field::Phone => "Phone number",
            Field::Shop => "Shop",
        }
    }
}

/// The values currently typed into the form.
///
/// Text values only change through [`FormDraft::apply`], which runs the
/// field's sanitizer first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    surname: String,
    first_name: String,
    phone: String,
    shop: Option<Shop>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            surname: String::new(),
            first_name: String::new(),
            phone: PHONE_PREFIX.to_owned(),
            shop: None,
        }
    }
}

impl FormDraft {
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn shop(&self) -> Option<Shop> {
        self.shop
    }

    /// Display value of a field; an unselected shop is empty.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Phone => &self.phone,
            Field::Shop => self.shop.map_or("", Shop::label),
        }
    }

    /// Sanitizes `raw` for `field`, stores it and returns the stored display
    /// value. A shop selection that does not parse clears the selection.
    pub fn apply(&mut self, field: Field, raw: &str) -> &str {
        match field {
            Field::Surname => self.surname = sanitize_name(raw),
            Field::FirstName => self.first_name = sanitize_name(raw),
            Field::Phone => self.phone = sanitize_phone(raw),
            Field::Shop => self.shop = raw.parse().ok(),
        }
        self.value(field)
    }

    /// True iff any field differs from its default (the phone default is
    /// `+7`, not the empty string).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.surname.is_empty()
            || !self.first_name.is_empty()
            || self.phone != PHONE_PREFIX
            || self.shop.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// # Errors
    /// Returns the ordered list of failed constraints.
    pub fn to_record(&self) -> Result<RegistrationRecord, ValidationErrors> {
        RegistrationRecord::new(&self.surname, &self.first_name, &self.phone, self.shop)
    }
}
