use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::error::ValidationErrors;
use super::sanitizer::validate_form;

/// Shop a person registers at. The option list is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shop {
    Shop1,
    Shop2,
    Shop3,
    Shop4,
    Shop5,
    Shop6,
    Shop7,
    Shop8,
    Shop9,
    Shop10,
    Shop11,
}

impl Shop {
    /// All options in display order.
    pub const ALL: [Shop; 11] = [
        Shop::Shop1,
        Shop::Shop2,
        Shop::Shop3,
        Shop::Shop4,
        Shop::Shop5,
        Shop::Shop6,
        Shop::Shop7,
        Shop::Shop8,
        Shop::Shop9,
        Shop::Shop10,
        Shop::Shop11,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shop::Shop1 => "Shop1",
            Shop::Shop2 => "Shop2",
            Shop::Shop3 => "Shop3",
            Shop::Shop4 => "Shop4",
            Shop::Shop5 => "Shop5",
            Shop::Shop6 => "Shop6",
            Shop::Shop7 => "Shop7",
            Shop::Shop8 => "Shop8",
            Shop::Shop9 => "Shop9",
            Shop::Shop10 => "Shop10",
            Shop::Shop11 => "Shop11",
        }
    }

    /// 1-based position in the option list.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shop '{0}'")]
pub struct ShopParseError(pub String);

/// Accepts a label (`Shop3`, case-insensitive) or a 1-based ordinal (`3`).
impl FromStr for Shop {
    type Err = ShopParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let found = match trimmed.parse::<usize>() {
            Ok(ordinal) => Self::from_ordinal(ordinal),
            Err(_) => Self::ALL
                .into_iter()
                .find(|shop| shop.label().eq_ignore_ascii_case(trimmed)),
        };
        found.ok_or_else(|| ShopParseError(trimmed.to_owned()))
    }
}

/// A validated registration entry.
///
/// Only [`RegistrationRecord::new`] builds one, and it runs the full form
/// validation first. Records are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    surname: String,
    first_name: String,
    phone: String,
    shop: Shop,
}

impl RegistrationRecord {
    /// # Errors
    /// Returns every failed constraint when any of the four fields is invalid.
    pub fn new(
        surname: &str,
        first_name: &str,
        phone: &str,
        shop: Option<Shop>,
    ) -> Result<Self, ValidationErrors> {
        let errors = validate_form(surname, first_name, phone, shop);
        match shop {
            Some(shop) if errors.is_empty() => Ok(Self {
                surname: surname.to_owned(),
                first_name: first_name.to_owned(),
                phone: phone.to_owned(),
                shop,
            }),
            _ => Err(errors),
        }
    }

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
    pub fn shop(&self) -> Shop {
        self.shop
    }
}

/// A record as persisted, with the identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: i64,
    record: RegistrationRecord,
}

impl Registration {
    #[must_use]
    pub fn new(id: i64, record: RegistrationRecord) -> Self {
        Self { id, record }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }
}
