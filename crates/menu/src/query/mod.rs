mod aggregate;
mod lookup;
pub(crate) mod rows;

pub use aggregate::*;

use crate::{Device, Result};

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub menu_id: Option<i64>,
    pub device: Option<Device>,
}

impl FetchOptions {
    pub fn pos() -> Self {
        Self {
            menu_id: None,
            device: Some(Device::Pos),
        }
    }

    pub fn menu(mut self, menu_id: i64) -> Self {
        self.menu_id = Some(menu_id);
        self
    }
}

/// Parses a partner id received as text.
pub fn parse_partner_id(value: &str) -> Result<i64> {
    let value = value.trim();
    if value.is_empty() {
        crate::invalid!("partner id is required");
    }

    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => crate::invalid!("partner id must be positive, got {id}"),
        Err(_) => crate::invalid!("partner id must be numeric, got {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_partner_id() {
        assert_eq!(parse_partner_id("42").ok(), Some(42));
        assert_eq!(parse_partner_id(" 7 ").ok(), Some(7));

        for value in ["", "   ", "abc", "4.2", "0", "-3"] {
            assert!(
                matches!(parse_partner_id(value), Err(Error::Validation(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_fetch_options_builders() {
        let options = FetchOptions::pos().menu(3);
        assert_eq!(options.device, Some(Device::Pos));
        assert_eq!(options.menu_id, Some(3));
        assert_eq!(FetchOptions::default().device, None);
    }
}
