use serde::{Deserialize, Serialize};

use crate::{
    Error, FetchOptions, MenuNode, PartnerTax, Printer, ReportingCategory, Result,
    SideCategoryNode,
    query::{load_menus, rows},
};

/// A self-contained copy of a partner menu, ready to be imported elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuExport {
    pub partner_id: i64,
    #[serde(default)]
    pub taxes: Vec<PartnerTax>,
    #[serde(default)]
    pub side_categories: Vec<SideCategoryNode>,
    #[serde(rename = "menu")]
    pub menus: Vec<MenuNode>,
    #[serde(default)]
    pub printers: Vec<Printer>,
    #[serde(default)]
    pub reporting_categories: Vec<ReportingCategory>,
}

impl MenuExport {
    pub fn from_json(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl crate::Query {
    /// Exports every live menu of the partner, inactive and archived rows
    /// included.
    #[tracing::instrument(skip(self))]
    pub async fn export_menu(&self, partner_id: i64, group_id: Option<i64>) -> Result<MenuExport> {
        if partner_id <= 0 {
            crate::invalid!("partner id must be positive, got {partner_id}");
        }

        let menus = load_menus(&self.0, partner_id, FetchOptions::pos(), true).await?;
        if menus.is_empty() {
            return Err(Error::NotFound);
        }

        let export = MenuExport {
            partner_id,
            taxes: rows::partner_taxes(&self.0, partner_id).await?,
            side_categories: self.side_categories(partner_id).await?,
            menus,
            printers: rows::printers(&self.0, partner_id).await?,
            reporting_categories: rows::reporting_categories(&self.0, partner_id, group_id)
                .await?,
        };

        tracing::info!(
            menus = export.menus.len(),
            side_categories = export.side_categories.len(),
            "menu exported"
        );

        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Menu;

    #[test]
    fn test_menu_key_and_defaults() -> anyhow::Result<()> {
        let export = MenuExport::from_json(
            r#"{"partner_id":3,"menu":[{"id":1,"partner_id":3,"menu_name":"Lunch","partner_name":null,"sorting_index":null,"pos_sorting_index":null,"is_active":true,"availabilities":[],"categories":[]}]}"#,
        )?;

        assert_eq!(export.partner_id, 3);
        assert!(export.printers.is_empty());
        assert_eq!(
            export.menus[0].menu,
            Menu {
                id: 1,
                partner_id: 3,
                menu_name: "Lunch".to_owned(),
                is_active: true,
                ..Default::default()
            }
        );
        assert!(export.to_json()?.contains(r#""menu": ["#));

        Ok(())
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            MenuExport::from_json("{\"partner_id\":1}"),
            Err(Error::Serialization(_))
        ));
    }
}
