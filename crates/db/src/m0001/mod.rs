macro_rules! operation {
    ($name:ident, $up:ident, $down:ident) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

mod category;
mod item;
mod menu;
mod modifier;
mod partner;
mod side;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "menuhub",
    "m0001",
    vec_box![],
    vec_box![
        partner::CreateTaxTable,
        partner::CreateTaxIdx1,
        partner::CreatePrinterTable,
        partner::CreatePrinterIdx1,
        partner::CreateReportingCategoryTable,
        partner::CreateReportingCategoryIdx1,
        menu::CreateTable,
        menu::CreateIdx1,
        menu::CreateAvailabilityTable,
        menu::CreateAvailabilityIdx1,
        category::CreateTable,
        category::CreateIdx1,
        item::CreateTable,
        item::CreateIdx1,
        item::CreateIdx2,
        item::CreateIdx3,
        side::CreateCategoryTable,
        side::CreateCategoryIdx1,
        side::CreateItemTable,
        side::CreateItemIdx1,
        modifier::CreateSideTable,
        modifier::CreateSideIdx1,
        modifier::CreateVariationTable,
        modifier::CreateVariationIdx1,
        modifier::CreateAdditionTable,
        modifier::CreateAdditionIdx1,
        modifier::CreateSubstitutionTable,
        modifier::CreateSubstitutionIdx1,
        modifier::CreateAllergyTable,
        modifier::CreateAllergyIdx1,
        modifier::CreateToppingTable,
        modifier::CreateToppingIdx1,
        modifier::CreateContainerTable,
        modifier::CreateContainerIdx1,
        modifier::CreateComponentTable,
        modifier::CreateComponentIdx1
    ]
);
