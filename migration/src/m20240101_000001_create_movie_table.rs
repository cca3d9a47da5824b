use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string(Movie::Title))
                    .col(integer(Movie::Year))
                    .col(string(Movie::Description))
                    .col(double(Movie::Rating).default(0.0))
                    .col(integer(Movie::Ranking).default(0))
                    .col(string(Movie::Review).default(""))
                    .col(string(Movie::ImgUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_title_unique")
                    .table(Movie::Table)
                    .col(Movie::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Year,
    Description,
    Rating,
    Ranking,
    Review,
    ImgUrl,
}
