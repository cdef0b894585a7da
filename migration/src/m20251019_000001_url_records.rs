use sea_orm_migration::prelude::*;

/// url 列长度上限；MySQL InnoDB 唯一索引键长 3072 字节 / utf8mb4 4 字节
pub const URL_MAX_LENGTH: u32 = 768;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 url_records 表
        manager
            .create_table(
                Table::create()
                    .table(UrlRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlRecord::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UrlRecord::Url)
                            .string_len(URL_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UrlRecord::ShortCode)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UrlRecord::AccessCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UrlRecord::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UrlRecord::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // url 与 short_code 各自全局唯一，并发写入的冲突由唯一索引拒绝
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_url_records_url")
                    .table(UrlRecord::Table)
                    .col(UrlRecord::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_url_records_short_code")
                    .table(UrlRecord::Table)
                    .col(UrlRecord::ShortCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_url_records_short_code")
                    .table(UrlRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_url_records_url")
                    .table(UrlRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UrlRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UrlRecord {
    #[sea_orm(iden = "url_records")]
    Table,
    Id,
    Url,
    ShortCode,
    AccessCount,
    CreatedAt,
    UpdatedAt,
}
