//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Unique index
//! violations surface as `ShortenerError::DuplicateRecord` via `From<DbErr>`.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, ExprTrait, QueryFilter};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{model_to_record, new_active_model};
use crate::errors::{Result, ShortenerError};
use crate::storage::UrlRecord;

use migration::entities::url_record;

impl SeaOrmStorage {
    pub async fn insert(&self, url: &str, short_code: &str) -> Result<UrlRecord> {
        let model = new_active_model(url, short_code, Utc::now())
            .insert(&self.db)
            .await?;

        info!("Short link created: {} -> {}", model.short_code, model.url);
        Ok(model_to_record(model))
    }

    /// 只修改 url，short_code 与 created_at 保持不变
    pub async fn update_url(&self, code: &str, url: &str) -> Result<UrlRecord> {
        let existing = url_record::Entity::find()
            .filter(url_record::Column::ShortCode.eq(code))
            .one(&self.db)
            .await?
            .ok_or_else(|| ShortenerError::not_found(format!("短链接不存在: {}", code)))?;

        let mut active_model: url_record::ActiveModel = existing.into();
        active_model.url = Set(url.to_string());
        active_model.updated_at = Set(Utc::now());

        let model = active_model.update(&self.db).await?;

        info!("Short link updated: {} -> {}", model.short_code, model.url);
        Ok(model_to_record(model))
    }

    /// 单条 UPDATE 语句自增访问计数；不改动 updated_at
    pub async fn increment_access(&self, code: &str) -> Result<()> {
        let result = url_record::Entity::update_many()
            .col_expr(
                url_record::Column::AccessCount,
                Expr::col(url_record::Column::AccessCount).add(1),
            )
            .filter(url_record::Column::ShortCode.eq(code))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ShortenerError::not_found(format!(
                "短链接不存在: {}",
                code
            )));
        }

        debug!("Access counted for {}", code);
        Ok(())
    }

    pub async fn remove(&self, code: &str) -> Result<()> {
        let result = url_record::Entity::delete_many()
            .filter(url_record::Column::ShortCode.eq(code))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ShortenerError::not_found(format!(
                "短链接不存在: {}",
                code
            )));
        }

        info!("Short link deleted: {}", code);
        Ok(())
    }
}
