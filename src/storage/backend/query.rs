//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::model_to_record;
use crate::errors::Result;
use crate::storage::UrlRecord;

use migration::entities::url_record;

impl SeaOrmStorage {
    pub async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        let model = url_record::Entity::find()
            .filter(url_record::Column::ShortCode.eq(code))
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_record))
    }

    /// 按完整 url 精确匹配（调用方负责 trim）
    pub async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>> {
        let model = url_record::Entity::find()
            .filter(url_record::Column::Url.eq(url))
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_record))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool> {
        let count = url_record::Entity::find()
            .filter(url_record::Column::ShortCode.eq(code))
            .count(&self.db)
            .await?;

        debug!("code_exists({}) -> {}", code, count > 0);
        Ok(count > 0)
    }
}
