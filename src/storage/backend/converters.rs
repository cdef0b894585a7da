use chrono::{DateTime, Utc};

use crate::storage::{AccessStats, UrlRecord};
use migration::entities::url_record;

/// 将 Sea-ORM Model 转换为 UrlRecord
pub fn model_to_record(model: url_record::Model) -> UrlRecord {
    UrlRecord {
        id: model.id,
        url: model.url,
        short_code: model.short_code,
        stats: AccessStats {
            access_count: model.access_count.max(0) as u64,
        },
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// 构造新记录的 ActiveModel；id 由数据库分配，计数从 0 开始
pub fn new_active_model(url: &str, short_code: &str, now: DateTime<Utc>) -> url_record::ActiveModel {
    use sea_orm::ActiveValue::*;

    url_record::ActiveModel {
        id: NotSet,
        url: Set(url.to_string()),
        short_code: Set(short_code.to_string()),
        access_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn create_test_model() -> url_record::Model {
        let now = Utc::now();
        url_record::Model {
            id: 7,
            url: "example.com".to_string(),
            short_code: "aB3_x-9Z".to_string(),
            access_count: 42,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_record() {
        let model = create_test_model();
        let record = model_to_record(model.clone());

        assert_eq!(record.id, 7);
        assert_eq!(record.url, model.url);
        assert_eq!(record.short_code, model.short_code);
        assert_eq!(record.stats.access_count, 42);
        assert_eq!(record.created_at, model.created_at);
    }

    #[test]
    fn test_negative_count_clamps_to_zero() {
        let mut model = create_test_model();
        model.access_count = -3;
        assert_eq!(model_to_record(model).stats.access_count, 0);
    }

    #[test]
    fn test_new_active_model_leaves_id_unset() {
        let now = Utc::now();
        let active = new_active_model("https://rust-lang.org", "abcdEFGH", now);

        assert!(matches!(active.id, ActiveValue::NotSet));
        assert!(matches!(active.access_count, ActiveValue::Set(0)));
        if let ActiveValue::Set(created) = active.created_at {
            assert_eq!(created, now);
        }
        if let ActiveValue::Set(updated) = active.updated_at {
            assert_eq!(updated, now);
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = model_to_record(create_test_model());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["shortCode"], "aB3_x-9Z");
        assert_eq!(json["stats"]["accessCount"], 42);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
