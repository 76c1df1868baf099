use chrono::NaiveDateTime;
use ironlog_entities::{body_metrics, height_records};
use ironlog_types::{BodyMetricRecord, HeightRecord};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::DatabaseHandler;

#[derive(Debug, Clone, Copy)]
pub struct SearchBodyMetrics {
    pub user_id: i32,
    /// Inclusive.
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl SearchBodyMetrics {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
        }
    }

    pub(crate) fn conditions(self) -> Condition {
        Condition::all()
            .add(body_metrics::Column::UserId.eq(self.user_id))
            .add_option(self.from.map(|from| body_metrics::Column::Date.gte(from)))
            .add_option(self.to.map(|to| body_metrics::Column::Date.lt(to)))
    }
}

impl DatabaseHandler {
    pub async fn create_body_metric(
        &self,
        user_id: i32,
        record: BodyMetricRecord,
    ) -> anyhow::Result<body_metrics::Model> {
        let model = body_metrics::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            date: Set(record.date),
            body_weight: Set(record.body_weight),
            body_fat_percent: Set(record.body_fat_percent),
            note: Set(record.note),
        };

        Ok(model.insert(&self.db).await?)
    }

    pub async fn create_height_record(
        &self,
        user_id: i32,
        record: HeightRecord,
    ) -> anyhow::Result<height_records::Model> {
        let model = height_records::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            height_cm: Set(record.height_cm),
            date: Set(record.date),
            note: Set(record.note),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Newest first.
    pub async fn body_metric_records(
        &self,
        options: SearchBodyMetrics,
    ) -> Result<Vec<BodyMetricRecord>, DbErr> {
        Ok(body_metrics::Entity::find()
            .filter(options.conditions())
            .order_by_desc(body_metrics::Column::Date)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_body_metric)
            .collect())
    }

    /// Newest first.
    pub async fn height_records(&self, user_id: i32) -> Result<Vec<HeightRecord>, DbErr> {
        Ok(height_records::Entity::find()
            .filter(height_records::Column::UserId.eq(user_id))
            .order_by_desc(height_records::Column::Date)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_height)
            .collect())
    }
}

fn map_body_metric(model: body_metrics::Model) -> BodyMetricRecord {
    BodyMetricRecord {
        date: model.date,
        body_weight: model.body_weight,
        body_fat_percent: model.body_fat_percent,
        note: model.note,
    }
}

fn map_height(model: height_records::Model) -> HeightRecord {
    HeightRecord {
        date: model.date,
        height_cm: model.height_cm,
        note: model.note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    fn metric(day: u32, weight: Option<f64>) -> BodyMetricRecord {
        BodyMetricRecord {
            date: at(day),
            body_weight: weight,
            body_fat_percent: None,
            note: None,
        }
    }

    #[test]
    fn map_body_metric_copies_fields() {
        let record = map_body_metric(body_metrics::Model {
            id: 1,
            user_id: 2,
            date: at(5),
            body_weight: Some(81.2),
            body_fat_percent: Some(19.0),
            note: Some("after travel".into()),
        });
        assert_eq!(record.date, at(5));
        assert_eq!(record.body_weight, Some(81.2));
        assert_eq!(record.body_fat_percent, Some(19.0));
        assert_eq!(record.note.as_deref(), Some("after travel"));
    }

    #[tokio::test]
    async fn search_filters_by_user_and_range() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let user = db.create_user("a@example.com", "x", None, None).await.unwrap();
        let other = db.create_user("b@example.com", "x", None, None).await.unwrap();

        for day in [3, 10, 20] {
            db.create_body_metric(user.id, metric(day, Some(80.0)))
                .await
                .unwrap();
        }
        db.create_body_metric(other.id, metric(12, Some(60.0)))
            .await
            .unwrap();

        let all = db
            .body_metric_records(SearchBodyMetrics::new(user.id))
            .await
            .unwrap();
        let days: Vec<_> = all.iter().map(|m| m.date).collect();
        assert_eq!(days, vec![at(20), at(10), at(3)]);

        let ranged = db
            .body_metric_records(SearchBodyMetrics {
                from: Some(at(10)),
                to: Some(at(20)),
                ..SearchBodyMetrics::new(user.id)
            })
            .await
            .unwrap();
        assert_eq!(ranged.len(), 1);
        assert_eq!(ranged[0].date, at(10));
    }

    #[tokio::test]
    async fn heights_newest_first() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let user = db.create_user("a@example.com", "x", None, None).await.unwrap();
        for (day, cm) in [(1, 176.0), (15, 177.5)] {
            db.create_height_record(
                user.id,
                HeightRecord {
                    date: at(day),
                    height_cm: cm,
                    note: None,
                },
            )
            .await
            .unwrap();
        }

        let heights = db.height_records(user.id).await.unwrap();
        assert_eq!(heights.len(), 2);
        assert_eq!(heights[0].height_cm, 177.5);
    }
}
