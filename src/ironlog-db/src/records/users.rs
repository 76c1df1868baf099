use chrono::{Local, NaiveDate};
use ironlog_entities::users;
use ironlog_types::{Gender, UserProfile};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};

use crate::{AnalyticsError, AnalyticsResult, DatabaseHandler};

impl DatabaseHandler {
    /// `password_hash` is stored as given.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        birth_date: Option<NaiveDate>,
        gender: Option<Gender>,
    ) -> anyhow::Result<users::Model> {
        let user = users::ActiveModel {
            id: NotSet,
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            created_at: Set(Local::now().naive_local()),
            birth_date: Set(birth_date),
            gender: Set(gender.map(|g| g.to_string())),
        };

        let user = user.insert(&self.db).await?;
        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    pub async fn user_profile(&self, user_id: i32) -> AnalyticsResult<UserProfile> {
        users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .map(map_profile)
            .ok_or(AnalyticsError::UserNotFound(user_id))
    }
}

fn map_profile(model: users::Model) -> UserProfile {
    UserProfile {
        id: model.id,
        birth_date: model.birth_date,
        gender: Gender::parse_stored(model.gender.as_deref()),
        created_at: model.created_at,
    }
}
