use crate::dto::survey_dto::{CreateSurveyPayload, UpdateSurveyPayload};
use crate::error::{Error, Result};
use crate::models::survey::Survey;
use sqlx::PgPool;

pub const DUPLICATE_TITLE: &str = "A survey with this title already exists.";

#[derive(Clone)]
pub struct SurveyService {
    pool: PgPool,
}

impl SurveyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Survey>> {
        let surveys = sqlx::query_as::<_, Survey>(
            r#"
            SELECT id, title, description
            FROM surveys
            ORDER BY title ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(surveys)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Survey> {
        sqlx::query_as::<_, Survey>("SELECT id, title, description FROM surveys WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Survey {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM surveys WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn title_taken(&self, title: &str) -> Result<bool> {
        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM surveys WHERE title = $1)")
                .bind(title)
                .fetch_one(&self.pool)
                .await?;
        Ok(taken)
    }

    /// The title check and the insert are separate statements, so two concurrent
    /// creates with the same title can both succeed.
    pub async fn create(&self, payload: CreateSurveyPayload) -> Result<Survey> {
        if self.title_taken(&payload.title).await? {
            tracing::warn!(title = %payload.title, "rejected duplicate survey title");
            return Err(Error::Duplicate(DUPLICATE_TITLE.to_string()));
        }

        let survey = sqlx::query_as::<_, Survey>(
            r#"
            INSERT INTO surveys (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(survey_id = survey.id, "survey created");
        Ok(survey)
    }

    pub async fn replace(&self, id: i64, payload: CreateSurveyPayload) -> Result<Survey> {
        sqlx::query_as::<_, Survey>(
            r#"
            UPDATE surveys
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Survey {} not found", id)))
    }

    pub async fn update(&self, id: i64, payload: UpdateSurveyPayload) -> Result<Survey> {
        sqlx::query_as::<_, Survey>(
            r#"
            UPDATE surveys
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id)
        .bind(payload.title)
        .bind(payload.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Survey {} not found", id)))
    }

    /// Questions, their choices and those choices' answers go with it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM surveys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Survey {} not found", id)));
        }
        tracing::info!(survey_id = id, "survey deleted");
        Ok(())
    }
}
