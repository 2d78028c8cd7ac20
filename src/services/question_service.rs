use crate::dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::services::survey_service::SurveyService;
use sqlx::PgPool;

pub const DUPLICATE_TEXT: &str = "A question with this text already exists.";

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
    surveys: SurveyService,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        let surveys = SurveyService::new(pool.clone());
        Self { pool, surveys }
    }

    pub async fn list(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, survey_id, text
            FROM questions
            ORDER BY text ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Question> {
        sqlx::query_as::<_, Question>("SELECT id, survey_id, text FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Matches across every survey, not only the one being added to.
    pub async fn text_taken(&self, text: &str) -> Result<bool> {
        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM questions WHERE text = $1)")
                .bind(text)
                .fetch_one(&self.pool)
                .await?;
        Ok(taken)
    }

    async fn ensure_survey(&self, survey_id: i64) -> Result<()> {
        if self.surveys.exists(survey_id).await? {
            Ok(())
        } else {
            Err(Error::missing_parent("survey", survey_id))
        }
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        self.ensure_survey(payload.survey).await?;

        if self.text_taken(&payload.text).await? {
            tracing::warn!(text = %payload.text, "rejected duplicate question text");
            return Err(Error::Duplicate(DUPLICATE_TEXT.to_string()));
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (survey_id, text)
            VALUES ($1, $2)
            RETURNING id, survey_id, text
            "#,
        )
        .bind(payload.survey)
        .bind(&payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::or_missing_parent(e, "survey", payload.survey))?;

        tracing::info!(
            question_id = question.id,
            survey_id = question.survey_id,
            "question created"
        );
        Ok(question)
    }

    pub async fn replace(&self, id: i64, payload: CreateQuestionPayload) -> Result<Question> {
        self.get_by_id(id).await?;
        self.ensure_survey(payload.survey).await?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET survey_id = $2, text = $3
            WHERE id = $1
            RETURNING id, survey_id, text
            "#,
        )
        .bind(id)
        .bind(payload.survey)
        .bind(&payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::or_missing_parent(e, "survey", payload.survey))?;

        Ok(question)
    }

    pub async fn update(&self, id: i64, payload: UpdateQuestionPayload) -> Result<Question> {
        self.get_by_id(id).await?;
        if let Some(survey_id) = payload.survey {
            self.ensure_survey(survey_id).await?;
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET
                survey_id = COALESCE($2, survey_id),
                text = COALESCE($3, text)
            WHERE id = $1
            RETURNING id, survey_id, text
            "#,
        )
        .bind(id)
        .bind(payload.survey)
        .bind(payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match payload.survey {
            Some(survey_id) => Error::or_missing_parent(e, "survey", survey_id),
            None => e.into(),
        })?;

        Ok(question)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Question {} not found", id)));
        }
        tracing::info!(question_id = id, "question deleted");
        Ok(())
    }
}
