use crate::dto::answer_dto::CreateAnswerPayload;
use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::services::choice_service::ChoiceService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AnswerService {
    pool: PgPool,
    choices: ChoiceService,
}

impl AnswerService {
    pub fn new(pool: PgPool) -> Self {
        let choices = ChoiceService::new(pool.clone());
        Self { pool, choices }
    }

    /// Most recent first.
    pub async fn list(&self) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, choice_id, created_at
            FROM answers
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Answer> {
        sqlx::query_as::<_, Answer>("SELECT id, choice_id, created_at FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Answer {} not found", id)))
    }

    pub async fn create(&self, payload: CreateAnswerPayload) -> Result<Answer> {
        if !self.choices.exists(payload.choice).await? {
            return Err(Error::missing_parent("choice", payload.choice));
        }

        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (choice_id)
            VALUES ($1)
            RETURNING id, choice_id, created_at
            "#,
        )
        .bind(payload.choice)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::or_missing_parent(e, "choice", payload.choice))?;

        tracing::info!(answer_id = answer.id, choice_id = answer.choice_id, "answer recorded");
        Ok(answer)
    }
}
