use crate::dto::choice_dto::{CreateChoicePayload, UpdateChoicePayload};
use crate::error::{Error, Result};
use crate::models::choice::Choice;
use crate::services::question_service::QuestionService;
use sqlx::PgPool;

pub const DUPLICATE_TEXT: &str = "A choice with this text already exists.";

#[derive(Clone)]
pub struct ChoiceService {
    pool: PgPool,
    questions: QuestionService,
}

impl ChoiceService {
    pub fn new(pool: PgPool) -> Self {
        let questions = QuestionService::new(pool.clone());
        Self { pool, questions }
    }

    pub async fn list(&self) -> Result<Vec<Choice>> {
        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, question_id, text
            FROM choices
            ORDER BY text ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(choices)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Choice> {
        sqlx::query_as::<_, Choice>("SELECT id, question_id, text FROM choices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Choice {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM choices WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn text_taken(&self, text: &str) -> Result<bool> {
        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM choices WHERE text = $1)")
                .bind(text)
                .fetch_one(&self.pool)
                .await?;
        Ok(taken)
    }

    async fn ensure_question(&self, question_id: i64) -> Result<()> {
        if self.questions.exists(question_id).await? {
            Ok(())
        } else {
            Err(Error::missing_parent("question", question_id))
        }
    }

    pub async fn create(&self, payload: CreateChoicePayload) -> Result<Choice> {
        self.ensure_question(payload.question).await?;

        if self.text_taken(&payload.text).await? {
            tracing::warn!(text = %payload.text, "rejected duplicate choice text");
            return Err(Error::Duplicate(DUPLICATE_TEXT.to_string()));
        }

        let choice = sqlx::query_as::<_, Choice>(
            r#"
            INSERT INTO choices (question_id, text)
            VALUES ($1, $2)
            RETURNING id, question_id, text
            "#,
        )
        .bind(payload.question)
        .bind(&payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::or_missing_parent(e, "question", payload.question))?;

        tracing::info!(
            choice_id = choice.id,
            question_id = choice.question_id,
            "choice created"
        );
        Ok(choice)
    }

    pub async fn replace(&self, id: i64, payload: CreateChoicePayload) -> Result<Choice> {
        self.get_by_id(id).await?;
        self.ensure_question(payload.question).await?;

        let choice = sqlx::query_as::<_, Choice>(
            r#"
            UPDATE choices
            SET question_id = $2, text = $3
            WHERE id = $1
            RETURNING id, question_id, text
            "#,
        )
        .bind(id)
        .bind(payload.question)
        .bind(&payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::or_missing_parent(e, "question", payload.question))?;

        Ok(choice)
    }

    pub async fn update(&self, id: i64, payload: UpdateChoicePayload) -> Result<Choice> {
        self.get_by_id(id).await?;
        if let Some(question_id) = payload.question {
            self.ensure_question(question_id).await?;
        }

        let choice = sqlx::query_as::<_, Choice>(
            r#"
            UPDATE choices
            SET
                question_id = COALESCE($2, question_id),
                text = COALESCE($3, text)
            WHERE id = $1
            RETURNING id, question_id, text
            "#,
        )
        .bind(id)
        .bind(payload.question)
        .bind(payload.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match payload.question {
            Some(question_id) => Error::or_missing_parent(e, "question", question_id),
            None => e.into(),
        })?;

        Ok(choice)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM choices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Choice {} not found", id)));
        }
        tracing::info!(choice_id = id, "choice deleted");
        Ok(())
    }
}
