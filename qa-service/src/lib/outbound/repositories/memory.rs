use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::NewAnswer;
use crate::domain::answer::ports::AnswerRepository;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::NewQuestion;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionWithCount;
use crate::domain::question::ports::QuestionRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Shared in-memory storage backing the test repositories.
///
/// Stands in for the database in tests and local experiments; behavior
/// mirrors the Postgres repositories, including unique checks and the
/// answers-cascade on question deletion.
#[derive(Default)]
pub struct InMemoryDb {
    users: RwLock<Vec<User>>,
    questions: RwLock<Vec<Question>>,
    answers: RwLock<Vec<Answer>>,
    user_seq: AtomicI64,
    question_seq: AtomicI64,
    answer_seq: AtomicI64,
}

impl InMemoryDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct InMemoryUserRepository {
    db: Arc<InMemoryDb>,
}

impl InMemoryUserRepository {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let mut users = self.db.users.write().await;

        if users
            .iter()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(
                new_user.username.as_str().to_string(),
            ));
        }
        if users
            .iter()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ));
        }

        let id = self.db.user_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId(id),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.db.users.read().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.db.users.read().await;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.db.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.db.users.write().await;

        if users
            .iter()
            .any(|u| u.id != user.id && u.username.as_str() == user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users
            .iter()
            .any(|u| u.id != user.id && u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id.as_i64()))?;
        *existing = user.clone();

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.db.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != *id);

        if users.len() == before {
            return Err(UserError::NotFound(id.as_i64()));
        }

        Ok(())
    }
}

#[async_trait]
impl auth::UserStore for InMemoryUserRepository {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<auth::Credential>, anyhow::Error> {
        let users = self.db.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == identifier)
            .map(|u| auth::Credential {
                user_id: u.id.as_i64(),
                identifier: u.email.as_str().to_string(),
                password_hash: u.password_hash.clone(),
            }))
    }

    async fn find_current_id(&self, identifier: &str) -> Result<Option<i64>, anyhow::Error> {
        let users = self.db.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == identifier)
            .map(|u| u.id.as_i64()))
    }
}

pub struct InMemoryQuestionRepository {
    db: Arc<InMemoryDb>,
}

impl InMemoryQuestionRepository {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<Question, QuestionError> {
        let mut questions = self.db.questions.write().await;

        let id = self.db.question_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let question = Question {
            id: QuestionId(id),
            text: new_question.text,
            created_at: new_question.created_at,
        };
        questions.push(question.clone());

        Ok(question)
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError> {
        let questions = self.db.questions.read().await;
        Ok(questions.iter().find(|q| q.id == *id).cloned())
    }

    async fn list_with_counts(&self) -> Result<Vec<QuestionWithCount>, QuestionError> {
        let questions = self.db.questions.read().await;
        let answers = self.db.answers.read().await;

        Ok(questions
            .iter()
            .map(|question| QuestionWithCount {
                question: question.clone(),
                answers_count: answers
                    .iter()
                    .filter(|a| a.question_id == question.id)
                    .count() as i64,
            })
            .collect())
    }

    async fn update(&self, question: Question) -> Result<Question, QuestionError> {
        let mut questions = self.db.questions.write().await;

        let existing = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(QuestionError::NotFound(question.id.as_i64()))?;
        *existing = question.clone();

        Ok(question)
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError> {
        let mut questions = self.db.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != *id);

        if questions.len() == before {
            return Err(QuestionError::NotFound(id.as_i64()));
        }

        // Cascade, as the schema's foreign key would
        let mut answers = self.db.answers.write().await;
        answers.retain(|a| a.question_id != *id);

        Ok(())
    }
}

pub struct InMemoryAnswerRepository {
    db: Arc<InMemoryDb>,
}

impl InMemoryAnswerRepository {
    pub fn new(db: Arc<InMemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AnswerError> {
        let questions = self.db.questions.read().await;
        if !questions.iter().any(|q| q.id == new_answer.question_id) {
            return Err(AnswerError::QuestionNotFound(
                new_answer.question_id.as_i64(),
            ));
        }
        drop(questions);

        let mut answers = self.db.answers.write().await;
        let id = self.db.answer_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let answer = Answer {
            id: AnswerId(id),
            question_id: new_answer.question_id,
            user_id: new_answer.user_id,
            text: new_answer.text,
            created_at: new_answer.created_at,
        };
        answers.push(answer.clone());

        Ok(answer)
    }

    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerError> {
        let answers = self.db.answers.read().await;
        Ok(answers.iter().find(|a| a.id == *id).cloned())
    }

    async fn list_by_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerError> {
        let answers = self.db.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| a.question_id == *question_id)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError> {
        let answers = self.db.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| a.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, answer: Answer) -> Result<Answer, AnswerError> {
        let mut answers = self.db.answers.write().await;

        let existing = answers
            .iter_mut()
            .find(|a| a.id == answer.id)
            .ok_or(AnswerError::NotFound(answer.id.as_i64()))?;
        *existing = answer.clone();

        Ok(answer)
    }

    async fn delete(&self, id: &AnswerId) -> Result<(), AnswerError> {
        let mut answers = self.db.answers.write().await;
        let before = answers.len();
        answers.retain(|a| a.id != *id);

        if answers.len() == before {
            return Err(AnswerError::NotFound(id.as_i64()));
        }

        Ok(())
    }
}
