// src/service.rs

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::error::AppError;
use crate::models::question::Question;
use crate::store::QuestionStore;

/// Read-operation failures. Both are user-facing 404s.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The store holds no questions at all.
    Empty,
    /// No question matches the requested topic.
    UnknownTopic(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Empty => AppError::NotFound("No questions available".to_string()),
            QueryError::UnknownTopic(topic) => {
                AppError::NotFound(format!("No questions found for topic: {}", topic))
            }
        }
    }
}

/// Read-only query operations over the shared store snapshot.
/// Cheap to clone; one instance is handed to the router as state.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<QuestionStore>,
}

impl QueryService {
    pub fn new(store: QuestionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Every question, in ascending-id store order. An empty store yields
    /// an empty (non-error) list.
    pub fn list_all(&self) -> &[Question] {
        self.store.questions()
    }

    /// One question chosen uniformly at random.
    pub fn pick_random(&self) -> Result<&Question, QueryError> {
        self.store
            .questions()
            .choose(&mut rand::thread_rng())
            .ok_or(QueryError::Empty)
    }

    /// All questions whose topic matches case-insensitively. Matching is
    /// exact after case-folding; no substring matching.
    pub fn filter_by_topic(&self, topic: &str) -> Result<Vec<Question>, QueryError> {
        let needle = topic.to_lowercase();
        let matches: Vec<Question> = self
            .store
            .questions()
            .iter()
            .filter(|q| q.topic.to_lowercase() == needle)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(QueryError::UnknownTopic(topic.to_string()));
        }
        Ok(matches)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn question(id: i64, topic: &str) -> Question {
        Question {
            id,
            topic: topic.to_string(),
            skill_area: "Develop Azure compute solutions".to_string(),
            question: "Which of the following options is the right one here?".to_string(),
            options: vec![
                "Alpha".to_string(),
                "Beta".to_string(),
                "Gamma".to_string(),
                "Delta".to_string(),
            ],
            answer: "Alpha".to_string(),
            explanation: "Alpha is correct because of how the service behaves.".to_string(),
        }
    }

    fn service(questions: Vec<Question>) -> QueryService {
        QueryService::new(QuestionStore::from_questions(questions).unwrap())
    }

    #[test]
    fn list_all_is_ascending_by_id() {
        let svc = service(vec![question(5, "Functions"), question(2, "App Service")]);
        let ids: Vec<i64> = svc.list_all().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn filter_by_topic_is_case_insensitive_and_exact() {
        let svc = service(vec![
            question(1, "App Service"),
            question(2, "App Service"),
            question(3, "Functions"),
        ]);

        let exact = svc.filter_by_topic("App Service").unwrap();
        let lower = svc.filter_by_topic("app service").unwrap();
        let upper = svc.filter_by_topic("APP SERVICE").unwrap();
        assert_eq!(exact, lower);
        assert_eq!(exact, upper);
        assert_eq!(exact.len(), 2);

        // no substring matching
        assert_eq!(
            svc.filter_by_topic("App"),
            Err(QueryError::UnknownTopic("App".to_string()))
        );
    }

    #[test]
    fn filter_by_unknown_topic_is_not_found() {
        let svc = service(vec![question(1, "App Service")]);
        assert_eq!(
            svc.filter_by_topic("NoSuchTopic"),
            Err(QueryError::UnknownTopic("NoSuchTopic".to_string()))
        );
    }

    #[test]
    fn pick_random_on_empty_store_is_not_found() {
        let svc = service(vec![]);
        assert_eq!(svc.pick_random().unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn pick_random_varies_across_draws() {
        let questions: Vec<Question> = (1..=10).map(|id| question(id, "App Service")).collect();
        let svc = service(questions);

        // 5 draws over 10 questions; all-identical draws are vanishingly
        // unlikely (1 in 10^4 per distinct id).
        let ids: HashSet<i64> = (0..5).map(|_| svc.pick_random().unwrap().id).collect();
        assert!(ids.len() >= 2, "expected varied draws, got {:?}", ids);
    }

    #[test]
    fn query_errors_map_to_contract_messages() {
        let not_found: AppError = QueryError::Empty.into();
        assert!(format!("{}", not_found).contains("No questions available"));

        let unknown: AppError = QueryError::UnknownTopic("Storage".to_string()).into();
        assert!(format!("{}", unknown).contains("No questions found for topic: Storage"));
    }
}
