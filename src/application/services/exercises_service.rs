use crate::application::registry::{App, AppKind};
use crate::error::AppResult;
use crate::model::http::HttpClient;
use crate::model::responses::RawExerciseCopy;
use crate::presentation::exercise::Exercise;
use std::sync::Arc;
use tracing::debug;

/// Exercizer service
pub struct ExercisesService {
    http: Arc<HttpClient>,
}

impl App for ExercisesService {
    const KIND: AppKind = AppKind::Exercises;

    fn build(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

impl ExercisesService {
    /// Every exercise copy visible to the account
    pub async fn list(&self) -> AppResult<Vec<Exercise>> {
        let raw: Vec<RawExerciseCopy> = self.http.get_json("exercizer/subjects-copy").await?;
        let exercises: Vec<Exercise> = raw.into_iter().map(Exercise::from).collect();
        debug!("Exercises obtained: {}", exercises.len());
        Ok(exercises)
    }
}
