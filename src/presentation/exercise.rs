use crate::model::responses::RawExerciseCopy;
use crate::model::utils::try_parse_exercise_date;
use crate::presentation::user::User;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Lifecycle dates of an exercise copy
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ExerciseDates {
    /// Creation
    pub created: Option<NaiveDateTime>,
    /// Last modification
    pub modified: Option<NaiveDateTime>,
    /// Submission
    pub submitted: Option<NaiveDateTime>,
}

/// Grading of an exercise copy
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ExerciseResult {
    /// Teacher score
    pub score: Option<f64>,
    /// Automatically computed score
    pub auto_score: Option<f64>,
    /// Teacher comment
    pub comment: Option<String>,
}

/// Student copy of an exercise
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Exercise {
    /// Copy id
    pub id: i64,
    /// Owner
    pub owner: User,
    /// Dates
    pub dates: ExerciseDates,
    /// Grading
    pub result: ExerciseResult,
    /// Started by the student
    pub started: bool,
    /// Deleted
    pub deleted: bool,
    /// Archived
    pub archived: bool,
    /// Corrected
    pub corrected: bool,
    /// Training copy
    pub is_training: bool,
    /// Correction in progress
    pub is_correcting: bool,
}

impl From<RawExerciseCopy> for Exercise {
    fn from(raw: RawExerciseCopy) -> Self {
        let date = |raw: Option<String>| raw.as_deref().and_then(try_parse_exercise_date);

        Self {
            id: raw.id,
            owner: User::from_id(raw.owner.unwrap_or_default()),
            dates: ExerciseDates {
                created: date(raw.created),
                modified: date(raw.modified),
                submitted: date(raw.submitted_date),
            },
            result: ExerciseResult {
                score: raw.final_score,
                auto_score: raw.calculated_score,
                comment: raw.comment,
            },
            started: raw.has_been_started.unwrap_or(false),
            deleted: raw.is_deleted.unwrap_or(false),
            archived: raw.is_archived.unwrap_or(false),
            corrected: raw.is_corrected.unwrap_or(false),
            is_training: raw.is_training_copy.unwrap_or(false),
            is_correcting: raw.is_correction_on_going.unwrap_or(false),
        }
    }
}
