use serde::{Deserialize, Serialize};

/// Question asking whether the respondent currently has a mental health
/// disorder. Its answer rows define the survey population for prevalence
/// estimation.
pub const MAIN_QUESTION: &str = "Do you currently have a mental health disorder?";

/// Follow-up question asking which conditions have been diagnosed. One row
/// per reported condition, so a respondent may contribute several rows.
pub const FOLLOW_UP_QUESTION: &str = "If yes, what condition(s) have you been diagnosed with?";

/// Answer value the survey export uses for a missing response.
pub const NULL_ANSWER: &str = "-1";

/// A single survey response row.
///
/// Serde field aliases accept the raw survey export's column names
/// (`SurveyID`, `questiontext`, `AnswerText`) as well as the snake-case ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Survey year the response belongs to.
    #[serde(alias = "SurveyID")]
    pub survey_id: i32,
    /// The question that was asked.
    #[serde(alias = "questiontext")]
    pub question_text: String,
    /// The literal answer text. [`NULL_ANSWER`] marks a missing response.
    #[serde(alias = "AnswerText")]
    pub answer_text: String,
}

impl Record {
    /// Creates a record from a survey year and question/answer text.
    pub fn new<Q, A>(survey_id: i32, question_text: Q, answer_text: A) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        Self {
            survey_id,
            question_text: question_text.into(),
            answer_text: answer_text.into(),
        }
    }

    /// Returns `true` if the answer is the export's null sentinel.
    #[must_use]
    pub fn is_null_answer(&self) -> bool {
        self.answer_text == NULL_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_answer_detection() {
        let answered = Record::new(2016, MAIN_QUESTION, "Yes");
        let missing = Record::new(2016, MAIN_QUESTION, NULL_ANSWER);
        assert!(!answered.is_null_answer());
        assert!(missing.is_null_answer());
    }

    #[test]
    fn test_deserializes_raw_export_column_names() {
        let json = r#"{"SurveyID": 2016, "questiontext": "Q", "AnswerText": "Yes"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record, Record::new(2016, "Q", "Yes"));
    }
}
