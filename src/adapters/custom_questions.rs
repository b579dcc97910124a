//! Custom question/answer flattening.
//!
//! The vendor sends custom questions as an ordered array of small objects.
//! Position is the display order, so the flattened form is an ordered `Vec`
//! of pairs rather than a map.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

/// A single (question, answer) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomQuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl CustomQuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Field names used by one custom-question schema variant.
pub trait QuestionShape {
    const SHAPE: &'static str;
    const QUESTION_FIELD: &'static str;
    const ANSWER_FIELD: &'static str;
}

/// Registrant custom questions: `{"title": ..., "value": ...}`.
pub struct RegistrationQuestion;

impl QuestionShape for RegistrationQuestion {
    const SHAPE: &'static str = "registration";
    const QUESTION_FIELD: &'static str = "title";
    const ANSWER_FIELD: &'static str = "value";
}

/// Event ticket custom questions: `{"question": ..., "answer": ...}`.
pub struct TicketQuestion;

impl QuestionShape for TicketQuestion {
    const SHAPE: &'static str = "ticket";
    const QUESTION_FIELD: &'static str = "question";
    const ANSWER_FIELD: &'static str = "answer";
}

/// Flatten a JSON array of question objects, keeping input order.
///
/// Malformed entries are kept with empty strings for whatever is missing.
pub fn read<S: QuestionShape>(value: &Value) -> Vec<CustomQuestionAnswer> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| CustomQuestionAnswer {
                question: sub_field::<S>(index, item, S::QUESTION_FIELD),
                answer: sub_field::<S>(index, item, S::ANSWER_FIELD),
            })
            .collect(),
        other => {
            warn!(
                shape = S::SHAPE,
                "Expected an array of custom questions, found {}", other
            );
            Vec::new()
        }
    }
}

/// Expand pairs back into the vendor's array of objects, keeping order.
pub fn write<S: QuestionShape>(answers: &[CustomQuestionAnswer]) -> Value {
    Value::Array(
        answers
            .iter()
            .map(|pair| {
                let mut entry = Map::new();
                entry.insert(S::QUESTION_FIELD.to_string(), Value::String(pair.question.clone()));
                entry.insert(S::ANSWER_FIELD.to_string(), Value::String(pair.answer.clone()));
                Value::Object(entry)
            })
            .collect(),
    )
}

fn sub_field<S: QuestionShape>(index: usize, item: &Value, field: &'static str) -> String {
    match item.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => {
            warn!(
                shape = S::SHAPE,
                index, field, "Custom question entry is missing a sub-field"
            );
            String::new()
        }
        Some(other) => other.to_string(),
    }
}

fn serialize_shape<Q, S>(answers: &[CustomQuestionAnswer], serializer: S) -> Result<S::Ok, S::Error>
where
    Q: QuestionShape,
    S: Serializer,
{
    write::<Q>(answers).serialize(serializer)
}

fn deserialize_shape<'de, Q, D>(deserializer: D) -> Result<Vec<CustomQuestionAnswer>, D::Error>
where
    Q: QuestionShape,
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| read::<Q>(&value)).unwrap_or_default())
}

/// `#[serde(with = "custom_questions::registration")]`
pub mod registration {
    use super::*;

    pub fn serialize<S: Serializer>(
        answers: &[CustomQuestionAnswer],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serialize_shape::<RegistrationQuestion, S>(answers, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<CustomQuestionAnswer>, D::Error> {
        deserialize_shape::<RegistrationQuestion, D>(deserializer)
    }
}

/// `#[serde(with = "custom_questions::ticket")]`
pub mod ticket {
    use super::*;

    pub fn serialize<S: Serializer>(
        answers: &[CustomQuestionAnswer],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serialize_shape::<TicketQuestion, S>(answers, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<CustomQuestionAnswer>, D::Error> {
        deserialize_shape::<TicketQuestion, D>(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_preserves_order() {
        let payload = json!([
            {"title": "Company", "value": "Initech"},
            {"title": "Role", "value": "Engineer"},
            {"title": "Company", "value": "Second answer"}
        ]);

        let answers = read::<RegistrationQuestion>(&payload);

        // Duplicate titles are kept since this is a sequence, not a map
        assert_eq!(
            answers,
            vec![
                CustomQuestionAnswer::new("Company", "Initech"),
                CustomQuestionAnswer::new("Role", "Engineer"),
                CustomQuestionAnswer::new("Company", "Second answer"),
            ]
        );
    }

    #[test]
    fn test_round_trip_well_formed_arrays() {
        let payloads = [
            json!([]),
            json!([{"question": "Dietary needs", "answer": "None"}]),
            json!([
                {"question": "T-shirt size", "answer": "M"},
                {"question": "Track", "answer": "Systems"},
                {"question": "Referral", "answer": ""}
            ]),
        ];

        for payload in payloads {
            let answers = read::<TicketQuestion>(&payload);
            assert_eq!(write::<TicketQuestion>(&answers), payload);
        }
    }

    #[test]
    fn test_missing_sub_fields_become_empty_strings() {
        let payload = json!([
            {"title": "Company"},
            {"value": "orphan answer"},
            "not an object",
            {"title": "Role", "value": null},
            {"title": "Seats", "value": 3},
            {"title": "Country", "value": "NZ"}
        ]);

        let answers = read::<RegistrationQuestion>(&payload);

        assert_eq!(answers.len(), 6);
        assert_eq!(answers[0], CustomQuestionAnswer::new("Company", ""));
        assert_eq!(answers[1], CustomQuestionAnswer::new("", "orphan answer"));
        assert_eq!(answers[2], CustomQuestionAnswer::default());
        assert_eq!(answers[3], CustomQuestionAnswer::new("Role", ""));
        assert_eq!(answers[4], CustomQuestionAnswer::new("Seats", "3"));
        assert_eq!(answers[5], CustomQuestionAnswer::new("Country", "NZ"));
    }

    #[test]
    fn test_shapes_use_their_own_field_names() {
        let registration = json!([{"title": "Company", "value": "Initech"}]);

        // A registration-shaped payload read as tickets finds neither field
        let answers = read::<TicketQuestion>(&registration);
        assert_eq!(answers, vec![CustomQuestionAnswer::default()]);

        let written = write::<RegistrationQuestion>(&[CustomQuestionAnswer::new("Company", "Initech")]);
        assert_eq!(written, registration);
    }

    #[test]
    fn test_null_and_non_array_read_as_empty() {
        assert!(read::<TicketQuestion>(&Value::Null).is_empty());
        assert!(read::<TicketQuestion>(&json!({"question": "q"})).is_empty());
    }

    #[test]
    fn test_serde_with_modules() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Holder {
            #[serde(default, with = "registration")]
            custom_questions: Vec<CustomQuestionAnswer>,
        }

        let holder: Holder = serde_json::from_value(json!({
            "custom_questions": [{"title": "Company", "value": "Initech"}]
        }))
        .unwrap();
        assert_eq!(holder.custom_questions, vec![CustomQuestionAnswer::new("Company", "Initech")]);

        let absent: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(absent.custom_questions.is_empty());

        let null: Holder = serde_json::from_value(json!({"custom_questions": null})).unwrap();
        assert!(null.custom_questions.is_empty());

        let encoded = serde_json::to_value(&holder).unwrap();
        assert_eq!(
            encoded,
            json!({"custom_questions": [{"title": "Company", "value": "Initech"}]})
        );
    }
}
