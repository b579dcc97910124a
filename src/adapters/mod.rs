//! Wire-format adapters.
//!
//! Small conversion rules that map irregular vendor JSON onto typed models:
//!
//! - `wire_enum`: string-coded enums with canonical and alternate wire values
//! - `coded_enum`: integer-coded status families with a fallback member
//! - `custom_questions`: nested question/answer arrays flattened to ordered pairs
//! - `numeric_or_string`: numeric fields the vendor sometimes sends as strings

pub mod coded_enum;
pub mod custom_questions;
pub mod numeric_or_string;
pub mod wire_enum;

pub use coded_enum::CodedEnum;
pub use custom_questions::{CustomQuestionAnswer, QuestionShape, RegistrationQuestion, TicketQuestion};
pub use wire_enum::{WireEnum, WireMapping};
