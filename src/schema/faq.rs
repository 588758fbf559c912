use serde::{Deserialize, Serialize};

use crate::content::FaqItem;
use crate::schema::context;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub text: String,
}

/// `None` when there is nothing to show; the FAQ section renders iff this is `Some`.
pub fn generate_faq_schema(faq: Option<&[FaqItem]>) -> Option<FaqPageSchema> {
    let faq = faq.filter(|items| !items.is_empty())?;

    Some(FaqPageSchema {
        context: context(),
        kind: "FAQPage".into(),
        main_entity: faq
            .iter()
            .map(|item| Question {
                kind: "Question".into(),
                name: item.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer".into(),
                    text: item.answer.clone(),
                },
            })
            .collect(),
    })
}
