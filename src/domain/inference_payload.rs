use serde::Serialize;

pub const MAX_NEW_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

/// Request body sent to the inference endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferencePayload {
    pub inputs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

impl InferencePayload {
    pub fn chat(message: impl Into<String>) -> Self {
        Self {
            inputs: message.into(),
            documents: None,
            parameters: GenerationParameters::default(),
        }
    }

    pub fn with_documents(message: impl Into<String>, documents: Vec<String>) -> Self {
        Self {
            inputs: message.into(),
            documents: Some(documents),
            parameters: GenerationParameters::default(),
        }
    }
}
