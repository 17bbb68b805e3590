use crate::types::GenerationRequest;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of captions requested per call.
pub const CAPTION_COUNT: usize = 3;

/// Everything the generation client needs for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
    pub response_schema: ResponseSchema,
}

/// Gemini structured-output type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

/// One property in a [`ResponseSchema`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaProperty {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaProperty {
    fn string_array(description: &str) -> Self {
        Self {
            kind: SchemaType::Array,
            items: Some(Box::new(SchemaProperty {
                kind: SchemaType::String,
                items: None,
                description: None,
            })),
            description: Some(description.to_string()),
        }
    }
}

/// Declared shape of the model's JSON reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    pub properties: BTreeMap<String, SchemaProperty>,
    pub required: Vec<String>,
}

impl ResponseSchema {
    /// `captions` is always required; `hashtags` only when requested.
    pub fn for_captions(include_hashtags: bool) -> Self {
        let mut properties = BTreeMap::new();
        let mut required = vec!["captions".to_string()];

        properties.insert(
            "captions".to_string(),
            SchemaProperty::string_array("Exactly 3 distinct social media captions."),
        );

        if include_hashtags {
            properties.insert(
                "hashtags".to_string(),
                SchemaProperty::string_array("5 to 10 relevant hashtags without the leading #."),
            );
            required.push("hashtags".to_string());
        }

        Self {
            kind: SchemaType::Object,
            properties,
            required,
        }
    }

    pub fn requires(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }
}

/// Build the system instruction, user prompt, and response schema for a
/// request. The request is assumed valid.
pub fn build(request: &GenerationRequest) -> Prompt {
    let mut guidelines = vec![
        format!(
            "Write exactly {} distinct captions, each 5-25 words long.",
            CAPTION_COUNT
        ),
        format!("Tone: {}. {}", request.style, request.style.guideline()),
        "Use relevant emojis.".to_string(),
        format!("Write every caption in {}.", request.language),
    ];
    if request.include_hashtags {
        guidelines.push(
            "Also suggest 5-10 relevant hashtags. Write them all without the leading #."
                .to_string(),
        );
    }

    let system_instruction = format!(
        "You are a world-class social media strategist and creative copywriter specializing in Instagram.\n\
         Your task is to generate high-engagement captions for a given topic and style.\n\n{}",
        section("Guidelines", &numbered_list(&guidelines))
    );

    let mut user_prompt = format!(
        "Topic: \"{}\"\nStyle: \"{}\"\n\nPlease provide exactly {} captions.",
        request.topic, request.style, CAPTION_COUNT
    );
    if request.include_hashtags {
        user_prompt.push_str(" Include hashtags.");
    }

    Prompt {
        system_instruction,
        user_prompt,
        response_schema: ResponseSchema::for_captions(request.include_hashtags),
    }
}

/// Create a numbered list from items (1-indexed).
pub fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap text in a labeled section for structured prompts.
pub fn section(label: &str, content: &str) -> String {
    format!("## {}\n{}", label, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{CaptionStyle, Language};
    use serde_json::json;

    fn request(include_hashtags: bool) -> GenerationRequest {
        GenerationRequest::new("beach sunset", CaptionStyle::Funny, include_hashtags).unwrap()
    }

    #[test]
    fn test_schema_without_hashtags() {
        let schema = ResponseSchema::for_captions(false);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "captions": {
                        "type": "ARRAY",
                        "items": {"type": "STRING"},
                        "description": "Exactly 3 distinct social media captions."
                    }
                },
                "required": ["captions"]
            })
        );
    }

    #[test]
    fn test_schema_with_hashtags_requires_both() {
        let schema = ResponseSchema::for_captions(true);
        assert!(schema.requires("captions"));
        assert!(schema.requires("hashtags"));
        assert_eq!(schema.properties["hashtags"].kind, SchemaType::Array);
    }

    #[test]
    fn test_build_mentions_topic_and_style() {
        let prompt = build(&request(false));
        assert!(prompt.user_prompt.contains("Topic: \"beach sunset\""));
        assert!(prompt.user_prompt.contains("Style: \"Funny\""));
        assert!(prompt.system_instruction.contains("exactly 3 distinct captions"));
        assert!(prompt.system_instruction.contains("5-25 words"));
        assert!(prompt.system_instruction.contains("humor"));
        assert!(!prompt.system_instruction.contains("hashtags"));
        assert!(!prompt.response_schema.requires("hashtags"));
    }

    #[test]
    fn test_build_with_hashtags() {
        let prompt = build(&request(true));
        assert!(prompt.system_instruction.contains("5-10 relevant hashtags"));
        assert!(prompt.user_prompt.ends_with("Include hashtags."));
        assert!(prompt.response_schema.requires("hashtags"));
    }

    #[test]
    fn test_build_uses_language() {
        let prompt = build(&request(false).with_language(Language::German));
        assert!(prompt.system_instruction.contains("in German"));
    }

    #[test]
    fn test_build_is_pure() {
        assert_eq!(build(&request(true)), build(&request(true)));
    }

    #[test]
    fn test_numbered_list() {
        let items = vec!["First".to_string(), "Second".to_string()];
        assert_eq!(numbered_list(&items), "1. First\n2. Second");
        assert_eq!(numbered_list(&[]), "");
    }

    #[test]
    fn test_section() {
        assert_eq!(section("Guidelines", "be brief"), "## Guidelines\nbe brief");
    }
}
