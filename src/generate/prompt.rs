use crate::model::RawNotes;

/// System instruction fixed at process start: INVEST principles plus the
/// exact JSON array shape the transformer knows how to parse.
pub const SYSTEM_PROMPT: &str = r#"You are an expert Business Analyst and Requirements Engineer. Your task is to transform raw customer notes into well-structured user stories that follow the INVEST principles.

INVEST Principles:
- Independent: Stories should be independent of each other
- Negotiable: Details can be discussed and refined
- Valuable: Must provide clear value to users or business
- Estimable: Development effort can be estimated
- Small: Can be completed in one iteration/sprint
- Testable: Has clear acceptance criteria

For each user story you create:
1. Write a clear title in the format: "As a [type of user], I want [some goal] so that [some reason]"
2. Provide a detailed description
3. Evaluate against INVEST criteria (mark true/false for each)
4. Write a clear Definition of Done
5. Create Gherkin acceptance criteria with Given/When/Then scenarios

Guidelines:
- Break down complex requirements into multiple smaller stories
- Ensure each story is testable with clear acceptance criteria
- Use business language, not technical jargon
- Focus on user value and outcomes
- Make scenarios specific and measurable

Return your response as a JSON array of user stories with this exact structure:
[
  {
    "title": "As a [user], I want [goal] so that [reason]",
    "description": "Detailed description of the user story",
    "invest_criteria": {
      "independent": true,
      "negotiable": true,
      "valuable": true,
      "estimable": true,
      "small": true,
      "testable": true
    },
    "definition_of_done": "Clear definition of done",
    "acceptance_criteria": [
      {
        "scenario_title": "Scenario title",
        "steps": [
          {"keyword": "Given", "text": "step description"},
          {"keyword": "When", "text": "step description"},
          {"keyword": "Then", "text": "step description"}
        ]
      }
    ]
  }
]"#;

/// Build the per-call user instruction embedding the notes and ceiling.
pub fn build_user_prompt(notes: &RawNotes, max_stories: usize) -> String {
    format!(
        r#"Transform the following raw customer notes into {} or fewer well-structured user stories:

Raw Notes:
{}

Additional Context:
{}

Requirements:
1. Create user stories that follow INVEST principles
2. Each story must have clear acceptance criteria in Gherkin format
3. Ensure stories are independent and can be developed separately
4. Focus on user value and business outcomes
5. Make acceptance criteria specific and testable"#,
        max_stories,
        notes.content,
        notes.context.as_deref().unwrap_or("No additional context provided"),
    )
}

/// JSON schema for the story array, for providers with structured output.
pub fn story_array_schema() -> serde_json::Value {
    serde_json::json!({
        "name": "user_stories",
        "schema": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["title", "description", "invest_criteria", "definition_of_done", "acceptance_criteria"],
                "properties": {
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "invest_criteria": {
                        "type": "object",
                        "properties": {
                            "independent": { "type": "boolean" },
                            "negotiable": { "type": "boolean" },
                            "valuable": { "type": "boolean" },
                            "estimable": { "type": "boolean" },
                            "small": { "type": "boolean" },
                            "testable": { "type": "boolean" }
                        }
                    },
                    "definition_of_done": { "type": "string" },
                    "acceptance_criteria": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["scenario_title", "steps"],
                            "properties": {
                                "scenario_title": { "type": "string" },
                                "steps": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "required": ["keyword", "text"],
                                        "properties": {
                                            "keyword": { "enum": ["Given", "When", "Then", "And", "But"] },
                                            "text": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
