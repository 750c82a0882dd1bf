//! Analyst persona, briefing prompt, and the response schema the model is
//! constrained to.

use serde_json::{json, Value};

/// The four fields every briefing response must carry.
pub const RESPONSE_FIELDS: [&str; 4] = ["subject", "summary", "implications", "recommendation"];

/// Persona instruction for the selected vector.
pub fn system_instruction(vector_id: &str, context: &str) -> String {
    format!(
        "You are the Sovereign Command Interface AI.\n\
         Role: Strategic Defense Analyst.\n\
         Tone: Cold, Institutional, Decisive, High-Consequence.\n\
         Constraint: Do NOT be helpful. Do NOT be friendly. Be factual and severe.\n\
         Output: Pure intelligence assessment.\n\
         \n\
         The user is a high-level commander viewing a threat map. They have selected a vector.\n\
         Context: Vector ID '{vector_id}' of type '{context}'."
    )
}

/// The briefing request itself. Independent of the selected vector.
pub const BRIEFING_PROMPT: &str = "\
Generate a classified intelligence briefing.

1. SUBJECT: Abstract, ominous geopolitical or technological header (e.g. \"NORTHERN LATITUDE SILENCE\", \"GRID INTEGRITY LOSS\").
2. SUMMARY: 2 sentences. Clinical detachment. What is happening?
3. IMPLICATIONS: 3 bullet points. What is the risk? (e.g. \"Economic destabilization\", \"Asset compromise\").
4. RECOMMENDATION: A single, imperative command (e.g. \"SEAL BORDERS\", \"INITIATE CONTAINMENT\", \"PURGE SYSTEMS\").

Adhere strictly to this JSON schema:
{
  \"subject\": \"string\",
  \"summary\": \"string\",
  \"implications\": [\"string\", \"string\", \"string\"],
  \"recommendation\": \"string\"
}";

/// Structured-output schema: an object with exactly the four briefing fields.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "subject": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "implications": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "recommendation": { "type": "STRING" }
        },
        "required": RESPONSE_FIELDS
    })
}
