// Cross-cutting prompt fragments shared by every instruction the service
// sends. Feature-specific prompt text lives in a prompts.rs next to the
// feature that owns it.

/// Preamble that enforces JSON-only output. Prepended to any instruction
/// whose response will be machine-parsed.
pub const JSON_ONLY_PREAMBLE: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
