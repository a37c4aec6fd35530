// All prompt constants for the career-map transformer.
// The JSON-only preamble comes from llm_client::prompts.

use crate::filters::DegreeTrack;

/// Static persona block for the management & policy track. Steers the model
/// toward strategy and governance roles.
pub const PERSONA_MANAGEMENT_POLICY: &str = "\
DEGREE PROFILE: 'AI Management & Policy' Track.
- GRADUATE PERSONA: Strategic Leader, Governance Expert, Product Visionary.
- KEY STRENGTHS: Bridging the gap between technical teams and business goals, Ethics, Policy, Risk Management.
- AVOID: Do not suggest purely coding-heavy roles (like Core Developer) unless they have a strategic component.";

/// Static persona block for the machine-learning track. Steers the model
/// toward technical builder roles.
pub const PERSONA_MACHINE_LEARNING: &str = "\
DEGREE PROFILE: 'AI and Machine Learning' Track.
- GRADUATE PERSONA: Technical Builder, Model Architect, Data Scientist.
- KEY STRENGTHS: Python, TensorFlow, NLP, Computer Vision, building and deploying models.
- AVOID: Do not suggest purely non-technical administrative roles.";

/// Returns the persona block and center-node name for a track. One static
/// text per enum value, nothing computed.
pub fn track_persona(track: DegreeTrack) -> (&'static str, &'static str) {
    match track {
        DegreeTrack::ManagementPolicy => (PERSONA_MANAGEMENT_POLICY, "AI Policy Grad"),
        DegreeTrack::MachineLearning => (PERSONA_MACHINE_LEARNING, "AI ML Grad"),
    }
}

/// Career-map prompt template. Replace `{persona}`, `{center_name}`,
/// `{track}`, `{industry}`, and `{role_function}` before sending.
///
/// Placeholders only ever receive closed-set enum display strings. Free user
/// text must never be interpolated here without explicit sanitization.
pub const CAREER_MAP_PROMPT_TEMPLATE: &str = r#"You are a Career Strategist specialized in graduate AI career planning.

{persona}

USER CONSTRAINTS:
- Target Industry: {industry}
- Preferred Role Function: {role_function}

TASK:
1. CENTER NODE: "{center_name}"
2. LAYER 1 (Job Titles): GENERATE 5 distinct job titles that fit the "{track}" profile within the {industry} industry.
   - BE CREATIVE: Look for modern, emerging titles (e.g., "AI Audit Manager" or "ML Ops Engineer").
3. LAYER 2 (Certifications): For EACH job title, GENERATE 2-3 specific, high-value certifications that would help a candidate land THAT specific job.
   - CRITICAL: The certifications must be relevant to the specific job node.

OUTPUT JSON STRUCTURE:
{
    "center_node": {
        "name": "{center_name}",
        "mission": "Career map for the {track} track in {industry}.",
        "positive_news": "Why this degree profile is valuable right now.",
        "red_flags": "One skill gap to watch out for."
    },
    "connections": [
        {
            "name": "Generated Job Title",
            "reason": "Why this fits the degree profile?",
            "sub_connections": [
                {"name": "Specific Cert A", "reason": "Why this cert?"},
                {"name": "Specific Cert B", "reason": "Why this cert?"}
            ]
        }
    ]
}"#;
