use crate::models::PromptTemplate;

/// Draft-stage prompt: distill existing scenarios into a strict style
/// contract. Rules only, no examples, so the contract stays reusable.
pub const STYLE_EXTRACTION: PromptTemplate = PromptTemplate::new(
    "style_extraction",
    r#"You are a senior QA architect.

Analyze the following BDD scenarios and extract a
STRICT, REUSABLE BDD STYLE CONTRACT.

Output ONLY rules.
NO explanations.
NO examples.

Rules should cover:
- Step wording
- Given / When / Then usage
- Reusability principles
- Naming conventions
- What to avoid
- Scenario structure

--- BDD INPUT ---
{scenarios}
"#,
    &["scenarios"],
);

/// Refine-stage prompt: turn the extracted style contract into a single
/// reusable scenario-generation prompt.
pub const UNIVERSAL_SCENARIO_PROMPT: PromptTemplate = PromptTemplate::new(
    "universal_scenario_prompt",
    r#"You are an expert BDD generator.

Using the following BDD STYLE CONTRACT,
generate a UNIVERSAL PROMPT that can be used
to generate high-quality BDD scenarios
for ANY web application page.

The prompt MUST:
- Enforce the style rules
- Be reusable across all features
- Accept feature description as input
- Produce clean, maintainable BDD

--- BDD STYLE CONTRACT ---
{style_rules}

OUTPUT:
A SINGLE reusable prompt (ready to be copy-pasted).
"#,
    &["style_rules"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_extraction_renders() {
        let prompt = STYLE_EXTRACTION
            .render(&[("scenarios", "Scenario: valid login")])
            .unwrap();
        assert!(prompt.contains("Scenario: valid login"));
        assert!(prompt.contains("STRICT, REUSABLE BDD STYLE CONTRACT"));
    }

    #[test]
    fn test_universal_prompt_renders() {
        let prompt = UNIVERSAL_SCENARIO_PROMPT
            .render(&[("style_rules", "- One action per step")])
            .unwrap();
        assert!(prompt.contains("- One action per step"));
    }
}
