use crate::models::PromptTemplate;

/// Draft-stage prompt: extract behavioral intent from an HTML structure dump.
///
/// Deliberately forbids Gherkin and code so the draft stays a plain-text
/// extraction the refine stage can constrain.
pub const ANALYZE_HTML: PromptTemplate = PromptTemplate::new(
    "analyze_html",
    r#"You are a QA Automation Architect.

Analyze the following HTML or DOM structure and extract:
- User-visible pages or components
- Possible user actions
- Valid interaction flows
- Invalid and edge-case behaviors
- Business-relevant user intent

DO NOT write Gherkin.
DO NOT write code.
ONLY describe behavioral intent in clear text.

HTML STRUCTURE:
----------------
{html}
----------------
"#,
    &["html"],
);

/// Draft-stage prompt: normalize a requirements document into behavior
/// descriptions covering valid, invalid, edge-case, and alternative flows.
pub const ANALYZE_REQUIREMENTS: PromptTemplate = PromptTemplate::new(
    "analyze_requirements",
    r#"You are a Senior QA Automation Engineer.

Normalize the following requirements into a clear list of testable behaviors.

Cover:
- Valid flows
- Invalid flows
- Edge cases
- Alternative flows

DO NOT write Gherkin.
DO NOT write code.
ONLY describe the behaviors in clear text, one per line.

REQUIREMENTS:
----------------
{requirements}
----------------
"#,
    &["requirements"],
);

/// Refine-stage prompt: strict Gherkin generation.
///
/// The embedded contract (placeholder credentials, fixed login step
/// structure) must be reproduced verbatim in the output.
pub const STRICT_SCENARIO: PromptTemplate = PromptTemplate::new(
    "strict_scenario",
    r#"You are a Senior QA Automation Engineer.

Convert the following behavior descriptions into ALL POSSIBLE BDD test scenarios
written in pure Gherkin syntax.

RULES:
- NEVER use real usernames or passwords.
- ALWAYS use placeholders:
  "<username>", "<password>", "<invalid_username>", "<invalid_password>",
  "<empty_username>", "<empty_password>"
- ALL login steps MUST follow exactly this structure:

    Given I open the website
    And I enter the username "<username>"
    And I enter the password "<password>"
    When I click on "Login"

- Invalid or error scenarios MUST use:
  "<invalid_username>", "<invalid_password>", "<empty_username>", "<empty_password>"
- Output must be pure Gherkin. No commentary.

BEHAVIOR DESCRIPTIONS:
{behavior}

FORMAT EXACTLY LIKE:

Feature: [Feature name]

Scenario: [Scenario name]
    Given I open the website
    And I enter the username "<username>"
    And I enter the password "<password>"
    When I click on "Login"
    Then [expected result]
"#,
    &["behavior"],
);
