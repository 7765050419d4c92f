use crate::models::PromptTemplate;

/// Draft-stage prompt: extract structural patterns from existing step
/// definitions without rewriting them.
pub const ANALYZE_STEPS: PromptTemplate = PromptTemplate::new(
    "analyze_steps",
    r#"You are a Senior QA Automation Architect.

Analyze the following existing BDD step definitions.

Extract:
- Naming conventions
- Step grammar patterns
- Parameter styles
- Reusability rules
- Action vs verification separation
- Page Object interaction rules

DO NOT rewrite steps.
DO NOT generate code.
ONLY extract structural and behavioral patterns.

EXISTING STEPS:
----------------
{steps}
----------------
"#,
    &["steps"],
);

/// Refine-stage prompt: produce a universal step-generation prompt from the
/// extracted patterns.
pub const UNIVERSAL_STEPS_PROMPT: PromptTemplate = PromptTemplate::new(
    "universal_steps_prompt",
    r#"UNIVERSAL BDD STEP DEFINITIONS PROMPT

ROLE:
You generate BDD step definitions that strictly follow the rules below.

STRICT RULES:
- Given / When / Then / And only
- One action per step
- Reusable and parameterized
- No UI selectors or locators
- No navigation mixed with verification

NAMING:
- Present tense, imperative
- Domain language only
- Semantic parameter names

POM INTEGRATION:
- Steps map 1:1 to Page Object methods
- No locator exposure
- No new methods invented

PROJECT PATTERNS:
{patterns}

OUTPUT:
This prompt is used to generate consistent, automation-ready BDD steps.
"#,
    &["patterns"],
);

/// Draft-stage prompt: map feature steps to existing page-object methods.
/// The draft must not invent methods or emit code.
pub const ANALYZE_FEATURE_POM: PromptTemplate = PromptTemplate::new(
    "analyze_feature_pom",
    r#"You are a Senior QA Automation Architect.

Analyze the following inputs:

1. Gherkin Feature File
2. Existing Playwright Page Object Model (TypeScript)

Your responsibilities:
- Identify step intentions from the feature
- Identify AVAILABLE methods from the Page Object
- Define valid step -> method mappings
- Identify reusable step patterns
- DO NOT invent methods
- DO NOT generate code

ONLY OUTPUT:
- Navigation step intents
- Action step intents
- Verification step intents
- Valid mapping rules

FEATURE FILE:
----------------
{feature}
----------------

PAGE OBJECT:
----------------
{pom}
----------------
"#,
    &["feature", "pom"],
);

/// Refine-stage prompt: strict framework-contract step definitions.
///
/// The framework contract below is literal text the model must comply with;
/// the braces in the embedded TypeScript are not placeholders.
pub const GENERATE_STEPS: PromptTemplate = PromptTemplate::new(
    "generate_steps",
    r#"You are a Senior QA Automation Engineer generating Playwright + Cucumber step definitions.

You MUST strictly follow this framework contract.

==================== FRAMEWORK CONTRACT ====================

1. Imports
- ALWAYS import steps from '../../support/fixtures'
- NEVER import from '@cucumber/cucumber'
- NEVER import expect from Playwright

Example:
import { Given, When, Then } from '../../support/fixtures';

2. Context Injection
- ALL steps MUST use fixture-based injection
- Arrow functions ONLY

MANDATORY signature:
async ({ pageManager }: FixtureContext, ...params) => { }

3. FixtureContext
Assume this type exists:
type FixtureContext = {
  pageManager: PageManager;
};

4. Page Object Access
- NEVER access Page Objects statically
- ALWAYS use accessor functions

Example:
const pageLogin = (pageManager: PageManager): PageLogin =>
  pageManager.getPageLogin();

5. Method Usage
- Use ONLY methods that exist in the Page Object
- DO NOT invent new methods
- Prefer composite methods when available

6. Step Rules
- One action per step
- No assertions in When steps
- Assertions ONLY in Then steps
- NO locators
- NO waits
- NO expect()
- NO implementation details

7. Naming Rules
- Short, reusable step text
- Domain language only
- Use {string} placeholders only

8. Output Rules
- Output ONLY TypeScript code
- NO markdown
- NO comments
- NO explanations
- Single file output

==================== INPUT ====================

STEP MAPPING SPECIFICATION:
{analysis}

==================== OUTPUT ====================

Generate STRICT, framework-compliant step definitions now.
"#,
    &["analysis"],
);
