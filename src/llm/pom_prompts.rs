use crate::models::PromptTemplate;

/// Draft-stage prompt: inventory a page's elements and actions from a
/// description or raw HTML. Plain-text extraction only.
pub const ANALYZE_PAGE: PromptTemplate = PromptTemplate::new(
    "analyze_page",
    r#"You are a Senior QA Automation Engineer.

Analyze the following page content and extract an inventory of:
- Inputs, buttons, links, labels, headings, icons, errors, messages
- User actions the page supports
- Composite user flows (login, submit, search, save)
- States worth verifying (visibility, text, enabled/disabled)

DO NOT write code.
DO NOT invent elements that are not implied by the content.
ONLY list the inventory in clear text.

PAGE CONTENT:
----------------
{page}
----------------
"#,
    &["page"],
);

/// Refine-stage prompt: strict Playwright Page Object Model generation.
pub const GENERATE_POM: PromptTemplate = PromptTemplate::new(
    "generate_pom",
    r#"You are a Senior QA Automation Engineer.

Generate a Playwright Page Object Model (POM) in TypeScript
that STRICTLY follows BDD-compatible architecture rules.

STRICT RULES (MANDATORY):

1. Naming:
   - Page class name: {class_name}
   - camelCase methods
   - verb-first naming

2. Method structure:
   - Navigation methods (goto, navigateToX)
   - Action methods (fillUsername, clickLoginButton)
   - Composite methods (loginWithCredentials)
   - Verification methods (verify..., assert...)
   - Boolean helpers (is..., get...)

3. Encapsulation:
   - All locators MUST be private
   - No raw locators exposed
   - No assertions inside action methods

4. Verification rules:
   - Soft checks -> verify...
   - Hard expectations -> assert...

5. Output rules:
   - Output ONLY TypeScript code
   - NO markdown
   - NO comments
   - NO explanations
   - Ready to paste into a real Playwright project

6. Locator rules:
   - Use page.locator()
   - Semantic camelCase names
   - Extract inputs, buttons, links, messages, errors

MODE:
{mode}

PAGE INVENTORY:
{inventory}

OUTPUT:
Generate ONE Playwright Page Object class.
"#,
    &["class_name", "mode", "inventory"],
);
