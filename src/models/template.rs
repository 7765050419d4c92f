use thiserror::Error;

/// A prompt template with named `{placeholder}` variables.
///
/// Templates declare their variables up front. Rendering substitutes each
/// declared placeholder exactly once and rejects anything else: a declared
/// variable missing from the template, a placeholder appearing twice, a value
/// supplied for an undeclared variable, or a declared variable with no value.
///
/// Only declared names are treated as placeholders. Literal braces inside
/// embedded framework contracts (`import { Given, When, Then }`, the
/// `{string}` Cucumber expression) pass through untouched, and substituted
/// values are never re-scanned for placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    name: &'static str,
    template: &'static str,
    variables: &'static [&'static str],
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template}': placeholder {{{variable}}} not found")]
    MissingPlaceholder {
        template: &'static str,
        variable: &'static str,
    },

    #[error("template '{template}': placeholder {{{variable}}} appears more than once")]
    DuplicatePlaceholder {
        template: &'static str,
        variable: &'static str,
    },

    #[error("template '{template}': no value supplied for variable '{variable}'")]
    MissingValue {
        template: &'static str,
        variable: &'static str,
    },

    #[error("template '{template}': value supplied for undeclared variable '{variable}'")]
    UndeclaredVariable {
        template: &'static str,
        variable: String,
    },
}

impl PromptTemplate {
    pub const fn new(
        name: &'static str,
        template: &'static str,
        variables: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            template,
            variables,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn variables(&self) -> &'static [&'static str] {
        self.variables
    }

    /// Render the template by substituting each declared variable.
    ///
    /// Substitution is a single pass over the original template text, stitched
    /// from the segments between placeholders, so a value containing brace
    /// syntax can never be picked up as a further placeholder.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        for (supplied, _) in values {
            if !self.variables.iter().any(|v| *v == *supplied) {
                return Err(TemplateError::UndeclaredVariable {
                    template: self.name,
                    variable: supplied.to_string(),
                });
            }
        }

        // Locate each declared placeholder in the raw template.
        let mut slots: Vec<(usize, usize, &str)> = Vec::with_capacity(self.variables.len());
        for &variable in self.variables {
            let pattern = format!("{{{variable}}}");
            let mut occurrences = self.template.match_indices(pattern.as_str());

            let Some((start, matched)) = occurrences.next() else {
                return Err(TemplateError::MissingPlaceholder {
                    template: self.name,
                    variable,
                });
            };
            if occurrences.next().is_some() {
                return Err(TemplateError::DuplicatePlaceholder {
                    template: self.name,
                    variable,
                });
            }

            let value = values
                .iter()
                .find(|(name, _)| *name == variable)
                .map(|(_, value)| *value)
                .ok_or(TemplateError::MissingValue {
                    template: self.name,
                    variable,
                })?;

            slots.push((start, matched.len(), value));
        }

        slots.sort_by_key(|(start, _, _)| *start);

        let mut rendered = String::with_capacity(self.template.len());
        let mut cursor = 0;
        for (start, len, value) in slots {
            rendered.push_str(&self.template[cursor..start]);
            rendered.push_str(value);
            cursor = start + len;
        }
        rendered.push_str(&self.template[cursor..]);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate =
        PromptTemplate::new("greeting", "Hello {name}, welcome to {place}.", &["name", "place"]);

    #[test]
    fn test_render_substitutes_all_variables() {
        let rendered = GREETING
            .render(&[("name", "Ada"), ("place", "the lab")])
            .unwrap();
        assert_eq!(rendered, "Hello Ada, welcome to the lab.");
    }

    #[test]
    fn test_render_no_placeholder_syntax_remains() {
        let rendered = GREETING.render(&[("name", "Ada"), ("place", "x")]).unwrap();
        assert!(!rendered.contains("{name}"));
        assert!(!rendered.contains("{place}"));
    }

    #[test]
    fn test_render_missing_value() {
        let err = GREETING.render(&[("name", "Ada")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingValue {
                template: "greeting",
                variable: "place",
            }
        );
    }

    #[test]
    fn test_render_undeclared_variable() {
        let err = GREETING
            .render(&[("name", "Ada"), ("place", "x"), ("mood", "happy")])
            .unwrap_err();
        assert!(matches!(err, TemplateError::UndeclaredVariable { .. }));
    }

    #[test]
    fn test_render_placeholder_absent_from_template() {
        const BROKEN: PromptTemplate =
            PromptTemplate::new("broken", "no placeholders here", &["missing"]);
        let err = BROKEN.render(&[("missing", "x")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPlaceholder {
                template: "broken",
                variable: "missing",
            }
        );
    }

    #[test]
    fn test_render_duplicate_placeholder_rejected() {
        const DOUBLED: PromptTemplate =
            PromptTemplate::new("doubled", "{x} and {x} again", &["x"]);
        let err = DOUBLED.render(&[("x", "once")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::DuplicatePlaceholder {
                template: "doubled",
                variable: "x",
            }
        );
    }

    #[test]
    fn test_render_preserves_literal_braces() {
        const CONTRACT: PromptTemplate = PromptTemplate::new(
            "contract",
            "import { Given, When, Then } from 'fixtures';\nUse {string} parameters.\n{analysis}",
            &["analysis"],
        );
        let rendered = CONTRACT.render(&[("analysis", "mapping rules")]).unwrap();
        assert!(rendered.contains("import { Given, When, Then }"));
        assert!(rendered.contains("Use {string} parameters."));
        assert!(rendered.contains("mapping rules"));
        assert!(!rendered.contains("{analysis}"));
    }

    #[test]
    fn test_render_value_is_not_rescanned() {
        let rendered = GREETING
            .render(&[("name", "{place}"), ("place", "Berlin")])
            .unwrap();
        // The literal "{place}" inserted for name must survive as-is.
        assert_eq!(rendered, "Hello {place}, welcome to Berlin.");
    }
}
