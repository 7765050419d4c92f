/// Denylist-based cleanup for model output.
///
/// Refine models occasionally wrap their answer in markdown fences or append
/// commentary despite being told not to. Cleanup removes known noise
/// substrings verbatim; it does not parse structure.

/// Noise substrings observed in refine-model output.
pub const DEFAULT_DENYLIST: &[&str] = &["```", "###", "**", "Explanation", "analysis", "markdown"];

/// Denylist applied to generated step definitions.
pub const STEPS_DENYLIST: &[&str] = &["```", "Explanation", "analysis", "markdown"];

#[derive(Debug, Clone)]
pub struct Cleanup {
    banned: Vec<String>,
}

impl Default for Cleanup {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST)
    }
}

impl Cleanup {
    pub fn new(banned: &[&str]) -> Self {
        Self {
            banned: banned.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn banned(&self) -> &[String] {
        &self.banned
    }

    /// Remove every banned substring from the text.
    ///
    /// Removal runs to a fixpoint: deleting one occurrence can splice the
    /// surrounding text into a new banned substring, so passes repeat until
    /// nothing changes. One application is therefore idempotent.
    pub fn scrub(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let mut next = current.clone();
            for banned in &self.banned {
                if !banned.is_empty() {
                    next = next.replace(banned.as_str(), "");
                }
            }
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_removes_code_fences() {
        let cleanup = Cleanup::default();
        let text = "```typescript\nexport class PageLogin {}\n```";
        let scrubbed = cleanup.scrub(text);
        assert!(!scrubbed.contains("```"));
        assert!(scrubbed.contains("export class PageLogin {}"));
    }

    #[test]
    fn test_scrub_removes_emphasis_and_headings() {
        let cleanup = Cleanup::default();
        let scrubbed = cleanup.scrub("### Output\n**bold** analysis done");
        assert!(!scrubbed.contains("###"));
        assert!(!scrubbed.contains("**"));
        assert!(!scrubbed.contains("analysis"));
    }

    #[test]
    fn test_scrub_is_idempotent() {
        let cleanup = Cleanup::default();
        let text = "``` some **text** with ### markers and an Explanation";
        let once = cleanup.scrub(text);
        assert_eq!(cleanup.scrub(&once), once);
    }

    #[test]
    fn test_scrub_reaches_fixpoint_on_spliced_matches() {
        // Removing the inner "ab" splices the rest into a fresh "ab".
        let cleanup = Cleanup::new(&["ab"]);
        assert_eq!(cleanup.scrub("aabb"), "");
    }

    #[test]
    fn test_scrub_empty_denylist_is_identity() {
        let cleanup = Cleanup::new(&[]);
        assert_eq!(cleanup.scrub("unchanged ``` text"), "unchanged ``` text");
    }

    #[test]
    fn test_steps_denylist_keeps_emphasis() {
        let cleanup = Cleanup::new(STEPS_DENYLIST);
        let scrubbed = cleanup.scrub("```\nconst n = 2 ** 3;\n```");
        assert!(scrubbed.contains("2 ** 3"));
        assert!(!scrubbed.contains("```"));
    }
}
