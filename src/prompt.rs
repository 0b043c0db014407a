//! Mentor prompt for an external generative assistant.
//!
//! logicmedic never calls a model itself; `logicmedic prompt` prints the
//! filled-in template so it can be piped to one.

const TEMPLATE: &str = include_str!("templates/mentor_prompt.txt");

/// Placeholder replaced by the submission.
pub const CODE_PLACEHOLDER: &str = "{code}";

/// Headings the assistant is asked to answer under, in order.
pub const SECTIONS: &[&str] = &[
    "Bug/Error:",
    "Explanation:",
    "Improvement Suggestion:",
    "Learning Tip:",
    "Code Quality Score (out of 10):",
];

/// Fill the template with a submission.
pub fn render(code: &str) -> String {
    TEMPLATE.replacen(CODE_PLACEHOLDER, code, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_every_section_in_order() {
        let mut rest = TEMPLATE;
        for section in SECTIONS {
            let at = rest.find(section).unwrap_or_else(|| panic!("missing {}", section));
            rest = &rest[at + section.len()..];
        }
        assert!(rest.contains(CODE_PLACEHOLDER));
    }

    #[test]
    fn test_render_inserts_code_verbatim() {
        let code = "x = {code}\nprint(x)";
        let prompt = render(code);
        assert!(prompt.ends_with("Code:\nx = {code}\nprint(x)\n"));
        assert!(!prompt.starts_with('{'));
    }
}
