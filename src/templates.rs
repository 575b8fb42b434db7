pub const COURSE_OUTLINE: &str = include_str!("../data/prompts/course_outline.txt");
pub const INDEX_PAGE: &str = include_str!("../data/templates/index.html");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is a single left-to-right pass, so values that themselves
/// contain `{{...}}` are never expanded. Unknown keys are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => result.push_str(value),
                    None => {
                        result.push_str("{{");
                        result.push_str(key);
                        result.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Build the syllabus prompt for a course title.
pub fn course_prompt(title: &str) -> String {
    render(COURSE_OUTLINE, &[("title", title)]).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_render_does_not_expand_values() {
        assert_eq!(
            render("{{a}} {{b}}", &[("a", "{{b}}"), ("b", "x")]),
            "{{b}} x"
        );
    }

    #[test]
    fn test_render_keeps_unknown_and_unterminated() {
        assert_eq!(render("{{missing}} {{open", &[]), "{{missing}} {{open");
    }

    #[test]
    fn test_templates_have_placeholders() {
        assert!(COURSE_OUTLINE.contains("{{title}}"));
        for key in ["title", "status", "status_class", "result", "generate_disabled"] {
            assert!(INDEX_PAGE.contains(&format!("{{{{{}}}}}", key)), "{}", key);
        }
    }

    #[test]
    fn test_course_prompt_embeds_title() {
        let prompt = course_prompt("Compilers");
        assert!(prompt.contains("course titled \"Compilers\""));
        assert!(prompt.contains("Recommended Readings"));
        assert!(!prompt.contains("{{title}}"));
    }
}
