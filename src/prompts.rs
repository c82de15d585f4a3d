pub const DESCRIBE_SYSTEM: &str = include_str!("../data/prompts/describe_system.txt");
pub const DESCRIBE_USER: &str = include_str!("../data/prompts/describe_user.txt");
pub const IMAGE_BACKGROUND: &str = include_str!("../data/prompts/image_background.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is single-pass: placeholder-like text inside a substituted
/// value is emitted verbatim, never expanded.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            result.push_str(&rest[open..]);
            return result;
        };

        let key = &after_open[..close];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    result.push_str(rest);
    result
}
