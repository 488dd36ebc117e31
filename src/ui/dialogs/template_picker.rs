use crate::app::domain::{TEMPLATES, Template};

use super::list_picker::pick_from_list;

/// Ask which template a new book should start from.
pub fn show_template_picker() -> Option<&'static Template> {
    let items: Vec<String> = TEMPLATES.iter().map(Template::picker_line).collect();
    let index = pick_from_list(
        "New Book",
        "Choose a template for your book",
        &items,
        "Start Writing",
        |i| describe_template(&TEMPLATES[i]),
    )?;
    TEMPLATES.get(index)
}

/// Ask which of `template`'s prompts to insert.
pub fn show_prompt_picker(template: &'static Template) -> Option<&'static str> {
    let items: Vec<String> = template.prompts.iter().map(|p| p.to_string()).collect();
    let index = pick_from_list(
        "Insert Prompt",
        &format!("Prompts for {}", template.name),
        &items,
        "Insert",
        move |i| template.prompts[i].to_string(),
    )?;
    template.prompts.get(index).copied()
}

fn describe_template(template: &Template) -> String {
    let mut text = format!("{}\nCategory: {}\n", template.description, template.category);
    for prompt in template.prompts.iter().take(2) {
        text.push_str("\n\u{2022} ");
        text.push_str(prompt);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_template_lists_first_prompts() {
        let text = describe_template(&TEMPLATES[0]);
        assert!(text.starts_with(TEMPLATES[0].description));
        assert!(text.contains(TEMPLATES[0].prompts[0]));
        assert!(text.contains(TEMPLATES[0].prompts[1]));
        assert!(!text.contains(TEMPLATES[0].prompts[2]));
    }
}
