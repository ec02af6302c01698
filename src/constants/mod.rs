pub mod page_template;
pub mod quiz_prompt;
