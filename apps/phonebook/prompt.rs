use reedline::{Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};
use std::borrow::Cow;

pub(crate) struct MyPrompt;

impl Prompt for MyPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        "phonebook$ ".into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}

/// One-shot yes/no question shown in place of the regular prompt.
pub(crate) struct ConfirmPrompt<'a> {
    question: &'a str,
}

impl<'a> ConfirmPrompt<'a> {
    pub(crate) fn new(question: &'a str) -> Self {
        Self { question }
    }
}

impl Prompt for ConfirmPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<str> {
        format!("{} [y/N] ", self.question).into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}

pub(crate) fn confirm(rl: &mut Reedline, question: &str) -> bool {
    match rl.read_line(&ConfirmPrompt::new(question)) {
        Ok(Signal::Success(answer)) => matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ),
        _ => false,
    }
}
