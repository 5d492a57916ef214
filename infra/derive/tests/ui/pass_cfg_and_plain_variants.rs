use pagebar_derive::pagebar_error;
use std::borrow::Cow;

#[pagebar_error]
#[derive(Debug)]
pub enum RenderError {
    #[error("Missing slot {index}")]
    MissingSlot { index: usize },

    #[cfg(unix)]
    #[error("Platform error{}: {message}", format_context(.context))]
    Platform { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let plain: Result<(), RenderError> = Err(RenderError::MissingSlot { index: 3 });
    let err = plain.context("ignored for variants without context").unwrap_err();
    assert_eq!(err.to_string(), "Missing slot 3");
}
