use pagebar_derive::pagebar_error;
use std::borrow::Cow;

#[pagebar_error]
pub enum LoadError {
    #[error("Read error{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_catalog() -> Result<String, LoadError> {
    let raw = std::fs::read_to_string("catalog.toml").context("Reading catalog")?;
    if raw.is_empty() {
        return Err("catalog is empty".into());
    }
    Ok(raw)
}

fn main() {
    let _ = read_catalog();
    let from_io: LoadError = std::io::Error::other("boom").into();
    assert!(matches!(from_io, LoadError::Read { context: None, .. }));
    let from_owned: LoadError = String::from("owned").into();
    assert!(matches!(from_owned, LoadError::Internal { .. }));
}
