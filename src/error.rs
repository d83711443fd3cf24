use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    ElementNotFound(String),

    #[error("element `{0}` is not a <canvas>")]
    NotACanvas(String),

    #[error("2d context unavailable")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type PageResult<T> = Result<T, PageError>;
