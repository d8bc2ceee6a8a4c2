use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected {found:?} at offset {position} in selector {selector:?}")]
    Unexpected {
        selector: String,
        position: usize,
        found: char,
    },

    #[error("unexpected end of selector {0:?}")]
    UnexpectedEnd(String),

    #[error("unsupported pseudo-class :{0}")]
    UnsupportedPseudo(String),

    #[error(":not() nested deeper than {limit} levels in selector {selector:?}")]
    TooDeep { selector: String, limit: usize },
}
