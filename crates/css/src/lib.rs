pub mod cascade;
pub mod matching;
pub mod selector;
pub mod syntax;

mod error;

// Re-exports so other crates can just use `css::...` nicely.
pub use cascade::{get_inline_style, property_value, remove_inline_property, set_inline_property};
pub use error::SelectorError;
pub use matching::{Specificity, closest, matches, query_selector, query_selector_all};
pub use selector::{
    AttrOp, Combinator, ComplexSelector, Compound, MAX_NESTING, Selector, SelectorList,
    parse_selector,
};
pub use syntax::{Declaration, Rule, Stylesheet, parse_declarations, parse_stylesheet};
