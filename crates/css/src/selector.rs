//! Selector syntax: a practical subset of Selectors Level 3.
//!
//! Supported: type and universal selectors, `#id`, `.class`, attribute
//! selectors (`[a]`, `=`, `~=`, `|=`, `^=`, `$=`, `*=`), the pseudo-classes
//! `:root`, `:first-child`, `:last-child` and `:not(<list>)`, all four
//! combinators, and comma-separated selector lists.

use crate::error::SelectorError;

/// Deepest `:not()` nesting the parser accepts.
pub const MAX_NESTING: usize = 32;

/// One simple selector inside a compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
    Attribute {
        name: String,
        value: Option<(AttrOp, String)>,
    },
    Root,
    FirstChild,
    LastChild,
    Not(SelectorList),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrOp {
    Equals,    // [a=v]
    Includes,  // [a~=v]
    DashMatch, // [a|=v]
    Prefix,    // [a^=v]
    Suffix,    // [a$=v]
    Substring, // [a*=v]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

/// Simple selectors that must all match the same element, e.g. `a.nav[href]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compound(pub Vec<Selector>);

/// A chain of compounds. `parts[i].0` is the relation between compound
/// `i - 1` and compound `i`; it is `None` for the leftmost compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<(Option<Combinator>, Compound)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

pub fn parse_selector(input: &str) -> Result<SelectorList, SelectorError> {
    if input.trim().is_empty() {
        return Err(SelectorError::Empty);
    }
    let mut parser = Parser {
        source: input,
        chars: input.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let list = parser.parse_list(false)?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        return Err(parser.unexpected(c));
    }
    Ok(list)
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            selector: self.source.to_string(),
            position: self.pos,
            found,
        }
    }

    fn end(&self) -> SelectorError {
        SelectorError::UnexpectedEnd(self.source.to_string())
    }

    fn expect(&mut self, want: char) -> Result<(), SelectorError> {
        match self.peek() {
            Some(c) if c == want => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.end()),
        }
    }

    fn parse_list(&mut self, nested: bool) -> Result<SelectorList, SelectorError> {
        let mut complexes = Vec::new();
        loop {
            self.skip_ws();
            complexes.push(self.parse_complex(nested)?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                _ => break,
            }
        }
        Ok(SelectorList(complexes))
    }

    fn parse_complex(&mut self, nested: bool) -> Result<ComplexSelector, SelectorError> {
        let mut parts = vec![(None, self.parse_compound()?)];
        loop {
            let had_ws = self.skip_ws();
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some(')') if nested => break,
                Some('>') => Combinator::Child,
                Some('+') => Combinator::NextSibling,
                Some('~') => Combinator::SubsequentSibling,
                Some(_) if had_ws => Combinator::Descendant,
                Some(c) => return Err(self.unexpected(c)),
            };
            if combinator != Combinator::Descendant {
                self.pos += 1;
                self.skip_ws();
            }
            parts.push((Some(combinator), self.parse_compound()?));
        }
        Ok(ComplexSelector { parts })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut simple = Vec::new();
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                simple.push(Selector::Universal);
            }
            Some(c) if is_ident_char(c) && !c.is_ascii_digit() => {
                simple.push(Selector::Type(self.parse_ident()?.to_ascii_lowercase()));
            }
            _ => {}
        }
        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    simple.push(Selector::Id(self.parse_ident()?));
                }
                Some('.') => {
                    self.pos += 1;
                    simple.push(Selector::Class(self.parse_ident()?));
                }
                Some('[') => {
                    self.pos += 1;
                    simple.push(self.parse_attribute()?);
                }
                Some(':') => {
                    self.pos += 1;
                    simple.push(self.parse_pseudo()?);
                }
                _ => break,
            }
        }
        if simple.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => self.end(),
            });
        }
        Ok(Compound(simple))
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => self.end(),
            });
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.skip_ws();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_ws();
        let op = match self.peek() {
            Some(']') => {
                self.pos += 1;
                return Ok(Selector::Attribute { name, value: None });
            }
            Some('=') => {
                self.pos += 1;
                AttrOp::Equals
            }
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.pos += 1;
                self.expect('=')?;
                match c {
                    '~' => AttrOp::Includes,
                    '|' => AttrOp::DashMatch,
                    '^' => AttrOp::Prefix,
                    '$' => AttrOp::Suffix,
                    _ => AttrOp::Substring,
                }
            }
            Some(c) => return Err(self.unexpected(c)),
            None => return Err(self.end()),
        };
        self.skip_ws();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                loop {
                    match self.bump() {
                        Some(c) if c == quote => break,
                        Some(_) => {}
                        None => return Err(self.end()),
                    }
                }
                self.chars[start..self.pos - 1].iter().collect()
            }
            _ => self.parse_ident()?,
        };
        self.skip_ws();
        self.expect(']')?;
        Ok(Selector::Attribute {
            name,
            value: Some((op, value)),
        })
    }

    fn parse_pseudo(&mut self) -> Result<Selector, SelectorError> {
        if self.peek() == Some(':') {
            // pseudo-elements never match an element
            return Err(self.unexpected(':'));
        }
        let name = self.parse_ident()?.to_ascii_lowercase();
        match name.as_str() {
            "root" => Ok(Selector::Root),
            "first-child" => Ok(Selector::FirstChild),
            "last-child" => Ok(Selector::LastChild),
            "not" => {
                if self.depth >= MAX_NESTING {
                    return Err(SelectorError::TooDeep {
                        selector: self.source.to_string(),
                        limit: MAX_NESTING,
                    });
                }
                self.expect('(')?;
                self.depth += 1;
                let inner = self.parse_list(true)?;
                self.depth -= 1;
                self.skip_ws();
                self.expect(')')?;
                Ok(Selector::Not(inner))
            }
            _ => Err(SelectorError::UnsupportedPseudo(name)),
        }
    }
}
