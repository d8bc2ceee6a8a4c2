use crate::selector::{SelectorList, parse_selector};

// A single CSS property: "color: red"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

// Set of selectors and declarations
#[derive(Clone, Debug)]
pub struct Rule {
    pub selectors: SelectorList,
    pub declarations: Vec<Declaration>,
}

// A full stylesheet: multiple rules
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

// Tracks quotes, escapes and bracket depth while scanning CSS text.
#[derive(Default)]
struct Nesting {
    quote: Option<char>,
    escaped: bool,
    depth: usize,
}

impl Nesting {
    // Feeds `c`. Returns the bracket depth before `c` when `c` is outside
    // strings and escapes, `None` otherwise.
    fn step(&mut self, c: char) -> Option<usize> {
        if self.escaped {
            self.escaped = false;
            return None;
        }
        if c == '\\' {
            self.escaped = true;
            return None;
        }
        if let Some(quote) = self.quote {
            if c == quote {
                self.quote = None;
            }
            return None;
        }
        let depth = self.depth;
        match c {
            '"' | '\'' => self.quote = Some(c),
            '(' | '[' | '{' => self.depth += 1,
            ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        Some(depth)
    }
}

// Splits on `sep` where it appears outside strings and brackets.
fn split_top_level(input: &str, sep: char) -> Vec<&str> {
    let mut nesting = Nesting::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in input.char_indices() {
        if nesting.step(c) == Some(0) && c == sep {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

// `(prelude, block body)` pairs. Braces inside strings or nested blocks do
// not end a rule; an unterminated last block runs to the end of input.
fn split_rules(input: &str) -> Vec<(&str, &str)> {
    let mut nesting = Nesting::default();
    let mut rules = Vec::new();
    let mut start = 0;
    let mut open = None;
    for (i, c) in input.char_indices() {
        match (c, nesting.step(c)) {
            ('{', Some(0)) => open = Some(i),
            ('}', Some(0 | 1)) => {
                if let Some(open) = open.take() {
                    rules.push((&input[start..open], &input[open + 1..i]));
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    if let Some(open) = open {
        rules.push((&input[start..open], &input[open + 1..]));
    }
    rules
}

// input: ":root, .theme { --accent: red; } .card { color: blue; }"
// output: Stylesheet { rules: vec![Rule{ selectors: ..., declarations: ...}, ...] }
//
// Rules whose selector does not parse are dropped, like a browser would.
pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let input = strip_comments(input);
    let mut rules = Vec::new();
    for (selector_str, declaration_str) in split_rules(&input) {
        let selectors = match parse_selector(selector_str) {
            Ok(selectors) => selectors,
            Err(err) => {
                log::debug!(target: "css", "dropping rule {:?}: {err}", selector_str.trim());
                continue;
            }
        };
        let declarations = parse_declarations(declaration_str);
        if declarations.is_empty() {
            continue;
        }
        rules.push(Rule {
            selectors,
            declarations,
        });
    }
    Stylesheet { rules }
}

// input: "color: red; --Accent: #f00 !important;"
// output: vec![Declaration { name: "color", .. }, Declaration { name: "--Accent", important: true, .. }]
//
// Custom property names are case-sensitive and keep their spelling; all other
// property names are lowercased.
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    split_top_level(input, ';')
        .into_iter()
        .filter_map(|pair| {
            let (n, v) = pair.split_once(':')?;
            let n = n.trim();
            if n.is_empty() {
                return None;
            }
            let name = if n.starts_with("--") {
                n.to_string()
            } else {
                n.to_ascii_lowercase()
            };
            let mut value = v.trim();
            let mut important = false;
            if let Some(stripped) = value.strip_suffix("!important") {
                value = stripped.trim_end();
                important = true;
            }
            Some(Declaration {
                name,
                value: value.to_string(),
                important,
            })
        })
        .collect()
}

pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| {
            if d.important {
                format!("{}: {} !important;", d.name, d.value)
            } else {
                format!("{}: {};", d.name, d.value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
