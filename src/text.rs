//! Casing and pluralization utilities used by the naming rules.
//!
//! Both transforms are pure functions of their input plus an explicit
//! configuration value; nothing here registers global state.

/// A naming convention that can be checked and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Snake,
    Camel,
    Pascal,
    Kebab,
    Header,
    Constant,
}

impl Casing {
    /// Parse a casing selector from rule options. Unknown selectors yield
    /// `None` and the caller skips the check.
    pub fn parse(input: &str) -> Option<Casing> {
        match input.trim().to_ascii_lowercase().as_str() {
            "snake" | "snake_case" => Some(Casing::Snake),
            "camel" | "camelcase" => Some(Casing::Camel),
            "pascal" | "pascalcase" => Some(Casing::Pascal),
            "kebab" | "kebab-case" | "dash" => Some(Casing::Kebab),
            "header" | "http-header" => Some(Casing::Header),
            "constant" | "screaming-snake" | "upper" => Some(Casing::Constant),
            _ => None,
        }
    }

    /// Label used in violation messages, e.g. `must be pascal cased`.
    pub fn label(&self) -> &'static str {
        match self {
            Casing::Snake => "snake",
            Casing::Camel => "camel",
            Casing::Pascal => "pascal",
            Casing::Kebab => "kebab",
            Casing::Header => "header",
            Casing::Constant => "constant",
        }
    }
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Split an identifier into words at separators, lower-to-upper boundaries,
/// and acronym tails (`HTTPServer` splits as `HTTP` + `Server`).
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let boundary = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase()
                || prev.is_uppercase()
                    && c.is_uppercase()
                    && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Apply a casing convention to an identifier.
pub fn apply(input: &str, casing: Casing) -> String {
    let words = words(input);
    match casing {
        Casing::Snake => words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        Casing::Kebab => words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-"),
        Casing::Constant => words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        Casing::Header => words
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join("-"),
        Casing::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        Casing::Camel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
    }
}

/// Snake-cased form of an identifier; the comparison key for name matching
/// throughout the rules (`Errors`, `errors`, and `ERRORS` are the same name).
pub fn snake(input: &str) -> String {
    apply(input, Casing::Snake)
}

/// Camel-cased form of an identifier.
pub fn camel(input: &str) -> String {
    apply(input, Casing::Camel)
}

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
];

const INVARIANT: &[&str] = &["sheep", "fish", "series", "species", "deer", "info"];

/// English pluralization with an explicit, immutable set of uncountable
/// suffixes. Words ending in an uncountable suffix (default: `data`) keep
/// the same form in both directions.
#[derive(Debug, Clone)]
pub struct Inflection {
    uncountable_suffixes: Vec<String>,
}

impl Default for Inflection {
    fn default() -> Self {
        Inflection {
            uncountable_suffixes: vec!["data".to_string()],
        }
    }
}

impl Inflection {
    pub fn new<I: IntoIterator<Item = String>>(uncountable_suffixes: I) -> Self {
        Inflection {
            uncountable_suffixes: uncountable_suffixes.into_iter().collect(),
        }
    }

    fn is_uncountable(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        INVARIANT.contains(&lower.as_str())
            || self
                .uncountable_suffixes
                .iter()
                .any(|suffix| lower.ends_with(suffix.as_str()))
    }

    /// The plural form of a word; already-plural input is returned as-is.
    pub fn plural(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }
        let lower = word.to_lowercase();
        for &(singular, plural) in IRREGULAR {
            if lower.ends_with(plural) {
                return word.to_string();
            }
            if let Some(stem) = strip_suffix_ci(word, singular) {
                return format!("{stem}{plural}");
            }
        }
        if lower.ends_with("ss") || lower.ends_with("us") {
            return format!("{word}es");
        }
        if let Some(stem) = strip_suffix_ci(word, "is") {
            return format!("{stem}es");
        }
        if lower.ends_with('s') {
            return word.to_string();
        }
        if lower.ends_with('x')
            || lower.ends_with('z')
            || lower.ends_with("ch")
            || lower.ends_with("sh")
        {
            return format!("{word}es");
        }
        if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
        format!("{word}s")
    }

    /// The singular form of a word; already-singular input is returned as-is.
    pub fn singular(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }
        let lower = word.to_lowercase();
        for &(singular, plural) in IRREGULAR {
            if lower.ends_with(singular) {
                return word.to_string();
            }
            if let Some(stem) = strip_suffix_ci(word, plural) {
                return format!("{stem}{singular}");
            }
        }
        if lower.ends_with("ies") && word.len() > 3 {
            return format!("{}y", &word[..word.len() - 3]);
        }
        for suffix in ["sses", "uses", "xes", "zes", "ches", "shes"] {
            if lower.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") {
            return word[..word.len() - 1].to_string();
        }
        word.to_string()
    }

    pub fn is_plural(&self, word: &str) -> bool {
        word == self.plural(word)
    }

    pub fn is_singular(&self, word: &str) -> bool {
        word == self.singular(word)
    }
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    let _y = rev.next();
    matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn strip_suffix_ci<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    if word.to_lowercase().ends_with(suffix) {
        Some(&word[..word.len() - suffix.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_casings() {
        assert_eq!(apply("My_Type", Casing::Pascal), "MyType");
        assert_eq!(apply("getUser", Casing::Snake), "get_user");
        assert_eq!(apply("get_user_by_id", Casing::Camel), "getUserById");
        assert_eq!(apply("hasPreviousPage", Casing::Snake), "has_previous_page");
        assert_eq!(apply("x-request-id", Casing::Header), "X-Request-Id");
        assert_eq!(apply("some value", Casing::Kebab), "some-value");
        assert_eq!(apply("maxItems", Casing::Constant), "MAX_ITEMS");
        assert_eq!(apply("HTTPServer", Casing::Snake), "http_server");
        assert_eq!(apply("user123", Casing::Snake), "user123");
    }

    #[test]
    fn idempotent_on_already_cased_names() {
        assert_eq!(apply("widget_count", Casing::Snake), "widget_count");
        assert_eq!(apply("WidgetCount", Casing::Pascal), "WidgetCount");
        assert_eq!(apply("widgetCount", Casing::Camel), "widgetCount");
    }

    #[test]
    fn parses_selectors() {
        assert_eq!(Casing::parse("pascal"), Some(Casing::Pascal));
        assert_eq!(Casing::parse("SNAKE"), Some(Casing::Snake));
        assert_eq!(Casing::parse("screaming-snake"), Some(Casing::Constant));
        assert_eq!(Casing::parse("mystery"), None);
    }

    #[test]
    fn pluralizes() {
        let inflection = Inflection::default();
        assert_eq!(inflection.plural("widget"), "widgets");
        assert_eq!(inflection.plural("widgets"), "widgets");
        assert_eq!(inflection.plural("status"), "statuses");
        assert_eq!(inflection.plural("category"), "categories");
        assert_eq!(inflection.plural("box"), "boxes");
        assert_eq!(inflection.plural("child"), "children");
        assert_eq!(inflection.plural("day"), "days");
    }

    #[test]
    fn singularizes() {
        let inflection = Inflection::default();
        assert_eq!(inflection.singular("widgets"), "widget");
        assert_eq!(inflection.singular("widget"), "widget");
        assert_eq!(inflection.singular("statuses"), "status");
        assert_eq!(inflection.singular("categories"), "category");
        assert_eq!(inflection.singular("children"), "child");
    }

    #[test]
    fn uncountable_suffixes_hold_in_both_directions() {
        let inflection = Inflection::default();
        assert_eq!(inflection.plural("userData"), "userData");
        assert_eq!(inflection.singular("metadata"), "metadata");
        assert!(inflection.is_plural("data"));
        assert!(inflection.is_singular("data"));

        let custom = Inflection::new(vec!["info".to_string()]);
        assert_eq!(custom.plural("accountInfo"), "accountInfo");
    }
}
