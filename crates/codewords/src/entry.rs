/// One line of a reference file.
///
/// Lines containing a comma are item lists; every other line is a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Label(String),
    Items(Vec<String>),
}

impl Entry {
    /// Classify a single line (without its terminator).
    ///
    /// Splitting keeps empty pieces, so `"a,,b"` has three items.
    pub fn parse(line: &str) -> Self {
        if line.contains(',') {
            Entry::Items(line.split(',').map(str::to_string).collect())
        } else {
            Entry::Label(line.to_string())
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Entry::Label(label) => Some(label),
            Entry::Items(_) => None,
        }
    }

    pub fn as_items(&self) -> Option<&[String]> {
        match self {
            Entry::Label(_) => None,
            Entry::Items(items) => Some(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(Entry::parse("Animals"), Entry::Label("Animals".into()));
    }

    #[test]
    fn test_parse_items() {
        assert_eq!(
            Entry::parse("cat,dog,owl"),
            Entry::Items(vec!["cat".into(), "dog".into(), "owl".into()])
        );
    }

    #[test]
    fn test_parse_keeps_empty_pieces() {
        let entry = Entry::parse("a,,b,");
        assert_eq!(entry.as_items().unwrap(), ["a", "", "b", ""]);
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let entry = Entry::parse(" red , blue");
        assert_eq!(entry.as_items().unwrap(), [" red ", " blue"]);
    }

    #[test]
    fn test_empty_line_is_label() {
        assert_eq!(Entry::parse("").as_label(), Some(""));
    }

    #[test]
    fn test_accessors() {
        let label = Entry::parse("Colors");
        assert_eq!(label.as_label(), Some("Colors"));
        assert!(label.as_items().is_none());

        let items = Entry::parse("x,y");
        assert!(items.as_label().is_none());
        assert_eq!(items.as_items().map(<[String]>::len), Some(2));
    }
}
