use std::fmt;

/// One unit of text pulled from a page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Text,
    Link,
}

impl Fragment {
    /// Heading or paragraph text. Whitespace runs collapse to single spaces;
    /// returns `None` when nothing is left after trimming.
    pub fn text(raw: &str) -> Option<Self> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return None;
        }
        Some(Self {
            kind: FragmentKind::Text,
            text: collapsed,
        })
    }

    /// Hyperlink rendered as `"{label} ({href})"`.
    pub fn link(label: &str, href: &str) -> Self {
        Self {
            kind: FragmentKind::Link,
            text: format!("{} ({})", label.trim(), href),
        }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
