use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Validation messages grouped by route (record, then field or enum group).
/// Routes are joined with `.` when flattened.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Add one message at this level.
    pub fn add(&mut self, message: impl fmt::Display) {
        self.messages.push(message.to_string());
    }

    /// Fold the errors of a validation result into this level.
    pub fn add_result(&mut self, result: Result<(), Self>) {
        if let Err(errs) = result {
            self.merge(errs);
        }
    }

    /// Nest another tree under `route`, merging with anything already there.
    pub fn add_for(&mut self, route: impl Into<String>, errs: Self) {
        if errs.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().merge(errs);
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);

        for (route, child) in other.children {
            self.add_for(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages, including nested routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Return `Ok(())` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Flatten into `(route, message)` pairs in deterministic order.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.len());
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }

        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&path, out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.flatten();

        for (idx, (route, message)) in lines.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl From<&str> for ErrorTree {
    fn from(message: &str) -> Self {
        let mut errs = Self::new();
        errs.add(message);

        errs
    }
}

impl From<String> for ErrorTree {
    fn from(message: String) -> Self {
        Self {
            messages: vec![message],
            children: BTreeMap::new(),
        }
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn empty_children_do_not_count() {
        let mut errs = ErrorTree::new();
        errs.add_for("Record", ErrorTree::new());

        assert!(errs.is_empty());
        assert!(errs.children.is_empty());
    }

    #[test]
    fn nested_routes_flatten_with_dots() {
        let mut field = ErrorTree::new();
        err!(field, "bad ident '{}'", "X");

        let mut record = ErrorTree::new();
        record.add_for("fields", field);
        record.add("record level");

        let mut root = ErrorTree::new();
        root.add_for("Thing", record);

        assert_eq!(root.len(), 2);
        assert_eq!(
            root.flatten(),
            vec![
                ("Thing".to_string(), "record level".to_string()),
                ("Thing.fields".to_string(), "bad ident 'X'".to_string()),
            ]
        );
        assert_eq!(
            root.to_string(),
            "Thing: record level\nThing.fields: bad ident 'X'"
        );
    }

    #[test]
    fn merge_combines_shared_routes() {
        let mut a = ErrorTree::new();
        a.add_for("R", ErrorTree::from("one"));

        let mut b = ErrorTree::new();
        b.add_for("R", ErrorTree::from("two"));
        b.add("root");

        a.merge(b);

        assert_eq!(a.len(), 3);
        assert_eq!(a.children["R"].messages, vec!["one", "two"]);
    }
}
