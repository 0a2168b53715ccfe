//! Script-asset registration primitives
//!
//! Controllers do not serve assets; they ask the host to enqueue a named
//! script and to attach inline source or data to it. The host decides how
//! enqueued entries reach the preview page.

/// Script enqueue and inline-injection primitives provided by the host
#[cfg_attr(test, mockall::automock)]
pub trait ScriptRegistry {
    /// Mark a registered script handle for inclusion in the preview page
    fn enqueue(&mut self, handle: &str);

    /// Attach inline script source to run after the handle's script
    fn add_inline(&mut self, handle: &str, source: &str);

    /// Attach a data snippet (typically a `var … = {json}` assignment) to be
    /// printed before the handle's script
    fn add_data(&mut self, handle: &str, data: &str);
}

/// Recording registry
///
/// Keeps everything passed to it in call order. Hosts that assemble preview
/// pages by hand flush it into the page; tests assert against it.
#[derive(Debug, Clone, Default)]
pub struct CollectedScripts {
    enqueued: Vec<String>,
    inline: Vec<(String, String)>,
    data: Vec<(String, String)>,
}

impl CollectedScripts {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles enqueued so far, in call order
    #[must_use]
    pub fn enqueued(&self) -> &[String] {
        &self.enqueued
    }

    /// `(handle, source)` inline snippets, in call order
    #[must_use]
    pub fn inline(&self) -> &[(String, String)] {
        &self.inline
    }

    /// `(handle, data)` snippets, in call order
    #[must_use]
    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }
}

impl ScriptRegistry for CollectedScripts {
    fn enqueue(&mut self, handle: &str) {
        self.enqueued.push(handle.to_owned());
    }

    fn add_inline(&mut self, handle: &str, source: &str) {
        self.inline.push((handle.to_owned(), source.to_owned()));
    }

    fn add_data(&mut self, handle: &str, data: &str) {
        self.data.push((handle.to_owned(), data.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_scripts_record_call_order() {
        let mut scripts = CollectedScripts::new();
        scripts.enqueue("a");
        scripts.enqueue("b");
        scripts.add_inline("a", "A.init()");
        scripts.add_data("a", "var x = 1");

        assert_eq!(scripts.enqueued(), ["a", "b"]);
        assert_eq!(scripts.inline(), [("a".into(), "A.init()".into())]);
        assert_eq!(scripts.data(), [("a".into(), "var x = 1".into())]);
    }
}
