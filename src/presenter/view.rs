use super::View;

/// In-memory view state, rendered into a page by [`crate::page`] or printed
/// by the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    title: String,
    status: String,
    pulsing: bool,
    results: String,
    trigger_enabled: bool,
}

impl PageView {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            status: String::new(),
            pulsing: false,
            results: String::new(),
            trigger_enabled: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PageView {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn set_pulsing(&mut self, pulsing: bool) {
        self.pulsing = pulsing;
    }

    fn set_results(&mut self, html: &str) {
        self.results = html.to_string();
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{MockGenerateApi, Presenter, Status, DONE_MESSAGE};

    #[test]
    fn test_new_view_is_idle() {
        let view = PageView::new();
        assert_eq!(view.title(), "");
        assert!(view.is_trigger_enabled());
        assert!(!view.is_pulsing());
    }

    #[tokio::test]
    async fn test_page_view_settles_after_generation() {
        let mut presenter = Presenter::new(
            PageView::new().with_title("Linear Algebra"),
            MockGenerateApi::new(),
        );

        assert_eq!(presenter.generate().await, Status::Success);

        let view = presenter.into_view();
        assert_eq!(view.status(), DONE_MESSAGE);
        assert!(view.results().contains(">Linear Algebra</h2>"));
        assert!(view.is_trigger_enabled());
        assert!(!view.is_pulsing());
        assert_eq!(view.title(), "Linear Algebra");
    }
}
