use tracing::{debug, warn};

use bok_types::api::CreateBokRequest;
use bok_types::models::Bok;
use bok_types::validation::{non_blank, validate_url};

use crate::client::{BokTransport, SubmitError};
use crate::notify::Notifier;

pub const URL_ERROR: &str = "Please enter a valid URL starting with http:// or https://";
pub const SUCCESS_MESSAGE: &str = "BoK created successfully";
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// In-progress record held by the form before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub source_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{}", URL_ERROR)]
    InvalidUrl,

    #[error("Title is required")]
    MissingTitle,
}

impl Draft {
    /// Pure local check run before anything touches the network.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !validate_url(&self.source_url) {
            return Err(DraftError::InvalidUrl);
        }
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        Ok(())
    }

    /// Blank optional fields are left out of the request.
    pub fn to_request(&self) -> CreateBokRequest {
        CreateBokRequest {
            title: Some(self.title.clone()),
            description: non_blank(Some(self.description.clone())),
            source_url: non_blank(Some(self.source_url.clone())),
        }
    }
}

/// How one call to [`FormController::submit`] ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Submit control was inert: a request is in flight or a URL error is showing.
    Blocked,
    /// Local validation failed; nothing was sent.
    Rejected(DraftError),
    /// Record persisted; the draft has been reset.
    Succeeded(Bok),
    /// Request sent but did not succeed; the draft is kept for resubmission.
    Failed(SubmitError),
}

/// Headless create-BoK form.
///
/// Holds the draft and the inline URL error, and drives a single submission
/// at a time: `Idle -> Validating -> Rejected | Submitting -> Succeeded | Failed`,
/// always landing back in idle. There is no automatic retry.
#[derive(Debug, Default)]
pub struct FormController {
    draft: Draft,
    /// Only true inside `submit`, while `&mut self` is held across the request.
    loading: bool,
    url_error: String,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Editing the URL does not clear a shown error; that happens on blur.
    pub fn set_source_url(&mut self, source_url: impl Into<String>) {
        self.draft.source_url = source_url.into();
    }

    /// Inline error under the source URL field, empty when valid.
    pub fn url_error(&self) -> &str {
        &self.url_error
    }

    /// Source URL field lost focus.
    pub fn on_url_blur(&mut self) {
        if validate_url(&self.draft.source_url) {
            self.url_error.clear();
        } else {
            self.url_error = URL_ERROR.to_string();
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.url_error.is_empty()
    }

    /// Validate the draft and send it.
    ///
    /// The exclusive borrow held across the await is what prevents a second
    /// submission while one is in flight; `loading` mirrors that window so
    /// `can_submit` reads the same as the form's disabled submit control.
    pub async fn submit<T, N>(&mut self, transport: &T, notifier: &N) -> SubmitOutcome
    where
        T: BokTransport,
        N: Notifier,
    {
        if !self.can_submit() {
            return SubmitOutcome::Blocked;
        }

        // Re-check in case the URL changed without a blur
        if let Err(e) = self.draft.validate() {
            if e == DraftError::InvalidUrl {
                self.url_error = URL_ERROR.to_string();
            }
            debug!("draft rejected locally: {}", e);
            return SubmitOutcome::Rejected(e);
        }

        self.loading = true;
        let result = transport.create_bok(&self.draft.to_request()).await;
        self.loading = false;

        match result {
            Ok(bok) => {
                self.draft = Draft::default();
                notifier.notify_success(SUCCESS_MESSAGE);
                SubmitOutcome::Succeeded(bok)
            }
            Err(e) => {
                warn!("BoK submission failed: {}", e);
                let message = match e.server_message() {
                    Some(detail) => format!("{}: {}", FAILURE_MESSAGE, detail),
                    None => FAILURE_MESSAGE.to_string(),
                };
                notifier.notify_failure(&message);
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    enum Reply {
        Created,
        Status(u16, &'static str),
        Unreachable,
    }

    struct FakeTransport {
        reply: Reply,
        sent: RefCell<Vec<CreateBokRequest>>,
    }

    impl FakeTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl BokTransport for FakeTransport {
        async fn create_bok(&self, req: &CreateBokRequest) -> Result<Bok, SubmitError> {
            self.sent.borrow_mut().push(req.clone());
            match self.reply {
                Reply::Created => Ok(Bok {
                    id: Uuid::new_v4(),
                    title: req.title.clone().unwrap_or_default(),
                    description: req.description.clone(),
                    source_url: req.source_url.clone(),
                    created_at: Utc::now(),
                }),
                Reply::Status(status, message) => Err(SubmitError::Rejected {
                    status,
                    message: message.to_string(),
                }),
                Reply::Unreachable => Err(SubmitError::Network("connection refused".into())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        failures: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_failure(&self, message: &str) {
            self.failures.borrow_mut().push(message.to_string());
        }
    }

    fn form(title: &str, description: &str, source_url: &str) -> FormController {
        let mut form = FormController::new();
        form.set_title(title);
        form.set_description(description);
        form.set_source_url(source_url);
        form
    }

    #[test]
    fn blur_sets_and_clears_url_error() {
        let mut form = form("Networking Basics", "", "ftp://bad");
        form.on_url_blur();
        assert_eq!(form.url_error(), URL_ERROR);
        assert!(!form.can_submit());

        form.set_source_url("https://example.com");
        assert_eq!(form.url_error(), URL_ERROR);

        form.on_url_blur();
        assert_eq!(form.url_error(), "");
        assert!(form.can_submit());
    }

    #[test]
    fn blank_url_is_fine_on_blur() {
        let mut form = form("Networking Basics", "", "   ");
        form.on_url_blur();
        assert!(form.url_error().is_empty());
    }

    #[test]
    fn draft_request_drops_blank_optionals() {
        let draft = Draft {
            title: "Networking Basics".into(),
            description: "".into(),
            source_url: " ".into(),
        };
        let req = draft.to_request();
        assert_eq!(req.title.as_deref(), Some("Networking Basics"));
        assert_eq!(req.description, None);
        assert_eq!(req.source_url, None);
    }

    #[tokio::test]
    async fn title_only_submit_succeeds_and_resets() {
        let transport = FakeTransport::new(Reply::Created);
        let notifier = RecordingNotifier::default();
        let mut form = form("Networking Basics", "", "");

        let outcome = form.submit(&transport, &notifier).await;

        match outcome {
            SubmitOutcome::Succeeded(bok) => assert_eq!(bok.title, "Networking Basics"),
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(form.draft(), &Draft::default());
        assert!(form.can_submit());
        assert_eq!(transport.calls(), 1);
        assert_eq!(*notifier.successes.borrow(), vec![SUCCESS_MESSAGE.to_string()]);
        assert!(notifier.failures.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_url_never_reaches_transport() {
        let transport = FakeTransport::new(Reply::Created);
        let notifier = RecordingNotifier::default();
        // Pasted without a blur, so no error is showing yet
        let mut form = form("", "", "ftp://bad");

        let outcome = form.submit(&transport, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(DraftError::InvalidUrl)));
        assert_eq!(form.url_error(), URL_ERROR);
        assert_eq!(transport.calls(), 0);
        assert_eq!(form.draft().source_url, "ftp://bad");
        assert!(notifier.successes.borrow().is_empty());
        assert!(notifier.failures.borrow().is_empty());
    }

    #[tokio::test]
    async fn shown_url_error_blocks_submit() {
        let transport = FakeTransport::new(Reply::Created);
        let notifier = RecordingNotifier::default();
        let mut form = form("Networking Basics", "", "not a url");
        form.on_url_blur();

        let outcome = form.submit(&transport, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Blocked));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_locally() {
        let transport = FakeTransport::new(Reply::Created);
        let notifier = RecordingNotifier::default();
        let mut form = form("  ", "desc", "https://example.com");

        let outcome = form.submit(&transport, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(DraftError::MissingTitle)));
        assert!(form.url_error().is_empty());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn server_rejection_keeps_draft() {
        let transport = FakeTransport::new(Reply::Status(400, "Title is required"));
        let notifier = RecordingNotifier::default();
        let mut form = form("Networking Basics", "Layers and sockets", "https://example.com");

        let outcome = form.submit(&transport, &notifier).await;

        match outcome {
            SubmitOutcome::Failed(SubmitError::Rejected { status, .. }) => assert_eq!(status, 400),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(
            form.draft(),
            &Draft {
                title: "Networking Basics".into(),
                description: "Layers and sockets".into(),
                source_url: "https://example.com".into(),
            }
        );
        assert!(form.can_submit());
        assert_eq!(
            *notifier.failures.borrow(),
            vec!["Something went wrong: Title is required".to_string()]
        );
    }

    #[tokio::test]
    async fn network_failure_keeps_draft_and_allows_resubmit() {
        let transport = FakeTransport::new(Reply::Unreachable);
        let notifier = RecordingNotifier::default();
        let mut form = form("Networking Basics", "", "");

        let first = form.submit(&transport, &notifier).await;
        assert!(matches!(first, SubmitOutcome::Failed(SubmitError::Network(_))));
        assert_eq!(*notifier.failures.borrow(), vec![FAILURE_MESSAGE.to_string()]);
        assert_eq!(form.draft().title, "Networking Basics");

        let second = form.submit(&transport, &notifier).await;
        assert!(matches!(second, SubmitOutcome::Failed(_)));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn request_carries_draft_fields() {
        let transport = FakeTransport::new(Reply::Created);
        let notifier = RecordingNotifier::default();
        let mut form = form("Rust Book", "Ownership", "https://doc.rust-lang.org/book/");

        form.submit(&transport, &notifier).await;

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].title.as_deref(), Some("Rust Book"));
        assert_eq!(sent[0].description.as_deref(), Some("Ownership"));
        assert_eq!(sent[0].source_url.as_deref(), Some("https://doc.rust-lang.org/book/"));
    }
}
