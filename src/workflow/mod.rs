use crate::client::DescriptionClient;
use crate::error::GenerateError;
use crate::form::FormData;
use tracing::{debug, warn};

/// The request/UI state of one generation session.
///
/// Idle shows the form; Submitting hides it while the single outbound call
/// is in flight; Resolved holds either a description or the error message
/// (the form is re-shown next to an error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    Submitting,
    Resolved(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

/// Owns the live form and drives Idle → Submitting → Resolved transitions.
///
/// At most one request is logically in flight: the form is hidden while
/// Submitting, so nothing can resubmit until the call resolves.
#[derive(Debug, Default)]
pub struct GenerationSession {
    pub form: FormData,
    state: State,
}

impl GenerationSession {
    pub fn new(form: FormData) -> Self {
        Self {
            form,
            state: State::Idle,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        self.state == State::Submitting
    }

    pub fn form_visible(&self) -> bool {
        match &self.state {
            State::Idle => true,
            State::Submitting => false,
            State::Resolved(Outcome::Success(_)) => false,
            State::Resolved(Outcome::Error(_)) => true,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.state {
            State::Resolved(Outcome::Success(d)) => Some(d),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            State::Resolved(Outcome::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Submit the current form. Invalid forms never leave Idle; a valid
    /// submission always ends Resolved, success or error, so the
    /// generating flag cannot stay stuck on any path out of the call.
    pub async fn submit(
        &mut self,
        client: &dyn DescriptionClient,
    ) -> Result<(), GenerateError> {
        self.form
            .validate()
            .map_err(GenerateError::Validation)?;

        self.state = State::Submitting;
        debug!("submitting generation request");

        let result = client.generate(&self.form).await;
        self.state = match &result {
            Ok(description) => State::Resolved(Outcome::Success(description.clone())),
            Err(err) => {
                warn!("generation failed: {err}");
                State::Resolved(Outcome::Error(err.to_string()))
            }
        };
        result.map(|_| ())
    }

    /// Back to the form. Clears description and error but keeps every form
    /// field so the user can tweak and resubmit.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Canned client for driving the state machine without a network.
    struct StubClient(Result<String, GenerateError>);

    #[async_trait]
    impl DescriptionClient for StubClient {
        async fn generate(&self, _form: &FormData) -> Result<String, GenerateError> {
            self.0.clone()
        }
    }

    fn session() -> GenerationSession {
        GenerationSession::new(FormData {
            product_name: "Widget".into(),
            ..FormData::default()
        })
    }

    #[test]
    fn starts_idle_with_form_visible() {
        let session = session();
        assert_eq!(session.state(), &State::Idle);
        assert!(session.form_visible());
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn success_resolves_with_description_and_hides_form() {
        let mut session = session();
        let client = StubClient(Ok("A fine widget.".into()));

        session.submit(&client).await.unwrap();

        assert_eq!(session.description(), Some("A fine widget."));
        assert!(session.error().is_none());
        assert!(!session.form_visible());
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn failure_reshows_form_with_error_message() {
        let mut session = session();
        let client = StubClient(Err(GenerateError::Service("Server error: 500".into())));

        let err = session.submit(&client).await.unwrap_err();
        assert_eq!(err, GenerateError::Service("Server error: 500".into()));

        assert_eq!(session.error(), Some("Server error: 500"));
        assert!(session.form_visible());
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn generating_flag_clears_on_every_terminal_outcome() {
        for result in [
            Ok("text".to_string()),
            Err(GenerateError::Transport("refused".into())),
            Err(GenerateError::EmptyDescription),
        ] {
            let mut session = session();
            let _ = session.submit(&StubClient(result)).await;
            assert!(!session.is_generating());
        }
    }

    #[tokio::test]
    async fn invalid_form_never_leaves_idle() {
        let mut session = GenerationSession::default();
        let client = StubClient(Ok("unreachable".into()));

        let err = session.submit(&client).await.unwrap_err();
        assert!(matches!(err, GenerateError::Validation(_)));
        assert_eq!(session.state(), &State::Idle);
        assert!(session.form_visible());
    }

    #[tokio::test]
    async fn transport_and_service_errors_render_distinct_messages() {
        let mut transport_session = session();
        let _ = transport_session
            .submit(&StubClient(Err(GenerateError::Transport("refused".into()))))
            .await;

        let mut service_session = session();
        let _ = service_session
            .submit(&StubClient(Err(GenerateError::Service(
                "Server error: 500".into(),
            ))))
            .await;

        let transport_msg = transport_session.error().unwrap().to_string();
        let service_msg = service_session.error().unwrap().to_string();
        assert_ne!(transport_msg, service_msg);
        assert!(transport_msg.contains("unable to connect"));
    }

    #[tokio::test]
    async fn reset_clears_result_but_keeps_form_fields() {
        let mut session = session();
        session.form.keywords = "tough, portable".into();
        session
            .submit(&StubClient(Ok("Generated text.".into())))
            .await
            .unwrap();

        session.reset();

        assert_eq!(session.state(), &State::Idle);
        assert!(session.description().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.form.product_name, "Widget");
        assert_eq!(session.form.keywords, "tough, portable");
    }
}
