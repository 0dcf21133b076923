//! The sign-up form controller

use std::sync::Arc;

use tokio::sync::watch;

use super::schema::sign_up_schema;
use super::state::{SubmissionState, SubmitOutcome};
use crate::api::UserApi;
use crate::error::SubmissionError;
use crate::model::NewUser;
use crate::navigate::{Navigator, Route};
use crate::notify::{Notification, Notifier};
use crate::validation::FieldErrorMap;

pub const SUCCESS_TITLE: &str = "Registration completed!";
pub const SUCCESS_DESCRIPTION: &str = "You may now sign in.";
pub const ERROR_TITLE: &str = "Authentication error";
pub const ERROR_DESCRIPTION: &str = "An error occurred during registration, please try again.";

/// Notification shown after the user was created.
pub fn success_notification() -> Notification {
    Notification::success(SUCCESS_TITLE).with_description(SUCCESS_DESCRIPTION)
}

/// Notification shown when creating the user failed for any reason.
pub fn error_notification() -> Notification {
    Notification::error(ERROR_TITLE).with_description(ERROR_DESCRIPTION)
}

/// Drives one sign-up form.
///
/// Every collaborator is injected, so the controller runs the same against
/// a real [`ApiClient`](crate::ApiClient) or a test fake.
///
/// Overlapping calls to [`submit`](Self::submit) are not coordinated: each
/// runs to completion on its own and the published state follows whichever
/// transitioned last.
///
/// # Example
///
/// ```ignore
/// let controller = SignUpController::new(client, notifier, navigator);
///
/// let outcome = controller
///     .submit(NewUser::new("Ana", "a@b.com", "123456"), |errors| form.set_errors(errors))
///     .await;
/// ```
pub struct SignUpController<A> {
    api: A,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<SubmissionState>,
}

impl<A: UserApi> SignUpController<A> {
    /// Creates a controller in the `Idle` state.
    pub fn new(api: A, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            api,
            notifier,
            navigator,
            state,
        }
    }

    /// The current submission state.
    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Subscribes to submission state changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// The API this controller submits to.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.state.send_replace(next);
        log::trace!("sign-up state {} -> {}", previous, next);
    }

    /// Validates and submits the form.
    ///
    /// On validation failure `set_errors` receives the per-field messages
    /// and nothing is sent. Otherwise the user is created, and exactly one
    /// notification follows; success also navigates to the sign-in page.
    /// `set_errors` is never called for request failures.
    pub async fn submit<F>(&self, input: NewUser, set_errors: F) -> SubmitOutcome
    where
        F: FnOnce(FieldErrorMap),
    {
        self.transition(SubmissionState::Validating);

        if let Err(err) = sign_up_schema(&input).into_result() {
            let errors = err.into_error_map();
            log::debug!("sign-up rejected: {} invalid field(s)", errors.len());
            set_errors(errors.clone());
            self.transition(SubmissionState::Failed);
            return SubmitOutcome::Invalid(errors);
        }

        self.transition(SubmissionState::Submitting);

        match self.api.create_user(&input).await.map_err(SubmissionError::from) {
            Ok(user) => {
                log::info!("user registered: {}", input.email);
                self.notifier.notify(success_notification());
                self.navigator.navigate(Route::SignIn);
                self.transition(SubmissionState::Succeeded);
                SubmitOutcome::Succeeded(user)
            }
            Err(err) => {
                log::warn!("sign-up failed: {}", err);
                self.notifier.notify(error_notification());
                self.transition(SubmissionState::Failed);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

impl<A> std::fmt::Debug for SignUpController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpController")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ApiError;
    use crate::model::User;
    use crate::navigate::NavigationHistory;
    use crate::notify::{NotificationKind, NotificationLog};

    /// Records calls and answers with a fixed status.
    struct FakeApi {
        calls: Mutex<Vec<NewUser>>,
        fail_with: Option<u16>,
    }

    impl FakeApi {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(status),
            }
        }

        fn calls(&self) -> Vec<NewUser> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserApi for FakeApi {
        async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ApiError> {
            self.calls.lock().unwrap().push(user.clone());
            match self.fail_with {
                Some(status) => Err(ApiError::http(status, "rejected")),
                None => Ok(None),
            }
        }
    }

    struct Harness {
        controller: SignUpController<FakeApi>,
        notifications: Arc<NotificationLog>,
        history: Arc<NavigationHistory>,
    }

    fn harness(api: FakeApi) -> Harness {
        let notifications = Arc::new(NotificationLog::new());
        let history = Arc::new(NavigationHistory::new());
        let controller = SignUpController::new(api, notifications.clone(), history.clone());
        Harness {
            controller,
            notifications,
            history,
        }
    }

    #[tokio::test]
    async fn test_invalid_input_sets_errors_without_request() {
        let h = harness(FakeApi::ok());
        let mut applied = None;

        let outcome = h
            .controller
            .submit(NewUser::new("", "a@b.com", "123456"), |errors| applied = Some(errors))
            .await;

        let applied = applied.expect("field errors applied");
        assert_eq!(applied.len(), 1);
        assert!(applied.contains("name"));
        assert_eq!(outcome.field_errors(), Some(&applied));
        assert!(h.controller.api().calls().is_empty());
        assert!(h.notifications.entries().is_empty());
        assert!(h.history.pushed().is_empty());
        assert_eq!(h.controller.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_success_notifies_and_navigates() {
        let h = harness(FakeApi::ok());
        let input = NewUser::new("Ana", "a@b.com", "123456");
        let mut called = false;

        let outcome = h.controller.submit(input.clone(), |_| called = true).await;

        assert!(outcome.is_success());
        assert!(!called);
        assert_eq!(h.controller.api().calls(), vec![input]);
        assert_eq!(h.notifications.entries(), vec![success_notification()]);
        assert_eq!(h.history.pushed(), vec![Route::SignIn]);
        assert_eq!(h.controller.state(), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn test_request_failure_notifies_only() {
        let h = harness(FakeApi::failing(400));
        let mut called = false;

        let outcome = h
            .controller
            .submit(NewUser::new("Ana", "a@b.com", "123456"), |_| called = true)
            .await;

        match outcome {
            SubmitOutcome::Failed(err) => assert_eq!(err.api_error().status_code(), Some(400)),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(!called);
        assert_eq!(h.controller.api().calls().len(), 1);

        let notifications = h.notifications.entries();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Error);
        assert_eq!(notifications[0].title, ERROR_TITLE);
        assert_eq!(notifications[0].description, ERROR_DESCRIPTION);
        assert!(h.history.pushed().is_empty());
        assert_eq!(h.controller.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let h = harness(FakeApi::ok());

        h.controller.submit(NewUser::new("Ana", "bad-email", "123456"), |_| {}).await;
        assert_eq!(h.controller.state(), SubmissionState::Failed);

        let outcome = h
            .controller
            .submit(NewUser::new("Ana", "a@b.com", "123456"), |_| {})
            .await;
        assert!(outcome.is_success());
        assert_eq!(h.controller.api().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_state_is_observable() {
        let h = harness(FakeApi::ok());
        let mut rx = h.controller.subscribe();
        assert_eq!(*rx.borrow_and_update(), SubmissionState::Idle);

        h.controller.submit(NewUser::new("Ana", "a@b.com", "123456"), |_| {}).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SubmissionState::Succeeded);
    }
}
