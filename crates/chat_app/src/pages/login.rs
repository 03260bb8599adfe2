use auth_client::{AuthApi, FieldErrors, LoginForm};

use super::SubmitOutcome;
use crate::router::{Navigator, Route};

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub form: LoginForm,
    errors: FieldErrors,
    is_loading: bool,
}

impl LoginPage {
    pub fn new(form: LoginForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Validate, then POST the credentials. Success moves to the chat page;
    /// a failed request is logged and the page stays put.
    pub async fn submit(&mut self, api: &dyn AuthApi, nav: &mut Navigator) -> SubmitOutcome {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!(%errors, "login form rejected");
                self.errors = errors.clone();
                return SubmitOutcome::Rejected(errors);
            }
        };
        self.errors = FieldErrors::default();

        self.is_loading = true;
        let result = api.login(&request).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                tracing::info!(status = response.status, "login succeeded");
                nav.navigate(Route::Chat);
                SubmitOutcome::Succeeded(response)
            }
            Err(e) => {
                tracing::error!("Login error: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
