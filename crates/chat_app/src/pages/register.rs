use auth_client::{AuthApi, FieldErrors, RegisterForm};

use super::SubmitOutcome;
use crate::router::{Navigator, Route};

#[derive(Debug, Clone, Default)]
pub struct RegisterPage {
    pub form: RegisterForm,
    errors: FieldErrors,
    is_loading: bool,
}

impl RegisterPage {
    pub fn new(form: RegisterForm) -> Self {
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

    /// Validate, then POST the registration. Once the request resolves the
    /// page returns home whether or not it succeeded.
    pub async fn submit(&mut self, api: &dyn AuthApi, nav: &mut Navigator) -> SubmitOutcome {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!(%errors, "register form rejected");
                self.errors = errors.clone();
                return SubmitOutcome::Rejected(errors);
            }
        };
        self.errors = FieldErrors::default();

        tracing::debug!(email = %request.email, "register data");
        self.is_loading = true;
        let result = api.register(&request).await;
        self.is_loading = false;
        nav.navigate(Route::Home);

        match result {
            Ok(response) => SubmitOutcome::Succeeded(response),
            Err(e) => {
                tracing::error!("Registration error: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
