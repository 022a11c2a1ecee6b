//! Login page status.

/// What the login page shows for the current flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStatusView {
    pub logged_in: bool,
    pub message: String,
    pub show_login_form: bool,
    pub show_logout_button: bool,
}

impl LoginStatusView {
    #[must_use]
    pub fn new(store_name: &str, logged_in: bool) -> Self {
        let message = if logged_in {
            format!("Welcome back to {store_name}!")
        } else {
            "Please log in to manage your account.".to_string()
        };

        Self {
            logged_in,
            message,
            show_login_form: !logged_in,
            show_logout_button: logged_in,
        }
    }
}
