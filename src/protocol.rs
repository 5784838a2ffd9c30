/// Which auth form a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignIn,
    SignUp,
}

impl FormKind {
    /// Path of the collaborator endpoint for this form.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            FormKind::SignIn => "signin.php",
            FormKind::SignUp => "signup.php",
        }
    }
}

/// The fields a form submits, collected from the dialog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Present for sign-up only.
    pub fullname: Option<String>,
    pub email: String,
    pub password: String,
}

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// POST the form fields to the given endpoint URL
    Submit {
        kind: FormKind,
        url: String,
        fields: FormFields,
    },
    /// Stop the backend thread
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A submission settled: the raw response body, or a transport
    /// error description if the request never completed
    AuthResponse {
        kind: FormKind,
        result: Result<String, String>,
    },
    /// Unexpected backend fault
    Error(String),
}
