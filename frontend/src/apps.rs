//! Applications that can send users through the reset portal, and where each
//! one expects them back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub login_url: &'static str,
}

pub const APPS: &[AppEntry] = &[
    AppEntry {
        code: "fccPRO",
        name: "FCC Pro",
        login_url: "https://fccpro.netlify.app/login",
    },
    AppEntry {
        code: "fccOPS",
        name: "FCC Operations",
        login_url: "https://fccops.netlify.app/login",
    },
    AppEntry {
        code: "fccCRM",
        name: "FCC CRM",
        login_url: "https://fcccrm.netlify.app/login",
    },
    AppEntry {
        code: "myfcc",
        name: "myFCC",
        login_url: "https://myfcc.freedomcodecompliance.com/login",
    },
    AppEntry {
        code: "fccapply",
        name: "FCC Apply",
        login_url: "https://fccapply.netlify.app/login",
    },
    AppEntry {
        code: "fccChat",
        name: "FCC Chat",
        login_url: "https://fccchat.netlify.app/login",
    },
    AppEntry {
        code: "executive",
        name: "Executive Portal",
        login_url: "https://executive.freedomcodecompliance.com/login",
    },
];

/// Destination for unknown or missing app codes.
pub const DEFAULT_APP_CODE: &str = "fccOPS";
pub const GENERIC_APP_NAME: &str = "FCC";
const DEFAULT_LOGIN_URL: &str = "https://fccops.netlify.app/login";

/// Query parameters the requesting application put on the reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetContext {
    pub app_code: Option<String>,
    pub return_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ResetContext {
    pub fn new(app_code: Option<String>, return_url: Option<String>) -> Self {
        Self {
            app_code: non_blank(app_code),
            return_url: non_blank(return_url),
        }
    }

    pub fn login_url(&self) -> String {
        resolve_login_url(self.app_code.as_deref(), self.return_url.as_deref())
    }

    pub fn app_name(&self) -> &'static str {
        resolve_app_name(self.app_code.as_deref())
    }
}

pub fn find_app(code: Option<&str>) -> Option<&'static AppEntry> {
    let code = code?;
    APPS.iter().find(|app| app.code == code)
}

fn default_app() -> Option<&'static AppEntry> {
    find_app(Some(DEFAULT_APP_CODE))
}

/// Explicit return URL, then the app's login page, then the default app's.
pub fn resolve_login_url(app_code: Option<&str>, return_url: Option<&str>) -> String {
    if let Some(url) = return_url.filter(|url| !url.trim().is_empty()) {
        return url.to_string();
    }
    find_app(app_code)
        .or_else(default_app)
        .map(|app| app.login_url)
        .unwrap_or(DEFAULT_LOGIN_URL)
        .to_string()
}

pub fn resolve_app_name(app_code: Option<&str>) -> &'static str {
    find_app(app_code)
        .map(|app| app.name)
        .unwrap_or(GENERIC_APP_NAME)
}

/// Login URL carrying the marker the apps use to show a "password changed"
/// notice.
pub fn success_redirect_url(login_url: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    format!("{}{}reset=success", login_url, separator)
}
