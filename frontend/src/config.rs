#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    option_env!("SITE_FORM_ENDPOINT").unwrap_or("http://localhost:3001/contact")  // Local relay mock
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    option_env!("SITE_FORM_ENDPOINT").unwrap_or("https://formsubmit.co/ajax/hello@brightforge.studio")
}

/// Where the relay sends people after a non-ajax submission. The only redirect target the site uses.
pub const THANK_YOU_URL: &str = "https://brightforge.studio/#contact";

/// Name of the optional global reporting function installed by the analytics snippet.
pub const REPORT_HOOK: &str = "siteReport";

/// Height of the fixed navigation bar, used as the section activation offset.
pub const NAV_HEIGHT_PX: f64 = 100.0;

pub const CONTACT_EMAIL: &str = "hello@brightforge.studio";
