#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Path of the lead intake endpoint, set at build time (`CONTACT_ENDPOINT=/api/leads trunk build`).
/// When unset the contact form runs against the simulated submitter.
pub fn contact_endpoint() -> Option<String> {
    option_env!("CONTACT_ENDPOINT")
        .filter(|path| !path.trim().is_empty())
        .map(|path| format!("{}{}", get_backend_url(), path))
}

// Contact form timings (ms)
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUCCESS_NOTICE_MS: u32 = 10_000;

pub const BUSINESS_NAME: &str = "Five Borough Home Services";
pub const BUSINESS_PHONE: &str = "917-624-8550";
pub const BUSINESS_EMAIL: &str = "estimates@fiveboroughhome.com";

pub const BOROUGHS: [(&str, &str); 5] = [
    ("manhattan", "Manhattan"),
    ("brooklyn", "Brooklyn"),
    ("queens", "Queens"),
    ("bronx", "The Bronx"),
    ("staten-island", "Staten Island"),
];

pub const SERVICES: [(&str, &str); 6] = [
    ("plumbing", "Plumbing"),
    ("electrical", "Electrical"),
    ("painting", "Painting"),
    ("carpentry", "Carpentry"),
    ("renovation", "Kitchen & Bath Renovation"),
    ("handyman", "General Handyman"),
];

pub const CALL_TIMES: [(&str, &str); 3] = [
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
];

pub fn tel_href() -> String {
    format!("tel:{}", BUSINESS_PHONE)
}

pub fn mailto_href() -> String {
    format!("mailto:{}", BUSINESS_EMAIL)
}
