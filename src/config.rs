//! Fixed site configuration: redirect destinations, the country dialing
//! code table and submission timing.

use crate::state::lead_form::ClassLevel;

/// Destination for visitors who completed 10th grade.
pub const TENTH_TRACK_URL: &str = "https://v0-eduadvisor101.vercel.app/";
/// Destination for visitors who completed 12th grade.
pub const TWELFTH_TRACK_URL: &str = "https://v0-eduadvisor121.vercel.app/";

/// Simulated processing delay before the redirect fires.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

pub fn redirect_url(level: ClassLevel) -> &'static str {
    match level {
        ClassLevel::Tenth => TENTH_TRACK_URL,
        ClassLevel::Twelfth => TWELFTH_TRACK_URL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub region: &'static str,
    pub flag: &'static str,
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+1", region: "US", flag: "🇺🇸" },
    CountryCode { code: "+91", region: "IN", flag: "🇮🇳" },
    CountryCode { code: "+44", region: "UK", flag: "🇬🇧" },
    CountryCode { code: "+61", region: "AU", flag: "🇦🇺" },
    CountryCode { code: "+49", region: "DE", flag: "🇩🇪" },
    CountryCode { code: "+33", region: "FR", flag: "🇫🇷" },
    CountryCode { code: "+81", region: "JP", flag: "🇯🇵" },
    CountryCode { code: "+86", region: "CN", flag: "🇨🇳" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_two_tracks_lead_to_distinct_destinations() {
        assert_ne!(
            redirect_url(ClassLevel::Tenth),
            redirect_url(ClassLevel::Twelfth)
        );
    }

    #[test]
    fn default_country_code_is_listed() {
        assert!(COUNTRY_CODES
            .iter()
            .any(|c| c.code == DEFAULT_COUNTRY_CODE));
    }
}
