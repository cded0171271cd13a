//! Client-side route paths

use museum_tours_types::TourSize;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved URL characters stay as-is
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";

pub fn theme(theme_id: &str) -> String {
    format!("/theme/{}", encode(theme_id))
}

pub fn tour(theme_id: &str, size: TourSize) -> String {
    format!("/tour/{}/{}", encode(theme_id), size)
}

/// Object detail, optionally remembering where to return to
pub fn object(object_id: &str, back: Option<&str>) -> String {
    match back {
        Some(back) => format!("/object/{}?back={}", encode(object_id), encode(back)),
        None => format!("/object/{}", encode(object_id)),
    }
}

/// Accept only in-app paths as a return target
pub fn safe_back(back: Option<String>) -> Option<String> {
    back.filter(|path| path.starts_with('/') && !path.starts_with("//"))
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(theme("roman-empire"), "/theme/roman-empire");
        assert_eq!(tour("roman-empire", TourSize::Medium), "/tour/roman-empire/Medium");
        assert_eq!(object("obj-01", None), "/object/obj-01");
    }

    #[test]
    fn test_object_back_link_is_encoded() {
        let back = tour("roman-empire", TourSize::Small);
        assert_eq!(
            object("obj-01", Some(&back)),
            "/object/obj-01?back=%2Ftour%2Froman-empire%2FSmall"
        );
    }

    #[test]
    fn test_safe_back_rejects_external_targets() {
        assert_eq!(safe_back(Some("/tour/a/Small".into())).as_deref(), Some("/tour/a/Small"));
        assert!(safe_back(Some("https://evil.example".into())).is_none());
        assert!(safe_back(Some("//evil.example".into())).is_none());
        assert!(safe_back(None).is_none());
    }
}
