pub mod appointments;
pub mod crisis;
pub mod home;
pub mod insights;
pub mod not_found;

pub use appointments::Appointments;
pub use crisis::Crisis;
pub use home::Home;
pub use insights::Insights;
pub use not_found::NotFound;

/// The portal's routed pages, driven by the URL hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Crisis,
    Appointments,
    Insights,
    NotFound,
}

impl Page {
    /// Map a location hash to a page; anything unrecognized is the 404.
    pub fn from_hash(hash: &str) -> Page {
        match hash.trim_start_matches('#') {
            "" | "/" => Page::Home,
            "/crisis" => Page::Crisis,
            "/appointments" => Page::Appointments,
            "/insights" => Page::Insights,
            _ => Page::NotFound,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::Crisis => "#/crisis",
            Page::Appointments => "#/appointments",
            Page::Insights => "#/insights",
            Page::NotFound => "#/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Crisis => "Crisis Support",
            Page::Appointments => "Appointments",
            Page::Insights => "Wellbeing Insights",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Pages that appear in the navbar, in display order.
    pub fn nav_items() -> [Page; 4] {
        [Page::Home, Page::Crisis, Page::Appointments, Page::Insights]
    }

    /// Read the current page from the browser location.
    pub fn from_location() -> Page {
        let hash = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default();
        Page::from_hash(&hash)
    }

    /// Write this page's hash back to the browser location.
    pub fn push_to_location(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(self.hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hashes_map_to_pages() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/crisis"), Page::Crisis);
        assert_eq!(Page::from_hash("#/appointments"), Page::Appointments);
        assert_eq!(Page::from_hash("#/insights"), Page::Insights);
    }

    #[test]
    fn test_unknown_hash_is_not_found() {
        assert_eq!(Page::from_hash("#/nope"), Page::NotFound);
        assert_eq!(Page::from_hash("#/appointments/extra"), Page::NotFound);
    }

    #[test]
    fn test_hash_round_trip_for_nav_items() {
        for page in Page::nav_items() {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
    }
}
