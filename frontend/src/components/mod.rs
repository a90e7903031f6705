pub mod appointment_list;
pub mod charts;
pub mod chat_panel;
pub mod footer;
pub mod mood_tracker;
pub mod navbar;
pub mod resource_card;
pub mod search_bar;

pub use appointment_list::AppointmentList;
pub use chat_panel::ChatPanel;
pub use footer::Footer;
pub use mood_tracker::MoodTracker;
pub use navbar::Navbar;
pub use resource_card::ResourceCard;
pub use search_bar::SearchBar;
