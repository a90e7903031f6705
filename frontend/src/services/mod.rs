pub mod date_utils;
pub mod logging;
pub mod mock_data;
