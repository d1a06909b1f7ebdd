pub mod date_utils;
pub mod delivery;
pub mod logging;
