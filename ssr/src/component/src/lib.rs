pub mod fetch_state;
pub mod rankings;
pub mod spinner;
pub mod title;
