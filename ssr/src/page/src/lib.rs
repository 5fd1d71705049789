pub mod rankings;
pub mod wrestler;
