pub mod citizen;
pub mod feedback;
pub mod reservation;
