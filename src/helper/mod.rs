pub mod io;
pub mod json;
pub mod marker;
pub mod params;
pub mod report;
pub mod utils;
