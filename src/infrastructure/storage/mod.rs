mod working_area;

pub use working_area::{WorkingArea, WorkingCopy};
