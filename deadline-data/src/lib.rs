pub mod federal;
pub mod loader;

pub use federal::{FederalHoliday, federal_holiday_calendar, federal_holidays};
pub use loader::{HolidayLoader, HolidayLoaderError, HolidayRecord};
