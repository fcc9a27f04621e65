mod calculation_result;
mod calculation_step;
mod deadline_record;
mod direction;
mod holiday_calendar;
mod request;

pub use calculation_result::CalculationResult;
pub use calculation_step::{CalculationStep, ExcludedDate, ExclusionReason, StepAction};
pub use deadline_record::{DeadlineRecord, NewDeadlineRecord};
pub use direction::Direction;
pub use holiday_calendar::HolidayCalendar;
pub use request::{CalculationRequest, RawCalculationRequest, RequestError};
