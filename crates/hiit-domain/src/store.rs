use hiit_core::HiitResult;

use crate::Routine;

/// Where the editor keeps the routine list between sessions.
#[cfg_attr(test, mockall::automock)]
pub trait RoutineStore: Send {
    /// Absent or unreadable data is an empty list, not an error.
    fn load(&self) -> HiitResult<Vec<Routine>>;

    /// Overwrite whatever was stored before.
    fn store(&self, routines: &[Routine]) -> HiitResult<()>;
}
