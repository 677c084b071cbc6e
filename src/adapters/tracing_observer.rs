use crate::domain::model::Student;
use crate::domain::ports::RosterObserver;
use crate::utils::error::RosterError;

/// Forwards roster events to `tracing`: reads at debug, changes at info,
/// rejected mutations at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RosterObserver for TracingObserver {
    fn students_replaced(&self, faculty: &str, count: usize) {
        tracing::info!(faculty, count, "Roster replaced");
    }

    fn student_added(&self, faculty: &str, student: &Student) {
        tracing::info!(faculty, id = student.id(), "Student added: {}", student);
    }

    fn mutation_rejected(&self, faculty: &str, error: &RosterError) {
        tracing::warn!(faculty, "Roster change rejected: {}", error);
    }

    fn lookup(&self, faculty: &str, id: i64, found: bool) {
        tracing::debug!(faculty, id, found, "Student lookup");
    }
}
