use crate::domain::model::Student;
use crate::utils::error::RosterError;

/// Side channel a [`Faculty`](crate::domain::faculty::Faculty) reports to.
///
/// Every method has an empty default so adapters only override what they care
/// about. Observers never influence the outcome of an operation.
pub trait RosterObserver: Send + Sync {
    fn students_replaced(&self, _faculty: &str, _count: usize) {}

    fn student_added(&self, _faculty: &str, _student: &Student) {}

    fn mutation_rejected(&self, _faculty: &str, _error: &RosterError) {}

    fn lookup(&self, _faculty: &str, _id: i64, _found: bool) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RosterObserver for NoopObserver {}
