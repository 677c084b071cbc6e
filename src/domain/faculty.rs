use crate::domain::model::Student;
use crate::domain::ports::{NoopObserver, RosterObserver};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named faculty owning an ordered, id-unique collection of students.
///
/// `students` keeps insertion order and `index` maps each id to its position
/// in `students`. Both are only ever replaced or extended together.
///
/// There is no internal locking; wrap the faculty in a `Mutex` if several
/// threads need to mutate it.
#[derive(Clone)]
pub struct Faculty {
    name: String,
    students: Vec<Student>,
    index: HashMap<i64, usize>,
    observer: Arc<dyn RosterObserver>,
}

impl Faculty {
    pub fn new(name: &str, initial: Vec<Student>) -> Result<Self> {
        Self::new_with_observer(name, initial, Arc::new(NoopObserver))
    }

    pub fn empty(name: &str) -> Result<Self> {
        Self::new(name, Vec::new())
    }

    pub fn new_with_observer(
        name: &str,
        initial: Vec<Student>,
        observer: Arc<dyn RosterObserver>,
    ) -> Result<Self> {
        validate_non_empty_string("name", name)?;

        let mut faculty = Self {
            name: name.trim().to_string(),
            students: Vec::new(),
            index: HashMap::new(),
            observer,
        };
        faculty.replace_students(initial)?;
        Ok(faculty)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Replaces the whole roster, keeping the input order.
    ///
    /// The input is validated in full before anything is stored; on error the
    /// current roster is left as it was.
    pub fn replace_students(&mut self, students: Vec<Student>) -> Result<()> {
        let mut index = HashMap::with_capacity(students.len());
        for (position, student) in students.iter().enumerate() {
            if let Err(e) = self.check_faculty(student) {
                return Err(self.reject(e));
            }
            if index.insert(student.id(), position).is_some() {
                return Err(self.reject(RosterError::DuplicateId { id: student.id() }));
            }
        }

        self.students = students;
        self.index = index;
        self.observer.students_replaced(&self.name, self.students.len());
        Ok(())
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if let Err(e) = self.check_faculty(&student) {
            return Err(self.reject(e));
        }
        if self.index.contains_key(&student.id()) {
            return Err(self.reject(RosterError::DuplicateId { id: student.id() }));
        }

        self.index.insert(student.id(), self.students.len());
        self.students.push(student);
        if let Some(added) = self.students.last() {
            self.observer.student_added(&self.name, added);
        }
        Ok(())
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Student> {
        let found = self.index.get(&id).map(|&position| &self.students[position]);
        self.observer.lookup(&self.name, id, found.is_some());
        found
    }

    pub fn get_by_id_or_fail(&self, id: i64) -> Result<&Student> {
        self.find_by_id(id).ok_or(RosterError::StudentNotFound { id })
    }

    fn check_faculty(&self, student: &Student) -> Result<()> {
        if student.faculty_name() != self.name {
            return Err(RosterError::FacultyMismatch {
                expected: self.name.clone(),
                actual: student.faculty_name().to_string(),
            });
        }
        Ok(())
    }

    fn reject(&self, error: RosterError) -> RosterError {
        self.observer.mutation_rejected(&self.name, &error);
        error
    }
}

impl fmt::Debug for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Faculty")
            .field("name", &self.name)
            .field("students", &self.students)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Faculty{{name='{}', students={}}}", self.name, self.students.len())
    }
}
