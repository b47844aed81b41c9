//! In-memory student roster behind the Students screen.
//!
//! Student endpoints are supplied by the caller of the modal, so the
//! terminal app keeps its own list and records saves into it.

use crate::models::{Student, StudentFormData};

#[derive(Debug, Clone, Default)]
pub struct RosterState {
    students: Vec<Student>,
    selected: usize,
    next_id: usize,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.students.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.students.is_empty() {
            self.selected = (self.selected + 1).min(self.students.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Record a saved form. `editing` names the student being replaced;
    /// otherwise a new student is appended and selected.
    pub fn save(&mut self, editing: Option<&str>, form: StudentFormData) -> &Student {
        if let Some(pos) = editing.and_then(|id| self.students.iter().position(|s| s.id == id)) {
            let id = self.students[pos].id.clone();
            let access_code = self.students[pos].access_code.clone();
            let mut student = form.into_student(id);
            student.access_code = access_code;
            self.students[pos] = student;
            self.selected = pos;
        } else {
            self.next_id += 1;
            let mut student = form.into_student(format!("student-{}", self.next_id));
            student.access_code = Some(access_code_for(self.next_id));
            self.students.push(student);
            self.selected = self.students.len() - 1;
        }
        &self.students[self.selected]
    }
}

fn access_code_for(seq: usize) -> String {
    let short = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{:02}", short[..4].to_uppercase(), seq % 100)
}
