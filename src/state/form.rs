//! Application form state types.
//!
//! This module contains the form fields, field validation, the looser submit
//! gating check, and the form lifecycle from editing to the submitted
//! display.

use crate::backend::Submission;
use log::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Youngest accepted applicant.
///
pub const MIN_AGE: i64 = 18;

/// Ukrainian mobile number in international format.
///
pub const PHONE_PATTERN: &str = r"^\+380[0-9]{9}$";

/// Specifying the form fields in display order.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum FormField {
    Name,
    Age,
    City,
    Phone,
    Telegram,
    Photo,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Age,
        FormField::City,
        FormField::Phone,
        FormField::Telegram,
        FormField::Photo,
    ];

    /// Return the key the field is posted under.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::City => "city",
            FormField::Phone => "phone",
            FormField::Telegram => "telegram",
            FormField::Photo => "photo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::City => "City",
            FormField::Phone => "Phone number",
            FormField::Telegram => "Telegram (handle or link)",
            FormField::Photo => "Photo (optional)",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::Phone => Some("+380XXXXXXXXX"),
            FormField::Photo => Some("path to an image file (png, jpg, webp)"),
            _ => None,
        }
    }
}

/// Field-level validation failures.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    Required,
    InvalidAge,
    InvalidFormat,
}

impl FieldError {
    /// Return the inline message shown under the field.
    ///
    pub fn message(&self, field: FormField) -> &'static str {
        match (self, field) {
            (FieldError::Required, FormField::Name) => "Name is required",
            (FieldError::Required, FormField::Age) => "Age is required",
            (FieldError::Required, FormField::City) => "City is required",
            (FieldError::Required, FormField::Phone) => "Phone number is required",
            (FieldError::Required, _) => "This field is required",
            (FieldError::InvalidAge, _) => "You must be 18 or older",
            (FieldError::InvalidFormat, _) => "Enter the number as +380XXXXXXXXX",
        }
    }
}

/// Errors keyed by failing field. Only failing fields have entries.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, FieldError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Free-text applicant details.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplicationFormData {
    pub name: String,
    pub age: String,
    pub city: String,
    pub phone: String,
    pub telegram: String,
}

/// Run every field check and return the complete set of failures.
///
pub fn validate(data: &ApplicationFormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.name.trim().is_empty() {
        errors.insert(FormField::Name, FieldError::Required);
    }
    if data.city.trim().is_empty() {
        errors.insert(FormField::City, FieldError::Required);
    }

    if data.age.is_empty() {
        errors.insert(FormField::Age, FieldError::Required);
    } else if !is_adult(&data.age) {
        errors.insert(FormField::Age, FieldError::InvalidAge);
    }

    if data.phone.is_empty() {
        errors.insert(FormField::Phone, FieldError::Required);
    } else if !is_valid_phone(&data.phone) {
        errors.insert(FormField::Phone, FieldError::InvalidFormat);
    }

    errors
}

/// Whether the submit button is enabled. Phone format is not checked here.
///
pub fn can_submit(data: &ApplicationFormData) -> bool {
    !data.name.is_empty() && !data.city.is_empty() && !data.phone.is_empty() && is_adult(&data.age)
}

fn parse_age(age: &str) -> Option<i64> {
    age.trim().parse::<i64>().ok()
}

fn is_adult(age: &str) -> bool {
    parse_age(age).is_some_and(|years| years >= MIN_AGE)
}

fn phone_regex() -> Option<&'static Regex> {
    static PHONE: OnceLock<Option<Regex>> = OnceLock::new();
    PHONE
        .get_or_init(|| match Regex::new(PHONE_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile phone pattern '{}': {}", PHONE_PATTERN, e);
                None
            }
        })
        .as_ref()
}

/// Whether the phone is `+380` followed by exactly nine digits.
///
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_some_and(|re| re.is_match(phone))
}

/// Lifecycle of one mounted form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormPhase {
    Editing,
    Sending,
    Submitted,
}

/// Position of the form cursor.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormCursor {
    Field(FormField),
    Submit,
}

impl FormCursor {
    fn ordered() -> Vec<FormCursor> {
        let mut positions: Vec<FormCursor> =
            FormField::ALL.into_iter().map(FormCursor::Field).collect();
        positions.push(FormCursor::Submit);
        positions
    }

    fn position(&self) -> usize {
        FormCursor::ordered()
            .iter()
            .position(|c| c == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> FormCursor {
        let positions = FormCursor::ordered();
        positions[(self.position() + 1) % positions.len()]
    }

    pub fn prev(&self) -> FormCursor {
        let positions = FormCursor::ordered();
        positions[(self.position() + positions.len() - 1) % positions.len()]
    }
}

/// Result of pressing submit.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubmitAttempt {
    /// The form is not editable right now.
    Ignored,
    /// The submit button is disabled.
    Gated,
    /// Validation failed; errors are shown inline.
    Invalid,
    /// Validation passed; the submission is ready to post.
    Ready(Submission),
}

/// One mounted instance of the application form.
///
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    generation: u64,
    data: ApplicationFormData,
    photo: String,
    errors: FormErrors,
    phase: FormPhase,
    cursor: FormCursor,
}

impl ApplicationForm {
    /// Return an empty form identified by the generation counter.
    ///
    pub fn new(generation: u64) -> Self {
        ApplicationForm {
            generation,
            data: ApplicationFormData::default(),
            photo: String::new(),
            errors: FormErrors::default(),
            phase: FormPhase::Editing,
            cursor: FormCursor::Field(FormField::Name),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn cursor(&self) -> FormCursor {
        self.cursor
    }

    /// Return the current text of a field.
    ///
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.data.name,
            FormField::Age => &self.data.age,
            FormField::City => &self.data.city,
            FormField::Phone => &self.data.phone,
            FormField::Telegram => &self.data.telegram,
            FormField::Photo => &self.photo,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.data.name,
            FormField::Age => &mut self.data.age,
            FormField::City => &mut self.data.city,
            FormField::Phone => &mut self.data.phone,
            FormField::Telegram => &mut self.data.telegram,
            FormField::Photo => &mut self.photo,
        }
    }

    /// Replace a field's text. Ignored unless editing.
    ///
    pub fn set_value(&mut self, field: FormField, value: &str) {
        if self.phase == FormPhase::Editing {
            *self.value_mut(field) = value.to_string();
        }
    }

    /// Attached photo, if a path was entered.
    ///
    pub fn photo(&self) -> Option<&Path> {
        let trimmed = self.photo.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }

    /// Append a character to the field under the cursor.
    ///
    pub fn input(&mut self, c: char) {
        if self.phase != FormPhase::Editing {
            return;
        }
        if let FormCursor::Field(field) = self.cursor {
            self.value_mut(field).push(c);
        }
    }

    /// Remove the last character of the field under the cursor.
    ///
    pub fn backspace(&mut self) {
        if self.phase != FormPhase::Editing {
            return;
        }
        if let FormCursor::Field(field) = self.cursor {
            self.value_mut(field).pop();
        }
    }

    pub fn next_cursor(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn prev_cursor(&mut self) {
        self.cursor = self.cursor.prev();
    }

    /// Recompute all field errors. Returns true if the form is valid.
    ///
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.data);
        self.errors.is_empty()
    }

    /// Whether the submit button is enabled.
    ///
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && can_submit(&self.data)
    }

    /// Press submit. On success the form moves to sending and the returned
    /// submission must be handed to the backend.
    ///
    pub fn begin_submit(&mut self, form_name: &str) -> SubmitAttempt {
        if self.phase != FormPhase::Editing {
            return SubmitAttempt::Ignored;
        }
        if !can_submit(&self.data) {
            return SubmitAttempt::Gated;
        }
        if !self.validate() {
            debug!("Application rejected with {} field errors.", self.errors.len());
            return SubmitAttempt::Invalid;
        }
        self.phase = FormPhase::Sending;
        SubmitAttempt::Ready(self.submission(form_name))
    }

    /// Build the posted pairs from the current data.
    ///
    pub fn submission(&self, form_name: &str) -> Submission {
        let mut submission = Submission::new(form_name);
        for field in FormField::ALL {
            if field == FormField::Photo {
                continue;
            }
            submission = submission.field(field.key(), self.value(field));
        }
        if let Some(photo) = self.photo() {
            let file_name = photo
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| photo.to_string_lossy().into_owned());
            submission = submission.field(FormField::Photo.key(), &file_name);
        }
        submission
    }

    /// The backend answered; show the thank-you display for good.
    ///
    pub fn mark_submitted(&mut self) {
        self.phase = FormPhase::Submitted;
    }

    /// The post never went out; return to editing with data intact.
    ///
    pub fn abort_sending(&mut self) {
        if self.phase == FormPhase::Sending {
            self.phase = FormPhase::Editing;
        }
    }
}
