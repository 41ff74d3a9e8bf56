//! Create/edit form drafts
//!
//! A [`FormState`] holds a local draft of one record. It is seeded with
//! defaults (create) or from an existing record (edit), validated before any
//! request is made, and turned into a [`FormPayload`] on submit.

use backoffice_client::FormPayload;
use backoffice_core::{
    testimonial, Blog, Faq, GalleryItem, RecordId, Resource, Testimonial,
};
use chrono::NaiveDate;

use crate::list_view::RequestToken;

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultiLine,
    /// Local file path, uploaded on submit
    File,
    Toggle,
    /// Star rating, 1 to 5
    Stars,
    /// Optional integer
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Stars(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Wire name
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        let value = match kind {
            FieldKind::Toggle => FieldValue::Flag(true),
            FieldKind::Stars => FieldValue::Stars(testimonial::MAX_STARS),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name,
            label,
            kind,
            required,
            value,
        }
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn is_text_like(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Text | FieldKind::MultiLine | FieldKind::File | FieldKind::Number
        )
    }

    /// Display form of the value
    pub fn display(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x] Active".to_string(),
            FieldValue::Flag(false) => "[ ] Inactive".to_string(),
            FieldValue::Stars(n) => {
                let filled = (*n).clamp(0, testimonial::MAX_STARS) as usize;
                format!(
                    "{}{}",
                    "★".repeat(filled),
                    "☆".repeat(testimonial::MAX_STARS as usize - filled)
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub resource: Resource,
    pub mode: FormMode,
    pub fields: Vec<FormField>,
    /// Index of the focused field
    pub focus: usize,
    /// Inline error from validation or the last submit
    pub error: Option<String>,
    pub submitting: Option<RequestToken>,
    /// Server path of the file the record already has (edit mode)
    pub existing_file: Option<String>,
}

fn fields_for(resource: Resource) -> Vec<FormField> {
    use FieldKind::*;
    match resource {
        Resource::Blogs => vec![
            FormField::new("title", "Title", Text, true),
            FormField::new("author", "Author", Text, true),
            FormField::new("publish_date", "Publish date (YYYY-MM-DD)", Text, true),
            FormField::new("tags", "Tags (comma separated)", Text, false),
            FormField::new("short_description", "Short description", MultiLine, true),
            FormField::new("full_content", "Content", MultiLine, true),
            FormField::new("banner_image", "Banner image", File, true),
        ],
        Resource::Services => vec![
            FormField::new("name", "Name", Text, true),
            FormField::new("image", "Image", File, true),
        ],
        Resource::Faqs => vec![
            FormField::new("qus", "Question", Text, true),
            FormField::new("answers", "Answer", MultiLine, true),
        ],
        Resource::Testimonials => vec![
            FormField::new("client_name", "Client name", Text, true),
            FormField::new("client_position", "Position", Text, false),
            FormField::new("client_company", "Company", Text, false),
            FormField::new("comment", "Comment", MultiLine, true),
            FormField::new("review_stars", "Rating", Stars, true),
            FormField::new("display_order", "Display order", Number, false),
            FormField::new("is_active", "Status", Toggle, false),
            FormField::new("image", "Photo", File, false),
        ],
        Resource::Galleries => vec![
            FormField::new("title", "Title", Text, true),
            FormField::new("image", "Image path", Text, true),
        ],
        Resource::Leads => Vec::new(),
    }
}

impl FormState {
    /// Blank draft for a new record. `None` for resources that cannot be created.
    pub fn create(resource: Resource) -> Option<Self> {
        if !resource.can_create() {
            return None;
        }
        let mut form = Self {
            resource,
            mode: FormMode::Create,
            fields: fields_for(resource),
            focus: 0,
            error: None,
            submitting: None,
            existing_file: None,
        };
        if resource == Resource::Blogs {
            let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
            form.set_text("publish_date", today);
        }
        Some(form)
    }

    /// Draft seeded from an existing record
    pub fn edit<R: FormSeed>(record: &R) -> Self {
        let mut form = Self {
            resource: R::RESOURCE,
            mode: FormMode::Edit(record.record_id()),
            fields: fields_for(R::RESOURCE),
            focus: 0,
            error: None,
            submitting: None,
            existing_file: None,
        };
        record.seed(&mut form);
        form
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", self.resource.noun()),
            FormMode::Edit(id) => format!("Edit {} #{}", self.resource.noun(), id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(FormField::text).unwrap_or("")
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Text(value.into());
        }
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Flag(value);
        }
    }

    pub fn set_stars(&mut self, name: &str, value: i32) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Stars(testimonial::clamp_stars(value));
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Replace the focused text field's value
    pub fn input(&mut self, text: String) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if field.is_text_like() {
                field.value = FieldValue::Text(text);
            }
        }
    }

    /// Flip a toggle or step a star rating on the focused field
    pub fn adjust(&mut self, delta: i32) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            match &mut field.value {
                FieldValue::Flag(on) => *on = !*on,
                FieldValue::Stars(n) => *n = testimonial::clamp_stars(*n + delta),
                FieldValue::Text(_) => {}
            }
        }
    }

    /// Check required fields. A required file may be left blank only when
    /// editing a record that already has one.
    pub fn validate(&self) -> Result<(), String> {
        for field in &self.fields {
            let value = field.text().trim();
            match field.kind {
                FieldKind::File => {
                    let keeps_existing = self.is_edit() && self.existing_file.is_some();
                    if field.required && value.is_empty() && !keeps_existing {
                        return Err(format!("{} is required", field.label));
                    }
                }
                FieldKind::Number => {
                    if !value.is_empty() && value.parse::<i64>().is_err() {
                        return Err(format!("{} must be a whole number", field.label));
                    }
                }
                FieldKind::Text | FieldKind::MultiLine => {
                    if field.required && value.is_empty() {
                        return Err(format!("{} is required", field.label));
                    }
                }
                FieldKind::Toggle | FieldKind::Stars => {}
            }
        }

        if self.resource == Resource::Blogs {
            let date = self.value("publish_date").trim();
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err("Publish date must be YYYY-MM-DD".to_string());
            }
        }
        Ok(())
    }

    /// Request body for this draft. Blank optional text is omitted; a file
    /// is attached only when one was chosen.
    pub fn to_payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();
        for field in &self.fields {
            let text = field.text().trim();
            payload = match (&field.kind, &field.value) {
                (FieldKind::File, _) => {
                    if text.is_empty() {
                        payload
                    } else {
                        payload.attach(field.name, expand_home(text))
                    }
                }
                (FieldKind::Number, _) => match text.parse::<i64>() {
                    Ok(n) => payload.number(field.name, n),
                    Err(_) => payload,
                },
                (_, FieldValue::Flag(on)) => payload.flag(field.name, *on),
                (_, FieldValue::Stars(n)) => payload.number(field.name, i64::from(*n)),
                (_, FieldValue::Text(_)) if field.required => payload.text(field.name, text),
                (_, FieldValue::Text(_)) => payload.optional_text(field.name, text),
            };
        }
        payload
    }

    /// Local gallery row built from this draft
    pub fn to_gallery_item(&self, id: RecordId) -> GalleryItem {
        GalleryItem {
            id,
            title: self.value("title").trim().to_string(),
            image: self.value("image").trim().to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// `~/` prefix expanded to the home directory
fn expand_home(path: &str) -> std::path::PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => std::path::PathBuf::from(path),
    }
}

/// Records that can seed an edit form
pub trait FormSeed {
    const RESOURCE: Resource;

    fn record_id(&self) -> RecordId;

    fn seed(&self, form: &mut FormState);
}

impl FormSeed for Blog {
    const RESOURCE: Resource = Resource::Blogs;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn seed(&self, form: &mut FormState) {
        form.set_text("title", self.title.clone());
        form.set_text("author", self.author.clone());
        form.set_text("publish_date", self.publish_date.chars().take(10).collect::<String>());
        form.set_text("tags", self.tags.clone());
        form.set_text("short_description", self.short_description.clone());
        form.set_text("full_content", self.full_content.clone());
        form.existing_file = self.banner_image.clone();
    }
}

impl FormSeed for Faq {
    const RESOURCE: Resource = Resource::Faqs;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn seed(&self, form: &mut FormState) {
        form.set_text("qus", self.question.clone());
        form.set_text("answers", self.answer.clone());
    }
}

impl FormSeed for Testimonial {
    const RESOURCE: Resource = Resource::Testimonials;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn seed(&self, form: &mut FormState) {
        form.set_text("client_name", self.client_name.clone());
        form.set_text("client_position", self.client_position.clone().unwrap_or_default());
        form.set_text("client_company", self.client_company.clone().unwrap_or_default());
        form.set_text("comment", self.comment.clone());
        form.set_stars("review_stars", self.review_stars);
        form.set_text(
            "display_order",
            self.display_order.map(|n| n.to_string()).unwrap_or_default(),
        );
        form.set_flag("is_active", self.is_active);
        form.existing_file = self.image_url.clone();
    }
}

impl FormSeed for GalleryItem {
    const RESOURCE: Resource = Resource::Galleries;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn seed(&self, form: &mut FormState) {
        form.set_text("title", self.title.clone());
        form.set_text("image", self.image.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blank(resource: Resource) -> FormState {
        FormState::create(resource).unwrap()
    }

    #[test]
    fn test_leads_have_no_create_form() {
        assert!(FormState::create(Resource::Leads).is_none());
    }

    #[test]
    fn test_faq_requires_question_and_answer() {
        let mut form = blank(Resource::Faqs);
        assert_eq!(form.validate().unwrap_err(), "Question is required");

        form.set_text("qus", "Q1");
        assert_eq!(form.validate().unwrap_err(), "Answer is required");

        form.set_text("answers", "A1");
        assert!(form.validate().is_ok());
        assert!(!form.to_payload().has_attachment());
    }

    #[test]
    fn test_service_create_requires_image() {
        let mut form = blank(Resource::Services);
        form.set_text("name", "ISO 9001");
        assert_eq!(form.validate().unwrap_err(), "Image is required");

        form.set_text("image", "/tmp/badge.png");
        assert!(form.validate().is_ok());
        assert!(form.to_payload().has_attachment());
    }

    #[test]
    fn test_blog_edit_keeps_existing_banner() {
        let blog = Blog {
            id: 3,
            title: "T".into(),
            author: "A".into(),
            publish_date: "2024-02-11T00:00:00.000Z".into(),
            tags: "iso".into(),
            banner_image: Some("/uploads/b.png".into()),
            short_description: "S".into(),
            full_content: "C".into(),
            created_at: None,
        };
        let form = FormState::edit(&blog);
        assert_eq!(form.mode, FormMode::Edit(3));
        assert_eq!(form.value("publish_date"), "2024-02-11");
        assert_eq!(form.existing_file.as_deref(), Some("/uploads/b.png"));
        assert!(form.validate().is_ok());
        assert!(!form.to_payload().has_attachment());
    }

    #[test]
    fn test_blog_edit_without_banner_requires_one() {
        let blog = Blog {
            id: 4,
            title: "T".into(),
            author: "A".into(),
            publish_date: "2024-02-11".into(),
            tags: String::new(),
            banner_image: None,
            short_description: "S".into(),
            full_content: "C".into(),
            created_at: None,
        };
        let mut form = FormState::edit(&blog);
        assert!(form.existing_file.is_none());
        assert_eq!(form.validate().unwrap_err(), "Banner image is required");

        form.set_text("banner_image", "/tmp/b.png");
        assert!(form.validate().is_ok());
        assert!(form.to_payload().has_attachment());
    }

    #[test]
    fn test_blog_rejects_bad_date() {
        let mut form = blank(Resource::Blogs);
        for (name, value) in [
            ("title", "T"),
            ("author", "A"),
            ("short_description", "S"),
            ("full_content", "C"),
            ("banner_image", "/tmp/b.png"),
            ("publish_date", "11/02/2024"),
        ] {
            form.set_text(name, value);
        }
        assert_eq!(
            form.validate().unwrap_err(),
            "Publish date must be YYYY-MM-DD"
        );
    }

    #[test]
    fn test_testimonial_payload_types() {
        let mut form = blank(Resource::Testimonials);
        form.set_text("client_name", "Ann");
        form.set_text("comment", "Great");
        form.set_text("display_order", "2");
        form.set_stars("review_stars", 4);
        form.set_flag("is_active", false);

        let json = form.to_payload().to_json();
        assert_eq!(
            json,
            json!({
                "client_name": "Ann",
                "comment": "Great",
                "review_stars": 4,
                "display_order": 2,
                "is_active": false
            })
        );
    }

    #[test]
    fn test_number_field_must_parse() {
        let mut form = blank(Resource::Testimonials);
        form.set_text("client_name", "Ann");
        form.set_text("comment", "Great");
        form.set_text("display_order", "first");
        assert!(form.validate().unwrap_err().contains("whole number"));
    }

    #[test]
    fn test_adjust_stars_clamps() {
        let mut form = blank(Resource::Testimonials);
        form.focus = form
            .fields
            .iter()
            .position(|f| f.kind == FieldKind::Stars)
            .unwrap();
        form.adjust(1);
        assert_eq!(form.focused().unwrap().value, FieldValue::Stars(5));
        for _ in 0..10 {
            form.adjust(-1);
        }
        assert_eq!(form.focused().unwrap().value, FieldValue::Stars(1));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = blank(Resource::Faqs);
        form.focus_prev();
        assert_eq!(form.focus, 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_input_ignores_toggle_fields() {
        let mut form = blank(Resource::Testimonials);
        form.focus = form
            .fields
            .iter()
            .position(|f| f.kind == FieldKind::Toggle)
            .unwrap();
        form.input("abc".to_string());
        assert_eq!(form.focused().unwrap().value, FieldValue::Flag(true));
    }

    #[test]
    fn test_gallery_item_from_form() {
        let mut form = blank(Resource::Galleries);
        form.set_text("title", " Team ");
        form.set_text("image", "/images/team.jpg");
        let item = form.to_gallery_item(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Team");
    }
}
