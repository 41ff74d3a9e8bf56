//! Request bodies for create/update calls
//!
//! A [`FormPayload`] is built from a submitted form. Whether it goes out as
//! JSON or multipart depends on one thing only: whether a file is attached.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::error::Error;

/// A file chosen in a form, read from disk when the request is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Multipart field name (`image`, `banner_image`, ...)
    pub field: String,
    pub path: PathBuf,
}

/// Ordered form fields plus an optional file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, Value)>,
    attachment: Option<Attachment>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), Value::String(value.into())));
        self
    }

    /// Text field that is omitted entirely when blank
    pub fn optional_text(self, name: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self
        } else {
            self.text(name, value.trim())
        }
    }

    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.fields.push((name.to_string(), Value::Bool(value)));
        self
    }

    pub fn number(mut self, name: &str, value: i64) -> Self {
        self.fields.push((name.to_string(), Value::from(value)));
        self
    }

    pub fn attach(mut self, field: &str, path: impl Into<PathBuf>) -> Self {
        self.attachment = Some(Attachment {
            field: field.to_string(),
            path: path.into(),
        });
        self
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// String value of a field, if present and textual
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    /// Fields as a JSON object
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self.fields.iter().cloned().collect();
        Value::Object(map)
    }

    /// Build the wire body, reading the attachment from disk if there is one
    pub async fn into_body(self) -> Result<RequestBody, Error> {
        let Some(attachment) = self.attachment.clone() else {
            return Ok(RequestBody::Json(self.to_json()));
        };

        let bytes = tokio::fs::read(&attachment.path)
            .await
            .map_err(|e| Error::Attachment {
                path: attachment.path.clone(),
                message: e.to_string(),
            })?;

        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, multipart_text(&value));
        }

        let file_name = attachment
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(&attachment.path))
            .map_err(|e| Error::Configuration(e.to_string()))?;

        Ok(RequestBody::Multipart(form.part(attachment.field, part)))
    }
}

/// Wire representation of a [`FormPayload`]
#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    /// Attach to a request. reqwest sets `application/json` or the
    /// multipart boundary content type.
    pub(crate) fn apply(self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(form) => req.multipart(form),
        }
    }
}

fn multipart_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
