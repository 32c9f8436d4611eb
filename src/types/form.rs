use reqwest::multipart::{Form, Part};

use crate::error::{GoCardlessError, Result};
use crate::utils::IsEmpty;

/// A single multipart field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File {
        file_name: String,
        /// MIME type of the part; the transport picks
        /// `application/octet-stream` when unset.
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

/// Multipart upload body, kept as plain data until the request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: Vec<FormField>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: Option<&str>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::File {
                file_name: file_name.into(),
                mime: mime.map(str::to_string),
                bytes: bytes.into(),
            },
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the reqwest multipart form.
    ///
    /// # Errors
    ///
    /// Returns `GoCardlessError::InvalidForm` if a file part carries a MIME
    /// type reqwest cannot parse.
    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for field in self.fields {
            form = match field.value {
                FormValue::Text(text) => form.text(field.name, text),
                FormValue::File {
                    file_name,
                    mime,
                    bytes,
                } => {
                    let mut part = Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = mime {
                        part = part
                            .mime_str(&mime)
                            .map_err(|source| GoCardlessError::InvalidForm {
                                field: field.name.clone(),
                                source,
                            })?;
                    }
                    form.part(field.name, part)
                }
            };
        }
        Ok(form)
    }
}

impl IsEmpty for FormData {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_field_order() {
        let form = FormData::new()
            .text("description", "signed mandate")
            .file("image", "mandate.pdf", Some("application/pdf"), b"%PDF".to_vec());

        assert_eq!(form.len(), 2);
        assert_eq!(form.fields()[0].name, "description");
        assert_eq!(form.fields()[1].name, "image");
        match &form.fields()[1].value {
            FormValue::File {
                file_name, mime, ..
            } => {
                assert_eq!(file_name, "mandate.pdf");
                assert_eq!(mime.as_deref(), Some("application/pdf"));
            }
            FormValue::Text(_) => panic!("expected file field"),
        }
    }

    #[test]
    fn test_empty_form_is_empty_arg() {
        assert!(FormData::new().is_empty_arg());
        assert!(!FormData::new().text("a", "").is_empty_arg());
    }

    #[test]
    fn test_into_multipart_rejects_bad_mime() {
        let form = FormData::new().file("image", "x.bin", Some("not a mime"), vec![1, 2, 3]);
        let err = form.into_multipart().unwrap_err();
        match err {
            GoCardlessError::InvalidForm { field, .. } => assert_eq!(field, "image"),
            other => panic!("expected InvalidForm, got {other:?}"),
        }
    }

    #[test]
    fn test_into_multipart_has_boundary() {
        let form = FormData::new()
            .text("a", "1")
            .into_multipart()
            .unwrap();
        assert!(!form.boundary().is_empty());
    }
}
