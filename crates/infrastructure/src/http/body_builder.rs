//! HTTP request body builder.
//!
//! Converts the transport body produced by the application layer into what
//! reqwest sends on the wire.

use courier_application::ports::TransportBody;
use reqwest::RequestBuilder;
use reqwest::multipart::Form;

/// Result of building a body.
pub enum BuiltBody {
    /// No body.
    None,
    /// String body, with the content type to use if the request sets none.
    Text {
        /// Payload, sent verbatim
        content: String,
        /// Fallback `Content-Type`
        content_type: Option<String>,
    },
    /// Multipart form data.
    Multipart(Form),
}

/// Builds a reqwest body from a transport body.
#[must_use]
pub fn build_body(body: &TransportBody) -> BuiltBody {
    match body {
        TransportBody::None => BuiltBody::None,

        // Raw text carries whatever Content-Type the user set, or none.
        TransportBody::Text(content) => BuiltBody::Text {
            content: content.clone(),
            content_type: None,
        },

        TransportBody::UrlEncoded(content) => BuiltBody::Text {
            content: content.clone(),
            content_type: Some(mime::APPLICATION_WWW_FORM_URLENCODED.to_string()),
        },

        TransportBody::Multipart(fields) => BuiltBody::Multipart(build_multipart_form(fields)),
    }
}

/// Build a multipart form from text fields.
fn build_multipart_form(fields: &[(String, String)]) -> Form {
    fields
        .iter()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        })
}

impl BuiltBody {
    /// Get the fallback Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Text { content_type, .. } => content_type.as_deref(),
            Self::None | Self::Multipart(_) => None, // reqwest sets this automatically with boundary
        }
    }

    /// Check if this is a multipart form.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Attaches the body to `builder`. The fallback content type is only
    /// added when the request does not already carry one.
    #[must_use]
    pub fn apply(self, builder: RequestBuilder, has_content_type: bool) -> RequestBuilder {
        match self {
            Self::None => builder,
            Self::Text {
                content,
                content_type,
            } => {
                let builder = match content_type {
                    Some(ct) if !has_content_type => {
                        builder.header(reqwest::header::CONTENT_TYPE, ct)
                    }
                    _ => builder,
                };
                builder.body(content)
            }
            Self::Multipart(form) => builder.multipart(form),
        }
    }
}
