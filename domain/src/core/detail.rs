//! Detail value object

use super::error::ValidationError;
use super::kind::PostKind;
use serde::{Deserialize, Serialize};

/// The text body of a question or answer (Value Object)
///
/// Always non-blank, whether built with [`Detail::try_new`] or deserialized.
/// The text is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Detail {
    content: String,
}

impl Detail {
    /// Validate and wrap the text of a post of the given kind
    pub fn try_new(kind: PostKind, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if Self::is_blank(&content) {
            return Err(ValidationError::EmptyDetail(kind));
        }
        Ok(Self { content })
    }

    fn is_blank(content: &str) -> bool {
        content.trim().is_empty()
    }

    /// Get the detail text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Deserialization path; the post kind is not known here
impl TryFrom<String> for Detail {
    type Error = ValidationError;

    fn try_from(content: String) -> Result<Self, Self::Error> {
        if Self::is_blank(&content) {
            return Err(ValidationError::BlankDetail);
        }
        Ok(Self { content })
    }
}

impl From<Detail> for String {
    fn from(detail: Detail) -> Self {
        detail.content
    }
}

impl AsRef<str> for Detail {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_creation() {
        let detail = Detail::try_new(PostKind::Question, "What is a lifetime?").unwrap();
        assert_eq!(detail.content(), "What is a lifetime?");
        assert_eq!(detail.to_string(), "What is a lifetime?");
    }

    #[test]
    fn test_blank_detail_rejected() {
        assert_eq!(
            Detail::try_new(PostKind::Question, ""),
            Err(ValidationError::EmptyDetail(PostKind::Question))
        );
        assert_eq!(
            Detail::try_new(PostKind::Answer, "  \n\t"),
            Err(ValidationError::EmptyDetail(PostKind::Answer))
        );
    }

    #[test]
    fn test_surrounding_whitespace_kept() {
        let detail = Detail::try_new(PostKind::Answer, "  use Rc  ").unwrap();
        assert_eq!(detail.into_content(), "  use Rc  ");
    }

    #[test]
    fn test_deserialize_validates() {
        #[derive(Debug, Deserialize)]
        struct Post {
            detail: Detail,
        }

        let post: Post = toml::from_str(r#"detail = "What is Pin?""#).unwrap();
        assert_eq!(post.detail.content(), "What is Pin?");

        let err = toml::from_str::<Post>(r#"detail = "   ""#).unwrap_err();
        assert!(err.to_string().contains("Detail cannot be empty"));
    }

    #[test]
    fn test_serializes_as_plain_text() {
        #[derive(Serialize)]
        struct Post {
            detail: Detail,
        }

        let post = Post {
            detail: Detail::try_new(PostKind::Answer, "Use Box").unwrap(),
        };
        assert_eq!(toml::to_string(&post).unwrap(), "detail = \"Use Box\"\n");
    }
}
