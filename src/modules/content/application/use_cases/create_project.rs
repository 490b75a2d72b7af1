use crate::content::application::catalog::seeds;
use crate::content::application::ports::outgoing::{Document, DocumentStore, FieldMap};
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::{Collection, LinkType};
use serde_json::Value;
use std::sync::Arc;

/// A project may carry at most this many technology tags.
pub const MAX_TECHNOLOGIES: usize = 3;

const GITHUB_MARK: &str =
    "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";
// itch.io offers no stable preview endpoint; a generic placeholder
// stands in.
const ITCH_PLACEHOLDER: &str = "https://static.itch.io/images/itchio-textless-black.svg";
const BEHANCE_LOGO: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Behance_logo.svg/1280px-Behance_logo.svg.png";

#[derive(Debug, Clone, Default)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub link: String,
    pub technologies: Vec<String>,
}

/// Preview derived from the project link once, at creation time. The
/// result is frozen on the record; later link edits do not recompute
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPreview {
    pub image_url: String,
    pub link_type: LinkType,
}

/// Preview image and link-type tag for a project URL. GitHub repos get
/// their opengraph card, known portfolio sites get their logo, and
/// anything else falls back to a favicon service keyed by host.
pub fn derive_preview(link: &str) -> Option<LinkPreview> {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))?;
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    if host.is_empty() {
        return None;
    }

    let preview = if host.contains("github.com") {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some(user), Some(repo)) => LinkPreview {
                image_url: format!("https://opengraph.githubassets.com/1/{user}/{repo}"),
                link_type: LinkType::GitHub,
            },
            // A profile or other GitHub page.
            _ => LinkPreview {
                image_url: GITHUB_MARK.to_string(),
                link_type: LinkType::GitHub,
            },
        }
    } else if host.contains("itch.io") {
        LinkPreview {
            image_url: ITCH_PLACEHOLDER.to_string(),
            link_type: LinkType::ItchIo,
        }
    } else if host.contains("behance.net") {
        LinkPreview {
            image_url: BEHANCE_LOGO.to_string(),
            link_type: LinkType::Behance,
        }
    } else {
        LinkPreview {
            image_url: format!("https://logo.clearbit.com/{host}"),
            link_type: LinkType::Other,
        }
    };
    Some(preview)
}

#[async_trait::async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Document, CreateRecordError>;
}

pub struct CreateProjectUseCase {
    store: Arc<dyn DocumentStore>,
}

impl CreateProjectUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ICreateProjectUseCase for CreateProjectUseCase {
    async fn execute(&self, data: CreateProjectData) -> Result<Document, CreateRecordError> {
        if data.title.trim().is_empty() {
            return Err(CreateRecordError::MissingField("title"));
        }
        if data.description.trim().is_empty() {
            return Err(CreateRecordError::MissingField("description"));
        }
        if data.link.trim().is_empty() {
            return Err(CreateRecordError::MissingField("link"));
        }
        if data.technologies.len() > MAX_TECHNOLOGIES {
            return Err(CreateRecordError::Invalid(format!(
                "a project can carry at most {MAX_TECHNOLOGIES} technology tags"
            )));
        }
        for tag in &data.technologies {
            if seeds::technology_name(tag).is_none() {
                return Err(CreateRecordError::Invalid(format!(
                    "unknown technology tag: {tag}"
                )));
            }
        }

        let preview = derive_preview(&data.link).ok_or_else(|| {
            CreateRecordError::Invalid(format!("not a valid http(s) URL: {}", data.link))
        })?;

        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), Value::String(data.title));
        fields.insert("description".to_string(), Value::String(data.description));
        fields.insert("link".to_string(), Value::String(data.link));
        fields.insert("image_url".to_string(), Value::String(preview.image_url));
        fields.insert(
            "link_type".to_string(),
            serde_json::to_value(preview.link_type)
                .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?,
        );
        fields.insert(
            "technologies".to_string(),
            Value::Array(data.technologies.into_iter().map(Value::String).collect()),
        );

        self.store
            .insert(Collection::Projects, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))
    }
}
