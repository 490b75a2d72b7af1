use crate::content::application::catalog::seeds;
use crate::content::application::ports::outgoing::{DocumentStore, FieldMap};
use crate::content::domain::Collection;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Name-keyed logo lookups for the experience and education forms.
///
/// Each lookup is the union of a hardcoded seed table and the
/// corresponding cache collection in the store. The cache is an
/// eventually-consistent best-effort index: read failures fall back to
/// the seeds alone, and remembering a new entry never fails the
/// caller.
#[derive(Clone)]
pub struct LogoCatalog {
    store: Arc<dyn DocumentStore>,
}

impl LogoCatalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn known_companies(&self) -> BTreeMap<String, String> {
        self.known(Collection::Companies, seeds::COMPANY_LOGOS).await
    }

    pub async fn known_institutions(&self) -> BTreeMap<String, String> {
        self.known(Collection::Institutions, seeds::INSTITUTION_LOGOS)
            .await
    }

    async fn known(
        &self,
        cache: Collection,
        seed: &[(&str, &str)],
    ) -> BTreeMap<String, String> {
        let mut logos: BTreeMap<String, String> = seed
            .iter()
            .map(|(name, logo)| (name.to_string(), logo.to_string()))
            .collect();

        match self.store.list(cache, "created_at").await {
            Ok(documents) => {
                for document in documents {
                    let name = document.field("name").as_str().unwrap_or_default();
                    let logo = document.field("logo_url").as_str().unwrap_or_default();
                    if !name.is_empty() && !logo.is_empty() {
                        logos.entry(name.to_string()).or_insert_with(|| logo.to_string());
                    }
                }
            }
            Err(err) => {
                warn!("could not load {} cache, using seeds only: {}", cache, err);
            }
        }

        logos
    }

    /// Remember a newly seen name→logo pair. Independent of the record
    /// write that triggered it; a failure here is logged and swallowed.
    pub async fn remember(&self, cache: Collection, name: &str, logo_url: &str) {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("logo_url".to_string(), Value::String(logo_url.to_string()));

        if let Err(err) = self.store.insert(cache, fields).await {
            warn!("could not cache logo for {:?} in {}: {}", name, cache, err);
        }
    }
}

/// The four lookup kinds the admin forms browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Companies,
    Institutions,
    Languages,
    Technologies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCatalog(pub String);

impl std::fmt::Display for UnknownCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown catalog: {}", self.0)
    }
}

impl FromStr for CatalogKind {
    type Err = UnknownCatalog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "companies" => Ok(CatalogKind::Companies),
            "institutions" => Ok(CatalogKind::Institutions),
            "languages" => Ok(CatalogKind::Languages),
            "technologies" => Ok(CatalogKind::Technologies),
            other => Err(UnknownCatalog(other.to_string())),
        }
    }
}

/// One selectable catalog entry; the facets beyond `name` depend on
/// the kind.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CatalogItem {
    fn logo(name: &str, logo_url: &str) -> Self {
        CatalogItem {
            id: slug(name),
            name: name.to_string(),
            logo_url: Some(logo_url.to_string()),
            country: None,
            flag_url: None,
            icon: None,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .country
                .as_deref()
                .is_some_and(|country| country.to_lowercase().contains(needle))
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCatalogError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IBrowseCatalogUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: CatalogKind,
        query: &str,
    ) -> Result<Vec<CatalogItem>, BrowseCatalogError>;
}

pub struct BrowseCatalogUseCase {
    catalog: LogoCatalog,
}

impl BrowseCatalogUseCase {
    pub fn new(catalog: LogoCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl IBrowseCatalogUseCase for BrowseCatalogUseCase {
    async fn execute(
        &self,
        kind: CatalogKind,
        query: &str,
    ) -> Result<Vec<CatalogItem>, BrowseCatalogError> {
        let items: Vec<CatalogItem> = match kind {
            CatalogKind::Companies => self
                .catalog
                .known_companies()
                .await
                .iter()
                .map(|(name, logo)| CatalogItem::logo(name, logo))
                .collect(),
            CatalogKind::Institutions => self
                .catalog
                .known_institutions()
                .await
                .iter()
                .map(|(name, logo)| CatalogItem::logo(name, logo))
                .collect(),
            CatalogKind::Languages => seeds::COMMON_LANGUAGES
                .iter()
                .map(|(name, country, flag)| CatalogItem {
                    id: slug(name),
                    name: name.to_string(),
                    logo_url: None,
                    country: Some(country.to_string()),
                    flag_url: Some(flag.to_string()),
                    icon: None,
                })
                .collect(),
            CatalogKind::Technologies => seeds::TECHNOLOGIES
                .iter()
                .map(|(id, name, icon)| CatalogItem {
                    id: id.to_string(),
                    name: name.to_string(),
                    logo_url: None,
                    country: None,
                    flag_url: None,
                    icon: Some(icon.to_string()),
                })
                .collect(),
        };

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(items);
        }
        Ok(items.into_iter().filter(|item| item.matches(&needle)).collect())
    }
}
