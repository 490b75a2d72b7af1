use std::fmt;
use std::str::FromStr;

/// Every document lives in exactly one named collection.
///
/// The five list collections are editable through the generic manager;
/// `Profile` is a singleton and `Companies`/`Institutions` are the
/// best-effort logo caches written as a side effect of record creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profile,
    Experience,
    Education,
    Projects,
    Tools,
    Languages,
    Companies,
    Institutions,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Profile => "profile",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Projects => "projects",
            Collection::Tools => "tools",
            Collection::Languages => "languages",
            Collection::Companies => "companies",
            Collection::Institutions => "institutions",
        }
    }

    /// Collections exposed through the generic manager and the public
    /// list endpoints.
    pub fn managed() -> [Collection; 5] {
        [
            Collection::Experience,
            Collection::Education,
            Collection::Projects,
            Collection::Tools,
            Collection::Languages,
        ]
    }

    pub fn is_managed(&self) -> bool {
        Self::managed().contains(self)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCollection(pub String);

impl fmt::Display for UnknownCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown collection: {}", self.0)
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(Collection::Profile),
            "experience" => Ok(Collection::Experience),
            "education" => Ok(Collection::Education),
            "projects" => Ok(Collection::Projects),
            "tools" => Ok(Collection::Tools),
            "languages" => Ok(Collection::Languages),
            "companies" => Ok(Collection::Companies),
            "institutions" => Ok(Collection::Institutions),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}
