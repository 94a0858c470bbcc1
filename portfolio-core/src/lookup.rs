//! Identifier lookup and the static route parameters derived from the catalog.

use serde::Serialize;

use crate::catalog::{Catalog, ProjectRecord};
use crate::locale::Locale;

impl Catalog {
    /// First record named `name`. `None` is the not-found condition; callers
    /// render the not-found page rather than treating it as a failure.
    pub fn find(&self, name: &str) -> Option<&ProjectRecord> {
        self.iter().find(|record| record.name == name)
    }
}

/// Parameters of one pre-generated project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetailParams {
    pub locale: Locale,
    pub name: String,
}

impl DetailParams {
    pub fn path(&self) -> String {
        project_path(self.locale, &self.name)
    }
}

/// Route of a project's detail page.
pub fn project_path(locale: Locale, name: &str) -> String {
    format!("/{}/project/{}/", locale.as_str(), name)
}

/// Every locale the home route is generated for.
pub fn home_static_params() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

/// Every supported locale paired with every project name, locale-major.
pub fn detail_static_params(catalog: &Catalog) -> Vec<DetailParams> {
    Locale::ALL
        .iter()
        .flat_map(|&locale| {
            catalog.names().map(move |name| DetailParams {
                locale,
                name: name.to_string(),
            })
        })
        .collect()
}
