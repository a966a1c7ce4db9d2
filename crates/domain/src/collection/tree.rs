//! Collection and folder types

use serde::{Deserialize, Serialize};

use crate::id::generate_id;
use crate::request::RequestSpec;

/// A folder containing requests and other folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier
    pub id: String,
    /// Folder name
    pub name: String,
    /// Requests directly in this folder
    #[serde(default)]
    pub requests: Vec<RequestSpec>,
    /// Nested folders
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl Folder {
    /// Creates a new empty folder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            requests: Vec::new(),
            folders: Vec::new(),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.len() + self.folders.iter().map(Self::request_count).sum::<usize>()
    }

    fn find_request(&self, id: &str) -> Option<&RequestSpec> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .or_else(|| self.folders.iter().find_map(|f| f.find_request(id)))
    }
}

/// A named set of saved requests organized in folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique identifier
    pub id: String,
    /// Collection name
    pub name: String,
    /// Requests at the top level
    #[serde(default)]
    pub requests: Vec<RequestSpec>,
    /// Top-level folders
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl Collection {
    /// Creates a new empty collection with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            requests: Vec::new(),
            folders: Vec::new(),
        }
    }

    /// Stores a copy of the request at the top level.
    ///
    /// A request with the same id is replaced in place; otherwise the request
    /// is appended.
    pub fn upsert_request(&mut self, request: &RequestSpec) {
        match self.requests.iter_mut().find(|r| r.id == request.id) {
            Some(existing) => *existing = request.clone(),
            None => self.requests.push(request.clone()),
        }
    }

    /// Finds a request anywhere in the collection tree.
    #[must_use]
    pub fn find_request(&self, id: &str) -> Option<&RequestSpec> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .or_else(|| self.folders.iter().find_map(|f| f.find_request(id)))
    }

    /// Counts requests in the whole tree.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.len() + self.folders.iter().map(Folder::request_count).sum::<usize>()
    }
}
